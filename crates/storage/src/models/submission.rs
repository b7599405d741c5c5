use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ClaimType {
    Participated,
    Won,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Proof of participation (or of a win) awaiting or past administrator review.
///
/// `student_name` and `event_name` are snapshots taken when the proof was submitted.
/// `proof_file` is only the file name; its contents are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub event_id: String,
    pub event_name: String,
    pub claim_type: ClaimType,
    pub proof_file: String,
    pub status: SubmissionStatus,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn is_pending(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }
}
