use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ClaimType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ParticipationStatus {
    Participated,
    Won,
}

impl From<ClaimType> for ParticipationStatus {
    fn from(claim: ClaimType) -> Self {
        match claim {
            ClaimType::Won => Self::Won,
            ClaimType::Participated => Self::Participated,
        }
    }
}

/// A student's registration for an event, keyed by (student_id, event_id).
///
/// Registration does not de-duplicate, so the same pair may appear more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationRecord {
    pub student_id: String,
    pub event_id: String,
    pub status: ParticipationStatus,
    pub points_collected: bool,
}

impl ParticipationRecord {
    pub fn matches(&self, student_id: &str, event_id: &str) -> bool {
        self.student_id == student_id && self.event_id == event_id
    }
}
