use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{ClaimType, Submission};
use crate::store::Approval;

/// Request payload for submitting proof of participation or of a win
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitProofRequest {
    #[validate(length(min = 1, max = 64))]
    pub event_id: String,

    pub claim_type: ClaimType,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Proof file name must be between 1 and 255 characters"
    ))]
    pub proof_file: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalResponse {
    pub submission: Submission,
    pub points_credited: u32,
    pub records_updated: usize,
}

impl From<Approval> for ApprovalResponse {
    fn from(approval: Approval) -> Self {
        Self {
            submission: approval.submission,
            points_credited: approval.points_credited,
            records_updated: approval.records_updated,
        }
    }
}
