use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Student;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based position; tied students get distinct consecutive ranks
    pub rank: usize,
    pub student: Student,
}
