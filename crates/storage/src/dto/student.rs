use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{EventCategory, ParticipationStatus, Student};

/// Dashboard header for the signed-in student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentStanding {
    pub student: Student,
    pub rank: usize,
    pub events_joined: usize,
    pub pending_submissions: usize,
}

/// One participation record joined with its event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub event_id: String,
    pub event_name: String,
    pub category: EventCategory,
    pub status: ParticipationStatus,
    pub points_collected: bool,
    /// Winning points for a win, participation points otherwise
    pub points: u32,
}
