use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ParticipationStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Hackathon,
    Competition,
    Sports,
    Cultural,
}

/// An announced campus event. Events are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    pub description: String,
    pub participation_points: u32,
    pub winning_points: u32,
    pub category: EventCategory,
}

impl Event {
    /// Points a student earns for this event with the given outcome
    pub fn points_for(&self, status: ParticipationStatus) -> u32 {
        match status {
            ParticipationStatus::Won => self.winning_points,
            ParticipationStatus::Participated => self.participation_points,
        }
    }
}

/// Event fields supplied by an administrator; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub name: String,
    pub description: String,
    pub participation_points: u32,
    pub winning_points: u32,
    pub category: EventCategory,
}
