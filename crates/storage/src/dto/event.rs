use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{EventCategory, NewEvent};

/// Request payload for announcing a new event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(min = 1, max = 2000, message = "Description is required"))]
    pub description: String,

    #[serde(default)]
    pub participation_points: u32,

    #[serde(default)]
    pub winning_points: u32,

    pub category: EventCategory,
}

impl From<CreateEventRequest> for NewEvent {
    fn from(request: CreateEventRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            participation_points: request.participation_points,
            winning_points: request.winning_points,
            category: request.category,
        }
    }
}
