use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Participant {
    pub id: Uuid,
    pub display_name: String,
    pub start_date: Option<NaiveDate>,
    pub start_weight: Option<f64>,
    pub end_weight: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateParticipantRequest {
    #[validate(length(min = 1, max = 50, message = "Display name must be 1-50 characters"))]
    pub display_name: String,
    pub start_date: Option<NaiveDate>,
    #[validate(range(min = 0.1, message = "Start weight must be positive"))]
    pub start_weight: Option<f64>,
}

/// Partial update — only the fields the user explicitly sets change.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateParticipantRequest {
    pub start_date: Option<NaiveDate>,
    #[validate(range(min = 0.1, message = "Start weight must be positive"))]
    pub start_weight: Option<f64>,
    #[validate(range(min = 0.1, message = "End weight must be positive"))]
    pub end_weight: Option<f64>,
}
