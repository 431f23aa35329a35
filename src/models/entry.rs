use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Entry {
    pub id: Uuid,
    pub participant_id: Uuid,
    pub entry_date: NaiveDate,
    pub no_sugar: bool,
    pub ate_out: bool,
    /// Meaningful only when `ate_out` is true; stored as 0 otherwise.
    pub eating_out_calories: i32,
    pub calories_burned: i32,
    pub steps: i32,
    pub weight: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload. Every rule field defaults (false/0) when the client
/// omits it, so rows reach the challenge engine fully populated.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEntryRequest {
    pub participant_id: Uuid,
    /// Defaults to today (server date) when omitted.
    pub entry_date: Option<NaiveDate>,
    #[serde(default)]
    pub no_sugar: bool,
    #[serde(default)]
    pub ate_out: bool,
    #[serde(default)]
    #[validate(range(min = 0, message = "Eating-out calories cannot be negative"))]
    pub eating_out_calories: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "Calories burned cannot be negative"))]
    pub calories_burned: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "Steps cannot be negative"))]
    pub steps: i32,
    #[validate(range(min = 0.1, message = "Weight must be positive"))]
    pub weight: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEntryRequest {
    pub no_sugar: Option<bool>,
    pub ate_out: Option<bool>,
    #[validate(range(min = 0, message = "Eating-out calories cannot be negative"))]
    pub eating_out_calories: Option<i32>,
    #[validate(range(min = 0, message = "Calories burned cannot be negative"))]
    pub calories_burned: Option<i32>,
    #[validate(range(min = 0, message = "Steps cannot be negative"))]
    pub steps: Option<i32>,
    #[validate(range(min = 0.1, message = "Weight must be positive"))]
    pub weight: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EntryQuery {
    pub participant_id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// List-view row: the entry plus its pass/fail classification for the day.
#[derive(Debug, Serialize)]
pub struct EntryWithStatus {
    #[serde(flatten)]
    pub entry: Entry,
    pub compliant: bool,
}
