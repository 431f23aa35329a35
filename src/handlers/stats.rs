use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::challenge::streak::{current_streak, days_since_start};
use crate::error::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::participant::Participant;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ParticipantStats {
    pub participant_id: Uuid,
    pub display_name: String,
    pub current_streak: u32,
    pub days_passed: i64,
    pub total_days_logged: i64,
    pub start_weight: Option<f64>,
    pub end_weight: Option<f64>,
    /// Present once both start and end weights are known.
    pub weight_lost: Option<f64>,
    pub challenge_complete: bool,
}

pub async fn get_participant_stats(
    State(state): State<AppState>,
    Path(participant_id): Path<Uuid>,
) -> AppResult<Json<ParticipantStats>> {
    let participant = sqlx::query_as::<_, Participant>(
        "SELECT * FROM participants WHERE id = $1",
    )
    .bind(participant_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::NotFound("Participant not found".into()))?;

    let entries = sqlx::query_as::<_, Entry>(
        "SELECT * FROM entries WHERE participant_id = $1",
    )
    .bind(participant_id)
    .fetch_all(&state.db)
    .await?;

    let rules = state.config.rules();
    let today = Utc::now().date_naive();

    let streak = current_streak(&entries, &rules);
    let stats = ParticipantStats {
        participant_id: participant.id,
        display_name: participant.display_name,
        current_streak: streak,
        days_passed: days_since_start(participant.start_date, today),
        total_days_logged: entries.len() as i64,
        start_weight: participant.start_weight,
        end_weight: participant.end_weight,
        weight_lost: match (participant.start_weight, participant.end_weight) {
            (Some(start), Some(end)) => Some(start - end),
            _ => None,
        },
        challenge_complete: streak >= state.config.challenge_target_days,
    };

    Ok(Json(stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── ParticipantStats serialization ───────────────────────────────────

    #[test]
    fn test_stats_response_fields() {
        let stats = ParticipantStats {
            participant_id: Uuid::new_v4(),
            display_name: "alice".into(),
            current_streak: 12,
            days_passed: 14,
            total_days_logged: 13,
            start_weight: Some(190.0),
            end_weight: None,
            weight_lost: None,
            challenge_complete: false,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["display_name"], "alice");
        assert_eq!(json["current_streak"], 12);
        assert_eq!(json["days_passed"], 14);
        assert_eq!(json["total_days_logged"], 13);
        assert_eq!(json["challenge_complete"], false);
        assert!(json["weight_lost"].is_null());
    }

    #[test]
    fn test_weight_lost_is_start_minus_end() {
        let lost = match (Some(190.0_f64), Some(172.5_f64)) {
            (Some(start), Some(end)) => Some(start - end),
            _ => None,
        };
        assert_eq!(lost, Some(17.5));
    }
}
