use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::participant::{
    CreateParticipantRequest, Participant, UpdateParticipantRequest,
};
use crate::AppState;

pub async fn list_participants(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Participant>>> {
    let participants = sqlx::query_as::<_, Participant>(
        "SELECT * FROM participants ORDER BY created_at ASC",
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(participants))
}

pub async fn create_participant(
    State(state): State<AppState>,
    Json(body): Json<CreateParticipantRequest>,
) -> AppResult<Json<Participant>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let name = body.display_name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Display name is required".into()));
    }

    let participant = sqlx::query_as::<_, Participant>(
        r#"
        INSERT INTO participants (id, display_name, start_date, start_weight)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(body.start_date)
    .bind(body.start_weight)
    .fetch_one(&state.db)
    .await
    .map_err(|e| {
        AppError::conflict_on_unique(
            e,
            "participants_display_name_key",
            "A participant with this display name already exists",
        )
    })?;

    tracing::info!(participant_id = %participant.id, name = %participant.display_name, "Participant added");

    if let Some(tx) = state.ws_tx.as_ref() {
        let msg = serde_json::json!({
            "type": "participant_changed",
            "participant_id": participant.id,
        });
        let _ = tx.send(msg.to_string());
    }

    Ok(Json(participant))
}

pub async fn update_participant(
    State(state): State<AppState>,
    Path(participant_id): Path<Uuid>,
    Json(body): Json<UpdateParticipantRequest>,
) -> AppResult<Json<Participant>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let participant = sqlx::query_as::<_, Participant>(
        r#"
        UPDATE participants SET
            start_date = COALESCE($2, start_date),
            start_weight = COALESCE($3, start_weight),
            end_weight = COALESCE($4, end_weight),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(participant_id)
    .bind(body.start_date)
    .bind(body.start_weight)
    .bind(body.end_weight)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::NotFound("Participant not found".into()))?;

    if let Some(tx) = state.ws_tx.as_ref() {
        let msg = serde_json::json!({
            "type": "participant_changed",
            "participant_id": participant.id,
        });
        let _ = tx.send(msg.to_string());
    }

    Ok(Json(participant))
}
