use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::challenge::rules::is_compliant;
use crate::error::{AppError, AppResult};
use crate::models::entry::{
    CreateEntryRequest, Entry, EntryQuery, EntryWithStatus, UpdateEntryRequest,
};
use crate::AppState;

pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<EntryQuery>,
) -> AppResult<Json<Vec<EntryWithStatus>>> {
    // All filters optional: no participant means the whole roster, no
    // bounds means full history (the streak needs every logged day).
    let entries = sqlx::query_as::<_, Entry>(
        r#"
        SELECT * FROM entries
        WHERE ($1::uuid IS NULL OR participant_id = $1)
          AND ($2::date IS NULL OR entry_date >= $2)
          AND ($3::date IS NULL OR entry_date <= $3)
        ORDER BY entry_date DESC
        "#,
    )
    .bind(query.participant_id)
    .bind(query.start_date)
    .bind(query.end_date)
    .fetch_all(&state.db)
    .await?;

    let rules = state.config.rules();
    let result = entries
        .into_iter()
        .map(|entry| {
            let compliant = is_compliant(&entry, &rules);
            EntryWithStatus { entry, compliant }
        })
        .collect();

    Ok(Json(result))
}

pub async fn create_entry(
    State(state): State<AppState>,
    Json(body): Json<CreateEntryRequest>,
) -> AppResult<Json<Entry>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    // Verify the participant exists
    let _participant = sqlx::query_scalar::<_, Uuid>(
        "SELECT id FROM participants WHERE id = $1",
    )
    .bind(body.participant_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::NotFound("Participant not found".into()))?;

    // Optional admission control: reject over-cap eating-out days at the
    // boundary instead of only scoring them non-compliant.
    if state.config.strict_eating_out
        && body.ate_out
        && body.eating_out_calories >= state.config.eating_out_calorie_cap
    {
        return Err(AppError::Validation(format!(
            "Eating out must stay under {} calories",
            state.config.eating_out_calorie_cap
        )));
    }

    let entry_date = body.entry_date.unwrap_or_else(|| Utc::now().date_naive());

    let entry = sqlx::query_as::<_, Entry>(
        r#"
        INSERT INTO entries (id, participant_id, entry_date, no_sugar, ate_out,
                             eating_out_calories, calories_burned, steps, weight, notes)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(body.participant_id)
    .bind(entry_date)
    .bind(body.no_sugar)
    .bind(body.ate_out)
    .bind(body.eating_out_calories)
    .bind(body.calories_burned)
    .bind(body.steps)
    .bind(body.weight)
    .bind(&body.notes)
    .fetch_one(&state.db)
    .await
    .map_err(|e| {
        AppError::conflict_on_unique(
            e,
            "entries_participant_id_entry_date_key",
            "An entry for this participant and date already exists",
        )
    })?;

    broadcast_entry_changed(&state, entry.participant_id, entry.entry_date);

    Ok(Json(entry))
}

pub async fn update_entry(
    State(state): State<AppState>,
    Path((participant_id, entry_date)): Path<(Uuid, NaiveDate)>,
    Json(body): Json<UpdateEntryRequest>,
) -> AppResult<Json<Entry>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    // In strict mode the gate applies to the row as it would look after
    // the patch, so a calorie bump on an existing eating-out day is
    // caught too.
    if state.config.strict_eating_out {
        let existing = sqlx::query_as::<_, Entry>(
            "SELECT * FROM entries WHERE participant_id = $1 AND entry_date = $2",
        )
        .bind(participant_id)
        .bind(entry_date)
        .fetch_optional(&state.db)
        .await?
        .ok_or(AppError::NotFound("Entry not found".into()))?;

        let ate_out = body.ate_out.unwrap_or(existing.ate_out);
        let calories = body
            .eating_out_calories
            .unwrap_or(existing.eating_out_calories);
        if ate_out && calories >= state.config.eating_out_calorie_cap {
            return Err(AppError::Validation(format!(
                "Eating out must stay under {} calories",
                state.config.eating_out_calorie_cap
            )));
        }
    }

    let entry = sqlx::query_as::<_, Entry>(
        r#"
        UPDATE entries SET
            no_sugar = COALESCE($3, no_sugar),
            ate_out = COALESCE($4, ate_out),
            eating_out_calories = COALESCE($5, eating_out_calories),
            calories_burned = COALESCE($6, calories_burned),
            steps = COALESCE($7, steps),
            weight = COALESCE($8, weight),
            notes = COALESCE($9, notes),
            updated_at = NOW()
        WHERE participant_id = $1 AND entry_date = $2
        RETURNING *
        "#,
    )
    .bind(participant_id)
    .bind(entry_date)
    .bind(body.no_sugar)
    .bind(body.ate_out)
    .bind(body.eating_out_calories)
    .bind(body.calories_burned)
    .bind(body.steps)
    .bind(body.weight)
    .bind(&body.notes)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::NotFound("Entry not found".into()))?;

    broadcast_entry_changed(&state, participant_id, entry_date);

    Ok(Json(entry))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path((participant_id, entry_date)): Path<(Uuid, NaiveDate)>,
) -> AppResult<Json<serde_json::Value>> {
    let result = sqlx::query("DELETE FROM entries WHERE participant_id = $1 AND entry_date = $2")
        .bind(participant_id)
        .bind(entry_date)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Entry not found".into()));
    }

    broadcast_entry_changed(&state, participant_id, entry_date);

    Ok(Json(serde_json::json!({ "deleted": true })))
}

/// Challenge reset: wipe every entry for the participant.
pub async fn reset_challenge(
    State(state): State<AppState>,
    Path(participant_id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let _participant = sqlx::query_scalar::<_, Uuid>(
        "SELECT id FROM participants WHERE id = $1",
    )
    .bind(participant_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::NotFound("Participant not found".into()))?;

    let result = sqlx::query("DELETE FROM entries WHERE participant_id = $1")
        .bind(participant_id)
        .execute(&state.db)
        .await?;

    tracing::info!(
        participant_id = %participant_id,
        deleted = result.rows_affected(),
        "Challenge reset"
    );

    if let Some(tx) = state.ws_tx.as_ref() {
        let msg = serde_json::json!({
            "type": "challenge_reset",
            "participant_id": participant_id,
        });
        let _ = tx.send(msg.to_string());
    }

    Ok(Json(serde_json::json!({ "deleted": result.rows_affected() })))
}

fn broadcast_entry_changed(state: &AppState, participant_id: Uuid, entry_date: NaiveDate) {
    if let Some(tx) = state.ws_tx.as_ref() {
        let msg = serde_json::json!({
            "type": "entry_changed",
            "participant_id": participant_id,
            "entry_date": entry_date,
        });
        let _ = tx.send(msg.to_string());
    }
}
