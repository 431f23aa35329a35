use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::challenge::leaderboard::{
    rank_participants, week_bounds, LeaderboardEntry, Metric, Period,
};
use crate::error::AppResult;
use crate::models::entry::Entry;
use crate::models::participant::Participant;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub metric: Option<Metric>,
    pub period: Option<Period>,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub metric: Metric,
    pub period: Period,
    /// The evaluated window; absent for all-time boards.
    pub window_start: Option<NaiveDate>,
    pub window_end: Option<NaiveDate>,
    pub standings: Vec<LeaderboardEntry>,
    pub summary: LeaderboardSummary,
}

/// The roll-up block the board footer shows.
#[derive(Debug, Serialize)]
pub struct LeaderboardSummary {
    pub combined_total: i64,
    pub average_total: i64,
    pub highest_total: i64,
}

pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> AppResult<Json<LeaderboardResponse>> {
    let metric = query.metric.unwrap_or(Metric::Steps);
    let period = query.period.unwrap_or(Period::Week);

    let participants = sqlx::query_as::<_, Participant>(
        "SELECT * FROM participants ORDER BY created_at ASC",
    )
    .fetch_all(&state.db)
    .await?;

    let entries = sqlx::query_as::<_, Entry>("SELECT * FROM entries")
        .fetch_all(&state.db)
        .await?;

    let window = match period {
        Period::Week => Some(week_bounds(Utc::now().date_naive())),
        Period::AllTime => None,
    };

    let standings = rank_participants(&participants, &entries, metric, window);
    let summary = summarize(&standings);

    Ok(Json(LeaderboardResponse {
        metric,
        period,
        window_start: window.map(|(start, _)| start),
        window_end: window.map(|(_, end)| end),
        standings,
        summary,
    }))
}

fn summarize(standings: &[LeaderboardEntry]) -> LeaderboardSummary {
    let combined_total: i64 = standings.iter().map(|s| s.total).sum();
    let average_total = if standings.is_empty() {
        0
    } else {
        (combined_total as f64 / standings.len() as f64).round() as i64
    };
    let highest_total = standings.iter().map(|s| s.total).max().unwrap_or(0);

    LeaderboardSummary {
        combined_total,
        average_total,
        highest_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::participant::Participant;
    use uuid::Uuid;

    fn standing(total: i64, rank: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            participant: Participant {
                id: Uuid::new_v4(),
                display_name: format!("p{}", rank),
                start_date: None,
                start_weight: None,
                end_weight: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            total,
            rank,
        }
    }

    // ── summarize ────────────────────────────────────────────────────────

    #[test]
    fn test_summary_empty_board() {
        let summary = summarize(&[]);
        assert_eq!(summary.combined_total, 0);
        assert_eq!(summary.average_total, 0);
        assert_eq!(summary.highest_total, 0);
    }

    #[test]
    fn test_summary_totals() {
        let standings = vec![standing(10000, 1), standing(5000, 2), standing(0, 3)];
        let summary = summarize(&standings);
        assert_eq!(summary.combined_total, 15000);
        assert_eq!(summary.average_total, 5000);
        assert_eq!(summary.highest_total, 10000);
    }

    #[test]
    fn test_summary_average_rounds() {
        let standings = vec![standing(1, 1), standing(2, 1)];
        // 1.5 rounds up
        assert_eq!(summarize(&standings).average_total, 2);
    }

    // ── query defaults ───────────────────────────────────────────────────

    #[test]
    fn test_query_defaults_are_weekly_steps() {
        let query: LeaderboardQuery = serde_json::from_str(r#"{}"#).unwrap();
        assert!(query.metric.is_none());
        assert!(query.period.is_none());
        assert_eq!(query.metric.unwrap_or(Metric::Steps), Metric::Steps);
        assert_eq!(query.period.unwrap_or(Period::Week), Period::Week);
    }

    #[test]
    fn test_query_parses_metric_and_period() {
        let query: LeaderboardQuery =
            serde_json::from_str(r#"{"metric":"calories","period":"alltime"}"#).unwrap();
        assert_eq!(query.metric, Some(Metric::Calories));
        assert_eq!(query.period, Some(Period::AllTime));
    }
}
