use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::entry::Entry;
use crate::models::participant::Participant;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Steps,
    Calories,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Week,
    #[serde(rename = "alltime")]
    AllTime,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardEntry {
    pub participant: Participant,
    pub total: i64,
    pub rank: u32,
}

/// Monday through Sunday of the week containing `today`.
pub fn week_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
    (monday, monday + Duration::days(6))
}

/// Rank every participant by their summed metric over the entries that
/// fall inside `window` (inclusive on both ends; `None` means all time).
///
/// Participants with no matching entries still appear with a total of 0.
/// Ranking is competition style: equal totals share a rank, and the next
/// distinct total gets its 1-based position (1, 1, 3, ...).
pub fn rank_participants(
    participants: &[Participant],
    entries: &[Entry],
    metric: Metric,
    window: Option<(NaiveDate, NaiveDate)>,
) -> Vec<LeaderboardEntry> {
    let mut totals: HashMap<Uuid, i64> = HashMap::with_capacity(participants.len());
    for entry in entries {
        if let Some((start, end)) = window {
            if entry.entry_date < start || entry.entry_date > end {
                continue;
            }
        }
        let value = match metric {
            Metric::Steps => entry.steps,
            Metric::Calories => entry.calories_burned,
        };
        *totals.entry(entry.participant_id).or_insert(0) += value as i64;
    }

    let mut standings: Vec<LeaderboardEntry> = participants
        .iter()
        .map(|p| LeaderboardEntry {
            participant: p.clone(),
            total: totals.get(&p.id).copied().unwrap_or(0),
            rank: 0,
        })
        .collect();

    standings.sort_by(|a, b| b.total.cmp(&a.total));

    let mut rank = 1u32;
    for i in 0..standings.len() {
        if i > 0 && standings[i].total < standings[i - 1].total {
            rank = i as u32 + 1;
        }
        standings[i].rank = rank;
    }

    standings
}
