use std::collections::HashMap;

use chrono::{Duration, NaiveDate};

use crate::challenge::rules::{is_compliant, RuleSet};
use crate::models::entry::Entry;

/// Current streak: contiguous compliant days walking backward one calendar
/// day at a time from the most recent logged date.
///
/// The walk is anchored on the latest entry, not on today — a participant
/// who stops logging keeps the streak their last logged day earned. It
/// stops at the first missing date or the first non-compliant day (which
/// itself does not count). Entries arrive in any order.
pub fn current_streak(entries: &[Entry], rules: &RuleSet) -> u32 {
    let mut by_date: HashMap<NaiveDate, &Entry> = HashMap::with_capacity(entries.len());
    for entry in entries {
        by_date.insert(entry.entry_date, entry);
    }
    // One entry per (participant, date) is enforced at ingestion; a
    // duplicate-bearing snapshot would resolve as last-indexed-wins here.
    debug_assert_eq!(by_date.len(), entries.len(), "duplicate entry dates in snapshot");

    let Some(latest) = by_date.keys().copied().max() else {
        return 0;
    };

    let mut streak = 0u32;
    let mut cursor = latest;
    while let Some(entry) = by_date.get(&cursor) {
        if !is_compliant(entry, rules) {
            break;
        }
        streak += 1;
        cursor -= Duration::days(1);
    }

    streak
}

/// Whole calendar days elapsed since the participant's start date, or 0
/// when no start date is set. Works on plain dates so time-of-day and DST
/// can't shift the count.
pub fn days_since_start(start_date: Option<NaiveDate>, today: NaiveDate) -> i64 {
    match start_date {
        Some(start) => (today - start).num_days().abs(),
        None => 0,
    }
}
