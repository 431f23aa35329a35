//! Pure challenge computations: daily rule evaluation, streak walking,
//! elapsed days, and leaderboard ranking. No I/O — everything operates on
//! entry/participant snapshots already loaded from the store.

pub mod leaderboard;
pub mod rules;
pub mod streak;
