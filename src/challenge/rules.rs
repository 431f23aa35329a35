use crate::models::entry::Entry;

/// Daily compliance thresholds. Defaults match the house rules; every
/// value can be overridden through `Config`.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    /// Exclusive cap on calories when eating out — exactly this many fails.
    pub eating_out_calorie_cap: i32,
    pub min_calories_burned: i32,
    pub min_steps: i32,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            eating_out_calorie_cap: 500,
            min_calories_burned: 350,
            min_steps: 8000,
        }
    }
}

/// Whether a single day counts toward the streak.
///
/// A day is compliant iff:
/// 1. no sugar,
/// 2. didn't eat out, or ate out under the calorie cap (strictly under),
/// 3. burned enough calories OR walked enough steps (either is sufficient).
pub fn is_compliant(entry: &Entry, rules: &RuleSet) -> bool {
    if !entry.no_sugar {
        return false;
    }

    if entry.ate_out && entry.eating_out_calories >= rules.eating_out_calorie_cap {
        return false;
    }

    entry.calories_burned >= rules.min_calories_burned || entry.steps >= rules.min_steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entry::Entry;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn entry(no_sugar: bool, ate_out: bool, eating_out: i32, burned: i32, steps: i32) -> Entry {
        Entry {
            id: Uuid::new_v4(),
            participant_id: Uuid::new_v4(),
            entry_date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            no_sugar,
            ate_out,
            eating_out_calories: eating_out,
            calories_burned: burned,
            steps,
            weight: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    // ── sugar rule ───────────────────────────────────────────────────────

    #[test]
    fn test_sugar_fails_regardless_of_other_fields() {
        let rules = RuleSet::default();
        assert!(!is_compliant(&entry(false, false, 0, 1000, 20000), &rules));
    }

    // ── eating-out rule ──────────────────────────────────────────────────

    #[test]
    fn test_stayed_in_passes_eating_out_rule() {
        let rules = RuleSet::default();
        assert!(is_compliant(&entry(true, false, 0, 400, 0), &rules));
    }

    #[test]
    fn test_ate_out_at_cap_fails() {
        let rules = RuleSet::default();
        assert!(!is_compliant(&entry(true, true, 500, 400, 0), &rules));
    }

    #[test]
    fn test_ate_out_just_under_cap_passes() {
        let rules = RuleSet::default();
        assert!(is_compliant(&entry(true, true, 499, 400, 0), &rules));
    }

    #[test]
    fn test_ate_out_over_cap_fails() {
        let rules = RuleSet::default();
        assert!(!is_compliant(&entry(true, true, 1200, 400, 12000), &rules));
    }

    #[test]
    fn test_eating_out_calories_ignored_when_stayed_in() {
        // A stale calorie figure on a day the participant didn't eat out
        // must not count against them.
        let rules = RuleSet::default();
        assert!(is_compliant(&entry(true, false, 900, 400, 0), &rules));
    }

    // ── activity rule (OR semantics) ─────────────────────────────────────

    #[test]
    fn test_steps_alone_satisfy_activity() {
        let rules = RuleSet::default();
        assert!(is_compliant(&entry(true, false, 0, 0, 8000), &rules));
    }

    #[test]
    fn test_calories_alone_satisfy_activity() {
        let rules = RuleSet::default();
        assert!(is_compliant(&entry(true, false, 0, 350, 0), &rules));
    }

    #[test]
    fn test_both_just_under_fails_activity() {
        let rules = RuleSet::default();
        assert!(!is_compliant(&entry(true, false, 0, 349, 7999), &rules));
    }

    #[test]
    fn test_zeroed_fields_fail_activity() {
        // Normalized-from-missing fields are zero, never a free pass.
        let rules = RuleSet::default();
        assert!(!is_compliant(&entry(true, false, 0, 0, 0), &rules));
    }

    // ── custom thresholds ────────────────────────────────────────────────

    #[test]
    fn test_custom_rule_set_is_honored() {
        let rules = RuleSet {
            eating_out_calorie_cap: 300,
            min_calories_burned: 500,
            min_steps: 10000,
        };
        assert!(!is_compliant(&entry(true, true, 300, 500, 0), &rules));
        assert!(is_compliant(&entry(true, true, 299, 500, 0), &rules));
        assert!(!is_compliant(&entry(true, false, 0, 499, 9999), &rules));
        assert!(is_compliant(&entry(true, false, 0, 0, 10000), &rules));
    }
}
