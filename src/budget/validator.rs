//! Advisory cross-field checks. Warnings never block a recalculation.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::state::{BudgetState, Field};

/// Inspects the state and returns a warning per offending field. The state
/// is never mutated or rejected; spend exceeding the lifetime budget is
/// deliberately warn-only.
pub fn validate(state: &BudgetState, today: NaiveDate) -> BTreeMap<Field, String> {
    let mut warnings = BTreeMap::new();

    if let Some(end) = state.current_end_date {
        if end < today {
            warnings.insert(
                Field::CurrentEndDate,
                "Current end date is in the past".to_string(),
            );
        }
    }

    if let Some(end) = state.new_end_date {
        if end < today {
            warnings.insert(
                Field::NewEndDate,
                "New end date is in the past".to_string(),
            );
        }
    }

    if let (Some(spend), Some(lifetime)) = (state.current_spend, state.current_lifetime_budget) {
        if spend > lifetime {
            warnings.insert(
                Field::CurrentSpend,
                "Current spend exceeds the lifetime budget".to_string(),
            );
        }
    }

    warnings
}
