//! Pure recalculation of the derived pacing figures.

use chrono::NaiveDate;

use super::state::BudgetState;
use crate::calendar::{count_days, DayCount};

/// Rounds to the cent, half away from zero (`f64::round` semantics).
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Recomputes every derived field from the inputs in `state`.
///
/// Pure and deterministic for a fixed `today`; never fails. Each branch runs
/// only when its inputs are present, but absent `current_spend` is substituted
/// with zero inside the arithmetic. Any branch whose preconditions are unmet,
/// or whose remaining-day count is zero, resolves to `0.0` rather than an
/// error.
pub fn recalculate(state: &BudgetState, today: NaiveDate, mode: DayCount) -> BudgetState {
    let mut next = state.clone();
    let spend = state.current_spend.unwrap_or(0.0);

    next.current_daily_budget = match (state.current_lifetime_budget, state.current_end_date) {
        (Some(lifetime), Some(end)) => {
            let days = count_days(today, end, mode);
            if days > 0 {
                round_cents((lifetime - spend) / days as f64)
            } else {
                0.0
            }
        }
        _ => 0.0,
    };

    next.new_lifetime_budget = match (state.new_daily_budget, state.new_end_date) {
        (Some(daily), Some(end)) => {
            let days = count_days(today, end, mode);
            if days > 0 {
                round_cents(spend + daily * days as f64)
            } else {
                0.0
            }
        }
        _ => 0.0,
    };

    next.change_in_lt_budget = match state.current_lifetime_budget {
        Some(lifetime) if lifetime > 0.0 && next.new_lifetime_budget > 0.0 => {
            round_cents((next.new_lifetime_budget - lifetime) / lifetime * 100.0)
        }
        _ => 0.0,
    };

    next
}
