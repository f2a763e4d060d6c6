use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::PacingError;

/// The editable input fields of the calculator. Field names on the wire use
/// the camelCase spelling returned by [`Field::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    CurrentLifetimeBudget,
    CurrentSpend,
    CurrentEndDate,
    NewDailyBudget,
    NewEndDate,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::CurrentLifetimeBudget => "currentLifetimeBudget",
            Field::CurrentSpend => "currentSpend",
            Field::CurrentEndDate => "currentEndDate",
            Field::NewDailyBudget => "newDailyBudget",
            Field::NewEndDate => "newEndDate",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "currentLifetimeBudget" => Some(Field::CurrentLifetimeBudget),
            "currentSpend" => Some(Field::CurrentSpend),
            "currentEndDate" => Some(Field::CurrentEndDate),
            "newDailyBudget" => Some(Field::NewDailyBudget),
            "newEndDate" => Some(Field::NewEndDate),
            _ => None,
        }
    }
}

/// A typed value for a single field edit. `None` clears the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Amount(Option<f64>),
    Date(Option<NaiveDate>),
}

/// The complete calculator snapshot: user inputs plus derived figures.
///
/// Inputs are optional so that "not provided" stays distinct from a literal
/// zero; derived fields are plain numbers that default to the safe zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetState {
    pub current_lifetime_budget: Option<f64>,
    pub current_spend: Option<f64>,
    pub current_end_date: Option<NaiveDate>,
    pub current_daily_budget: f64,
    pub new_daily_budget: Option<f64>,
    pub new_end_date: Option<NaiveDate>,
    pub new_lifetime_budget: f64,
    pub change_in_lt_budget: f64,
}

impl BudgetState {
    /// Returns a copy of the state with one input field replaced. The value
    /// kind must match the field kind; derived fields are not editable and
    /// are refreshed by the engine on the next recalculation.
    pub fn apply(&self, field: Field, value: FieldValue) -> Result<Self, PacingError> {
        let mut next = self.clone();
        match (field, value) {
            (Field::CurrentLifetimeBudget, FieldValue::Amount(v)) => {
                next.current_lifetime_budget = v
            }
            (Field::CurrentSpend, FieldValue::Amount(v)) => next.current_spend = v,
            (Field::NewDailyBudget, FieldValue::Amount(v)) => next.new_daily_budget = v,
            (Field::CurrentEndDate, FieldValue::Date(v)) => next.current_end_date = v,
            (Field::NewEndDate, FieldValue::Date(v)) => next.new_end_date = v,
            (field, FieldValue::Amount(_)) => {
                return Err(PacingError::InvalidInput(format!(
                    "field `{}` expects a date, not an amount",
                    field.name()
                )))
            }
            (field, FieldValue::Date(_)) => {
                return Err(PacingError::InvalidInput(format!(
                    "field `{}` expects an amount, not a date",
                    field.name()
                )))
            }
        }
        Ok(next)
    }
}
