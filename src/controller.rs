//! Thin coordinator between the UI collaborator and the core: holds the
//! current snapshot, reruns validation and recalculation after every
//! mutation, and fronts the template store.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{
    budget::{recalculate, validate, BudgetState, Field, FieldValue},
    calendar::DayCount,
    errors::PacingError,
    templates::{Template, TemplateEntry, TemplateStore},
};

pub struct Controller {
    state: BudgetState,
    warnings: BTreeMap<Field, String>,
    mode: DayCount,
    store: TemplateStore,
}

impl Controller {
    pub fn new(store: TemplateStore) -> Self {
        Self {
            state: BudgetState::default(),
            warnings: BTreeMap::new(),
            mode: DayCount::default(),
            store,
        }
    }

    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    pub fn warnings(&self) -> &BTreeMap<Field, String> {
        &self.warnings
    }

    pub fn day_count(&self) -> DayCount {
        self.mode
    }

    pub fn templates(&self, today: NaiveDate) -> Vec<TemplateEntry> {
        self.store.list(today)
    }

    /// Handles a numeric field edit. A blank or unparseable raw value clears
    /// the field rather than coercing it to zero, keeping "absent" distinct
    /// from a literal zero.
    pub fn on_field_change(
        &mut self,
        name: &str,
        raw: &str,
        today: NaiveDate,
    ) -> Result<&BudgetState, PacingError> {
        let field = self.lookup(name)?;
        let amount = match raw.trim() {
            "" => None,
            trimmed => match trimmed.parse::<f64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::debug!(field = field.name(), raw, "unparseable amount, clearing");
                    None
                }
            },
        };
        let merged = self.state.apply(field, FieldValue::Amount(amount))?;
        self.refresh(merged, today);
        Ok(&self.state)
    }

    /// Handles a date field edit; the raw value is an ISO `YYYY-MM-DD`
    /// string. Blank or unparseable input clears the field.
    pub fn on_date_change(
        &mut self,
        name: &str,
        iso: &str,
        today: NaiveDate,
    ) -> Result<&BudgetState, PacingError> {
        let field = self.lookup(name)?;
        let date = match iso.trim() {
            "" => None,
            trimmed => match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::debug!(field = field.name(), iso, "unparseable date, clearing");
                    None
                }
            },
        };
        let merged = self.state.apply(field, FieldValue::Date(date))?;
        self.refresh(merged, today);
        Ok(&self.state)
    }

    /// Flips between weekday-only and all-days counting and recomputes the
    /// derived figures under the new mode.
    pub fn toggle_day_count(&mut self, today: NaiveDate) -> &BudgetState {
        self.mode = match self.mode {
            DayCount::Weekdays => DayCount::AllDays,
            DayCount::AllDays => DayCount::Weekdays,
        };
        self.refresh(self.state.clone(), today);
        &self.state
    }

    /// Merges a template into the current state and recomputes, per the same
    /// pipeline as a field edit.
    pub fn apply_template(&mut self, template: &Template, today: NaiveDate) -> &BudgetState {
        self.refresh(template.merge_into(&self.state), today);
        &self.state
    }

    pub fn save_template(&mut self, name: &str) -> Result<Template, PacingError> {
        self.store.save_custom(name, &self.state)
    }

    pub fn delete_template(&mut self, id: &str) {
        self.store.delete(id);
    }

    fn lookup(&self, name: &str) -> Result<Field, PacingError> {
        Field::from_name(name).ok_or_else(|| PacingError::UnknownField(name.to_string()))
    }

    fn refresh(&mut self, merged: BudgetState, today: NaiveDate) {
        self.warnings = validate(&merged, today);
        self.state = recalculate(&merged, today, self.mode);
    }
}
