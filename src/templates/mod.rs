//! Named, reusable presets of calculator inputs.
//!
//! Built-in templates are regenerated from "today" on every listing so their
//! embedded end dates stay current; only custom templates are persisted.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    budget::{recalculate, BudgetState},
    calendar::{add_weekdays, DayCount},
    errors::PacingError,
    storage::TemplateBackend,
};

/// A reusable subset of the calculator inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub current_lifetime_budget: f64,
    pub current_spend: f64,
    pub current_end_date: Option<NaiveDate>,
    pub new_daily_budget: f64,
}

impl Template {
    /// Merges this template's fields over `state` (template fields win) and
    /// aligns `new_end_date` with the template's end date, since both
    /// campaign windows are assumed to coincide when a template is loaded.
    /// No arithmetic happens here; callers recalculate afterwards.
    pub fn merge_into(&self, state: &BudgetState) -> BudgetState {
        BudgetState {
            current_lifetime_budget: Some(self.current_lifetime_budget),
            current_spend: Some(self.current_spend),
            current_end_date: self.current_end_date,
            new_daily_budget: Some(self.new_daily_budget),
            new_end_date: self.current_end_date,
            ..state.clone()
        }
    }
}

/// Applies a template to the current state and returns the fully recomputed
/// snapshot.
pub fn apply_template(
    template: &Template,
    state: &BudgetState,
    today: NaiveDate,
    mode: DayCount,
) -> BudgetState {
    recalculate(&template.merge_into(state), today, mode)
}

/// Where a listed template comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateSource {
    BuiltIn,
    Custom,
}

/// A template together with its provenance, as handed to the UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateEntry {
    pub source: TemplateSource,
    pub template: Template,
}

/// Name, weekday offset from today, lifetime budget, and daily rate of each
/// built-in preset.
const BUILT_INS: [(&str, u32, f64, f64); 3] = [
    ("One-Week Flight", 5, 5_000.0, 1_000.0),
    ("Two-Week Flight", 10, 10_000.0, 1_000.0),
    ("Three-Week Flight", 15, 15_000.0, 1_000.0),
];

/// Manages the built-in and custom template collections. Custom templates
/// are loaded once at construction; afterwards the in-memory collection is
/// authoritative and every mutation writes the whole collection back.
pub struct TemplateStore {
    backend: Box<dyn TemplateBackend>,
    customs: Vec<Template>,
}

impl TemplateStore {
    /// A backend failure at load time is downgraded to an empty collection;
    /// a corrupt store is never fatal.
    pub fn new(backend: Box<dyn TemplateBackend>) -> Self {
        let customs = match backend.load() {
            Ok(templates) => templates,
            Err(err) => {
                tracing::warn!(%err, "failed to load custom templates, starting empty");
                Vec::new()
            }
        };
        Self { backend, customs }
    }

    /// Built-ins first (regenerated from `today`), then customs in insertion
    /// order.
    pub fn list(&self, today: NaiveDate) -> Vec<TemplateEntry> {
        let mut entries: Vec<TemplateEntry> = BUILT_INS
            .iter()
            .map(|(name, offset, lifetime, daily)| TemplateEntry {
                source: TemplateSource::BuiltIn,
                template: Template {
                    id: format!("built-in-{offset}"),
                    name: (*name).to_string(),
                    current_lifetime_budget: *lifetime,
                    current_spend: 0.0,
                    current_end_date: Some(add_weekdays(today, *offset)),
                    new_daily_budget: *daily,
                },
            })
            .collect();
        entries.extend(self.customs.iter().map(|template| TemplateEntry {
            source: TemplateSource::Custom,
            template: template.clone(),
        }));
        entries
    }

    pub fn customs(&self) -> &[Template] {
        &self.customs
    }

    /// Captures the template-relevant inputs of `state` under `name`.
    /// Rejects blank names and states without a lifetime budget.
    pub fn save_custom(
        &mut self,
        name: &str,
        state: &BudgetState,
    ) -> Result<Template, PacingError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PacingError::InvalidTemplate(
                "template name cannot be empty".to_string(),
            ));
        }
        let Some(lifetime) = state.current_lifetime_budget else {
            return Err(PacingError::InvalidTemplate(
                "template requires a current lifetime budget".to_string(),
            ));
        };
        let template = Template {
            id: self.next_id(),
            name: name.to_string(),
            current_lifetime_budget: lifetime,
            current_spend: state.current_spend.unwrap_or(0.0),
            current_end_date: state.current_end_date,
            new_daily_budget: state.new_daily_budget.unwrap_or(0.0),
        };
        self.customs.push(template.clone());
        self.persist();
        Ok(template)
    }

    /// Removes the custom template with `id`. Unknown ids, including
    /// built-in ids, are silent no-ops.
    pub fn delete(&mut self, id: &str) {
        let before = self.customs.len();
        self.customs.retain(|template| template.id != id);
        if self.customs.len() != before {
            self.persist();
        } else {
            tracing::debug!(id, "delete skipped, no custom template with that id");
        }
    }

    /// Millisecond-clock ids, nudged forward on collision so two saves in
    /// the same millisecond stay distinct.
    fn next_id(&self) -> String {
        let mut millis = Utc::now().timestamp_millis();
        loop {
            let id = format!("tpl-{millis}");
            if !self.customs.iter().any(|template| template.id == id) {
                return id;
            }
            millis += 1;
        }
    }

    /// Write failures are logged and swallowed; the in-memory collection
    /// stays authoritative for the rest of the session.
    fn persist(&self) {
        if let Err(err) = self.backend.save(&self.customs) {
            tracing::warn!(%err, "failed to persist custom templates");
        }
    }
}
