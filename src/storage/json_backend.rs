//! JSON file persistence for the custom template collection.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Result, TemplateBackend};
use crate::{errors::PacingError, templates::Template};

pub const TEMPLATE_SCHEMA_VERSION: u32 = 1;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
// Some earlier exports wrote US-style dates; accepted on load only.
const LEGACY_DATE_FORMAT: &str = "%m/%d/%Y";

/// On-disk envelope for the template collection.
#[derive(Debug, Serialize, Deserialize)]
struct TemplateFile {
    schema_version: u32,
    templates: Vec<StoredTemplate>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTemplate {
    id: String,
    name: String,
    current_lifetime_budget: f64,
    current_spend: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    current_end_date: Option<String>,
    new_daily_budget: f64,
}

impl StoredTemplate {
    fn from_template(template: &Template) -> Self {
        Self {
            id: template.id.clone(),
            name: template.name.clone(),
            current_lifetime_budget: template.current_lifetime_budget,
            current_spend: template.current_spend,
            current_end_date: template
                .current_end_date
                .map(|d| d.format(ISO_DATE_FORMAT).to_string()),
            new_daily_budget: template.new_daily_budget,
        }
    }

    fn into_template(self) -> Result<Template> {
        let current_end_date = match self.current_end_date {
            Some(raw) => Some(parse_stored_date(&raw).ok_or_else(|| {
                PacingError::Storage(format!(
                    "template `{}` has an unreadable end date `{raw}`",
                    self.id
                ))
            })?),
            None => None,
        };
        Ok(Template {
            id: self.id,
            name: self.name,
            current_lifetime_budget: self.current_lifetime_budget,
            current_spend: self.current_spend,
            current_end_date,
            new_daily_budget: self.new_daily_budget,
        })
    }
}

fn parse_stored_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(raw, LEGACY_DATE_FORMAT))
        .ok()
}

/// Stores the whole collection in a single JSON file, written atomically by
/// staging to a temporary file.
pub struct JsonTemplateBackend {
    path: PathBuf,
}

impl JsonTemplateBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TemplateBackend for JsonTemplateBackend {
    fn load(&self) -> Result<Vec<Template>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        let file: TemplateFile = serde_json::from_str(&data)?;
        if file.schema_version > TEMPLATE_SCHEMA_VERSION {
            return Err(PacingError::Storage(format!(
                "template file `{}` is from a newer schema version ({})",
                self.path.display(),
                file.schema_version
            )));
        }
        file.templates
            .into_iter()
            .map(StoredTemplate::into_template)
            .collect()
    }

    fn save(&self, templates: &[Template]) -> Result<()> {
        let file = TemplateFile {
            schema_version: TEMPLATE_SCHEMA_VERSION,
            templates: templates.iter().map(StoredTemplate::from_template).collect(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(tmp, &self.path)?;
        Ok(())
    }
}
