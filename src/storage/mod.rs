pub mod json_backend;

use std::cell::RefCell;

use crate::{errors::PacingError, templates::Template};

pub type Result<T> = std::result::Result<T, PacingError>;

/// Abstraction over persistence backends for the custom template collection.
/// Every mutation writes the whole collection back; there are no
/// partial-record updates.
pub trait TemplateBackend {
    fn load(&self) -> Result<Vec<Template>>;
    fn save(&self, templates: &[Template]) -> Result<()>;
}

pub use json_backend::{JsonTemplateBackend, TEMPLATE_SCHEMA_VERSION};

/// In-memory backend for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryTemplateBackend {
    templates: RefCell<Vec<Template>>,
}

impl MemoryTemplateBackend {
    pub fn new(templates: Vec<Template>) -> Self {
        Self {
            templates: RefCell::new(templates),
        }
    }
}

impl TemplateBackend for MemoryTemplateBackend {
    fn load(&self) -> Result<Vec<Template>> {
        Ok(self.templates.borrow().clone())
    }

    fn save(&self, templates: &[Template]) -> Result<()> {
        *self.templates.borrow_mut() = templates.to_vec();
        Ok(())
    }
}
