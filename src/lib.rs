#![doc(test(attr(deny(warnings))))]

//! Pacing Core offers the recalculation engine, weekday date math, advisory
//! validation, and template persistence behind a campaign budget pacing
//! calculator. Rendering and event dispatch belong to the host UI; this
//! crate receives field edits and hands back a fully consistent snapshot.

pub mod budget;
pub mod calendar;
pub mod controller;
pub mod errors;
pub mod storage;
pub mod templates;
pub mod utils;

pub use budget::{recalculate, validate, BudgetState, Field, FieldValue};
pub use calendar::DayCount;
pub use controller::Controller;
pub use errors::PacingError;
pub use templates::{apply_template, Template, TemplateEntry, TemplateSource, TemplateStore};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Pacing Core tracing initialized.");
    });
}
