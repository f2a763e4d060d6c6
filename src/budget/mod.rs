//! Budget state model, recalculation engine, and advisory validation.

pub mod engine;
pub mod state;
pub mod validator;

pub use engine::recalculate;
pub use state::{BudgetState, Field, FieldValue};
pub use validator::validate;
