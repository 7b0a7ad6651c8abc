//! sv-template - Template expression evaluation for Schemaver
//!
//! SQL fragments may embed `${...}` expression spans referencing a small
//! fixed context: the project version parts (`major`, `minor`, `patch`,
//! `label`, `version`) and the literal bucket names (`always`, `before`).
//! Spans are evaluated as restricted expressions through `minijinja` --
//! no arbitrary code is ever constructed or executed.

pub mod context;
pub mod error;
pub mod evaluator;

pub use context::eval_context;
pub use error::{TemplateError, TemplateResult};
pub use evaluator::Evaluator;
