//! Validation delegation for aero-request
//!
//! This crate does not implement rules. It defines:
//! - the `Validator` contract the host plugs in
//! - `ValidationResult`, the immutable outcome of one invocation
//! - `ValidationFailure`, raised only by the validating entry points
//! - `ValidationOptions`, forwarded untouched

mod errors;
mod options;
mod result;
mod validator;

pub use errors::{ErrorResponse, RequestResult, ValidationFailure};
pub use options::ValidationOptions;
pub use result::{FieldError, FieldErrors, ValidationResult};
pub use validator::{Attributes, Messages, RuleSet, Validator};
