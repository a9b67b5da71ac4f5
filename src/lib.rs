//! aero-request - Request input aggregation and validation delegation
//!
//! Collects cookies, query, body, uploaded files and host attributes into one
//! dot-addressable view, lets callers override or filter values, and hands
//! the result to a pluggable validator.

pub mod input;
pub mod request;
pub mod schema;
pub mod transport;
pub mod validation;

pub use input::{InputMap, Value};
pub use request::{FieldFilters, FilterChain, InputFilter, Request};
pub use schema::{BoundSchema, RequestSchema};
pub use transport::{MemoryRequest, ParsedBody, ServerRequest, UploadStatus, UploadedFile};
pub use validation::{
    Attributes, FieldError, Messages, RequestResult, RuleSet, ValidationFailure,
    ValidationOptions, ValidationResult, Validator,
};
