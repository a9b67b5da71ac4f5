//! # Bound Schema
//!
//! A schema paired with the request it validates.

use tracing::debug;

use super::RequestSchema;
use crate::input::{path, InputMap, Value};
use crate::request::Request;
use crate::validation::{RequestResult, ValidationFailure, ValidationOptions, ValidationResult};

/// A `RequestSchema` bound to one `Request`, caching its last result.
pub struct BoundSchema<'a, S: RequestSchema> {
    schema: S,
    request: Request<'a, S::Validator>,
    result: Option<ValidationResult>,
}

impl<'a, S: RequestSchema> BoundSchema<'a, S> {
    pub fn new(schema: S, request: Request<'a, S::Validator>) -> Self {
        Self {
            schema,
            request,
            result: None,
        }
    }

    /// Validates with the schema's rules.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailure` if the validator reports any error. The
    /// result is cached before failing.
    pub fn validate(&mut self, options: Option<&ValidationOptions>) -> RequestResult<InputMap> {
        let result = self.validation_result(options).clone();

        if result.has_errors() {
            debug!(errors = result.error_count(), "Schema validation failed");
            return Err(ValidationFailure::new(result));
        }

        Ok(result.into_filtered_data())
    }

    /// Validates with the schema's rules and returns the cached result.
    pub fn validation_result(&mut self, options: Option<&ValidationOptions>) -> &ValidationResult {
        self.schema.before_validation(&mut self.request);

        let result = self.request.validation_result(
            &self.schema.rules(),
            &self.schema.messages(),
            &self.schema.attributes(),
            options,
        );

        self.result.insert(result)
    }

    /// Filtered data of the last validation, empty before any
    pub fn validated(&self) -> InputMap {
        self.result
            .as_ref()
            .map(|result| result.filtered_data().clone())
            .unwrap_or_default()
    }

    /// Validated value at a dot path, or `default`
    pub fn get(&self, key: &str, default: impl Into<Value>) -> Value {
        match &self.result {
            Some(result) => path::get(result.filtered_data(), key, default),
            None => default.into(),
        }
    }

    /// The last cached result
    pub fn result(&self) -> Option<&ValidationResult> {
        self.result.as_ref()
    }

    pub fn schema(&self) -> &S {
        &self.schema
    }

    pub fn request(&self) -> &Request<'a, S::Validator> {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut Request<'a, S::Validator> {
        &mut self.request
    }

    pub fn into_request(self) -> Request<'a, S::Validator> {
        self.request
    }
}
