//! # Validation Result
//!
//! What a validator hands back: per-field errors plus the data it accepted.
//! Results are immutable once returned.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::input::InputMap;

/// A single rule violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field path (e.g., "user.email")
    pub field: String,
    /// Rule that rejected the value
    pub rule: String,
    /// Human-readable message
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule: rule.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}' failed '{}': {}", self.field, self.rule, self.message)
    }
}

/// Errors grouped by field path
pub type FieldErrors = BTreeMap<String, Vec<FieldError>>;

/// Outcome of one validator invocation
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationResult {
    errors: FieldErrors,
    filtered_data: InputMap,
}

impl ValidationResult {
    /// Create a result from errors and filtered data.
    ///
    /// Fields with an empty error list are dropped.
    pub fn new(errors: FieldErrors, filtered_data: InputMap) -> Self {
        let errors = errors
            .into_iter()
            .filter(|(_, list)| !list.is_empty())
            .collect();
        Self {
            errors,
            filtered_data,
        }
    }

    /// Create an error-free result
    pub fn passed(filtered_data: InputMap) -> Self {
        Self::new(FieldErrors::new(), filtered_data)
    }

    /// Build a result from a flat list of errors
    pub fn from_errors<I>(errors: I, filtered_data: InputMap) -> Self
    where
        I: IntoIterator<Item = FieldError>,
    {
        let mut grouped = FieldErrors::new();
        for error in errors {
            grouped.entry(error.field.clone()).or_default().push(error);
        }
        Self::new(grouped, filtered_data)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Errors recorded for one field path
    pub fn errors_for(&self, field: &str) -> &[FieldError] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn first_error(&self, field: &str) -> Option<&FieldError> {
        self.errors_for(field).first()
    }

    /// Total number of errors across all fields
    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    pub fn filtered_data(&self) -> &InputMap {
        &self.filtered_data
    }

    pub fn into_filtered_data(self) -> InputMap {
        self.filtered_data
    }

    /// Messages grouped by field, for client-facing rendering
    pub fn messages(&self) -> BTreeMap<String, Vec<String>> {
        self.errors
            .iter()
            .map(|(field, list)| (field.clone(), list.iter().map(|e| e.message.clone()).collect()))
            .collect()
    }
}
