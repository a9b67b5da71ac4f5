//! # Request Aggregator
//!
//! One addressable view over every input source of a request.
//!
//! Source precedence, lowest to highest:
//! cookies < query < body < files < attributes
//!
//! Overrides staged with `merge` sit above all sources. After `replace`, the
//! overrides are the whole view and no source data is visible.

use tracing::debug;

use super::filter::FieldFilters;
use crate::input::{merge_into, merge_layers, merged, path, InputMap, Value};
use crate::transport::{ParsedBody, ServerRequest};
use crate::validation::{
    Attributes, Messages, RequestResult, RuleSet, ValidationFailure, ValidationOptions,
    ValidationResult, Validator,
};

/// Request-scoped input aggregator.
///
/// Built once per inbound request. The transport request is borrowed and
/// never mutated; overrides and the filtered-data cache are owned here.
pub struct Request<'a, V> {
    transport: &'a dyn ServerRequest,
    validator: &'a V,
    overrides: InputMap,
    replace_input: bool,
    filtered_data: InputMap,
}

impl<'a, V: Validator> Request<'a, V> {
    /// Creates an aggregator over `transport`, validating with `validator`.
    pub fn new(transport: &'a dyn ServerRequest, validator: &'a V) -> Self {
        Self {
            transport,
            validator,
            overrides: InputMap::new(),
            replace_input: false,
            filtered_data: InputMap::new(),
        }
    }

    /// The borrowed transport request
    pub fn transport(&self) -> &'a dyn ServerRequest {
        self.transport
    }

    // ==================
    // Override layer
    // ==================

    /// Deep-merges `data` into the overrides. Does not change replace mode.
    pub fn merge(&mut self, data: InputMap) -> &mut Self {
        debug!(keys = data.len(), replacing = self.replace_input, "Merging input overrides");
        merge_into(&mut self.overrides, data);
        self
    }

    /// Replaces all input with `data`, discarding prior overrides.
    pub fn replace(&mut self, data: InputMap) -> &mut Self {
        debug!(keys = data.len(), "Replacing request input");
        self.replace_input = true;
        self.overrides = data;
        self
    }

    /// Runs each declared field through its filter chain and stages the
    /// results as overrides.
    ///
    /// Every field is read from the same snapshot taken before staging.
    /// Dotted field names are staged as nested paths.
    pub fn filter(&mut self, filters: &FieldFilters) -> &mut Self {
        let snapshot = self.all();
        let mut staged = InputMap::new();

        for (field, chain) in filters.iter() {
            let value = path::get(&snapshot, field, Value::Null);
            let filtered = chain.apply(value);
            debug!(field, steps = chain.len(), "Filtered input field");
            path::insert(&mut staged, field, filtered);
        }

        self.merge(staged)
    }

    /// Current overrides
    pub fn overrides(&self) -> &InputMap {
        &self.overrides
    }

    /// Whether `replace` has taken over the input
    pub fn is_replacing(&self) -> bool {
        self.replace_input
    }

    // ==================
    // Unified view
    // ==================

    /// The effective input: combined sources with overrides on top, or the
    /// overrides alone in replace mode.
    pub fn all(&self) -> InputMap {
        if self.replace_input {
            return self.overrides.clone();
        }

        let base = self.collect_sources();
        if self.overrides.is_empty() {
            return base;
        }

        merged(base, self.overrides.clone())
    }

    /// Value at a dot path, or `default` when absent
    pub fn input(&self, path: &str, default: impl Into<Value>) -> Value {
        path::get(&self.all(), path, default)
    }

    /// Whether a dot path resolves, counting explicit nulls as present
    pub fn has(&self, path: &str) -> bool {
        path::has(&self.all(), path)
    }

    pub fn query(&self) -> InputMap {
        self.transport.query_params().clone()
    }

    /// Parsed body as a map; bodies that are not maps yield nothing
    pub fn body(&self) -> InputMap {
        let body = self.transport.parsed_body();
        if !body.is_structured() && !matches!(body, ParsedBody::Absent) {
            debug!(kind = body.kind(), "Request body is not a map, ignoring");
        }
        body.to_map()
    }

    pub fn cookies(&self) -> InputMap {
        self.transport.cookie_params().clone()
    }

    pub fn files(&self) -> InputMap {
        self.transport.uploaded_files().clone()
    }

    pub fn attributes(&self) -> InputMap {
        self.transport.attributes().clone()
    }

    fn collect_sources(&self) -> InputMap {
        merge_layers([
            self.cookies(),
            self.query(),
            self.body(),
            self.files(),
            self.attributes(),
        ])
    }

    // ==================
    // Validation
    // ==================

    /// Validates the effective input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailure` carrying the full result if the validator
    /// reports any error. The filtered-data cache is updated either way.
    pub fn validate(
        &mut self,
        rules: &RuleSet<V::Rule>,
        messages: &Messages,
        attributes: &Attributes,
        options: Option<&ValidationOptions>,
    ) -> RequestResult<InputMap> {
        let result = self.validation_result(rules, messages, attributes, options);

        if result.has_errors() {
            debug!(errors = result.error_count(), "Request validation failed");
            return Err(ValidationFailure::new(result));
        }

        Ok(result.into_filtered_data())
    }

    /// Validates the effective input and returns the full result without
    /// failing, caching its filtered data.
    pub fn validation_result(
        &mut self,
        rules: &RuleSet<V::Rule>,
        messages: &Messages,
        attributes: &Attributes,
        options: Option<&ValidationOptions>,
    ) -> ValidationResult {
        let data = self.all();
        debug!(fields = data.len(), rules = rules.len(), "Invoking validator");

        let validator = self.validator;
        let result = validator.validate(&data, rules, messages, attributes, options, self);

        self.filtered_data = result.filtered_data().clone();
        result
    }

    /// Filtered data from the most recent validation, empty before any
    pub fn filtered_data(&self) -> &InputMap {
        &self.filtered_data
    }
}
