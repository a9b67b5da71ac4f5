//! # Input Filters
//!
//! Value-to-value transformations staged into the override layer before
//! validation. A field takes one filter or an ordered chain; each step
//! consumes the previous step's output.

use std::fmt;

use crate::input::Value;

/// A pure transformation of one input value
pub trait InputFilter {
    fn apply(&self, value: Value) -> Value;
}

impl<F> InputFilter for F
where
    F: Fn(Value) -> Value,
{
    fn apply(&self, value: Value) -> Value {
        self(value)
    }
}

/// Ordered filters applied left to right
#[derive(Default)]
pub struct FilterChain {
    steps: Vec<Box<dyn InputFilter>>,
}

impl FilterChain {
    /// Create an empty chain (the identity transformation)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a one-step chain
    pub fn single(filter: impl InputFilter + 'static) -> Self {
        Self::new().then(filter)
    }

    /// Append a step
    pub fn then(mut self, filter: impl InputFilter + 'static) -> Self {
        self.steps.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order
    pub fn apply(&self, value: Value) -> Value {
        self.steps.iter().fold(value, |acc, step| step.apply(acc))
    }
}

impl fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterChain")
            .field("steps", &self.steps.len())
            .finish()
    }
}

/// Filter chains keyed by field path, in declaration order
#[derive(Debug, Default)]
pub struct FieldFilters {
    fields: Vec<(String, FilterChain)>,
}

impl FieldFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a single filter for `field`
    pub fn field(self, field: impl Into<String>, filter: impl InputFilter + 'static) -> Self {
        self.chain(field, FilterChain::single(filter))
    }

    /// Declare a chain for `field`.
    ///
    /// Redeclaring a field replaces its chain but keeps its original position.
    pub fn chain(mut self, field: impl Into<String>, chain: FilterChain) -> Self {
        let field = field.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, existing)) => *existing = chain,
            None => self.fields.push((field, chain)),
        }
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields and their chains in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterChain)> {
        self.fields.iter().map(|(name, chain)| (name.as_str(), chain))
    }
}
