//! # Validator Contract
//!
//! Rule matching lives outside this crate. A validator receives the
//! aggregated input, the rule set and presentation hints, and returns a
//! fresh `ValidationResult`. From the aggregator's point of view it is a
//! pure function of its inputs.

use std::collections::BTreeMap;

use super::options::ValidationOptions;
use super::result::ValidationResult;
use crate::input::InputMap;
use crate::request::Request;

/// Ordered rules per field path
pub type RuleSet<R> = BTreeMap<String, Vec<R>>;

/// Custom messages keyed by `field` or `field.rule`
pub type Messages = BTreeMap<String, String>;

/// Display names for fields used in messages
pub type Attributes = BTreeMap<String, String>;

/// Validates aggregated request input against a rule set
pub trait Validator: Sized {
    /// Rule representation understood by this validator
    type Rule;

    /// Validate `data`.
    ///
    /// `context` is the aggregator that produced `data`; validators may read
    /// from it (for rules that compare fields) but must not rely on mutating it.
    fn validate(
        &self,
        data: &InputMap,
        rules: &RuleSet<Self::Rule>,
        messages: &Messages,
        attributes: &Attributes,
        options: Option<&ValidationOptions>,
        context: &Request<'_, Self>,
    ) -> ValidationResult;
}
