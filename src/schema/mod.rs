//! Declarative request schemas
//!
//! A schema fixes the rules, messages and field names for one kind of
//! request and binds them to a `Request`. `BoundSchema` runs the schema's
//! `before_validation` hook, validates through the aggregator and keeps the
//! result for later lookups.
//!
//! # Usage
//!
//! ```ignore
//! struct SignupSchema;
//!
//! impl RequestSchema for SignupSchema {
//!     type Validator = MyValidator;
//!
//!     fn rules(&self) -> RuleSet<MyRule> {
//!         // ...
//!     }
//! }
//!
//! let mut signup = BoundSchema::new(SignupSchema, Request::new(&transport, &validator));
//! let data = signup.validate(None)?;
//! let email = signup.get("email", Value::Null);
//! ```

mod bound;

pub use bound::BoundSchema;

use crate::request::Request;
use crate::validation::{Attributes, Messages, RuleSet, Validator};

/// Fixed validation settings for one kind of request.
///
/// Only `rules` is required.
pub trait RequestSchema {
    /// Validator the rules are written for
    type Validator: Validator;

    fn rules(&self) -> RuleSet<<Self::Validator as Validator>::Rule>;

    /// Custom messages (default: none)
    fn messages(&self) -> Messages {
        Messages::new()
    }

    /// Field display names (default: none)
    fn attributes(&self) -> Attributes {
        Attributes::new()
    }

    /// Runs before every validation; may merge, replace or filter input.
    fn before_validation(&self, _request: &mut Request<'_, Self::Validator>) {}
}
