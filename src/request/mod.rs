//! Request aggregation for aero-request
//!
//! `Request` combines the transport's sources into one view, lets callers
//! override or filter values, and hands the result to a `Validator`.

mod aggregator;
mod filter;
pub mod filters;

pub use aggregator::Request;
pub use filter::{FieldFilters, FilterChain, InputFilter};
