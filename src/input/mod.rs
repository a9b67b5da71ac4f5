//! Input data model for aero-request
//!
//! - `Value` / `InputMap`: the shape of every request source
//! - `merge`: the recursive merge used for source precedence and overrides
//! - `path`: dot-path lookup over nested maps

pub mod merge;
pub mod path;
mod value;

pub use merge::{merge_into, merge_layers, merged};
pub use value::{map_from_json, InputMap, Value};
