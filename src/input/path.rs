//! # Dot-Path Resolution
//!
//! Addresses nested input with dot-separated segments (`user.address.city`).
//! Only maps are traversed; a segment that meets a scalar, list or upload
//! handle resolves to nothing.

use super::value::{InputMap, Value};

/// Segment separator
pub const SEPARATOR: char = '.';

/// Resolves `path` against `data`, borrowing the value if present.
///
/// An empty path addresses the top-level key `""`.
pub fn lookup<'a>(data: &'a InputMap, path: &str) -> Option<&'a Value> {
    let mut segments = path.split(SEPARATOR);
    let first = segments.next()?;
    let mut current = data.get(first)?;

    for segment in segments {
        current = match current {
            Value::Map(map) => map.get(segment)?,
            _ => return None,
        };
    }

    Some(current)
}

/// Returns the value at `path`, or `default` when the path does not resolve.
pub fn get(data: &InputMap, path: &str, default: impl Into<Value>) -> Value {
    match lookup(data, path) {
        Some(value) => value.clone(),
        None => default.into(),
    }
}

/// Checks whether `path` resolves to an existing entry.
///
/// Presence is structural: a key holding `null` is present.
pub fn has(data: &InputMap, path: &str) -> bool {
    lookup(data, path).is_some()
}

/// Writes `value` at `path`, creating intermediate maps as needed.
///
/// A non-map value sitting on an intermediate segment is replaced by a map.
pub fn insert(data: &mut InputMap, path: &str, value: Value) {
    match path.split_once(SEPARATOR) {
        None => {
            data.insert(path.to_string(), value);
        }
        Some((head, rest)) => {
            let slot = data
                .entry(head.to_string())
                .or_insert_with(|| Value::Map(InputMap::new()));
            if !matches!(slot, Value::Map(_)) {
                *slot = Value::Map(InputMap::new());
            }
            if let Value::Map(child) = slot {
                insert(child, rest, value);
            }
        }
    }
}
