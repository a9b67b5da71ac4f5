//! # Recursive Merge
//!
//! One merge rule shared by source combination and override application:
//! - keys only in the base are kept
//! - keys only in the overlay are added as-is
//! - when both sides hold a map, the maps merge key by key
//! - any other pairing is won by the overlay value
//!
//! Lists and upload handles are never merged into; they are replaced wholesale.

use super::value::{InputMap, Value};

/// Merges `overlay` into `base` in place.
pub fn merge_into(base: &mut InputMap, overlay: InputMap) {
    for (key, incoming) in overlay {
        match incoming {
            Value::Map(nested) => {
                if let Some(Value::Map(existing)) = base.get_mut(&key) {
                    merge_into(existing, nested);
                    continue;
                }
                base.insert(key, Value::Map(nested));
            }
            other => {
                base.insert(key, other);
            }
        }
    }
}

/// Returns `base` with `overlay` merged on top.
pub fn merged(mut base: InputMap, overlay: InputMap) -> InputMap {
    merge_into(&mut base, overlay);
    base
}

/// Folds layers in order; later layers win.
pub fn merge_layers<I>(layers: I) -> InputMap
where
    I: IntoIterator<Item = InputMap>,
{
    layers.into_iter().fold(InputMap::new(), merged)
}
