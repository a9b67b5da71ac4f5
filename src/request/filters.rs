//! # Built-in Filters
//!
//! Common normalizations for form input. Values a filter does not apply to
//! pass through unchanged.

use crate::input::Value;

/// Strip leading and trailing whitespace
pub fn trim(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.trim().to_string()),
        other => other,
    }
}

pub fn lowercase(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.to_lowercase()),
        other => other,
    }
}

pub fn uppercase(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.to_uppercase()),
        other => other,
    }
}

/// Turn empty or whitespace-only strings into null
pub fn null_if_empty(value: Value) -> Value {
    match value {
        Value::String(s) if s.trim().is_empty() => Value::Null,
        other => other,
    }
}

/// Parse integer strings; integral floats are narrowed.
pub fn to_integer(value: Value) -> Value {
    match value {
        Value::String(s) => match s.trim().parse::<i64>() {
            Ok(n) => Value::from(n),
            Err(_) => Value::String(s),
        },
        Value::Number(n) if n.as_i64().is_none() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Value::from(f as i64),
            _ => Value::Number(n),
        },
        other => other,
    }
}

/// Parse common boolean spellings ("1", "true", "on", "yes" and their opposites)
pub fn to_boolean(value: Value) -> Value {
    match value {
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "1" | "true" | "on" | "yes" => Value::Bool(true),
            "0" | "false" | "off" | "no" | "" => Value::Bool(false),
            _ => Value::String(s),
        },
        Value::Number(n) => match n.as_i64() {
            Some(0) => Value::Bool(false),
            Some(1) => Value::Bool(true),
            _ => Value::Number(n),
        },
        other => other,
    }
}

/// Replace null with `fallback`
pub fn default_to(fallback: impl Into<Value>) -> impl Fn(Value) -> Value {
    let fallback = fallback.into();
    move |value: Value| match value {
        Value::Null => fallback.clone(),
        other => other,
    }
}
