//! # Transport Request Contract
//!
//! The narrow, read-only view of a server request the aggregator reads from.

use crate::input::{map_from_json, InputMap};

/// Body of a request as parsed by the transport
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ParsedBody {
    /// No body, or the transport did not parse it
    #[default]
    Absent,
    /// Form-encoded fields
    Form(InputMap),
    /// Decoded JSON document
    Json(serde_json::Value),
    /// Unparsed text
    Raw(String),
}

impl ParsedBody {
    /// Coerce the body to a mapping.
    ///
    /// Forms and JSON objects yield their fields; anything else is empty.
    pub fn to_map(&self) -> InputMap {
        match self {
            ParsedBody::Form(fields) => fields.clone(),
            ParsedBody::Json(json @ serde_json::Value::Object(_)) => map_from_json(json.clone()),
            ParsedBody::Json(_) | ParsedBody::Raw(_) | ParsedBody::Absent => InputMap::new(),
        }
    }

    /// Whether the body is a form or a JSON object
    pub fn is_structured(&self) -> bool {
        matches!(
            self,
            ParsedBody::Form(_) | ParsedBody::Json(serde_json::Value::Object(_))
        )
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ParsedBody::Absent => "absent",
            ParsedBody::Form(_) => "form",
            ParsedBody::Json(_) => "json",
            ParsedBody::Raw(_) => "raw",
        }
    }
}

/// Read-only accessors over the transport's server request.
///
/// Implementations are borrowed by the aggregator and never mutated.
pub trait ServerRequest {
    /// Decoded query string parameters
    fn query_params(&self) -> &InputMap;

    /// Parsed request body
    fn parsed_body(&self) -> &ParsedBody;

    /// Cookies sent with the request
    fn cookie_params(&self) -> &InputMap;

    /// Upload handles keyed by form field
    fn uploaded_files(&self) -> &InputMap;

    /// Attributes attached by the host (route parameters, auth claims, ...)
    fn attributes(&self) -> &InputMap;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_object_body_becomes_map() {
        let body = ParsedBody::Json(json!({"name": "John"}));
        assert!(body.is_structured());
        assert_eq!(body.to_map(), map_from_json(json!({"name": "John"})));
    }

    #[test]
    fn test_non_object_bodies_degrade_to_empty() {
        assert!(ParsedBody::Json(json!([1, 2])).to_map().is_empty());
        assert!(ParsedBody::Json(json!("text")).to_map().is_empty());
        assert!(ParsedBody::Raw("a=b".into()).to_map().is_empty());
        assert!(ParsedBody::Absent.to_map().is_empty());
        assert!(!ParsedBody::Raw("x".into()).is_structured());
    }

    #[test]
    fn test_form_body() {
        let body = ParsedBody::Form(map_from_json(json!({"a": "1"})));
        assert_eq!(body.kind(), "form");
        assert_eq!(body.to_map().len(), 1);
    }
}
