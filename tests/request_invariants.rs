//! Request Aggregation Invariant Tests
//!
//! - Source precedence: cookies < query < body < files < attributes
//! - Sources and overrides merge recursively
//! - Overrides win over every source
//! - Replace mode hides every source
//! - Lookups are pure functions of the effective input
//! - Filtered data is cached on every validation, failed or not

use aero_request::input::{map_from_json, path};
use aero_request::request::filters;
use aero_request::{
    Attributes, FieldError, FieldFilters, FilterChain, InputMap, MemoryRequest, Messages,
    ParsedBody, Request, RuleSet, UploadedFile, ValidationOptions, ValidationResult, Validator,
    Value,
};
use proptest::prelude::*;
use serde_json::json;
use std::cell::RefCell;

// =============================================================================
// Helper Functions
// =============================================================================

/// Keeps fields that have rules and reports `required` rules on absent fields.
///
/// Records the data it was invoked with.
#[derive(Default)]
struct RequiredValidator {
    seen: RefCell<Vec<InputMap>>,
}

impl Validator for RequiredValidator {
    type Rule = &'static str;

    fn validate(
        &self,
        data: &InputMap,
        rules: &RuleSet<Self::Rule>,
        messages: &Messages,
        _attributes: &Attributes,
        options: Option<&ValidationOptions>,
        context: &Request<'_, Self>,
    ) -> ValidationResult {
        self.seen.borrow_mut().push(data.clone());

        let exclude = options.map(|o| o.exclude_unvalidated).unwrap_or(true);
        let mut filtered = if exclude { InputMap::new() } else { data.clone() };
        let mut errors = Vec::new();

        for (field, field_rules) in rules {
            let present = context.has(field) && !path::get(data, field, Value::Null).is_null();
            if field_rules.contains(&"required") && !present {
                let message = messages
                    .get(&format!("{}.required", field))
                    .cloned()
                    .unwrap_or_else(|| format!("The {} field is required.", field));
                errors.push(FieldError::new(field.clone(), "required", message));
            }
            if let Some(value) = path::lookup(data, field) {
                path::insert(&mut filtered, field, value.clone());
            }
        }

        ValidationResult::from_errors(errors, filtered)
    }
}

fn rules(fields: &[(&str, &'static str)]) -> RuleSet<&'static str> {
    fields
        .iter()
        .map(|(field, rule)| (field.to_string(), vec![*rule]))
        .collect()
}

fn no_messages() -> Messages {
    Messages::new()
}

fn no_attributes() -> Attributes {
    Attributes::new()
}

// =============================================================================
// Scenario Tests
// =============================================================================

/// Attributes win over every other source; uploads come through as handles.
#[test]
fn test_all_sources_collected() {
    let upload = UploadedFile::new("report.pdf", 4).with_media_type("application/pdf");
    let mut files = InputMap::new();
    files.insert("file".to_string(), Value::from(upload.clone()));

    let transport = MemoryRequest::new()
        .with_cookies(map_from_json(json!({"from": "cookie"})))
        .with_query(map_from_json(json!({"from": "query"})))
        .with_body(ParsedBody::Json(json!({"from": "body"})))
        .with_files(files)
        .with_attributes(map_from_json(json!({"from": "attr"})));
    let validator = RequiredValidator::default();
    let request = Request::new(&transport, &validator);

    let data = request.all();
    assert_eq!(data["from"], Value::from("attr"));
    assert_eq!(data["file"].as_file(), Some(&upload));
}

/// Each source beats the one below it.
#[test]
fn test_precedence_chain() {
    let transport = MemoryRequest::new()
        .with_cookies(map_from_json(json!({"a": "cookie", "b": "cookie", "c": "cookie", "d": "cookie"})))
        .with_query(map_from_json(json!({"b": "query", "c": "query", "d": "query"})))
        .with_body(ParsedBody::Form(map_from_json(json!({"c": "body", "d": "body"}))))
        .with_attributes(map_from_json(json!({"d": "attr"})));
    let validator = RequiredValidator::default();
    let request = Request::new(&transport, &validator);

    assert_eq!(
        request.all(),
        map_from_json(json!({"a": "cookie", "b": "query", "c": "body", "d": "attr"}))
    );
}

/// An upload handle is replaced, never merged into.
#[test]
fn test_upload_handle_replaced_by_attribute() {
    let mut files = InputMap::new();
    files.insert("avatar".to_string(), Value::from(UploadedFile::new("a.png", 1)));

    let transport = MemoryRequest::new()
        .with_files(files)
        .with_attributes(map_from_json(json!({"avatar": {"url": "/a.png"}})));
    let validator = RequiredValidator::default();
    let request = Request::new(&transport, &validator);

    assert_eq!(request.input("avatar.url", Value::Null), Value::from("/a.png"));
}

/// Maps from different sources combine key by key.
#[test]
fn test_sources_deep_merge() {
    let transport = MemoryRequest::new()
        .with_cookies(map_from_json(json!({"user": {"a": 1}})))
        .with_attributes(map_from_json(json!({"user": {"b": 2}})));
    let validator = RequiredValidator::default();
    let request = Request::new(&transport, &validator);

    assert_eq!(request.all(), map_from_json(json!({"user": {"a": 1, "b": 2}})));
}

#[test]
fn test_merge_then_replace() {
    let transport = MemoryRequest::new().with_query(map_from_json(json!({"a": 1})));
    let validator = RequiredValidator::default();
    let mut request = Request::new(&transport, &validator);

    request.merge(map_from_json(json!({"b": 2})));
    assert_eq!(request.all(), map_from_json(json!({"a": 1, "b": 2})));

    request.replace(map_from_json(json!({"c": 3})));
    assert_eq!(request.all(), map_from_json(json!({"c": 3})));
}

#[test]
fn test_input_and_has_on_nested_body() {
    let transport = MemoryRequest::new()
        .with_body(ParsedBody::Json(json!({"user": {"email": "a@b.c", "phone": null}})));
    let validator = RequiredValidator::default();
    let request = Request::new(&transport, &validator);

    assert!(request.has("user.email"));
    assert!(request.has("user.phone"));
    assert!(!request.has("user.missing"));
    assert_eq!(request.input("user.email", Value::Null), Value::from("a@b.c"));
    assert_eq!(request.input("user.missing", "x"), Value::from("x"));
}

/// A JSON array body contributes nothing.
#[test]
fn test_non_object_body_degrades() {
    let transport = MemoryRequest::new()
        .with_query(map_from_json(json!({"q": "1"})))
        .with_body(ParsedBody::Json(json!(["not", "a", "map"])));
    let validator = RequiredValidator::default();
    let request = Request::new(&transport, &validator);

    assert_eq!(request.all(), map_from_json(json!({"q": "1"})));
}

// =============================================================================
// Filter Tests
// =============================================================================

#[test]
fn test_filter_chain_ordering() {
    let transport = MemoryRequest::new().with_body(ParsedBody::Json(json!({"name": "  alex  "})));
    let validator = RequiredValidator::default();
    let mut request = Request::new(&transport, &validator);

    request.filter(&FieldFilters::new().chain(
        "name",
        FilterChain::new().then(filters::trim).then(filters::uppercase),
    ));

    assert_eq!(request.overrides()["name"], Value::from("ALEX"));
    assert_eq!(request.input("name", Value::Null), Value::from("ALEX"));
}

/// Closures work as filters alongside the built-ins.
#[test]
fn test_filter_with_closures() {
    let transport = MemoryRequest::new()
        .with_query(map_from_json(json!({"age": " 41 ", "newsletter": "on"})));
    let validator = RequiredValidator::default();
    let mut request = Request::new(&transport, &validator);

    request.filter(
        &FieldFilters::new()
            .chain(
                "age",
                FilterChain::new()
                    .then(filters::to_integer)
                    .then(|value: Value| Value::from(value.as_i64().unwrap_or(0) + 1)),
            )
            .field("newsletter", filters::to_boolean),
    );

    assert_eq!(request.input("age", Value::Null), Value::from(42));
    assert_eq!(request.input("newsletter", Value::Null), Value::Bool(true));
}

/// Fields are read before any of them is staged.
#[test]
fn test_filter_reads_one_snapshot() {
    let transport = MemoryRequest::new().with_query(map_from_json(json!({"a": "x", "b": "y"})));
    let validator = RequiredValidator::default();
    let mut request = Request::new(&transport, &validator);

    request.filter(
        &FieldFilters::new()
            .field("a", |_: Value| Value::from("changed"))
            .field("b", |value: Value| value),
    );

    assert_eq!(request.input("a", Value::Null), Value::from("changed"));
    assert_eq!(request.input("b", Value::Null), Value::from("y"));
}

#[test]
fn test_filter_in_replace_mode_reads_overrides() {
    let transport = MemoryRequest::new().with_query(map_from_json(json!({"name": "source"})));
    let validator = RequiredValidator::default();
    let mut request = Request::new(&transport, &validator);

    request
        .replace(map_from_json(json!({"name": " replaced "})))
        .filter(&FieldFilters::new().field("name", filters::trim));

    assert_eq!(request.all(), map_from_json(json!({"name": "replaced"})));
}

// =============================================================================
// Validation Caching Tests
// =============================================================================

#[test]
fn test_filtered_data_empty_before_validation() {
    let transport = MemoryRequest::new().with_query(map_from_json(json!({"a": 1})));
    let validator = RequiredValidator::default();
    let request = Request::new(&transport, &validator);

    assert!(request.filtered_data().is_empty());
}

#[test]
fn test_validate_success_caches_returned_data() {
    let transport = MemoryRequest::new()
        .with_body(ParsedBody::Json(json!({"name": "John", "extra": true})));
    let validator = RequiredValidator::default();
    let mut request = Request::new(&transport, &validator);

    let data = request
        .validate(&rules(&[("name", "required")]), &no_messages(), &no_attributes(), None)
        .unwrap();

    assert_eq!(data, map_from_json(json!({"name": "John"})));
    assert_eq!(request.filtered_data(), &data);
}

/// The validator sees overrides staged before validation.
#[test]
fn test_validator_receives_effective_input() {
    let transport = MemoryRequest::new().with_query(map_from_json(json!({"a": 1})));
    let validator = RequiredValidator::default();
    let mut request = Request::new(&transport, &validator);

    request.merge(map_from_json(json!({"b": 2})));
    request.validation_result(&rules(&[]), &no_messages(), &no_attributes(), None);

    assert_eq!(validator.seen.borrow()[0], map_from_json(json!({"a": 1, "b": 2})));
}

/// A failed attempt replaces the cache from an earlier success.
#[test]
fn test_failed_validation_refreshes_cache() {
    let transport = MemoryRequest::new().with_body(ParsedBody::Json(json!({"name": "John"})));
    let validator = RequiredValidator::default();
    let mut request = Request::new(&transport, &validator);

    request
        .validate(&rules(&[("name", "required")]), &no_messages(), &no_attributes(), None)
        .unwrap();
    assert_eq!(request.filtered_data(), &map_from_json(json!({"name": "John"})));

    request.merge(map_from_json(json!({"name": "Jane"})));
    let failure = request
        .validate(
            &rules(&[("name", "required"), ("email", "required")]),
            &no_messages(),
            &no_attributes(),
            None,
        )
        .unwrap_err();

    assert_eq!(failure.result().error_count(), 1);
    assert_eq!(failure.result().first_error("email").unwrap().rule, "required");
    assert_eq!(request.filtered_data(), &map_from_json(json!({"name": "Jane"})));
    assert_eq!(failure.result().filtered_data(), request.filtered_data());
}

#[test]
fn test_failure_uses_custom_messages() {
    let transport = MemoryRequest::new();
    let validator = RequiredValidator::default();
    let mut request = Request::new(&transport, &validator);

    let mut messages = Messages::new();
    messages.insert("name.required".to_string(), "Tell us your name.".to_string());

    let failure = request
        .validate(&rules(&[("name", "required")]), &messages, &no_attributes(), None)
        .unwrap_err();

    assert_eq!(failure.result().first_error("name").unwrap().message, "Tell us your name.");
}

#[test]
fn test_validation_result_does_not_fail() {
    let transport = MemoryRequest::new();
    let validator = RequiredValidator::default();
    let mut request = Request::new(&transport, &validator);

    let result =
        request.validation_result(&rules(&[("name", "required")]), &no_messages(), &no_attributes(), None);

    assert!(result.has_errors());
    assert!(request.filtered_data().is_empty());
}

#[test]
fn test_options_are_forwarded() {
    let transport = MemoryRequest::new().with_query(map_from_json(json!({"name": "a", "other": "b"})));
    let validator = RequiredValidator::default();
    let mut request = Request::new(&transport, &validator);

    let options = ValidationOptions::default().include_unvalidated();
    let data = request
        .validate(&rules(&[("name", "required")]), &no_messages(), &no_attributes(), Some(&options))
        .unwrap();

    assert_eq!(data, map_from_json(json!({"name": "a", "other": "b"})));
}

// =============================================================================
// Property Tests
// =============================================================================

fn arb_source() -> impl Strategy<Value = InputMap> {
    prop::collection::btree_map("[a-e]", any::<i64>().prop_map(Value::from), 0..5)
}

fn arb_nested() -> impl Strategy<Value = InputMap> {
    let leaf = prop_oneof![
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::from),
        Just(Value::Null),
    ];
    let value = leaf.prop_recursive(3, 16, 4, |inner| {
        prop::collection::btree_map("[a-d]", inner, 0..4).prop_map(Value::Map)
    });
    prop::collection::btree_map("[a-d]", value, 0..4)
}

/// Every non-map leaf path of a map
fn leaf_paths(data: &InputMap, prefix: &str, out: &mut Vec<(String, Value)>) {
    for (key, value) in data {
        let full = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            Value::Map(nested) => leaf_paths(nested, &full, out),
            other => out.push((full, other.clone())),
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: the highest-precedence source holding a key provides its value.
    #[test]
    fn prop_source_precedence(
        cookies in arb_source(),
        query in arb_source(),
        body in arb_source(),
        files in arb_source(),
        attributes in arb_source(),
    ) {
        let transport = MemoryRequest::new()
            .with_cookies(cookies.clone())
            .with_query(query.clone())
            .with_body(ParsedBody::Form(body.clone()))
            .with_files(files.clone())
            .with_attributes(attributes.clone());
        let validator = RequiredValidator::default();
        let request = Request::new(&transport, &validator);
        let all = request.all();

        let ordered = [&attributes, &files, &body, &query, &cookies];
        for key in ["a", "b", "c", "d", "e"] {
            let expected = ordered.iter().find_map(|source| source.get(key));
            prop_assert_eq!(all.get(key), expected);
        }
    }

    /// Property: every override leaf is visible in the effective input.
    #[test]
    fn prop_override_dominance(source in arb_nested(), overrides in arb_nested()) {
        let transport = MemoryRequest::new().with_body(ParsedBody::Form(source));
        let validator = RequiredValidator::default();
        let mut request = Request::new(&transport, &validator);
        request.merge(overrides.clone());

        let all = request.all();
        let mut leaves = Vec::new();
        leaf_paths(&overrides, "", &mut leaves);
        for (leaf, value) in leaves {
            prop_assert_eq!(path::lookup(&all, &leaf), Some(&value));
        }
    }

    /// Property: after replace, the view is exactly the replacement.
    #[test]
    fn prop_replace_exclusivity(
        source in arb_nested(),
        merged_first in arb_nested(),
        replacement in arb_nested(),
    ) {
        let transport = MemoryRequest::new()
            .with_query(source.clone())
            .with_attributes(source);
        let validator = RequiredValidator::default();
        let mut request = Request::new(&transport, &validator);

        request.merge(merged_first).replace(replacement.clone());
        prop_assert_eq!(request.all(), replacement);
    }

    /// Property: repeated lookups without mutation agree.
    #[test]
    fn prop_lookup_is_idempotent(source in arb_nested(), key in "[a-d](\\.[a-d]){0,2}") {
        let transport = MemoryRequest::new().with_body(ParsedBody::Form(source));
        let validator = RequiredValidator::default();
        let request = Request::new(&transport, &validator);

        prop_assert_eq!(request.input(&key, "d"), request.input(&key, "d"));
        prop_assert_eq!(request.has(&key), request.has(&key));
    }
}
