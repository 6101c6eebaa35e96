//! Integration tests for allow-schema constraint matching.

use pretty_assertions::assert_eq;
use reqshape_validator::prelude::*;
use serde_json::{Map, Value, json};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn signup_body() -> Map<String, Value> {
    object(json!({
        "userId": "2455",
        "userName": "foobar",
        "age": 20,
        "langs": ["ja", "en"],
        "data": {
            "height": 180,
            "weight": 70,
            "food": "apple",
        },
        "emailAddress": "hogehoge+ho@example.com",
    }))
}

fn signup_schema() -> Schema {
    Schema::builder()
        .field("userId", is_string().and(is_number()))
        .field("userName", is_string_range(1, 20))
        .field("langs", is_array_of(is_string()))
        .nested(
            "data",
            Schema::builder()
                .field("height", is_number())
                .field("weight", is_number())
                .field("food", is_string()),
        )
        .field("age", is_number())
        .field("emailAddress", is_email_address())
        .build()
}

// ============================================================================
// SUCCESS PATHS
// ============================================================================

#[test]
fn partial_schema_with_extras_allowed() {
    let schema = Schema::builder()
        .field("userName", is_string())
        .field("age", is_number())
        .build();
    assert!(constraint(&signup_body(), &schema, true).is_ok());
}

#[test]
fn full_schema_accepts_signup_body() {
    assert!(constraint(&signup_body(), &signup_schema(), false).is_ok());
}

#[test]
fn empty_data_against_empty_schema() {
    assert!(constraint(&Map::new(), &Schema::empty(), false).is_ok());
}

// ============================================================================
// FAILURE PATHS
// ============================================================================

#[test]
fn partial_schema_rejects_first_unlisted_key() {
    let schema = Schema::builder()
        .field("userName", is_string())
        .field("age", is_number())
        .build();

    let err = constraint(&signup_body(), &schema, false).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnexpectedKey);
    assert_eq!(err.to_string(), "'userId' is unnecessary parameter");
}

#[test]
fn missing_key_is_reported() {
    let mut body = signup_body();
    body.remove("age");

    let err = constraint(&body, &signup_schema(), false).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingValue);
    assert_eq!(err.to_string(), "parameter 'age' must be provided");
}

#[test]
fn nested_leaf_failure_names_the_path() {
    let mut body = signup_body();
    body["data"]["weight"] = json!("heavy");

    let err = constraint(&body, &signup_schema(), false).unwrap_err();
    assert_eq!(err.to_string(), "'weight' cannot convert to number");
    assert_eq!(err.field.as_deref(), Some("data.weight"));
}

#[test]
fn array_element_failure_names_the_index() {
    let mut body = signup_body();
    body["langs"] = json!(["ja", 3]);

    let err = constraint(&body, &signup_schema(), false).unwrap_err();
    assert_eq!(err.to_string(), "langs[1] must be string");
    assert_eq!(err.field.as_deref(), Some("langs[1]"));
}

#[test]
fn composite_failure_keeps_the_inner_reason() {
    let mut body = signup_body();
    body["userId"] = json!(2455);

    let err = constraint(&body, &signup_schema(), false).unwrap_err();
    assert_eq!(err.kind, ErrorKind::CompositeFailure);
    assert_eq!(
        err.to_string(),
        "and verification for 'userId' failed: userId must be string"
    );
    assert_eq!(err.nested.len(), 1);
    assert_eq!(err.nested[0].kind, ErrorKind::TypeMismatch);
}

#[test]
fn invalid_email_is_rejected() {
    let mut body = signup_body();
    body["emailAddress"] = json!("not-an-email");

    let err = constraint(&body, &signup_schema(), false).unwrap_err();
    assert_eq!(err.kind, ErrorKind::PatternMismatch);
    assert_eq!(
        err.to_string(),
        "'emailAddress' is not a valid email expression"
    );
}

#[test]
fn error_tree_serializes_for_http_layers() {
    let schema = Schema::builder()
        .field("id", is_string().and(is_number()))
        .build();
    let err = constraint(&object(json!({ "id": 3 })), &schema, false).unwrap_err();

    insta::assert_json_snapshot!(err.to_json_value(), @r#"
    {
      "code": "composite_failure",
      "message": "and verification for 'id' failed: id must be string",
      "field": "id",
      "params": {},
      "nested": [
        {
          "code": "type_mismatch",
          "message": "id must be string",
          "field": "id",
          "params": {},
          "nested": []
        }
      ]
    }
    "#);
}

// ============================================================================
// CONCURRENCY
// ============================================================================

#[test]
fn one_matcher_serves_many_threads() {
    let matcher = Matcher::new();
    let schema = signup_schema();

    std::thread::scope(|scope| {
        for i in 0..8 {
            let matcher = &matcher;
            let schema = &schema;
            scope.spawn(move || {
                let mut body = signup_body();
                if i % 2 == 1 {
                    body.insert("extra".to_owned(), json!(i));
                }
                let result = matcher.constraint(&body, schema, false);
                assert_eq!(result.is_ok(), i % 2 == 0);
            });
        }
    });
}
