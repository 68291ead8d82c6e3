//! Loading numeric schemas from documents of different drafts.

use nebula_schema_number::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

#[test]
fn draft4_document_end_to_end() {
    let schema = NumberSchema::from_json(&json!({
        "$schema": "http://json-schema.org/draft-04/schema#",
        "type": "integer",
        "minimum": 0,
        "exclusiveMinimum": true,
        "maximum": 10
    }))
    .unwrap();

    assert!(schema.validate(&json!(1)).is_ok());
    assert_eq!(
        schema.validate(&json!(0)).unwrap_err().codes(),
        vec!["exclusiveMinimum"]
    );
    assert_eq!(
        schema.validate(&json!(1.0)).unwrap_err().codes(),
        vec!["type_mismatch"]
    );
}

#[test]
fn draft7_document_end_to_end() {
    let schema = NumberSchema::from_json(&json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "number",
        "exclusiveMinimum": 0,
        "exclusiveMaximum": 1
    }))
    .unwrap();

    assert!(schema.validate(&json!(0.5)).is_ok());
    assert_eq!(
        schema.validate(&json!(1)).unwrap_err().codes(),
        vec!["exclusiveMaximum"]
    );
}

#[rstest]
#[case(Draft::Draft4, json!({"exclusiveMaximum": 5}), "number")]
#[case(Draft::Draft6, json!({"exclusiveMaximum": false}), "boolean")]
#[case(Draft::Draft7, json!({"exclusiveMinimum": true}), "boolean")]
fn strict_loaders_reject_the_other_encoding(
    #[case] draft: Draft,
    #[case] document: serde_json::Value,
    #[case] found: &str,
) {
    let err = SchemaLoader::new(draft).load(&document).unwrap_err();
    match err {
        SchemaError::ExclusivityEncoding {
            found: actual,
            draft: reported,
            ..
        } => {
            assert_eq!(actual, found);
            assert_eq!(reported, draft);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn lenient_loader_mixes_encodings() {
    let schema = SchemaLoader::lenient()
        .load(&json!({
            "minimum": 5,
            "exclusiveMinimum": 10
        }))
        .unwrap();
    assert_eq!(
        schema.validate(&json!(7)).unwrap_err().codes(),
        vec!["exclusiveMinimum"]
    );

    let schema = SchemaLoader::new(Draft::Draft7)
        .with_lenient(true)
        .load(&json!({"maximum": 5, "exclusiveMaximum": true}))
        .unwrap();
    assert!(schema.exclusive_maximum());
}

#[test]
fn untyped_schema_ignores_non_numbers() {
    let schema = NumberSchema::from_json(&json!({"minimum": 3})).unwrap();
    assert!(schema.validate(&json!("hello")).is_ok());
    assert!(schema.validate(&json!(2)).is_err());
}

#[rstest]
#[case(json!({"multipleOf": 0}))]
#[case(json!({"multipleOf": -1.5}))]
fn non_positive_multiple_of(#[case] document: serde_json::Value) {
    let err = NumberSchema::from_json(&document).unwrap_err();
    assert!(matches!(err, SchemaError::NonPositiveMultipleOf { .. }));
    assert!(err.to_string().starts_with("multipleOf must be strictly greater than 0"));
}

#[test]
fn unknown_keywords_are_ignored() {
    let schema = NumberSchema::from_json(&json!({
        "type": "number",
        "title": "Price",
        "description": "in EUR",
        "multipleOf": 0.01
    }))
    .unwrap();
    assert_eq!(
        schema,
        NumberSchema::builder().multiple_of(0.01).build().unwrap()
    );
}

#[test]
fn unknown_meta_schema_uses_default_draft() {
    let document = json!({"$schema": "https://example.com/schema", "exclusiveMinimum": 1});
    assert_eq!(SchemaLoader::detect(&document).draft(), Draft::Draft7);
    assert!(NumberSchema::from_json(&document).is_ok());
}

#[test]
fn persisted_schema_roundtrip() {
    let schema = NumberSchema::from_json(&json!({
        "$schema": "http://json-schema.org/draft-04/schema#",
        "type": "integer",
        "maximum": 9,
        "exclusiveMaximum": true
    }))
    .unwrap();

    let stored = serde_json::to_string(&schema).unwrap();
    let restored: NumberSchema = serde_json::from_str(&stored).unwrap();
    assert_eq!(restored, schema);
}
