//! Property-based tests for reqshape-validator.

use proptest::prelude::*;
use reqshape_validator::prelude::*;
use serde_json::{Map, Value, json};

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        (-1e6f64..1e6).prop_map(|n| json!(n)),
        ".{0,12}".prop_map(Value::String),
        "[0-9]{1,6}".prop_map(Value::String),
    ]
}

// ============================================================================
// IDEMPOTENCY: verify(x) == verify(x)
// ============================================================================

proptest! {
    #[test]
    fn is_number_idempotent(v in scalar()) {
        let verifier = is_number();
        prop_assert_eq!(verifier.verify(&v, "n"), verifier.verify(&v, "n"));
    }

    #[test]
    fn string_range_counts_utf16_units(s in "\\PC{0,20}") {
        let len = s.encode_utf16().count();
        let ok = is_string_range(5, 10).verify(&json!(s), "s").is_ok();
        prop_assert_eq!(ok, (5..=10).contains(&len));
    }
}

// ============================================================================
// COMBINATOR LAWS
// ============================================================================

proptest! {
    #[test]
    fn and_fails_iff_either_fails(v in scalar()) {
        let a_ok = is_string().verify(&v, "x").is_ok();
        let b_ok = is_number().verify(&v, "x").is_ok();
        let combined_ok = is_string().and(is_number()).verify(&v, "x").is_ok();
        prop_assert_eq!(combined_ok, a_ok && b_ok);
    }

    #[test]
    fn or_passes_iff_either_passes(v in scalar()) {
        let a_ok = not_null().verify(&v, "x").is_ok();
        let b_ok = is_integer().verify(&v, "x").is_ok();
        let combined_ok = not_null().or(is_integer()).verify(&v, "x").is_ok();
        prop_assert_eq!(combined_ok, a_ok || b_ok);
    }

    #[test]
    fn not_inverts(v in scalar()) {
        let ok = is_number().verify(&v, "x").is_ok();
        let inverted = is_number().not().verify(&v, "x").is_ok();
        prop_assert_eq!(inverted, !ok);
    }

    #[test]
    fn integers_are_numbers(v in scalar()) {
        if is_integer().verify(&v, "x").is_ok() {
            prop_assert!(is_number().verify(&v, "x").is_ok());
        }
    }
}

// ============================================================================
// MATCHER LAWS
// ============================================================================

proptest! {
    #[test]
    fn unlisted_key_detected(
        listed in prop::collection::btree_set("[a-m]{1,6}", 0..6),
        extra in "[n-z]{1,6}",
    ) {
        let schema: Schema = listed
            .iter()
            .map(|key| (key.clone(), SchemaNode::from(not_null().or(not(not_null())).into_verifier())))
            .collect();
        let mut data: Map<String, Value> = listed.iter().map(|k| (k.clone(), json!(1))).collect();

        prop_assert!(constraint(&data, &schema, false).is_ok());

        data.insert(extra.clone(), json!(1));
        let err = constraint(&data, &schema, false).unwrap_err();
        prop_assert_eq!(err.kind, ErrorKind::UnexpectedKey);
        prop_assert_eq!(err.field.as_deref(), Some(extra.as_str()));
        prop_assert!(constraint(&data, &schema, true).is_ok());
    }

    #[test]
    fn first_missing_key_in_schema_order(
        listed in prop::collection::vec("[a-z]{1,6}", 1..6),
        present in prop::collection::vec(any::<bool>(), 6),
    ) {
        let mut seen = std::collections::HashSet::new();
        let keys: Vec<String> = listed.into_iter().filter(|k| seen.insert(k.clone())).collect();

        let schema: Schema = keys
            .iter()
            .map(|key| (key.clone(), SchemaNode::from(is_number().into_verifier())))
            .collect();
        let data: Map<String, Value> = keys
            .iter()
            .zip(&present)
            .filter(|(_, keep)| **keep)
            .map(|(k, _)| (k.clone(), json!(1)))
            .collect();

        let expected = keys.iter().find(|k| !data.contains_key(*k));
        match (constraint(&data, &schema, false), expected) {
            (Ok(()), None) => {}
            (Err(err), Some(key)) => {
                prop_assert_eq!(err.kind, ErrorKind::MissingValue);
                prop_assert_eq!(err.field.as_deref(), Some(key.as_str()));
            }
            (result, expected) => {
                prop_assert!(false, "unexpected {result:?} for missing {expected:?}");
            }
        }
    }
}
