//! Property-based tests for the round-trip law
//!
//! For every contract and every literal accepted by `restore`, passing the
//! restored value back down through `transform` and up through `restore`
//! again must reproduce the same value - even when the text codec of an
//! embedded document changes pretty-printing between the two trips.

use proptest::collection::{hash_map, vec};
use proptest::option;
use proptest::prelude::*;
use recast_core::{
    array, boolean, document_with, number, object, optional, record, string, union, variant,
    Codec, Contract,
};
use serde_json::{json, Map, Value};

/// Strategy for JSON-safe strings
fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,!?_-]{0,40}"
}

/// Strategy for values accepted by the profile schema below
fn profile_strategy() -> impl Strategy<Value = Value> {
    (
        text_strategy(),
        vec(any::<bool>(), 0..8),
        hash_map("[a-z]{1,10}", -1000i64..1000, 0..6),
        option::of(text_strategy()),
    )
        .prop_map(|(name, flags, counters, note)| {
            let mut profile = Map::new();
            profile.insert("name".to_string(), json!(name));
            profile.insert("flags".to_string(), json!(flags));
            profile.insert("counters".to_string(), json!(counters));
            if let Some(note) = note {
                profile.insert("note".to_string(), json!(note));
            }
            Value::Object(profile)
        })
}

fn profile_schema() -> Contract {
    object([
        ("name", string()),
        ("flags", array(boolean())),
        ("counters", record(string(), number())),
        ("note", optional(string())),
    ])
}

/// Strategy for number-or-string scalars matching the union schema
fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-1_000_000i64..1_000_000).prop_map(|n| json!(n)),
        text_strategy().prop_map(|s| json!(s)),
    ]
}

fn scalar_schema() -> Contract {
    union(vec![
        variant(Value::is_number, number()),
        variant(Value::is_string, string()),
    ])
}

proptest! {
    #[test]
    fn prop_restored_values_round_trip(value in profile_strategy()) {
        let schema = profile_schema();
        let restored = schema.restore(&value).unwrap();
        let literal = schema.transform(&restored).unwrap();
        prop_assert_eq!(schema.restore(&literal).unwrap(), restored);
    }

    #[test]
    fn prop_round_trip_survives_codec_change(value in profile_strategy()) {
        let pretty = document_with(profile_schema(), Codec::pretty_json());
        let compact = document_with(profile_schema(), Codec::compact_json());

        let pretty_text = pretty.transform(&value).unwrap();
        let via_pretty = pretty.restore(&pretty_text).unwrap();

        // Re-serialize with the compact codec and restore through the
        // pretty one; whitespace must not matter.
        let compact_text = compact.transform(&via_pretty).unwrap();
        let via_compact = pretty.restore(&compact_text).unwrap();
        prop_assert_eq!(via_pretty, via_compact);
    }

    #[test]
    fn prop_union_round_trip_is_idempotent(value in scalar_strategy()) {
        let schema = scalar_schema();
        let restored = schema.restore(&value).unwrap();
        let literal = schema.transform(&restored).unwrap();
        prop_assert_eq!(&schema.restore(&literal).unwrap(), &restored);
        prop_assert_eq!(restored, value);
    }

    #[test]
    fn prop_transform_preserves_array_contents(values in vec(-1000i64..1000, 0..16)) {
        let schema = array(number());
        let value = json!(values);
        prop_assert_eq!(schema.transform(&value).unwrap(), value);
    }

    #[test]
    fn prop_primitive_contracts_reject_other_kinds(flag in any::<bool>()) {
        prop_assert!(string().restore(&json!(flag)).is_err());
        prop_assert!(number().restore(&json!(flag)).is_err());
        prop_assert!(boolean().restore(&json!(flag)).is_ok());
    }
}
