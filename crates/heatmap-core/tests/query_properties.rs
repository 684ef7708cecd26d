//! # Query Properties
//!
//! Property tests for [`DatasetStore::query`] over generated datasets:
//! full listing, exact case-insensitive membership, order preservation and
//! idempotence.

use heatmap_core::{DatasetStore, Record};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

/// Country names drawn from a small pool so generated datasets have
/// repeated countries in mixed case.
fn country() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("USA".to_string()),
        Just("usa".to_string()),
        Just("Canada".to_string()),
        Just("Niger".to_string()),
        Just("ALL".to_string()),
        "[A-Za-z ]{0,8}",
    ]
}

/// A record with an optional `Country` and a position marker.
fn records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(prop::option::weighted(0.9, country()), 0..24).prop_map(|countries| {
        countries
            .into_iter()
            .enumerate()
            .map(|(idx, country)| {
                let mut fields = Map::new();
                if let Some(c) = country {
                    fields.insert("Country".to_string(), Value::String(c));
                }
                fields.insert("Idx".to_string(), json!(idx));
                Record::new(fields)
            })
            .collect()
    })
}

fn term() -> impl Strategy<Value = String> {
    prop_oneof![country(), Just("all".to_string()), Just("aLL".to_string())]
}

fn indices(records: &[&Record]) -> Vec<u64> {
    records
        .iter()
        .map(|r| r.get("Idx").and_then(Value::as_u64).unwrap())
        .collect()
}

proptest! {
    /// `all` in any case returns the dataset unchanged.
    #[test]
    fn all_returns_dataset(data in records()) {
        let store = DatasetStore::from_records(data.clone());
        let expected: Vec<&Record> = data.iter().collect();
        prop_assert_eq!(store.query("all"), expected.clone());
        prop_assert_eq!(store.query("ALL"), expected);
    }

    /// A record is selected iff its lowercased country equals the lowercased term.
    #[test]
    fn membership_is_exact_lowercase_equality(data in records(), t in term()) {
        prop_assume!(t.to_lowercase() != "all");
        let store = DatasetStore::from_records(data.clone());
        let selected = indices(&store.query(&t));
        for (idx, record) in data.iter().enumerate() {
            let expected = record
                .country()
                .is_some_and(|c| c.to_lowercase() == t.to_lowercase());
            prop_assert_eq!(selected.contains(&(idx as u64)), expected);
        }
    }

    /// Results keep the dataset's relative order.
    #[test]
    fn result_is_ordered_subsequence(data in records(), t in term()) {
        let store = DatasetStore::from_records(data);
        let selected = indices(&store.query(&t));
        prop_assert!(selected.windows(2).all(|w| w[0] < w[1]));
    }

    /// Case of the term never changes the result.
    #[test]
    fn case_insensitive(data in records(), t in term()) {
        let store = DatasetStore::from_records(data);
        prop_assert_eq!(store.query(&t.to_uppercase()), store.query(&t.to_lowercase()));
    }

    /// Repeated queries return the same records and leave the store untouched.
    #[test]
    fn idempotent_and_read_only(data in records(), t in term()) {
        let store = DatasetStore::from_records(data.clone());
        let first: Vec<Record> = store.query(&t).into_iter().cloned().collect();
        let second: Vec<Record> = store.query(&t).into_iter().cloned().collect();
        prop_assert_eq!(first, second);
        prop_assert_eq!(store.records(), data.as_slice());
    }
}

#[test]
fn documented_scenarios() {
    let store = DatasetStore::from_slice(
        br#"[{"Country":"USA","Value":1},{"Country":"Canada","Value":2},{"Country":"usa","Value":3}]"#,
    )
    .unwrap();
    let values = |term: &str| -> Vec<i64> {
        store
            .query(term)
            .iter()
            .map(|r| r.get("Value").and_then(Value::as_i64).unwrap())
            .collect()
    };

    assert_eq!(values("all"), vec![1, 2, 3]);
    assert_eq!(values("USA"), vec![1, 3]);
    assert_eq!(values("canada"), vec![2]);
    assert_eq!(values("France"), Vec::<i64>::new());
    assert_eq!(values("ALL"), vec![1, 2, 3]);
}
