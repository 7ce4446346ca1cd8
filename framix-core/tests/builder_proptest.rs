//! Properties of frame construction over arbitrary map-like records.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use proptest::prelude::*;

use framix_core::{Frame, Value};

const KEY: &str = "k";

/// column types are fixed by name, so generated records never conflict
fn arb_record() -> impl Strategy<Value = BTreeMap<String, Value>> {
    (
        proptest::option::of("[a-d]"),
        proptest::option::of("[a-z]{0,4}"),
        proptest::option::of(-1_000_000i64..1_000_000i64),
        proptest::option::of(-1e6_f64..1e6_f64),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(k, s, i, f, b)| {
            let mut m = BTreeMap::new();
            if let Some(k) = k {
                m.insert(KEY.to_owned(), Value::String(k));
            }
            if let Some(s) = s {
                m.insert("s".to_owned(), Value::String(s));
            }
            if let Some(i) = i {
                m.insert("i".to_owned(), Value::I64(i));
            }
            if let Some(f) = f {
                m.insert("f".to_owned(), Value::F64(f));
            }
            if let Some(b) = b {
                m.insert("b".to_owned(), Value::unsupported(b.to_string()));
            }
            m
        })
}

fn arb_records(max_len: usize) -> impl Strategy<Value = Vec<BTreeMap<String, Value>>> {
    proptest::collection::vec(arb_record(), 0..max_len)
}

proptest! {
    #[test]
    fn prop_schema_is_union_of_supported_fields(records in arb_records(20)) {
        let fx = Frame::from_records(&records, KEY, None).unwrap();

        let expected = records
            .iter()
            .flat_map(|r| r.iter())
            .filter(|(_, v)| !v.is_unsupported())
            .map(|(k, _)| k.as_str())
            .collect::<BTreeSet<_>>();
        let found = fx.get_column_names().into_iter().collect::<BTreeSet<_>>();

        prop_assert_eq!(found, expected);
    }

    #[test]
    fn prop_row_count_is_distinct_keys(records in arb_records(20)) {
        let fx = Frame::from_records(&records, KEY, None).unwrap();

        let keys = records
            .iter()
            .map(|r| match r.get(KEY) {
                Some(Value::String(k)) => k.clone(),
                _ => String::new(),
            })
            .collect::<HashSet<_>>();

        prop_assert_eq!(fx.height(), keys.len());
    }

    #[test]
    fn prop_columns_match_row_index(records in arb_records(20), hint in 0usize..64) {
        let fx = Frame::from_records(&records, KEY, Some(hint)).unwrap();

        for s in fx.columns() {
            prop_assert_eq!(s.len(), fx.row_index().len());
        }
        for i in 0..fx.height() {
            let key = fx.row_index().reverse_lookup(i).unwrap();
            prop_assert_eq!(fx.row_index().lookup_str(key), Ok(i));
        }
    }

    #[test]
    fn prop_first_record_wins(records in arb_records(20)) {
        let fx = Frame::from_records(&records, KEY, None).unwrap();

        let mut seen = HashSet::new();
        for r in records.iter() {
            let key = match r.get(KEY) {
                Some(Value::String(k)) => k.clone(),
                _ => String::new(),
            };
            if !seen.insert(key.clone()) {
                continue;
            }
            if let Some(v @ Value::I64(_)) = r.get("i") {
                prop_assert_eq!(&fx.get(&key, "i").unwrap(), v);
            }
        }
    }

    #[test]
    fn prop_missing_fields_get_placeholders(records in arb_records(20)) {
        let fx = Frame::from_records(&records, KEY, None).unwrap();

        let mut seen = HashSet::new();
        for r in records.iter() {
            let key = match r.get(KEY) {
                Some(Value::String(k)) => k.clone(),
                _ => String::new(),
            };
            if !seen.insert(key.clone()) {
                continue;
            }

            if fx.column("i").is_some() {
                let expected = r.get("i").cloned().unwrap_or(Value::I64(0));
                prop_assert_eq!(fx.get(&key, "i").unwrap(), expected);
            }
            if fx.column("s").is_some() {
                let expected = r
                    .get("s")
                    .cloned()
                    .unwrap_or_else(|| Value::String(String::new()));
                prop_assert_eq!(fx.get(&key, "s").unwrap(), expected);
            }
            if fx.column("f").is_some() {
                match (r.get("f"), fx.get(&key, "f").unwrap()) {
                    (Some(v), found) => prop_assert_eq!(&found, v),
                    (None, Value::F64(v)) => prop_assert!(v.is_nan()),
                    (None, found) => prop_assert!(false, "f filled with {:?}", found),
                }
            }
        }
    }
}
