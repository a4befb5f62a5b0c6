//! Property tests for path-addressed updates.

use dss_submit::{DraftTree, apply};
use proptest::prelude::*;
use serde_json::{Map, Value, json};

fn segment() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "title", "dataSource", "spatialScale", "temporalScale", "extent", "path", "x",
    ])
    .prop_map(str::to_string)
}

fn path() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..4).prop_map(|segments| segments.join("."))
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z ]{0,8}".prop_map(Value::String),
        Just(json!({})),
        Just(json!(["x", "y"])),
    ]
}

fn tree() -> impl Strategy<Value = DraftTree> {
    prop::collection::vec((path(), leaf()), 0..6).prop_map(|updates| {
        updates
            .into_iter()
            .fold(Map::new(), |tree, (path, value)| apply(&tree, &path, value))
    })
}

proptest! {
    #[test]
    fn apply_is_idempotent(start in tree(), path in path(), value in leaf()) {
        let once = apply(&start, &path, value.clone());
        let twice = apply(&once, &path, value);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn apply_never_mutates_input(start in tree(), path in path(), value in leaf()) {
        let before = start.clone();
        let _ = apply(&start, &path, value);
        prop_assert_eq!(start, before);
    }

    #[test]
    fn empty_scale_then_absent_restores_draft(start in tree()) {
        let mut start = start;
        if !start.get("dataSource").is_some_and(Value::is_object) {
            start.insert("dataSource".to_string(), json!({"path": "q.csv"}));
        }
        if let Some(Value::Object(source)) = start.get_mut("dataSource") {
            source.remove("spatialScale");
        }

        let with_scale = apply(&start, "dataSource.spatialScale", json!({}));
        let restored = apply(&with_scale, "dataSource.spatialScale", Value::Null);
        prop_assert_eq!(restored, start);
    }

    #[test]
    fn written_leaf_reads_back(start in tree(), path in path(), n in any::<i32>()) {
        let next = apply(&start, &path, json!(n));
        prop_assert_eq!(dss_submit::draft::get(&next, &path), Some(&json!(n)));
    }
}
