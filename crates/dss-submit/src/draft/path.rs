//! Path-addressed updates of the draft tree.
//!
//! A path is a dot-delimited sequence of field names such as
//! `dataSource.spatialScale.resolutionMeters`. Writing creates missing
//! intermediate records on demand; writing `null` removes the leaf.
//!
//! Current policy for intermediate segments that hold a non-record value
//! (e.g. writing `title.x` while `title` is a string): the value is replaced
//! by a fresh record instead of reporting an error.

use serde_json::{Map, Value};
use tracing::warn;

/// The stored form of a draft: an ordered mapping of mappings.
pub type DraftTree = Map<String, Value>;

/// Apply a single leaf change to a snapshot, returning a new snapshot.
///
/// The input is never modified. A `null` value removes the addressed leaf;
/// removing below a missing record is a no-op and creates nothing.
/// Malformed paths (empty, or with an empty segment) leave the copy
/// unchanged.
pub fn apply(snapshot: &DraftTree, path: &str, value: Value) -> DraftTree {
    let mut next = snapshot.clone();
    let Some(segments) = split_path(path) else {
        warn!(path, "ignoring update with malformed draft path");
        return next;
    };

    if value.is_null() {
        remove_at(&mut next, &segments);
    } else {
        write_at(&mut next, &segments, value);
    }
    next
}

/// Split a dotted path, rejecting empty paths and empty segments.
pub(crate) fn split_path(path: &str) -> Option<Vec<&str>> {
    let segments: Vec<&str> = path.split('.').map(str::trim).collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return None;
    }
    Some(segments)
}

/// Read the value stored at a path, if any.
pub fn get<'a>(tree: &'a DraftTree, path: &str) -> Option<&'a Value> {
    let segments = split_path(path)?;
    let (leaf, parents) = segments.split_last()?;
    let mut node = tree;
    for segment in parents {
        node = node.get(*segment)?.as_object()?;
    }
    node.get(*leaf)
}

fn write_at(tree: &mut DraftTree, segments: &[&str], value: Value) {
    let Some((leaf, parents)) = segments.split_last() else {
        return;
    };

    let mut node = tree;
    for segment in parents {
        let child = node
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !child.is_object() {
            *child = Value::Object(Map::new());
        }
        let Value::Object(record) = child else {
            return;
        };
        node = record;
    }
    node.insert(leaf.to_string(), value);
}

fn remove_at(tree: &mut DraftTree, segments: &[&str]) {
    let Some((leaf, parents)) = segments.split_last() else {
        return;
    };

    let mut node = tree;
    for segment in parents {
        match node.get_mut(*segment) {
            Some(Value::Object(record)) => node = record,
            _ => return,
        }
    }
    node.remove(*leaf);
}
