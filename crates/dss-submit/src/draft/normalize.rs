//! Collection invariants enforced after every update.
//!
//! - `coAuthors` never contains the first author (by `id`)
//! - `coAuthors` and `keywords` hold each `id` once
//! - `details` hold each `name` once
//!
//! Duplicates are dropped silently; the first occurrence wins.

use serde_json::Value;

use super::path::DraftTree;

pub(crate) fn normalize(tree: &mut DraftTree) {
    let first_author = tree.get("firstAuthor").and_then(|a| a.get("id")).cloned();

    if let Some(Value::Array(co_authors)) = tree.get_mut("coAuthors") {
        if let Some(first) = &first_author {
            co_authors.retain(|author| author.get("id") != Some(first));
        }
        dedupe_by(co_authors, "id");
    }
    if let Some(Value::Array(keywords)) = tree.get_mut("keywords") {
        dedupe_by(keywords, "id");
    }
    if let Some(Value::Array(details)) = tree.get_mut("details") {
        dedupe_by(details, "name");
    }
}

/// Drop entries whose `key` repeats an earlier entry. Entries without the
/// key are left alone.
fn dedupe_by(items: &mut Vec<Value>, key: &str) {
    let mut seen: Vec<Value> = Vec::new();
    items.retain(|item| match item.get(key) {
        Some(identifier) if seen.contains(identifier) => false,
        Some(identifier) => {
            seen.push(identifier.clone());
            true
        }
        None => true,
    });
}
