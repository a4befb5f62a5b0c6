//! Draft state.
//!
//! [`DraftStore`] owns the draft tree, its typed view, the current
//! [`Evaluation`] and the attached file. Every mutation goes through
//! [`apply`], re-establishes the collection invariants and re-evaluates the
//! rules before returning, so the draft and its diagnostics are always
//! observed together.

mod attachment;
mod field;
mod normalize;
mod path;

use dss_model::{Author, Detail, DetailType, Diagnostic, Keyword, MetadataDraft};
use serde_json::{Value, json};
use tracing::debug;

use crate::validate::{Evaluation, ValidationEngine};

pub use attachment::{Attachment, OCTET_STREAM};
pub use field::Field;
pub use path::{DraftTree, apply, get};

/// Process-local holder of one in-progress submission.
#[derive(Debug, Clone)]
pub struct DraftStore {
    tree: DraftTree,
    draft: MetadataDraft,
    evaluation: Evaluation,
    attachment: Option<Attachment>,
    engine: ValidationEngine,
}

impl Default for DraftStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftStore {
    /// Create a store holding the empty draft.
    pub fn new() -> Self {
        Self::with_engine(ValidationEngine::default())
    }

    /// Create an empty store evaluated by a custom engine.
    pub fn with_engine(engine: ValidationEngine) -> Self {
        let draft = MetadataDraft::default();
        let evaluation = engine.evaluate(&draft);
        Self {
            tree: DraftTree::new(),
            draft,
            evaluation,
            attachment: None,
            engine,
        }
    }

    /// Restore a store from a saved draft tree.
    pub fn from_tree(mut tree: DraftTree) -> Self {
        normalize::normalize(&mut tree);
        let mut store = Self::new();
        store.replace(tree);
        store
    }

    pub fn tree(&self) -> &DraftTree {
        &self.tree
    }

    /// Typed view of the current draft.
    pub fn draft(&self) -> &MetadataDraft {
        &self.draft
    }

    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.evaluation.diagnostics
    }

    pub fn is_valid(&self) -> bool {
        self.evaluation.is_valid
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    /// Write `value` at a dotted path; `null` removes the leaf.
    pub fn update(&mut self, path: &str, value: Value) {
        let removing = value.is_null();
        let mut tree = apply(&self.tree, path, value);
        normalize::normalize(&mut tree);
        self.replace(tree);
        debug!(
            path,
            removing,
            errors = self.evaluation.error_count(),
            warnings = self.evaluation.warning_count(),
            "draft updated"
        );
    }

    /// Write `value` at a known field.
    pub fn set(&mut self, field: Field, value: Value) {
        self.update(field.path(), value);
    }

    /// Remove a known field.
    pub fn clear(&mut self, field: Field) {
        self.update(field.path(), Value::Null);
    }

    /// Discard the draft and its attachment.
    pub fn reset(&mut self) {
        self.attachment = None;
        self.replace(DraftTree::new());
        debug!("draft reset");
    }

    pub fn attach(&mut self, attachment: Attachment) {
        debug!(
            file = %attachment.file_name,
            bytes = attachment.len(),
            "attachment set"
        );
        self.attachment = Some(attachment);
    }

    /// Attach a data file and describe it in the draft: `dataSource.type`
    /// from its media type (removed when unrecognized) and
    /// `dataSource.path` from its file name.
    pub fn attach_data_file(&mut self, attachment: Attachment) {
        let source_type = attachment
            .source_type()
            .map_or(Value::Null, |kind| json!(kind));
        let mut tree = apply(
            &self.tree,
            Field::DataSourcePath.path(),
            json!(attachment.file_name),
        );
        tree = apply(&tree, Field::DataSourceType.path(), source_type);
        normalize::normalize(&mut tree);
        self.replace(tree);
        self.attach(attachment);
    }

    pub fn detach(&mut self) -> Option<Attachment> {
        self.attachment.take()
    }

    /// Replace the co-author list; the first author is dropped from it.
    pub fn set_co_authors(&mut self, authors: &[Author]) {
        self.set(Field::CoAuthors, json!(authors));
    }

    /// Add a keyword unless one with the same id is already selected.
    pub fn add_keyword(&mut self, keyword: &Keyword) {
        let mut keywords = self.draft.keywords.clone();
        keywords.push(keyword.clone());
        self.set(Field::Keywords, json!(keywords));
    }

    pub fn remove_keyword(&mut self, id: i64) {
        let keywords: Vec<&Keyword> = self.draft.keywords.iter().filter(|k| k.id != id).collect();
        self.set(Field::Keywords, json!(keywords));
    }

    /// Add a detail, replacing the value of an existing detail with the same name.
    pub fn add_detail(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        detail_type: DetailType,
    ) {
        let detail = Detail {
            name: name.into(),
            value: value.into(),
            detail_type,
        };
        let mut details = self.draft.details.clone();
        match details.iter_mut().find(|d| d.name == detail.name) {
            Some(existing) => *existing = detail,
            None => details.push(detail),
        }
        self.set(Field::Details, json!(details));
    }

    pub fn remove_detail(&mut self, name: &str) {
        let details: Vec<&Detail> = self.draft.details.iter().filter(|d| d.name != name).collect();
        self.set(Field::Details, json!(details));
    }

    /// Swap in a new tree together with its typed view and evaluation.
    fn replace(&mut self, tree: DraftTree) {
        let draft = MetadataDraft::from_tree(&tree);
        let evaluation = self.engine.evaluate(&draft);
        self.tree = tree;
        self.draft = draft;
        self.evaluation = evaluation;
    }
}

#[cfg(test)]
mod tests {
    use dss_model::DataSourceType;

    use super::*;

    #[test]
    fn new_store_is_evaluated() {
        let store = DraftStore::new();
        assert!(!store.is_valid());
        assert_eq!(store.evaluation().error_count(), 5);
    }

    #[test]
    fn update_refreshes_typed_view() {
        let mut store = DraftStore::new();
        store.update("title", json!("Runoff"));
        assert_eq!(store.draft().title.as_deref(), Some("Runoff"));
        assert_eq!(store.evaluation().error_count(), 4);
    }

    #[test]
    fn add_detail_replaces_same_name() {
        let mut store = DraftStore::new();
        store.add_detail("site", "A", DetailType::String);
        store.add_detail("site", "B", DetailType::String);
        assert_eq!(store.draft().details.len(), 1);
        assert_eq!(store.draft().details[0].value, "B");

        store.remove_detail("site");
        assert!(store.draft().details.is_empty());
    }

    #[test]
    fn data_file_sets_source_type_and_path() {
        let mut store = DraftStore::new();
        store.attach_data_file(Attachment::new("q.csv", "text/csv", b"t,q\n".to_vec()));
        let source = store.draft().data_source.clone().unwrap_or_default();
        assert_eq!(source.source_type, Some(DataSourceType::Csv));
        assert_eq!(source.path.as_deref(), Some("q.csv"));

        store.attach_data_file(Attachment::new("q.bin", OCTET_STREAM, vec![0u8]));
        let source = store.draft().data_source.clone().unwrap_or_default();
        assert_eq!(source.source_type, None);
        assert_eq!(source.path.as_deref(), Some("q.bin"));
        assert_eq!(store.attachment().map(Attachment::len), Some(1));
    }

    #[test]
    fn reset_drops_attachment() {
        let mut store = DraftStore::new();
        store.update("title", json!("T"));
        store.attach(Attachment::new("a.csv", "text/csv", b"x,y\n1,2\n".to_vec()));
        store.reset();
        assert!(store.tree().is_empty());
        assert!(store.attachment().is_none());
    }
}
