//! Data source presence and shape.
//!
//! All three are warnings: a dataset may be registered without data, but
//! a data source without scales or columns is almost always unfinished.

use dss_model::MetadataDraft;

use super::FnRule;
use crate::validate::issue::Issue;

pub(super) const RULES: [FnRule; 3] = [
    FnRule::new("data-source-missing", "Dataset has a data source", data_source),
    FnRule::new("scale-missing", "Data source has a spatial or temporal scale", scale),
    FnRule::new("data-columns-missing", "Data source references data columns", columns),
];

fn data_source(draft: &MetadataDraft) -> Option<Issue> {
    draft.data_source.is_none().then_some(Issue::DataSourceMissing)
}

fn scale(draft: &MetadataDraft) -> Option<Issue> {
    let source = draft.data_source.as_ref()?;
    (source.spatial_scale.is_none() && source.temporal_scale.is_none())
        .then_some(Issue::ScaleMissing)
}

fn columns(draft: &MetadataDraft) -> Option<Issue> {
    let source = draft.data_source.as_ref()?;
    source
        .variable_names
        .is_empty()
        .then_some(Issue::DataColumnsMissing)
}
