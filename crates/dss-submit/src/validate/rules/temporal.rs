//! Temporal scale checks. Only apply when a temporal scale is present.

use dss_model::{MetadataDraft, TemporalScale};

use super::FnRule;
use crate::validate::issue::Issue;

/// A temporal scale names a single datetime column.
const TEMPORAL_DIMENSIONS: usize = 1;

pub(super) const RULES: [FnRule; 4] = [
    FnRule::new(
        "temporal-dimensions-missing",
        "Temporal scale names its datetime column",
        dimensions_missing,
    ),
    FnRule::new(
        "temporal-dimensions-count",
        "Temporal scale names exactly one datetime column",
        dimensions_count,
    ),
    FnRule::new(
        "temporal-extent-missing",
        "Temporal scale has an observation start and end",
        extent,
    ),
    FnRule::new("temporal-resolution-missing", "Temporal scale has a resolution", resolution),
];

fn temporal(draft: &MetadataDraft) -> Option<&TemporalScale> {
    draft.data_source.as_ref()?.temporal_scale.as_ref()
}

fn dimensions_missing(draft: &MetadataDraft) -> Option<Issue> {
    temporal(draft)?
        .dimension_names
        .is_empty()
        .then_some(Issue::TemporalDimensionsMissing)
}

fn dimensions_count(draft: &MetadataDraft) -> Option<Issue> {
    let found = temporal(draft)?.dimension_names.len();
    (found != 0 && found != TEMPORAL_DIMENSIONS)
        .then_some(Issue::TemporalDimensionsCount { found })
}

fn extent(draft: &MetadataDraft) -> Option<Issue> {
    temporal(draft)?
        .extent()
        .is_none()
        .then_some(Issue::TemporalExtentMissing)
}

fn resolution(draft: &MetadataDraft) -> Option<Issue> {
    temporal(draft)?
        .resolution
        .is_none()
        .then_some(Issue::TemporalResolutionMissing)
}
