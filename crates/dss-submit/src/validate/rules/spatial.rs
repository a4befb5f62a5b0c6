//! Spatial scale checks. Only apply when a spatial scale is present.

use dss_model::{MetadataDraft, SpatialScale};

use super::{FnRule, is_empty_text};
use crate::validate::issue::Issue;

/// Number of dimension columns a spatial scale names (x and y).
const SPATIAL_DIMENSIONS: usize = 2;

pub(super) const RULES: [FnRule; 4] = [
    FnRule::new(
        "spatial-dimensions-missing",
        "Spatial scale names its dimension columns",
        dimensions_missing,
    ),
    FnRule::new(
        "spatial-dimensions-count",
        "Spatial scale names exactly two dimension columns",
        dimensions_count,
    ),
    FnRule::new("spatial-extent-missing", "Spatial scale has an extent", extent),
    FnRule::new("spatial-resolution-missing", "Spatial scale has a resolution", resolution),
];

fn spatial(draft: &MetadataDraft) -> Option<&SpatialScale> {
    draft.data_source.as_ref()?.spatial_scale.as_ref()
}

fn dimensions_missing(draft: &MetadataDraft) -> Option<Issue> {
    spatial(draft)?
        .dimension_names
        .is_empty()
        .then_some(Issue::SpatialDimensionsMissing)
}

fn dimensions_count(draft: &MetadataDraft) -> Option<Issue> {
    let found = spatial(draft)?.dimension_names.len();
    (found != 0 && found != SPATIAL_DIMENSIONS).then_some(Issue::SpatialDimensionsCount { found })
}

fn extent(draft: &MetadataDraft) -> Option<Issue> {
    is_empty_text(spatial(draft)?.extent.as_deref()).then_some(Issue::SpatialExtentMissing)
}

fn resolution(draft: &MetadataDraft) -> Option<Issue> {
    spatial(draft)?
        .resolution_meters
        .is_none()
        .then_some(Issue::SpatialResolutionMissing)
}

#[cfg(test)]
mod tests {
    use dss_model::DataSourceDraft;

    use super::*;
    use crate::validate::rules::Rule;

    fn with_scale(scale: SpatialScale) -> MetadataDraft {
        MetadataDraft {
            data_source: Some(DataSourceDraft {
                spatial_scale: Some(scale),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn no_scale_no_issues() {
        let draft = MetadataDraft::default();
        for rule in RULES {
            assert_eq!(rule.check(&draft), None);
        }
    }

    #[test]
    fn empty_dimensions_only_warn_missing() {
        let draft = with_scale(SpatialScale::default());
        assert_eq!(dimensions_missing(&draft), Some(Issue::SpatialDimensionsMissing));
        assert_eq!(dimensions_count(&draft), None);
    }

    #[test]
    fn wrong_dimension_count() {
        let draft = with_scale(SpatialScale {
            dimension_names: names(&["x"]),
            ..Default::default()
        });
        assert_eq!(dimensions_missing(&draft), None);
        assert_eq!(
            dimensions_count(&draft),
            Some(Issue::SpatialDimensionsCount { found: 1 })
        );

        let draft = with_scale(SpatialScale {
            dimension_names: names(&["x", "y"]),
            ..Default::default()
        });
        assert_eq!(dimensions_count(&draft), None);
    }

    #[test]
    fn empty_extent_is_missing() {
        let draft = with_scale(SpatialScale {
            extent: Some(String::new()),
            resolution_meters: Some(250.0),
            ..Default::default()
        });
        assert_eq!(extent(&draft), Some(Issue::SpatialExtentMissing));
        assert_eq!(resolution(&draft), None);
    }

    #[test]
    fn extent_is_not_parsed() {
        let draft = with_scale(SpatialScale {
            extent: Some("not wkt at all".to_string()),
            ..Default::default()
        });
        assert_eq!(extent(&draft), None);
        assert_eq!(resolution(&draft), Some(Issue::SpatialResolutionMissing));
    }
}
