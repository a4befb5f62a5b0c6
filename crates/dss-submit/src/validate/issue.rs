//! Validation issue types.
//!
//! Each variant corresponds to one rule and carries only the data its
//! message needs. Issues are turned into [`Diagnostic`] values for
//! presentation.

use dss_model::{Diagnostic, Severity};

/// Validation issue raised by a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Issue {
    // Required references
    TitleMissing,
    AbstractMissing,
    FirstAuthorMissing,
    LicenseMissing,
    VariableMissing,

    // Data source shape
    DataSourceMissing,
    ScaleMissing,
    DataColumnsMissing,

    // Spatial scale
    SpatialDimensionsMissing,
    /// Dimension names present but not exactly two.
    SpatialDimensionsCount { found: usize },
    SpatialExtentMissing,
    SpatialResolutionMissing,

    // Temporal scale
    TemporalDimensionsMissing,
    /// Dimension names present but not exactly one.
    TemporalDimensionsCount { found: usize },
    TemporalExtentMissing,
    TemporalResolutionMissing,
}

impl Issue {
    /// Stable identifier of the rule raising this issue.
    pub fn code(&self) -> &'static str {
        match self {
            Issue::TitleMissing => "title-required",
            Issue::AbstractMissing => "abstract-required",
            Issue::FirstAuthorMissing => "first-author-required",
            Issue::LicenseMissing => "license-required",
            Issue::VariableMissing => "variable-required",
            Issue::DataSourceMissing => "data-source-missing",
            Issue::ScaleMissing => "scale-missing",
            Issue::DataColumnsMissing => "data-columns-missing",
            Issue::SpatialDimensionsMissing => "spatial-dimensions-missing",
            Issue::SpatialDimensionsCount { .. } => "spatial-dimensions-count",
            Issue::SpatialExtentMissing => "spatial-extent-missing",
            Issue::SpatialResolutionMissing => "spatial-resolution-missing",
            Issue::TemporalDimensionsMissing => "temporal-dimensions-missing",
            Issue::TemporalDimensionsCount { .. } => "temporal-dimensions-count",
            Issue::TemporalExtentMissing => "temporal-extent-missing",
            Issue::TemporalResolutionMissing => "temporal-resolution-missing",
        }
    }

    /// Severity for this issue type.
    pub fn severity(&self) -> Severity {
        match self {
            Issue::DataSourceMissing
            | Issue::ScaleMissing
            | Issue::DataColumnsMissing
            | Issue::SpatialDimensionsMissing
            | Issue::SpatialDimensionsCount { .. }
            | Issue::TemporalDimensionsMissing
            | Issue::TemporalDimensionsCount { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Format message with issue-specific data.
    pub fn message(&self) -> String {
        match self {
            Issue::TitleMissing => "A title is required.".to_string(),
            Issue::AbstractMissing => "An abstract is required.".to_string(),
            Issue::FirstAuthorMissing => "A first author is required. \
                If you cannot find the author, please add them first."
                .to_string(),
            Issue::LicenseMissing => "No license is specified. Please choose one. \
                If none fits your needs, please contact the administrator."
                .to_string(),
            Issue::VariableMissing => "No variable is specified. \
                Every dataset needs to define a variable. \
                If you cannot find the variable, please contact the administrator."
                .to_string(),
            Issue::DataSourceMissing => {
                "No data source is specified. Are you sure you don't want to upload any data?"
                    .to_string()
            }
            Issue::ScaleMissing => "The data source has neither a spatial nor a temporal scale. \
                This is most likely a mistake."
                .to_string(),
            Issue::DataColumnsMissing => {
                "The data source does not reference any data columns.".to_string()
            }
            Issue::SpatialDimensionsMissing => {
                "The spatial scale does not name its dimension columns.".to_string()
            }
            Issue::SpatialDimensionsCount { found } => format!(
                "The spatial scale expected exactly 2 dimension names, found {}.",
                found
            ),
            Issue::SpatialExtentMissing => "The spatial scale has no extent.".to_string(),
            Issue::SpatialResolutionMissing => "The spatial scale has no resolution.".to_string(),
            Issue::TemporalDimensionsMissing => {
                "The temporal scale does not name its datetime column.".to_string()
            }
            Issue::TemporalDimensionsCount { found } => format!(
                "The temporal scale expected exactly 1 dimension name, found {}.",
                found
            ),
            Issue::TemporalExtentMissing => "The temporal scale has no extent.".to_string(),
            Issue::TemporalResolutionMissing => {
                "The temporal scale has no resolution.".to_string()
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.code(), self.severity(), self.message())
    }
}

impl From<Issue> for Diagnostic {
    fn from(issue: Issue) -> Self {
        issue.to_diagnostic()
    }
}
