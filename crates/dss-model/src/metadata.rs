//! Typed view of a metadata draft.
//!
//! The draft itself is stored as a JSON object tree so that any path can be
//! written before its parents exist. [`MetadataDraft::from_tree`] decodes
//! that tree field by field; nothing in it is ever required.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::decode::{field, list, record, timestamp, unique_strings};
use crate::duration::TemporalResolution;
use crate::lookup::{Author, Keyword, License, Variable};

/// The in-progress, partially filled metadata record for one submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetadataDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embargo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_author: Option<Author>,
    pub co_authors: Vec<Author>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<Variable>,
    pub keywords: Vec<Keyword>,
    pub details: Vec<Detail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<DataSourceDraft>,
}

impl MetadataDraft {
    /// Decode the typed view from a draft tree.
    pub fn from_tree(tree: &Map<String, Value>) -> Self {
        Self {
            title: field(tree, "title"),
            abstract_text: field(tree, "abstract"),
            external_id: field(tree, "externalId"),
            embargo: field(tree, "embargo"),
            first_author: field(tree, "firstAuthor"),
            co_authors: list(tree, "coAuthors"),
            license: field(tree, "license"),
            variable: field(tree, "variable"),
            keywords: list(tree, "keywords"),
            details: list(tree, "details"),
            data_source: record(tree, "dataSource").map(DataSourceDraft::from_record),
        }
    }

    /// Keywords to display: the variable's own keyword first, then the
    /// explicitly selected ones.
    pub fn display_keywords(&self) -> Vec<&Keyword> {
        self.variable
            .as_ref()
            .and_then(|v| v.keyword.as_ref())
            .into_iter()
            .chain(self.keywords.iter())
            .collect()
    }
}

/// A free-form key/value detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    pub name: String,
    pub value: String,
    #[serde(rename = "type", default)]
    pub detail_type: DetailType,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailType {
    #[default]
    String,
    Date,
    Float,
    Bool,
}

/// Kind of data file backing a data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataSourceType {
    #[serde(rename = "csv")]
    Csv,
    #[serde(rename = "netCDF")]
    NetCdf,
}

impl DataSourceType {
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        match media_type.trim().to_lowercase().as_str() {
            "text/csv" => Some(Self::Csv),
            "application/x-netcdf" | "application/netcdf" => Some(Self::NetCdf),
            _ => None,
        }
    }

    /// Guess the type from a file name extension.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, extension) = name.rsplit_once('.')?;
        match extension.to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "nc" | "nc4" | "netcdf" => Some(Self::NetCdf),
            _ => None,
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::NetCdf => "application/x-netcdf",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::NetCdf => "NetCDF",
        }
    }
}

/// Tabular data source attached to the dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataSourceDraft {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub source_type: Option<DataSourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Data columns (excluding axis information), unique.
    pub variable_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spatial_scale: Option<SpatialScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporal_scale: Option<TemporalScale>,
}

impl DataSourceDraft {
    fn from_record(source: &Map<String, Value>) -> Self {
        Self {
            source_type: field(source, "type"),
            path: field(source, "path"),
            variable_names: unique_strings(source, "variableNames"),
            spatial_scale: record(source, "spatialScale").map(SpatialScale::from_record),
            temporal_scale: record(source, "temporalScale").map(TemporalScale::from_record),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpatialScale {
    /// Expected to hold exactly two column names.
    pub dimension_names: Vec<String>,
    /// Well-known-text geometry, kept opaque.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution_meters: Option<f64>,
}

impl SpatialScale {
    fn from_record(scale: &Map<String, Value>) -> Self {
        Self {
            dimension_names: list(scale, "dimensionNames"),
            extent: field(scale, "extent"),
            resolution_meters: field(scale, "resolutionMeters"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemporalScale {
    /// Expected to hold exactly one column name.
    pub dimension_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observation_start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observation_end: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<TemporalResolution>,
}

impl TemporalScale {
    fn from_record(scale: &Map<String, Value>) -> Self {
        Self {
            dimension_names: list(scale, "dimensionNames"),
            observation_start: timestamp(scale, "observationStart"),
            observation_end: timestamp(scale, "observationEnd"),
            resolution: field(scale, "resolution"),
        }
    }

    /// Both ends of the observation period, if set.
    pub fn extent(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        Some((self.observation_start?, self.observation_end?))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn tree(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn empty_tree_decodes_to_empty_draft() {
        assert_eq!(MetadataDraft::from_tree(&Map::new()), MetadataDraft::default());
    }

    #[test]
    fn malformed_fields_read_as_absent() {
        let draft = MetadataDraft::from_tree(&tree(json!({
            "title": 42,
            "embargo": "yes",
            "firstAuthor": {"first_name": "no id"},
            "dataSource": "not a record",
        })));
        assert_eq!(draft.title, None);
        assert_eq!(draft.embargo, None);
        assert_eq!(draft.first_author, None);
        assert_eq!(draft.data_source, None);
    }

    #[test]
    fn nested_scales_decode() {
        let draft = MetadataDraft::from_tree(&tree(json!({
            "dataSource": {
                "type": "csv",
                "variableNames": ["discharge", "discharge", "stage"],
                "spatialScale": {"dimensionNames": ["x", "y"], "extent": "POINT(1 2)"},
                "temporalScale": {
                    "dimensionNames": ["time"],
                    "observationStart": "2020-01-01T00:00:00Z",
                    "observationEnd": "2021-01-01T00:00:00Z",
                    "resolution": "PT1H"
                }
            }
        })));
        let source = draft.data_source.expect("data source");
        assert_eq!(source.source_type, Some(DataSourceType::Csv));
        assert_eq!(source.variable_names, vec!["discharge", "stage"]);
        let spatial = source.spatial_scale.expect("spatial scale");
        assert_eq!(spatial.extent.as_deref(), Some("POINT(1 2)"));
        assert_eq!(spatial.resolution_meters, None);
        let temporal = source.temporal_scale.expect("temporal scale");
        assert!(temporal.extent().is_some());
        assert_eq!(
            temporal.resolution.as_ref().map(TemporalResolution::as_str),
            Some("PT1H")
        );
    }

    #[test]
    fn list_entries_decode_individually() {
        let draft = MetadataDraft::from_tree(&tree(json!({
            "coAuthors": [{"id": 1}, "garbage", {"id": 2}],
            "details": [{"name": "site", "value": "A"}]
        })));
        assert_eq!(draft.co_authors.len(), 2);
        assert_eq!(draft.details[0].detail_type, DetailType::String);
    }


    #[test]
    fn data_source_type_from_file_name() {
        assert_eq!(DataSourceType::from_file_name("runoff.CSV"), Some(DataSourceType::Csv));
        assert_eq!(DataSourceType::from_file_name("grid.nc"), Some(DataSourceType::NetCdf));
        assert_eq!(DataSourceType::from_file_name("README"), None);
    }
}
