//! Validation scenarios driven through the draft store.

use dss_model::Severity;
use dss_submit::{DraftStore, Readiness};
use serde_json::{Value, json};

fn complete_store() -> DraftStore {
    let mut store = DraftStore::new();
    store.update("title", json!("River discharge 2020"));
    store.update("abstract", json!("Daily discharge at gauge 42."));
    store.update(
        "firstAuthor",
        json!({"id": 1, "first_name": "Ada", "last_name": "Lovelace"}),
    );
    store.update(
        "license",
        json!({"id": 2, "short_title": "CC BY 4.0", "title": "Creative Commons Attribution 4.0"}),
    );
    store.update(
        "variable",
        json!({
            "id": 3,
            "name": "discharge",
            "symbol": "Q",
            "unit": {"id": 1, "name": "cubic metre per second", "symbol": "m3/s"}
        }),
    );
    store
}

fn codes(store: &DraftStore) -> Vec<&str> {
    store.diagnostics().iter().map(|d| d.code.as_str()).collect()
}

#[test]
fn test_empty_draft_messages() {
    let store = DraftStore::new();
    assert!(!store.is_valid());
    assert_eq!(store.evaluation().error_count(), 5);
    assert_eq!(store.evaluation().warning_count(), 1);

    let rendered = store
        .diagnostics()
        .iter()
        .map(|d| format!("[{}] {}", d.severity, d.message))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(rendered, @r"
    [Error] A title is required.
    [Error] An abstract is required.
    [Error] A first author is required. If you cannot find the author, please add them first.
    [Error] No license is specified. Please choose one. If none fits your needs, please contact the administrator.
    [Error] No variable is specified. Every dataset needs to define a variable. If you cannot find the variable, please contact the administrator.
    [Warning] No data source is specified. Are you sure you don't want to upload any data?
    ");
}

#[test]
fn test_required_fields_without_data_source_are_valid() {
    let store = complete_store();
    assert!(store.is_valid());
    assert_eq!(codes(&store), ["data-source-missing"]);
    assert_eq!(store.evaluation().readiness(), Readiness::ReadyWithWarnings);
}

#[test]
fn test_spatial_scale_without_resolution_flips_validity() {
    let mut store = complete_store();
    store.update("dataSource.variableNames", json!(["discharge"]));
    assert!(store.is_valid());

    store.update(
        "dataSource.spatialScale",
        json!({"dimensionNames": ["x", "y"], "extent": "POINT(1 2)"}),
    );
    assert!(!store.is_valid());
    let errors: Vec<_> = store
        .diagnostics()
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "The spatial scale has no resolution.");

    store.update("dataSource.spatialScale.resolutionMeters", json!(250));
    assert!(store.is_valid());
    assert_eq!(store.evaluation().readiness(), Readiness::Ready);
}

#[test]
fn test_empty_data_source_warns_about_scale_and_columns() {
    let mut store = complete_store();
    store.update("dataSource", json!({}));
    assert!(store.is_valid());
    assert_eq!(codes(&store), ["scale-missing", "data-columns-missing"]);
}

#[test]
fn test_temporal_scale_checks() {
    let mut store = complete_store();
    store.update("dataSource.variableNames", json!(["discharge"]));
    store.update("dataSource.temporalScale", json!({}));
    assert_eq!(
        codes(&store),
        [
            "temporal-dimensions-missing",
            "temporal-extent-missing",
            "temporal-resolution-missing",
        ]
    );

    store.update("dataSource.temporalScale.dimensionNames", json!(["date", "hour"]));
    store.update(
        "dataSource.temporalScale.observationStart",
        json!("2020-01-01T00:00:00Z"),
    );
    store.update(
        "dataSource.temporalScale.observationEnd",
        json!("2020-12-31T23:59:59Z"),
    );
    store.update("dataSource.temporalScale.resolution", json!("P1D"));
    assert!(store.is_valid());
    let messages: Vec<&str> = store
        .diagnostics()
        .iter()
        .map(|d| d.message.as_str())
        .collect();
    assert_eq!(
        messages,
        ["The temporal scale expected exactly 1 dimension name, found 2."]
    );
}

#[test]
fn test_malformed_values_read_as_absent() {
    let mut store = complete_store();
    store.update("license", json!("CC BY"));
    assert_eq!(codes(&store), ["license-required", "data-source-missing"]);

    store.update("dataSource.spatialScale.resolutionMeters", json!("fine"));
    assert!(codes(&store).contains(&"spatial-resolution-missing"));
}

#[test]
fn test_removing_scale_restores_evaluation() {
    let mut store = complete_store();
    store.update("dataSource.variableNames", json!(["discharge"]));
    let before = store.evaluation().clone();

    store.update("dataSource.spatialScale", json!({}));
    assert_ne!(store.evaluation(), &before);

    store.update("dataSource.spatialScale", Value::Null);
    assert_eq!(store.evaluation(), &before);
}

#[test]
fn test_offset_free_observation_period_counts_as_set() {
    let mut store = complete_store();
    store.update("dataSource.variableNames", json!(["discharge"]));
    store.update(
        "dataSource.temporalScale",
        json!({
            "dimensionNames": ["time"],
            "observationStart": "2020-01-01T00:00:00",
            "observationEnd": "2020-12-31",
            "resolution": "P1D"
        }),
    );
    assert!(store.is_valid());
    assert!(!codes(&store).contains(&"temporal-extent-missing"));
}

#[test]
fn test_overflowing_resolution_reads_as_absent() {
    let mut store = complete_store();
    store.update("dataSource.variableNames", json!(["discharge"]));
    store.update("dataSource.temporalScale.dimensionNames", json!(["time"]));
    store.update(
        "dataSource.temporalScale.observationStart",
        json!("2020-01-01T00:00:00Z"),
    );
    store.update(
        "dataSource.temporalScale.observationEnd",
        json!("2020-12-31T00:00:00Z"),
    );

    store.update(
        "dataSource.temporalScale.resolution",
        json!("9223372036854775807 days 1 day"),
    );
    assert_eq!(codes(&store), ["temporal-resolution-missing"]);

    store.update(
        "dataSource.temporalScale.resolution",
        json!("2000000000000000000 weeks 1 day"),
    );
    assert_eq!(codes(&store), ["temporal-resolution-missing"]);

    store.update("dataSource.temporalScale.resolution", json!("1 day"));
    assert!(store.is_valid());
    assert!(store.diagnostics().is_empty());
}

#[test]
fn test_whitespace_title_is_accepted() {
    let mut store = complete_store();
    store.update("title", json!("  "));
    assert!(store.is_valid());

    store.update("title", json!(""));
    assert_eq!(codes(&store), ["title-required", "data-source-missing"]);
}
