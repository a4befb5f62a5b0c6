use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use dss_client::DataPreview;
use dss_model::{
    Author, Keyword, License, MetadataDraft, Severity, TemporalResolution, Variable,
};
use dss_submit::{DraftStore, Evaluation, Readiness};

pub fn print_draft(store: &DraftStore, attachment: Option<&Path>) {
    let draft = store.draft();
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);

    table.add_row(vec![field_cell("Title"), text_cell(draft.title.as_deref())]);
    table.add_row(vec![
        field_cell("Abstract"),
        text_cell(draft.abstract_text.as_deref()),
    ]);
    table.add_row(vec![
        field_cell("First author"),
        text_cell(draft.first_author.as_ref().map(Author::label).as_deref()),
    ]);
    table.add_row(vec![
        field_cell("Co-authors"),
        list_cell(draft.co_authors.iter().map(Author::label)),
    ]);
    table.add_row(vec![
        field_cell("License"),
        text_cell(draft.license.as_ref().map(|l| l.short_title.as_str())),
    ]);
    table.add_row(vec![
        field_cell("Variable"),
        text_cell(draft.variable.as_ref().map(Variable::label).as_deref()),
    ]);
    table.add_row(vec![
        field_cell("Keywords"),
        list_cell(draft.display_keywords().into_iter().map(|k| k.path.clone())),
    ]);
    table.add_row(vec![
        field_cell("Details"),
        list_cell(
            draft
                .details
                .iter()
                .map(|d| format!("{} = {}", d.name, d.value)),
        ),
    ]);
    add_data_source_rows(&mut table, draft);
    table.add_row(vec![
        field_cell("Attachment"),
        text_cell(
            attachment
                .map(|p| p.display().to_string())
                .as_deref(),
        ),
    ]);

    println!("{table}");
    print_diagnostics(store.evaluation());
}

fn add_data_source_rows(table: &mut Table, draft: &MetadataDraft) {
    let Some(source) = &draft.data_source else {
        table.add_row(vec![field_cell("Data source"), dim_cell("-")]);
        return;
    };
    let kind = source.source_type.map(|t| t.label());
    table.add_row(vec![
        field_cell("Data source"),
        Cell::new(format!(
            "{} {}",
            kind.unwrap_or("?"),
            source.path.as_deref().unwrap_or_default()
        )),
    ]);
    table.add_row(vec![
        field_cell("Data columns"),
        list_cell(source.variable_names.iter().cloned()),
    ]);
    if let Some(spatial) = &source.spatial_scale {
        table.add_row(vec![
            field_cell("Spatial scale"),
            Cell::new(format!(
                "dimensions [{}], extent {}, resolution {}",
                spatial.dimension_names.join(", "),
                spatial.extent.as_deref().unwrap_or("-"),
                spatial
                    .resolution_meters
                    .map_or_else(|| "-".to_string(), |r| format!("{r} m")),
            )),
        ]);
    }
    if let Some(temporal) = &source.temporal_scale {
        let extent = temporal.extent().map_or_else(
            || "-".to_string(),
            |(start, end)| format!("{} to {}", start.to_rfc3339(), end.to_rfc3339()),
        );
        table.add_row(vec![
            field_cell("Temporal scale"),
            Cell::new(format!(
                "dimensions [{}], extent {}, resolution {}",
                temporal.dimension_names.join(", "),
                extent,
                temporal
                    .resolution
                    .as_ref()
                    .map_or("-", TemporalResolution::as_str),
            )),
        ]);
    }
}

pub fn print_diagnostics(evaluation: &Evaluation) {
    let color = match evaluation.readiness() {
        Readiness::Invalid => Color::Red,
        Readiness::ReadyWithWarnings => Color::Yellow,
        Readiness::Ready => Color::Green,
    };
    println!("{}", status_table(evaluation.readiness().label(), color));
    if evaluation.diagnostics.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Code"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for diagnostic in evaluation.sorted_by_severity() {
        table.add_row(vec![
            severity_cell(diagnostic.severity),
            Cell::new(&diagnostic.code),
            Cell::new(&diagnostic.message),
        ]);
    }
    println!("{table}");
}

pub fn print_authors(authors: &[&Author]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Kind"),
        header_cell("Affiliation"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for author in authors {
        let organisation = author.is_organisation.unwrap_or(false);
        table.add_row(vec![
            Cell::new(author.id),
            Cell::new(author.label()),
            Cell::new(if organisation { "organisation" } else { "person" }),
            text_cell(author.affiliation.as_deref()),
        ]);
    }
    println!("{table}");
}

pub fn print_licenses(licenses: &[License]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Short title"),
        header_cell("Title"),
        header_cell("Link"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for license in licenses {
        table.add_row(vec![
            Cell::new(license.id),
            Cell::new(&license.short_title).add_attribute(Attribute::Bold),
            Cell::new(&license.title),
            text_cell(Some(license.link.as_str())),
        ]);
    }
    println!("{table}");
}

pub fn print_variables(variables: &[Variable]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Symbol"),
        header_cell("Unit"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for variable in variables {
        table.add_row(vec![
            Cell::new(variable.id),
            Cell::new(&variable.name),
            Cell::new(&variable.symbol),
            Cell::new(&variable.unit.symbol),
        ]);
    }
    println!("{table}");
}

pub fn print_keywords(keywords: &[&Keyword]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Value"),
        header_cell("Path"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for keyword in keywords {
        table.add_row(vec![
            Cell::new(keyword.id),
            Cell::new(&keyword.value).add_attribute(Attribute::Bold),
            dim_cell(&keyword.path),
        ]);
    }
    println!("{table}");
}

pub fn print_preview(file_name: &str, preview: &DataPreview) {
    println!("File: {file_name}");
    println!("Rows: {}", preview.num_rows);
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Type")]);
    apply_table_style(&mut table);
    for column in &preview.columns {
        table.add_row(vec![Cell::new(&column.name), dim_cell(&column.data_type)]);
    }
    println!("{table}");
}

fn status_table(message: &str, color: Color) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    table.add_row(vec![
        Cell::new(message)
            .fg(color)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 3 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Fixed(28)),
            ColumnConstraint::UpperBoundary(Width::Percentage(70)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn field_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn text_cell(value: Option<&str>) -> Cell {
    match value {
        Some(text) if !text.trim().is_empty() => Cell::new(text),
        _ => dim_cell("-"),
    }
}

fn list_cell(values: impl Iterator<Item = String>) -> Cell {
    let values: Vec<String> = values.collect();
    if values.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(values.join("\n"))
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
