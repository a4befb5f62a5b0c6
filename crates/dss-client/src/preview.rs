//! Column preview returned by the backend for an attached data file.

use serde::{Deserialize, Serialize};

/// One column detected in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataColumn {
    pub name: String,
    #[serde(default)]
    pub data_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPreview {
    #[serde(default)]
    pub num_rows: u64,
    #[serde(default)]
    pub columns: Vec<DataColumn>,
}

impl DataPreview {
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Names from `names` that the file does not contain, in input order.
    pub fn missing_columns<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        names
            .into_iter()
            .filter(|name| !self.has_column(name))
            .collect()
    }
}
