//! Lookup references.
//!
//! Authors, licenses, variables and keywords are maintained by the backend
//! and fetched as lookup lists. A draft stores the full (denormalized)
//! record rather than just its id because front ends display derived
//! labels. References compare by their numeric `id`.

use serde::{Deserialize, Serialize};

/// A dataset author: either a person or an organisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub is_organisation: Option<bool>,
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(default)]
    pub attribution: Option<String>,
    #[serde(default)]
    pub organisation_name: Option<String>,
    #[serde(default)]
    pub organisation_abbrev: Option<String>,
}

impl Author {
    /// Display label: `Name (ABBR)` for organisations, `First Last` for persons.
    pub fn label(&self) -> String {
        if self.is_organisation.unwrap_or(false) {
            format!(
                "{} ({})",
                self.organisation_name.as_deref().unwrap_or_default(),
                self.organisation_abbrev.as_deref().unwrap_or_default()
            )
        } else {
            format!(
                "{} {}",
                self.first_name.as_deref().unwrap_or_default(),
                self.last_name.as_deref().unwrap_or_default()
            )
        }
    }
}

/// Author record submitted to the backend to create a new lookup entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAuthor {
    pub is_organisation: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub affiliation: Option<String>,
    pub organisation_name: Option<String>,
    pub organisation_abbrev: Option<String>,
    pub attribution: Option<String>,
}

impl NewAuthor {
    /// Create a person author.
    pub fn person(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        affiliation: impl Into<String>,
    ) -> Self {
        Self {
            is_organisation: false,
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            affiliation: Some(affiliation.into()),
            ..Default::default()
        }
    }

    /// Create an organisation author.
    pub fn organisation(name: impl Into<String>, abbrev: impl Into<String>) -> Self {
        Self {
            is_organisation: true,
            organisation_name: Some(name.into()),
            organisation_abbrev: Some(abbrev.into()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = Some(attribution.into());
        self
    }

    /// Whether all fields required for this kind of author are filled.
    ///
    /// Persons need first name, last name and affiliation; organisations
    /// need a name and an abbreviation.
    pub fn is_complete(&self) -> bool {
        let filled = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());
        if self.is_organisation {
            filled(&self.organisation_name) && filled(&self.organisation_abbrev)
        } else {
            filled(&self.first_name) && filled(&self.last_name) && filled(&self.affiliation)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub id: i64,
    pub short_title: String,
    pub title: String,
    #[serde(default)]
    pub by_attribution: Option<bool>,
    #[serde(default)]
    pub share_alike: Option<bool>,
    #[serde(default)]
    pub commercial_use: Option<bool>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub link: String,
}

/// Physical unit of a variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: i64,
    pub name: String,
    pub symbol: String,
}

/// Controlled vocabulary a keyword belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thesaurus {
    pub id: i64,
    pub uuid: String,
    pub name: String,
    pub title: String,
    pub organisation: String,
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub id: i64,
    pub uuid: String,
    pub value: String,
    /// Full hierarchical path, used as display label.
    pub path: String,
    #[serde(default)]
    pub children: Vec<String>,
    #[serde(rename = "thesaurusName", default)]
    pub thesaurus: Option<Thesaurus>,
}

/// Scientific variable a dataset measures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    pub unit: Unit,
    #[serde(default)]
    pub column_names: Vec<String>,
    #[serde(default)]
    pub keyword: Option<Keyword>,
}

impl Variable {
    /// Display label: `name (unit symbol)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.unit.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> Author {
        Author {
            id: 1,
            uuid: Some("a-1".to_string()),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            is_organisation: Some(false),
            affiliation: Some("Analytical Engines".to_string()),
            attribution: None,
            organisation_name: None,
            organisation_abbrev: None,
        }
    }

    #[test]
    fn person_label() {
        assert_eq!(person().label(), "Ada Lovelace");
    }

    #[test]
    fn organisation_label() {
        let author = Author {
            is_organisation: Some(true),
            organisation_name: Some("Karlsruhe Institute of Technology".to_string()),
            organisation_abbrev: Some("KIT".to_string()),
            ..person()
        };
        assert_eq!(author.label(), "Karlsruhe Institute of Technology (KIT)");
    }

    #[test]
    fn new_author_completeness() {
        assert!(NewAuthor::person("Ada", "Lovelace", "AE").is_complete());
        assert!(!NewAuthor::person("Ada", "", "AE").is_complete());
        assert!(NewAuthor::organisation("Hydrology Group", "HYD").is_complete());
        assert!(!NewAuthor::organisation("Hydrology Group", "").is_complete());
        assert!(!NewAuthor::default().is_complete());
    }

    #[test]
    fn author_deserializes_with_missing_optionals() {
        let author: Author = serde_json::from_str(r#"{"id": 7}"#).expect("deserialize author");
        assert_eq!(author.id, 7);
        assert_eq!(author.first_name, None);
    }
}
