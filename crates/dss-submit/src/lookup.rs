//! Lookup lists.
//!
//! Authors, licenses, variables and keywords are owned by the backend.
//! [`LookupProvider`] is the seam to fetch them; [`LookupCatalog`] caches
//! the four lists and resolves ids into the denormalized references a
//! draft stores.

use dss_model::{Author, Keyword, License, NewAuthor, Variable};
use tracing::{debug, info};

use crate::error::LookupError;

/// Source of the backend lookup lists.
pub trait LookupProvider {
    fn authors(&self) -> Result<Vec<Author>, LookupError>;
    fn licenses(&self) -> Result<Vec<License>, LookupError>;
    fn variables(&self) -> Result<Vec<Variable>, LookupError>;
    fn keywords(&self) -> Result<Vec<Keyword>, LookupError>;

    /// Register a new author and return the stored record.
    fn create_author(&self, author: &NewAuthor) -> Result<Author, LookupError>;
}

/// Cached copy of the lookup lists.
#[derive(Debug, Clone, Default)]
pub struct LookupCatalog {
    authors: Vec<Author>,
    licenses: Vec<License>,
    variables: Vec<Variable>,
    keywords: Vec<Keyword>,
}

impl LookupCatalog {
    /// Fetch all four lists.
    pub fn load(provider: &impl LookupProvider) -> Result<Self, LookupError> {
        let mut catalog = Self::default();
        catalog.refresh(provider)?;
        Ok(catalog)
    }

    /// Reload all four lists. The cache is only replaced when every list
    /// loaded.
    pub fn refresh(&mut self, provider: &impl LookupProvider) -> Result<(), LookupError> {
        let authors = provider.authors()?;
        let licenses = provider.licenses()?;
        let variables = provider.variables()?;
        let keywords = provider.keywords()?;
        info!(
            authors = authors.len(),
            licenses = licenses.len(),
            variables = variables.len(),
            keywords = keywords.len(),
            "lookup lists loaded"
        );

        self.authors = authors;
        self.licenses = licenses;
        self.variables = variables;
        self.keywords = keywords;
        Ok(())
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn licenses(&self) -> &[License] {
        &self.licenses
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    pub fn find_author(&self, id: i64) -> Option<&Author> {
        self.authors.iter().find(|a| a.id == id)
    }

    pub fn find_license(&self, id: i64) -> Option<&License> {
        self.licenses.iter().find(|l| l.id == id)
    }

    pub fn find_variable(&self, id: i64) -> Option<&Variable> {
        self.variables.iter().find(|v| v.id == id)
    }

    pub fn find_keyword(&self, id: i64) -> Option<&Keyword> {
        self.keywords.iter().find(|k| k.id == id)
    }

    /// Keywords whose value contains `term`, ignoring case. An empty term
    /// matches every keyword.
    pub fn search_keywords(&self, term: &str) -> Vec<&Keyword> {
        let term = term.trim().to_lowercase();
        self.keywords
            .iter()
            .filter(|k| k.value.to_lowercase().contains(&term))
            .collect()
    }

    /// Authors that may be picked as co-authors.
    pub fn co_author_candidates(&self, first_author: Option<&Author>) -> Vec<&Author> {
        let excluded = first_author.map(|a| a.id);
        self.authors
            .iter()
            .filter(|a| Some(a.id) != excluded)
            .collect()
    }

    /// Create an author through the provider and add it to the cache.
    pub fn add_author(
        &mut self,
        provider: &impl LookupProvider,
        author: &NewAuthor,
    ) -> Result<&Author, LookupError> {
        if !author.is_complete() {
            return Err(LookupError::IncompleteAuthor(if author.is_organisation {
                "organisations need a name and an abbreviation"
            } else {
                "persons need a first name, a last name and an affiliation"
            }));
        }

        let created = provider.create_author(author)?;
        debug!(id = created.id, label = %created.label(), "author created");
        self.authors.retain(|a| a.id != created.id);
        let index = self.authors.len();
        self.authors.push(created);
        Ok(&self.authors[index])
    }
}

#[cfg(test)]
mod tests {
    use dss_model::{Thesaurus, Unit};

    use super::*;

    struct Fixed;

    fn author(id: i64, first: &str) -> Author {
        Author {
            id,
            uuid: None,
            first_name: Some(first.to_string()),
            last_name: Some("Tester".to_string()),
            is_organisation: Some(false),
            affiliation: Some("Lab".to_string()),
            attribution: None,
            organisation_name: None,
            organisation_abbrev: None,
        }
    }

    fn keyword(id: i64, value: &str) -> Keyword {
        Keyword {
            id,
            uuid: format!("k-{id}"),
            value: value.to_string(),
            path: format!("EARTH SCIENCE > {value}"),
            children: Vec::new(),
            thesaurus: Some(Thesaurus {
                id: 1,
                uuid: "t-1".to_string(),
                name: "GCMD".to_string(),
                title: "GCMD Science Keywords".to_string(),
                organisation: "NASA".to_string(),
                url: String::new(),
                description: String::new(),
            }),
        }
    }

    impl LookupProvider for Fixed {
        fn authors(&self) -> Result<Vec<Author>, LookupError> {
            Ok(vec![author(1, "Ada"), author(2, "Grace")])
        }

        fn licenses(&self) -> Result<Vec<License>, LookupError> {
            Ok(Vec::new())
        }

        fn variables(&self) -> Result<Vec<Variable>, LookupError> {
            Ok(vec![Variable {
                id: 5,
                name: "discharge".to_string(),
                symbol: "Q".to_string(),
                unit: Unit {
                    id: 1,
                    name: "cubic metre per second".to_string(),
                    symbol: "m3/s".to_string(),
                },
                column_names: Vec::new(),
                keyword: None,
            }])
        }

        fn keywords(&self) -> Result<Vec<Keyword>, LookupError> {
            Ok(vec![keyword(10, "RIVER DISCHARGE"), keyword(11, "SOIL MOISTURE")])
        }

        fn create_author(&self, _author: &NewAuthor) -> Result<Author, LookupError> {
            Ok(author(3, "Edsger"))
        }
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let catalog = LookupCatalog::load(&Fixed).expect("load catalog");
        let found: Vec<i64> = catalog.search_keywords("discharge").iter().map(|k| k.id).collect();
        assert_eq!(found, [10]);
        assert_eq!(catalog.search_keywords("").len(), 2);
    }

    #[test]
    fn co_authors_exclude_first_author() {
        let catalog = LookupCatalog::load(&Fixed).expect("load catalog");
        let first = catalog.find_author(1).cloned();
        let ids: Vec<i64> = catalog
            .co_author_candidates(first.as_ref())
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, [2]);
        assert_eq!(catalog.co_author_candidates(None).len(), 2);
    }

    #[test]
    fn incomplete_author_is_refused() {
        let mut catalog = LookupCatalog::load(&Fixed).expect("load catalog");
        let error = catalog
            .add_author(&Fixed, &NewAuthor::organisation("Hydrology", ""))
            .expect_err("incomplete author");
        assert!(matches!(error, LookupError::IncompleteAuthor(_)));

        let created = catalog
            .add_author(&Fixed, &NewAuthor::person("Edsger", "Tester", "Lab"))
            .expect("create author");
        assert_eq!(created.id, 3);
        assert!(catalog.find_author(3).is_some());
    }
}
