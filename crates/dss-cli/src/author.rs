//! Author creation from the command line.

use anyhow::{Context, Result};
use clap::Args;
use dss_model::{Author, NewAuthor};
use dss_submit::{LookupCatalog, LookupProvider};
use tracing::info;

/// Fields of a new author. Persons are the default; `--organisation`
/// switches to the organisation fields.
#[derive(Debug, Clone, Default, Args)]
pub struct NewAuthorArgs {
    /// Create an organisation instead of a person.
    #[arg(long = "organisation")]
    pub organisation: bool,

    /// Person: first name.
    #[arg(long = "first-name", value_name = "NAME")]
    pub first_name: Option<String>,

    /// Person: last name.
    #[arg(long = "last-name", value_name = "NAME")]
    pub last_name: Option<String>,

    /// Person: affiliation.
    #[arg(long = "affiliation", value_name = "TEXT")]
    pub affiliation: Option<String>,

    /// Organisation: full name.
    #[arg(long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Organisation: abbreviation.
    #[arg(long = "abbrev", value_name = "ABBR")]
    pub abbrev: Option<String>,

    /// Optional attribution text.
    #[arg(long = "attribution", value_name = "TEXT")]
    pub attribution: Option<String>,
}

impl NewAuthorArgs {
    /// The request body; only the fields of the chosen kind are sent.
    pub fn to_new_author(&self) -> NewAuthor {
        let author = if self.organisation {
            NewAuthor {
                is_organisation: true,
                organisation_name: self.name.clone(),
                organisation_abbrev: self.abbrev.clone(),
                ..NewAuthor::default()
            }
        } else {
            NewAuthor {
                is_organisation: false,
                first_name: self.first_name.clone(),
                last_name: self.last_name.clone(),
                affiliation: self.affiliation.clone(),
                ..NewAuthor::default()
            }
        };
        match &self.attribution {
            Some(attribution) => author.with_attribution(attribution.as_str()),
            None => author,
        }
    }
}

/// Create an author through the provider and return the stored record.
pub fn create_author(provider: &impl LookupProvider, args: &NewAuthorArgs) -> Result<Author> {
    let mut catalog = LookupCatalog::load(provider).context("failed to load lookup lists")?;
    let author = catalog
        .add_author(provider, &args.to_new_author())
        .context("failed to create author")?;
    info!(id = author.id, "author created");
    Ok(author.clone())
}
