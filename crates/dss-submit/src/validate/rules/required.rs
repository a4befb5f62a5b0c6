//! Required descriptive fields and lookup references.

use dss_model::MetadataDraft;

use super::{FnRule, is_empty_text};
use crate::validate::issue::Issue;

pub(super) const RULES: [FnRule; 5] = [
    FnRule::new("title-required", "Dataset has a title", title),
    FnRule::new("abstract-required", "Dataset has an abstract", abstract_text),
    FnRule::new("first-author-required", "Dataset names a first author", first_author),
    FnRule::new("license-required", "Dataset has a license", license),
    FnRule::new("variable-required", "Dataset defines a variable", variable),
];

fn title(draft: &MetadataDraft) -> Option<Issue> {
    is_empty_text(draft.title.as_deref()).then_some(Issue::TitleMissing)
}

fn abstract_text(draft: &MetadataDraft) -> Option<Issue> {
    is_empty_text(draft.abstract_text.as_deref()).then_some(Issue::AbstractMissing)
}

fn first_author(draft: &MetadataDraft) -> Option<Issue> {
    draft.first_author.is_none().then_some(Issue::FirstAuthorMissing)
}

fn license(draft: &MetadataDraft) -> Option<Issue> {
    draft.license.is_none().then_some(Issue::LicenseMissing)
}

fn variable(draft: &MetadataDraft) -> Option<Issue> {
    draft.variable.is_none().then_some(Issue::VariableMissing)
}

#[cfg(test)]
mod tests {
    use dss_model::{Author, License, Unit, Variable};

    use super::*;

    #[test]
    fn empty_title_is_missing() {
        let draft = MetadataDraft {
            title: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(title(&draft), Some(Issue::TitleMissing));
    }

    #[test]
    fn whitespace_text_counts_as_filled() {
        let draft = MetadataDraft {
            title: Some("   ".to_string()),
            abstract_text: Some(" ".to_string()),
            ..Default::default()
        };
        assert_eq!(title(&draft), None);
        assert_eq!(abstract_text(&draft), None);
    }

    #[test]
    fn filled_text_passes() {
        let draft = MetadataDraft {
            title: Some("Runoff".to_string()),
            abstract_text: Some("Daily discharge".to_string()),
            ..Default::default()
        };
        assert_eq!(title(&draft), None);
        assert_eq!(abstract_text(&draft), None);
    }

    #[test]
    fn references_pass_when_present() {
        let draft = MetadataDraft {
            first_author: Some(Author {
                id: 1,
                uuid: None,
                first_name: Some("Ada".to_string()),
                last_name: Some("Byron".to_string()),
                is_organisation: Some(false),
                affiliation: None,
                attribution: None,
                organisation_name: None,
                organisation_abbrev: None,
            }),
            license: Some(License {
                id: 2,
                short_title: "CC BY 4.0".to_string(),
                title: "Creative Commons Attribution 4.0".to_string(),
                by_attribution: Some(true),
                share_alike: Some(false),
                commercial_use: Some(true),
                summary: String::new(),
                link: String::new(),
            }),
            variable: Some(Variable {
                id: 3,
                name: "discharge".to_string(),
                symbol: "Q".to_string(),
                unit: Unit {
                    id: 4,
                    name: "cubic metre per second".to_string(),
                    symbol: "m3/s".to_string(),
                },
                column_names: Vec::new(),
                keyword: None,
            }),
            ..Default::default()
        };
        assert_eq!(first_author(&draft), None);
        assert_eq!(license(&draft), None);
        assert_eq!(variable(&draft), None);
    }

    #[test]
    fn missing_references_are_reported() {
        let draft = MetadataDraft::default();
        assert_eq!(first_author(&draft), Some(Issue::FirstAuthorMissing));
        assert_eq!(license(&draft), Some(Issue::LicenseMissing));
        assert_eq!(variable(&draft), Some(Issue::VariableMissing));
    }
}
