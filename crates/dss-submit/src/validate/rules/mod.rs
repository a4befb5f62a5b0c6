//! Diagnostic rules.
//!
//! Each rule is independent and pure: it looks at the typed draft and
//! either raises one [`Issue`] or nothing. The standard list is ordered;
//! order only affects how diagnostics are displayed.

mod data_source;
mod required;
mod spatial;
mod temporal;

use std::fmt;

use dss_model::MetadataDraft;

use super::issue::Issue;

/// A single check over the draft.
pub trait Rule: Send + Sync {
    /// Stable identifier, shared with the diagnostics this rule raises.
    fn id(&self) -> &'static str;

    /// Short description for listings.
    fn description(&self) -> &'static str;

    fn check(&self, draft: &MetadataDraft) -> Option<Issue>;
}

/// Rule backed by a plain check function.
#[derive(Clone, Copy)]
pub struct FnRule {
    id: &'static str,
    description: &'static str,
    check: fn(&MetadataDraft) -> Option<Issue>,
}

impl FnRule {
    pub const fn new(
        id: &'static str,
        description: &'static str,
        check: fn(&MetadataDraft) -> Option<Issue>,
    ) -> Self {
        Self {
            id,
            description,
            check,
        }
    }
}

impl Rule for FnRule {
    fn id(&self) -> &'static str {
        self.id
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn check(&self, draft: &MetadataDraft) -> Option<Issue> {
        (self.check)(draft)
    }
}

impl fmt::Debug for FnRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule").field("id", &self.id).finish()
    }
}

/// The standard rule list, in display order.
pub fn standard_rules() -> Vec<Box<dyn Rule>> {
    required::RULES
        .iter()
        .chain(data_source::RULES.iter())
        .chain(spatial::RULES.iter())
        .chain(temporal::RULES.iter())
        .map(|rule| Box::new(*rule) as Box<dyn Rule>)
        .collect()
}

/// Whether an optional text value is missing or empty.
fn is_empty_text(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_rules_keep_display_order() {
        let ids: Vec<&str> = standard_rules().iter().map(|rule| rule.id()).collect();
        assert_eq!(
            ids,
            [
                "title-required",
                "abstract-required",
                "first-author-required",
                "license-required",
                "variable-required",
                "data-source-missing",
                "scale-missing",
                "data-columns-missing",
                "spatial-dimensions-missing",
                "spatial-dimensions-count",
                "spatial-extent-missing",
                "spatial-resolution-missing",
                "temporal-dimensions-missing",
                "temporal-dimensions-count",
                "temporal-extent-missing",
                "temporal-resolution-missing",
            ]
        );
    }

    #[test]
    fn rule_ids_match_issue_codes() {
        let mut draft = MetadataDraft::default();
        for rule in standard_rules() {
            if let Some(issue) = rule.check(&draft) {
                assert_eq!(rule.id(), issue.code());
            }
        }
        draft.data_source = Some(Default::default());
        for rule in standard_rules() {
            if let Some(issue) = rule.check(&draft) {
                assert_eq!(rule.id(), issue.code());
            }
        }
    }

    #[test]
    fn empty_text() {
        assert!(is_empty_text(None));
        assert!(is_empty_text(Some("")));
        assert!(!is_empty_text(Some("  \t")));
        assert!(!is_empty_text(Some(" x ")));
    }
}
