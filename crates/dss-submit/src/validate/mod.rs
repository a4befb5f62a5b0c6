//! Draft validation.
//!
//! The engine runs every rule against the typed draft, collects the issues
//! that fire and derives validity: a draft is valid when no collected
//! diagnostic is an error. Warnings are surfaced but never block.
//!
//! # Example
//!
//! ```ignore
//! use dss_submit::{ValidationEngine, Readiness};
//!
//! let evaluation = ValidationEngine::default().evaluate(&draft);
//! match evaluation.readiness() {
//!     Readiness::Invalid => println!("{} error(s)", evaluation.error_count()),
//!     Readiness::ReadyWithWarnings => println!("ready, please review warnings"),
//!     Readiness::Ready => println!("ready"),
//! }
//! ```

mod issue;
mod rules;

use std::fmt;
use std::sync::Arc;

use dss_model::{Diagnostic, MetadataDraft};
use serde::{Deserialize, Serialize};

pub use issue::Issue;
pub use rules::{FnRule, Rule, standard_rules};

/// Result of evaluating the rules against one draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    /// Diagnostics in rule order.
    pub diagnostics: Vec<Diagnostic>,
    /// True iff no diagnostic is an error.
    pub is_valid: bool,
}

/// No diagnostics, therefore valid.
impl Default for Evaluation {
    fn default() -> Self {
        Self::from_diagnostics(Vec::new())
    }
}

impl Evaluation {
    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        let is_valid = !diagnostics.iter().any(Diagnostic::is_error);
        Self {
            diagnostics,
            is_valid,
        }
    }

    /// Count of errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Count of warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| !d.is_error()).count()
    }

    pub fn has_warnings(&self) -> bool {
        self.warning_count() > 0
    }

    pub fn readiness(&self) -> Readiness {
        if !self.is_valid {
            Readiness::Invalid
        } else if self.has_warnings() {
            Readiness::ReadyWithWarnings
        } else {
            Readiness::Ready
        }
    }

    /// Errors first, then warnings; rule order is kept within each group.
    pub fn sorted_by_severity(&self) -> Vec<&Diagnostic> {
        let mut diagnostics: Vec<_> = self.diagnostics.iter().collect();
        diagnostics.sort_by_key(|d| !d.is_error());
        diagnostics
    }
}

/// Overall submission readiness of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Readiness {
    /// At least one error; submission is refused.
    Invalid,
    /// No errors, but warnings worth a look.
    ReadyWithWarnings,
    Ready,
}

impl Readiness {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Invalid => "The metadata is invalid. Fix the errors below before uploading.",
            Self::ReadyWithWarnings => {
                "The metadata can be uploaded, but please review the warnings below."
            }
            Self::Ready => "The metadata is valid and ready to be uploaded.",
        }
    }
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Runs an ordered rule list against drafts.
#[derive(Clone)]
pub struct ValidationEngine {
    rules: Arc<[Box<dyn Rule>]>,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_rules(standard_rules())
    }
}

impl ValidationEngine {
    /// Build an engine from a custom rule list. Order is display order.
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self {
            rules: rules.into(),
        }
    }

    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    pub fn evaluate(&self, draft: &MetadataDraft) -> Evaluation {
        let diagnostics = self
            .rules
            .iter()
            .filter_map(|rule| rule.check(draft))
            .map(Diagnostic::from)
            .collect();
        Evaluation::from_diagnostics(diagnostics)
    }
}

impl fmt::Debug for ValidationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<&str> = self.rules.iter().map(|rule| rule.id()).collect();
        f.debug_struct("ValidationEngine")
            .field("rules", &ids)
            .finish()
    }
}

/// Evaluate a draft with the standard rules.
pub fn evaluate(draft: &MetadataDraft) -> Evaluation {
    ValidationEngine::default().evaluate(draft)
}

#[cfg(test)]
mod tests {
    use dss_model::Severity;

    use super::*;

    #[test]
    fn empty_draft_is_invalid() {
        let evaluation = evaluate(&MetadataDraft::default());
        assert!(!evaluation.is_valid);
        assert_eq!(evaluation.error_count(), 5);
        assert_eq!(evaluation.warning_count(), 1);
        assert_eq!(evaluation.readiness(), Readiness::Invalid);
    }

    #[test]
    fn warnings_do_not_block() {
        let evaluation = Evaluation::from_diagnostics(vec![Diagnostic::new(
            "data-source-missing",
            Severity::Warning,
            "No data source",
        )]);
        assert!(evaluation.is_valid);
        assert_eq!(evaluation.readiness(), Readiness::ReadyWithWarnings);
        assert_eq!(
            Evaluation::from_diagnostics(Vec::new()).readiness(),
            Readiness::Ready
        );
    }

    #[test]
    fn default_evaluation_is_valid() {
        let evaluation = Evaluation::default();
        assert!(evaluation.diagnostics.is_empty());
        assert!(evaluation.is_valid);
        assert_eq!(evaluation.readiness(), Readiness::Ready);
    }

    #[test]
    fn custom_rules_replace_standard_list() {
        fn always(_: &MetadataDraft) -> Option<Issue> {
            Some(Issue::ScaleMissing)
        }
        let engine = ValidationEngine::with_rules(vec![Box::new(FnRule::new(
            "scale-missing",
            "always fires",
            always,
        ))]);
        let evaluation = engine.evaluate(&MetadataDraft::default());
        assert_eq!(evaluation.diagnostics.len(), 1);
        assert!(evaluation.is_valid);
        assert_eq!(engine.rules().count(), 1);
    }

    #[test]
    fn sorted_by_severity_puts_errors_first() {
        let evaluation = Evaluation::from_diagnostics(vec![
            Diagnostic::new("w", Severity::Warning, "w"),
            Diagnostic::new("e", Severity::Error, "e"),
        ]);
        let codes: Vec<&str> = evaluation
            .sorted_by_severity()
            .iter()
            .map(|d| d.code.as_str())
            .collect();
        assert_eq!(codes, ["e", "w"]);
    }
}
