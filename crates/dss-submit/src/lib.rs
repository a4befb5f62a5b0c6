//! Dataset metadata submission core.
//!
//! This crate holds the state and policy behind a dataset submission:
//!
//! - **Draft** (`draft`): The always-partial metadata tree, path-addressed
//!   updates with auto-vivification, and the [`DraftStore`] that keeps the
//!   draft and its diagnostics consistent
//! - **Validation** (`validate`): A fixed, ordered list of independent rules
//!   and the [`ValidationEngine`] that derives diagnostics and validity
//! - **Gate** (`gate`): The [`SubmissionGate`] refusing invalid drafts and
//!   delegating valid ones to an injected [`Transport`]
//! - **Lookups** (`lookup`): The [`LookupProvider`] seam and a cached
//!   [`LookupCatalog`] of authors, licenses, variables and keywords
//!
//! # Error Handling
//!
//! Validation problems are never errors: they are [`dss_model::Diagnostic`]
//! values returned from evaluation. Only submission and lookup operations
//! return `Result`, using the `thiserror` types in [`error`].
//!
//! # Example
//!
//! ```ignore
//! use dss_submit::{DraftStore, SubmissionGate};
//! use serde_json::json;
//!
//! let mut store = DraftStore::new();
//! store.update("title", json!("River discharge 2020"));
//! store.update("dataSource.spatialScale.resolutionMeters", json!(250));
//!
//! for diagnostic in store.diagnostics() {
//!     println!("[{}] {}", diagnostic.severity, diagnostic.message);
//! }
//!
//! let receipt = SubmissionGate::new().submit(&mut store, &transport)?;
//! ```

pub mod draft;
pub mod error;
pub mod gate;
pub mod lookup;
pub mod validate;

// Re-export unified error types
pub use error::{LookupError, Result, SubmitError, TransportError};

// Re-export commonly used types
pub use draft::{Attachment, DraftStore, DraftTree, Field, apply};

pub use validate::{
    Evaluation, FnRule, Issue, Readiness, Rule, ValidationEngine, evaluate, standard_rules,
};

pub use gate::{
    ReplyStatus, SubmissionGate, SubmissionPayload, SubmissionReceipt, Transport, TransportReply,
};

pub use lookup::{LookupCatalog, LookupProvider};
