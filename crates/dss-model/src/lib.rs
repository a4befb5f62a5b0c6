//! Data model types for dataset metadata submissions.
//!
//! This crate provides the plain data types shared by the submission core,
//! the HTTP client and the command-line front end:
//!
//! - [`lookup`]: Denormalized references to backend lookup lists
//!   (authors, licenses, variables, keywords)
//! - [`metadata`]: The typed view of an in-progress metadata draft
//! - [`diagnostic`]: Validation diagnostics and their severity
//! - [`duration`]: ISO 8601 durations used for temporal resolutions
//!
//! # Drafts are always partial
//!
//! Every field of [`MetadataDraft`] is optional. Presence is a validation
//! concern, never a structural one, so a draft can be decoded from any
//! JSON object: fields that are missing or hold a value of the wrong shape
//! simply read as absent.

pub mod diagnostic;
pub mod duration;
pub mod lookup;
pub mod metadata;

mod decode;

pub use diagnostic::{Diagnostic, Severity};
pub use duration::{DurationError, TemporalResolution};
pub use lookup::{Author, Keyword, License, NewAuthor, Thesaurus, Unit, Variable};
pub use metadata::{
    DataSourceDraft, DataSourceType, Detail, DetailType, MetadataDraft, SpatialScale,
    TemporalScale,
};
