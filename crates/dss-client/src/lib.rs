//! HTTP backend client for dataset metadata submissions.
//!
//! Implements the collaborator seams of `dss-submit` against the backend
//! REST API:
//!
//! - `GET keywords|authors|licenses|variables` for the lookup lists
//! - `PUT author` to register a new author
//! - `POST data/preview` to list the columns of a data file
//! - `POST upload` to deliver metadata and file as a multipart form
//!
//! The backend address is passed in explicitly through [`BackendConfig`];
//! this crate never reads settings files or the environment.

mod client;
mod config;
mod error;
mod preview;

pub use client::HttpBackend;
pub use config::{BackendConfig, DEFAULT_BACKEND_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{ClientError, Result};
pub use preview::{DataColumn, DataPreview};
