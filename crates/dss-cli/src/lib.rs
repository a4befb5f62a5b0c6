//! CLI library components for the dataset submission front end.

pub mod author;
pub mod logging;
pub mod session;
pub mod settings;
