//! CLI argument definitions for the submission front end.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use dss_cli::author::NewAuthorArgs;
use dss_model::DetailType;

#[derive(Parser)]
#[command(
    name = "dss",
    version,
    about = "Dataset Submission Studio - Prepare and upload dataset metadata",
    long_about = "Prepare dataset metadata step by step and upload it to the backend.\n\n\
                  The draft is kept in a session file between invocations and is\n\
                  validated after every change. Only drafts without errors can be\n\
                  submitted; warnings are shown but never block."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Session file holding the draft.
    #[arg(long = "draft", value_name = "PATH", default_value = "draft.json", global = true)]
    pub draft: PathBuf,

    /// Backend base URL (overrides settings and DSS_BACKEND_URL).
    #[arg(long = "backend", value_name = "URL", global = true)]
    pub backend: Option<String>,

    /// Settings file (default: platform config directory).
    #[arg(long = "settings", value_name = "PATH", global = true)]
    pub settings: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the draft and its diagnostics (exits 1 while the draft is invalid).
    Show(ShowArgs),

    /// Set a field by dotted path, e.g. `dataSource.spatialScale.resolutionMeters 250`.
    ///
    /// VALUE is parsed as JSON; anything that is not valid JSON is stored as a string.
    Set {
        #[arg(value_name = "PATH")]
        path: String,
        #[arg(value_name = "VALUE")]
        value: String,
    },

    /// Remove a field by dotted path.
    Unset {
        #[arg(value_name = "PATH")]
        path: String,
    },

    /// Discard the draft and its attachment.
    Reset,

    /// Attach a data file to the submission.
    Attach {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Remove the attached data file.
    Detach,

    /// Add or remove free-form details.
    #[command(subcommand)]
    Detail(DetailCommand),

    /// List a lookup list from the backend.
    Lookups {
        #[arg(value_enum)]
        kind: LookupKind,

        /// Only keywords containing this term (case-insensitive).
        #[arg(long = "search", value_name = "TERM")]
        search: Option<String>,
    },

    /// Register new lookup entries with the backend.
    #[command(subcommand)]
    Author(AuthorCommand),

    /// Store a lookup entry in the draft by id.
    Pick {
        #[arg(value_enum)]
        target: PickTarget,
        #[arg(value_name = "ID")]
        id: i64,
    },

    /// Ask the backend which columns the attached file contains.
    Preview,

    /// Upload the draft and attachment.
    Submit,

    /// Show or change settings.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args)]
pub struct ShowArgs {
    /// Print the draft as JSON instead of a summary.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum DetailCommand {
    /// Add a detail, replacing one with the same name.
    Add {
        #[arg(value_name = "NAME")]
        name: String,
        #[arg(value_name = "VALUE")]
        value: String,
        #[arg(long = "type", value_enum, default_value = "string")]
        detail_type: DetailTypeArg,
    },
    /// Remove a detail by name.
    Remove {
        #[arg(value_name = "NAME")]
        name: String,
    },
}

#[derive(Subcommand)]
pub enum AuthorCommand {
    /// Create an author, e.g. `author add --first-name Ada --last-name Lovelace --affiliation KIT`
    /// or `author add --organisation --name "Hydrology Group" --abbrev HYD`.
    Add(NewAuthorArgs),
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the settings file location and the effective backend.
    Show,
    /// Store the backend URL in the settings file.
    SetBackend {
        #[arg(value_name = "URL")]
        url: String,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LookupKind {
    Authors,
    Licenses,
    Variables,
    Keywords,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PickTarget {
    FirstAuthor,
    CoAuthor,
    License,
    Variable,
    Keyword,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DetailTypeArg {
    String,
    Date,
    Float,
    Bool,
}

impl From<DetailTypeArg> for DetailType {
    fn from(arg: DetailTypeArg) -> Self {
        match arg {
            DetailTypeArg::String => Self::String,
            DetailTypeArg::Date => Self::Date,
            DetailTypeArg::Float => Self::Float,
            DetailTypeArg::Bool => Self::Bool,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
