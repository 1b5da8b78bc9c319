//! CLI argument parsing for docket
//!
//! Global flags: --store, --format, --quiet, --verbose, --log-level, --log-json

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use docket_core::rank::SearchMode;
pub use docket_core::format::OutputFormat;
use parse::{parse_format, parse_mode};

/// Docket - relevance-ranked search over a file-backed post store
#[derive(Parser, Debug)]
#[command(name = "docket")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Store root containing posts/ and an optional posts-manifest.json
    #[arg(long, global = true, env = "DOCKET_STORE")]
    pub store: Option<PathBuf>,

    /// Output format (human, json, or records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank all posts by relevance against a text query and/or tags
    Search {
        /// Free-text query
        query: Option<String>,

        /// Selected tag (repeatable)
        #[arg(long, short)]
        tag: Vec<String>,

        /// Search mode hint; the effective mode is derived from which
        /// query inputs are present
        #[arg(long, value_parser = parse_mode)]
        mode: Option<SearchMode>,
    },

    /// List posts ordered by publication date, newest first
    List {
        /// Filter by tag (case-insensitive exact match)
        #[arg(long, short)]
        tag: Option<String>,
    },

    /// List unique tags across all posts
    Tags,

    /// Show a single post
    Show {
        /// Post id (slug)
        id: String,
    },
}
