//! CLI argument definitions for tickboard.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `gainers` | Top stocks by positive percent change |
//! | `losers` | Top stocks by negative percent change |
//! | `active` | Most active stocks by average volume |
//! | `search` | Substring search on symbol or name |
//! | `quote` | Look up one stock by exact symbol |
//! | `indices` | Current index levels |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |

use clap::{Parser, Subcommand, ValueEnum};

use tickboard_core::{DEFAULT_SEARCH_LIMIT, DEFAULT_TOP_LIMIT};

/// Tickboard - live-ish market tables from published CSV feeds.
#[derive(Debug, Parser)]
#[command(
    name = "tickboard",
    author,
    version,
    about = "Market data tables from published CSV feeds"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Top stocks by positive percent change.
    Gainers {
        /// Maximum number of results.
        #[arg(long, default_value_t = DEFAULT_TOP_LIMIT)]
        limit: usize,
    },
    /// Top stocks by negative percent change, most negative first.
    Losers {
        #[arg(long, default_value_t = DEFAULT_TOP_LIMIT)]
        limit: usize,
    },
    /// Most active stocks by average volume.
    Active {
        #[arg(long, default_value_t = DEFAULT_TOP_LIMIT)]
        limit: usize,
    },
    /// Case-insensitive substring search on symbol or name.
    Search {
        /// Search term.
        query: String,
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },
    /// Look up one stock by exact symbol.
    Quote {
        /// Stock symbol, e.g. RELIANCE.
        symbol: String,
    },
    /// Current index levels.
    Indices,
}
