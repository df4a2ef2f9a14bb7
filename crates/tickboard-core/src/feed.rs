//! Feed identities, configuration, and row-to-record mapping.
//!
//! Column order is a fixed contract with the published sheets; rows are
//! mapped by position. Missing trailing columns default to empty strings or
//! zero, and a row is retained only when it passes the inclusion gate:
//! non-empty key field and `current_price > 0`. Separator and blank rows at
//! feed boundaries fail the gate and are dropped silently.

use std::fmt::{Display, Formatter};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::csv::{data_lines, parse_number, split_line};
use crate::domain::{IndexRecord, StockRecord};

const DEFAULT_STOCKS_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTe_jvQxbvO9CPQfHWKWJNujBlPfojS8bVcCoVYCq7TGL5ovst6prSgGwt-cEdzFUoDZlBfCDkfAec9/pub?output=csv";
const DEFAULT_INDICES_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRmu-1ua2OhETfc4MIcuPCs7ZDH-SMRTh2QIr3IbD35OUB1NxDfIKkLL2osGMZ76kKlU5opx722TiBz/pub?output=csv";

const DEFAULT_FRESHNESS_WINDOW: Duration = Duration::from_secs(60);
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Identifies one of the two upstream CSV sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedKind {
    Stocks,
    Indices,
}

impl FeedKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stocks => "stocks",
            Self::Indices => "indices",
        }
    }
}

impl Display for FeedKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source URLs and cache policy for the feed service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub stocks_url: String,
    pub indices_url: String,
    /// Cached data older than this is refreshed on the next query.
    pub freshness_window: Duration,
    /// Bound on a single feed fetch; a timeout falls back to stale data.
    pub timeout_ms: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            stocks_url: DEFAULT_STOCKS_URL.to_string(),
            indices_url: DEFAULT_INDICES_URL.to_string(),
            freshness_window: DEFAULT_FRESHNESS_WINDOW,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl FeedConfig {
    pub fn url_for(&self, feed: FeedKind) -> &str {
        match feed {
            FeedKind::Stocks => &self.stocks_url,
            FeedKind::Indices => &self.indices_url,
        }
    }

    pub fn with_urls(mut self, stocks_url: impl Into<String>, indices_url: impl Into<String>) -> Self {
        self.stocks_url = stocks_url.into();
        self.indices_url = indices_url.into();
        self
    }

    pub fn with_freshness_window(mut self, window: Duration) -> Self {
        self.freshness_window = window;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

fn field(cols: &[String], index: usize) -> &str {
    cols.get(index).map(String::as_str).unwrap_or("")
}

fn number(cols: &[String], index: usize) -> f64 {
    parse_number(field(cols, index))
}

fn chart(cols: &[String], index: usize) -> Option<String> {
    let value = field(cols, index);
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Map one stocks-feed row by position; `None` when the inclusion gate fails.
fn stock_from_row(cols: &[String]) -> Option<StockRecord> {
    let record = StockRecord {
        symbol: field(cols, 0).to_string(),
        ticker: field(cols, 1).to_string(),
        name: field(cols, 2).to_string(),
        current_price: number(cols, 3),
        open: number(cols, 4),
        high: number(cols, 5),
        low: number(cols, 6),
        previous_close: number(cols, 7),
        change: number(cols, 8),
        change_percent: number(cols, 9),
        average_volume: number(cols, 10),
        week52_high: number(cols, 11),
        week52_low: number(cols, 12),
        market_cap: number(cols, 13),
        chart: chart(cols, 14),
    };
    if record.symbol.is_empty() || record.current_price <= 0.0 {
        return None;
    }
    Some(record)
}

/// Map one indices-feed row by position; `None` when the inclusion gate fails.
fn index_from_row(cols: &[String]) -> Option<IndexRecord> {
    let record = IndexRecord {
        name: field(cols, 0).to_string(),
        symbol: field(cols, 1).to_string(),
        current_price: number(cols, 2),
        open: number(cols, 3),
        high: number(cols, 4),
        low: number(cols, 5),
        previous_close: number(cols, 6),
        change: number(cols, 7),
        change_percent: number(cols, 8),
        week52_high: number(cols, 9),
        week52_low: number(cols, 10),
        chart: chart(cols, 11),
    };
    if record.name.is_empty() || record.current_price <= 0.0 {
        return None;
    }
    Some(record)
}

/// Parse a stocks feed body into gate-filtered records in source order.
pub fn parse_stocks(body: &str) -> Vec<StockRecord> {
    data_lines(body)
        .map(split_line)
        .filter_map(|cols| stock_from_row(&cols))
        .collect()
}

/// Parse an indices feed body into gate-filtered records in source order.
pub fn parse_indices(body: &str) -> Vec<IndexRecord> {
    data_lines(body)
        .map(split_line)
        .filter_map(|cols| index_from_row(&cols))
        .collect()
}
