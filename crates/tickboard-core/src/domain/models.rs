use serde::{Deserialize, Serialize};

use crate::UtcDateTime;

/// One instrument row from the stocks feed.
///
/// All numeric fields default to `0.0` when the upstream cell is empty or
/// unparseable; only an empty `symbol` or a non-positive `current_price`
/// excludes a row from the feed (see [`crate::feed`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    /// Unique key within one fetch.
    pub symbol: String,
    pub ticker: String,
    pub name: String,
    pub current_price: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub previous_close: f64,
    pub change: f64,
    pub change_percent: f64,
    pub average_volume: f64,
    pub week52_high: f64,
    pub week52_low: f64,
    pub market_cap: f64,
    /// Upstream chart reference, when the feed publishes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<String>,
}

/// One market index row from the indices feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexRecord {
    /// Unique key within one fetch.
    pub name: String,
    pub symbol: String,
    pub current_price: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub previous_close: f64,
    pub change: f64,
    pub change_percent: f64,
    pub week52_high: f64,
    pub week52_low: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<String>,
}

/// A record sequence together with its load state.
///
/// `loaded` distinguishes "no successful fetch has happened yet" from
/// "loaded, but the result is empty" so consumers can render a loading
/// placeholder rather than an empty table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedSnapshot<T> {
    pub records: Vec<T>,
    pub loaded: bool,
    /// Wall-clock stamp of the last successful fetch, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<UtcDateTime>,
}

impl<T> FeedSnapshot<T> {
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            loaded: false,
            as_of: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        !self.loaded
    }
}
