//! Feed service: cache orchestration and derived queries.
//!
//! One [`MarketDataService`] owns the cached sequence for each feed and is
//! the only writer to it. Every query ensures freshness first, then applies
//! a pure transform over the current sequence; failures degrade to the last
//! good data (or an empty sequence before the first success) and are logged,
//! never returned.

use std::cmp::Ordering;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::cache::FeedCell;
use crate::clock::{Clock, SystemClock};
use crate::domain::{FeedSnapshot, IndexRecord, StockRecord};
use crate::error::FeedError;
use crate::feed::{parse_indices, parse_stocks, FeedConfig, FeedKind};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};

/// Default result bound for [`MarketDataService::search_stocks`].
pub const DEFAULT_SEARCH_LIMIT: usize = 20;
/// Default result bound for the top-N queries.
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Process-wide market data access layer.
///
/// Construct once at startup and share (e.g. behind an `Arc`); all methods
/// take `&self`. The transport and clock are injected so tests control
/// fetch outcomes and time.
pub struct MarketDataService {
    config: FeedConfig,
    http: Arc<dyn HttpClient>,
    clock: Arc<dyn Clock>,
    stocks: RwLock<FeedCell<StockRecord>>,
    indices: RwLock<FeedCell<IndexRecord>>,
    // Serialize refreshes per feed so racing callers trigger one fetch.
    stocks_refresh: Mutex<()>,
    indices_refresh: Mutex<()>,
}

impl MarketDataService {
    /// Service wired for production: reqwest transport, system clock,
    /// default feed URLs and 60s freshness window.
    pub fn new() -> Self {
        Self::with_parts(
            FeedConfig::default(),
            Arc::new(ReqwestHttpClient::new()),
            Arc::new(SystemClock),
        )
    }

    pub fn with_parts(config: FeedConfig, http: Arc<dyn HttpClient>, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            http,
            clock,
            stocks: RwLock::new(FeedCell::new()),
            indices: RwLock::new(FeedCell::new()),
            stocks_refresh: Mutex::new(()),
            indices_refresh: Mutex::new(()),
        }
    }

    /// Current stocks sequence, refreshed if stale.
    pub async fn stocks(&self) -> Vec<StockRecord> {
        self.stocks_snapshot().await.records
    }

    /// Current indices sequence, refreshed if stale.
    pub async fn indices(&self) -> Vec<IndexRecord> {
        self.indices_snapshot().await.records
    }

    /// Stocks sequence plus load state, for consumers that render a loading
    /// placeholder before the first successful fetch.
    pub async fn stocks_snapshot(&self) -> FeedSnapshot<StockRecord> {
        self.ensure_fresh(FeedKind::Stocks, &self.stocks, &self.stocks_refresh, parse_stocks)
            .await
    }

    /// Indices sequence plus load state.
    pub async fn indices_snapshot(&self) -> FeedSnapshot<IndexRecord> {
        self.ensure_fresh(FeedKind::Indices, &self.indices, &self.indices_refresh, parse_indices)
            .await
    }

    /// Case-insensitive substring search on symbol or name, in source
    /// order, truncated to `limit`.
    pub async fn search_stocks(&self, query: &str, limit: usize) -> Vec<StockRecord> {
        let term = query.to_lowercase();
        let mut matches: Vec<StockRecord> = self
            .stocks()
            .await
            .into_iter()
            .filter(|stock| {
                stock.symbol.to_lowercase().contains(&term)
                    || stock.name.to_lowercase().contains(&term)
            })
            .collect();
        matches.truncate(limit);
        matches
    }

    /// Exact-symbol lookup; `None` when no record matches.
    pub async fn stock_by_symbol(&self, symbol: &str) -> Option<StockRecord> {
        self.stocks()
            .await
            .into_iter()
            .find(|stock| stock.symbol == symbol)
    }

    /// Exact index-name lookup; `None` when no record matches.
    pub async fn index_by_name(&self, name: &str) -> Option<IndexRecord> {
        self.indices().await.into_iter().find(|index| index.name == name)
    }

    /// Stocks with positive percent change, highest first.
    pub async fn top_gainers(&self, limit: usize) -> Vec<StockRecord> {
        let mut gainers: Vec<StockRecord> = self
            .stocks()
            .await
            .into_iter()
            .filter(|stock| stock.change_percent > 0.0)
            .collect();
        gainers.sort_by(|a, b| descending(a.change_percent, b.change_percent));
        gainers.truncate(limit);
        gainers
    }

    /// Stocks with negative percent change, most negative first.
    pub async fn top_losers(&self, limit: usize) -> Vec<StockRecord> {
        let mut losers: Vec<StockRecord> = self
            .stocks()
            .await
            .into_iter()
            .filter(|stock| stock.change_percent < 0.0)
            .collect();
        losers.sort_by(|a, b| ascending(a.change_percent, b.change_percent));
        losers.truncate(limit);
        losers
    }

    /// All stocks ordered by average volume, highest first.
    pub async fn most_active(&self, limit: usize) -> Vec<StockRecord> {
        let mut active = self.stocks().await;
        active.sort_by(|a, b| descending(a.average_volume, b.average_volume));
        active.truncate(limit);
        active
    }

    async fn ensure_fresh<T: Clone>(
        &self,
        feed: FeedKind,
        cell: &RwLock<FeedCell<T>>,
        refresh: &Mutex<()>,
        parse: fn(&str) -> Vec<T>,
    ) -> FeedSnapshot<T> {
        {
            let cell = cell.read().await;
            if let Some(records) = cell.fresh(self.clock.now(), self.config.freshness_window) {
                return FeedSnapshot {
                    records: records.as_ref().clone(),
                    loaded: true,
                    as_of: cell.as_of(),
                };
            }
        }

        let _refreshing = refresh.lock().await;

        // Re-check: a racing caller may have refreshed while we waited.
        {
            let cell = cell.read().await;
            if let Some(records) = cell.fresh(self.clock.now(), self.config.freshness_window) {
                return FeedSnapshot {
                    records: records.as_ref().clone(),
                    loaded: true,
                    as_of: cell.as_of(),
                };
            }
        }

        match self.fetch_body(feed).await {
            Ok(body) => {
                let records = parse(&body);
                tracing::debug!(feed = %feed, count = records.len(), "feed refreshed");
                let mut cell = cell.write().await;
                cell.replace(records, self.clock.now());
                FeedSnapshot {
                    records: cell.last_good().as_ref().clone(),
                    loaded: true,
                    as_of: cell.as_of(),
                }
            }
            Err(error) => {
                // Keep the previous sequence and leave the staleness clock
                // untouched so the next caller retries immediately.
                tracing::warn!(feed = %feed, error = %error, "feed refresh failed, serving last good data");
                let cell = cell.read().await;
                FeedSnapshot {
                    records: cell.last_good().as_ref().clone(),
                    loaded: cell.loaded(),
                    as_of: cell.as_of(),
                }
            }
        }
    }

    async fn fetch_body(&self, feed: FeedKind) -> Result<String, FeedError> {
        let request =
            HttpRequest::get(self.config.url_for(feed)).with_timeout_ms(self.config.timeout_ms);
        let response = self
            .http
            .execute(request)
            .await
            .map_err(|error| FeedError::transport(feed, error.message()))?;

        if !response.is_success() {
            return Err(FeedError::status(feed, response.status));
        }
        Ok(response.body)
    }
}

impl Default for MarketDataService {
    fn default() -> Self {
        Self::new()
    }
}

// Stable comparators: ties keep source order.
fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

fn ascending(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
