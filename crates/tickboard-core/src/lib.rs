//! # Tickboard Core
//!
//! Market data access layer for the tickboard dashboard: fetches two
//! periodically-republished CSV feeds (stocks, indices), parses them
//! defensively, and serves any number of consumers through a time-boxed
//! cache with derived-query helpers.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | Time-boxed per-feed cache cells |
//! | [`clock`] | Injectable monotonic clock |
//! | [`csv`] | Lenient CSV splitting and numeric coercion |
//! | [`domain`] | Record types and snapshots |
//! | [`error`] | Feed error types |
//! | [`feed`] | Feed identities, config, row mapping |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`service`] | Cache orchestration and derived queries |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tickboard_core::MarketDataService;
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = MarketDataService::new();
//!
//!     for stock in service.top_gainers(5).await {
//!         println!("{} {:+.2}%", stock.symbol, stock.change_percent);
//!     }
//! }
//! ```
//!
//! ## Behavior
//!
//! - Each feed is refreshed at most once per 60s freshness window; queries
//!   inside the window are served from cache.
//! - A failed refresh is invisible to callers beyond staleness: the last
//!   good sequence (or an empty one before the first success) is returned
//!   and the failure is logged via `tracing`.
//! - Malformed numeric cells degrade to `0.0` and rows are dropped only
//!   when they fail the inclusion gate (empty key or non-positive price).
//!   This tolerance of upstream feed noise is deliberate.

pub mod cache;
pub mod clock;
pub mod csv;
pub mod domain;
pub mod error;
pub mod feed;
pub mod http_client;
pub mod service;

// Re-export commonly used types at crate root for convenience

pub use cache::FeedCell;
pub use clock::{Clock, ManualClock, SystemClock};
pub use csv::{parse_number, split_line};
pub use domain::{FeedSnapshot, IndexRecord, StockRecord, UtcDateTime};
pub use error::FeedError;
pub use feed::{parse_indices, parse_stocks, FeedConfig, FeedKind};
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};
pub use service::{MarketDataService, DEFAULT_SEARCH_LIMIT, DEFAULT_TOP_LIMIT};
