//! # Domain Models
//!
//! Canonical record types for tickboard feed data.
//!
//! ## Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`StockRecord`] | One listed instrument row from the stocks feed |
//! | [`IndexRecord`] | One market index row from the indices feed |
//! | [`FeedSnapshot`] | A record sequence plus load-state metadata |
//! | [`UtcDateTime`] | RFC3339 UTC timestamp |
//!
//! Records are plain value types: immutable once constructed, with no
//! identity beyond their key field (`symbol` for stocks, `name` for
//! indices). They are produced fresh on every successful feed refresh and
//! replaced as a whole sequence, never mutated in place.

mod models;
mod timestamp;

pub use models::{FeedSnapshot, IndexRecord, StockRecord};
pub use timestamp::UtcDateTime;
