//! Time-boxed cache cell for one feed.
//!
//! Each feed carries its own last good record sequence and the monotonic
//! instant of its last successful fetch. A cell is stale once
//! `now - last_success >= freshness_window`. A failed refresh never touches
//! the cell, so the staleness clock of good data is never extended and the
//! next caller retries immediately.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::UtcDateTime;

/// Cache state for one feed kind.
#[derive(Debug)]
pub struct FeedCell<T> {
    records: Option<Arc<Vec<T>>>,
    fetched_at: Option<Instant>,
    as_of: Option<UtcDateTime>,
}

impl<T> FeedCell<T> {
    pub fn new() -> Self {
        Self {
            records: None,
            fetched_at: None,
            as_of: None,
        }
    }

    /// The cached sequence, if it is still inside the freshness window.
    pub fn fresh(&self, now: Instant, window: Duration) -> Option<Arc<Vec<T>>> {
        let records = self.records.as_ref()?;
        let fetched_at = self.fetched_at?;
        if now.duration_since(fetched_at) < window {
            Some(Arc::clone(records))
        } else {
            None
        }
    }

    /// The last good sequence regardless of age; empty if never fetched.
    pub fn last_good(&self) -> Arc<Vec<T>> {
        self.records
            .as_ref()
            .map(Arc::clone)
            .unwrap_or_else(|| Arc::new(Vec::new()))
    }

    /// Whether any fetch has ever succeeded for this feed.
    pub fn loaded(&self) -> bool {
        self.records.is_some()
    }

    /// Wall-clock stamp of the last successful fetch.
    pub fn as_of(&self) -> Option<UtcDateTime> {
        self.as_of
    }

    /// Replace the sequence wholesale and reset the staleness clock.
    pub fn replace(&mut self, records: Vec<T>, now: Instant) {
        self.records = Some(Arc::new(records));
        self.fetched_at = Some(now);
        self.as_of = Some(UtcDateTime::now());
    }
}

impl<T> Default for FeedCell<T> {
    fn default() -> Self {
        Self::new()
    }
}
