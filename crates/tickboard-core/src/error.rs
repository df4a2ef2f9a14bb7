use thiserror::Error;

use crate::feed::FeedKind;

/// Failure retrieving a feed document.
///
/// Never crosses the public query surface: the cache layer recovers by
/// serving the last good sequence (or an empty one) and logs the failure
/// for diagnostics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("{feed} feed transport failed: {message}")]
    Transport { feed: FeedKind, message: String },

    #[error("{feed} feed returned status {status}")]
    Status { feed: FeedKind, status: u16 },
}

impl FeedError {
    pub fn transport(feed: FeedKind, message: impl Into<String>) -> Self {
        Self::Transport {
            feed,
            message: message.into(),
        }
    }

    pub const fn status(feed: FeedKind, status: u16) -> Self {
        Self::Status { feed, status }
    }

    pub const fn feed(&self) -> FeedKind {
        match self {
            Self::Transport { feed, .. } => *feed,
            Self::Status { feed, .. } => *feed,
        }
    }
}
