use thiserror::Error;

use tickboard_core::FeedKind;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("no stock found for symbol '{symbol}'")]
    NotFound { symbol: String },

    #[error("{feed} feed is unavailable and no cached data exists yet")]
    FeedUnavailable { feed: FeedKind },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound { .. } => 3,
            Self::FeedUnavailable { .. } => 6,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}
