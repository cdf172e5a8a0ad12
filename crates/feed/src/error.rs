use thiserror::Error;

/// Why a page fetch produced no results. Never fatal to the feed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("search endpoint returned HTTP {0}")]
    Status(u16),

    #[error("malformed search response: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseOptionError {
    pub kind: &'static str,
    pub value: String,
}
