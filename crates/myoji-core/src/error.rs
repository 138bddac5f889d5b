use std::io;
use std::num::ParseIntError;

/// Failure to obtain the page text for a query URI.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    Status(reqwest::StatusCode),

    #[error("file read error: {0}")]
    File(#[from] io::Error),
}

/// Failure to read or write a cache entry.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("cache entry is not a valid record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Deviation from the fixed page template. Any of these means the document
/// yields no record; the lookup service downgrades them to an absent result.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("html rewrite failed: {0}")]
    Rewrite(#[from] lol_html::errors::RewritingError),

    #[error("expected 3 content blocks, found {0}")]
    NotEnoughPosts(usize),

    #[error("title label not found")]
    TitleLabel,

    #[error("surname missing from title")]
    EmptyKanji,

    #[error("readings label not found")]
    ReadingsLabel,

    #[error("no readings listed")]
    NoReadings,

    #[error("rank pattern not found")]
    RankNotFound,

    #[error("count pattern not found")]
    CountNotFound,

    #[error("number out of range: {0}")]
    BadNumber(#[from] ParseIntError),

    #[error("origin block not found")]
    OriginMissing,
}
