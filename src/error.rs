// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The page has no "Major Group NN: ..." heading to root the tree at.
    #[error("no Major Group heading found in page")]
    MissingMajorGroup,

    #[error("Major Group link before any Division heading: {0}")]
    OrphanMajor(String),

    #[error("no Major Group links found in manual index")]
    EmptyIndex,

    #[error("invalid selection: {0}")]
    Selection(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
