use thiserror::Error;

use crate::domain::Mode;

#[derive(Error, Debug)]
pub enum HndError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "Requested stories ranked {start}..={end}, but the {mode} listing only goes to {limit}"
    )]
    WindowOutOfRange {
        mode: Mode,
        start: usize,
        end: usize,
        limit: usize,
    },
}

pub type Result<T> = std::result::Result<T, HndError>;
