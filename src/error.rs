use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlobeError {
    #[error("animation duration must be positive and finite, got {0}")]
    InvalidDuration(f32),

    #[error("position needs at least two numbers, got {len}")]
    InvalidPosition { len: usize },

    #[error("unsupported geometry type '{0}'")]
    UnsupportedGeometry(String),

    #[error("duplicate entity '{0}' in region index")]
    DuplicateEntity(String),

    #[error("network error: {0}")]
    Network(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
