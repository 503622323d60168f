use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("schema error: {0}")]
    Schema(String),

    #[error("{what} fetch failed after {attempts} attempts")]
    RetriesExhausted { what: &'static str, attempts: u32 },

    #[error("run deadline exceeded")]
    Timeout,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SnapshotError>;
