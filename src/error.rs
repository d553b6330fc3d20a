use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown filter key: {0}")]
    UnknownFilterKey(String),

    #[error("filter key '{0}' is fixed at construction and cannot be changed")]
    ImmutableFilterKey(&'static str),

    #[error("unknown status rule: {0} (use retain|drop-truthy)")]
    UnknownStatusRule(String),

    #[error("unknown uninstall scope: {0} (use device|user|role|group)")]
    UnknownScope(String),

    #[error("invalid event on line {line}: {message}")]
    InvalidEvent { line: usize, message: String },

    #[error("invalid uninstall request: {0}")]
    InvalidUninstall(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
