use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuickdeskError {
    #[error("missing required field '{0}'")]
    Validation(&'static str),

    #[error("not signed in")]
    NotSignedIn,

    #[error("invalid status '{0}'")]
    InvalidStatus(String),

    #[error("invalid priority '{0}'")]
    InvalidPriority(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("session error: {0}")]
    Session(String),
}

pub type Result<T> = std::result::Result<T, QuickdeskError>;
