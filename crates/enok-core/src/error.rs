use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnokError {
    #[error("not initialized: run 'enok init'")]
    NotInitialized,

    #[error("CURRENT_SPEC.md already exists: refusing to overwrite")]
    SpecExists,

    #[error("CURRENT_SPEC.md not found")]
    SpecNotFound,

    #[error("CURRENT_PRD.md already exists: refusing to overwrite")]
    PrdExists,

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("{0} already exists: refusing to overwrite")]
    TargetExists(String),

    #[error("unknown role prompt: {0}")]
    UnknownRole(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EnokError>;
