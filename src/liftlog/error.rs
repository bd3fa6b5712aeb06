use thiserror::Error;

#[derive(Error, Debug)]
pub enum LiftlogError {
    #[error("Section '{0}' not found. The log file may be damaged.")]
    MissingSection(String),

    #[error("Action '{0}' already exists.")]
    DuplicateAction(String),

    #[error("Action '{0}' was not found in the available actions.")]
    ActionNotFound(String),

    #[error("Invalid action name: {0}")]
    InvalidActionName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LiftlogError>;
