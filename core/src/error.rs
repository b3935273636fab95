use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManagerError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Formation '{name}' not found")]
    UnknownFormation { name: String },

    #[error("Formation '{formation}' lists slot '{slot}' more than once")]
    DuplicateSlot { formation: String, slot: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ManagerResult<T> = Result<T, ManagerError>;
