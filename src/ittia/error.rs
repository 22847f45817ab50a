use thiserror::Error;

#[derive(Error, Debug)]
pub enum IttiaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Abbreviation store error: {0}")]
    Store(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, IttiaError>;
