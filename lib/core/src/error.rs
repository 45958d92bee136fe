use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Build error: {0}")]
    Build(String),

    #[error("Artifact integrity error: {0}")]
    ArtifactIntegrity(String),

    #[error("Title not found: {0}")]
    TitleNotFound(String),

    #[error("Invalid matrix dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
