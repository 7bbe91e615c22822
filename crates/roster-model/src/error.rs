use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown mapping target: {0:?}")]
    UnknownTarget(String),
    #[error("mapping target {0:?} names no field")]
    EmptyField(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
