use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The call arguments do not have the expected shape.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown action: {0}")]
    UnknownAction(String),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
