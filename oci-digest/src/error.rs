use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DigestParseError {
    #[error("Unsupported digest algorithm")]
    Unsupported,

    #[error("Invalid digest format")]
    InvalidFormat,

    #[error("Invalid digest length")]
    InvalidLength,
}
