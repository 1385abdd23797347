use thiserror::Error;

/// Errors produced while decoding a manifest document.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Manifest is not valid JSON")]
    Malformed(#[source] serde_json::Error),

    #[error("Manifest must be a JSON object")]
    NotAnObject,

    #[error("Manifest is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Manifest field `{field}` is invalid: {source}")]
    InvalidField {
        field: String,
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    /// The manifest field responsible for the error, if known.
    pub fn field(&self) -> Option<&str> {
        match self {
            DecodeError::MissingField(field) => Some(*field),
            DecodeError::InvalidField { field, .. } => Some(field.as_str()),
            DecodeError::Malformed(_) | DecodeError::NotAnObject => None,
        }
    }
}
