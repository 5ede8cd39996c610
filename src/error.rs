use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsdeskError {
    /// The given id names no article in the store. Carries the raw id as
    /// supplied by the caller, which may not even be a well-formed id.
    #[error("Article not found: {0}")]
    NotFound(String),

    #[error("Invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },
}

impl NewsdeskError {
    pub(crate) fn empty_field(field: &'static str) -> Self {
        NewsdeskError::Validation {
            field,
            reason: "must not be empty".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NewsdeskError>;
