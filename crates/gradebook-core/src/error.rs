use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Not a valid number: {0:?}")]
    NotANumber(String),

    #[error("Grade must be between 0 and 100, got {0}")]
    OutOfRange(f64),

    #[error("Course name cannot be empty")]
    EmptyName,

    #[error("Course already registered: {0}")]
    DuplicateName(String),

    #[error("Course not found: {0}")]
    NotFound(String),

    #[error("No courses registered")]
    EmptyStore,

    #[error("Courses are not sorted by name; sort them by name first")]
    PreconditionNotSorted,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
