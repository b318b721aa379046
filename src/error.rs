use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("Name cannot be empty.")]
    InvalidName,

    #[error("Phone number must be a 10-digit number, got '{value}'.")]
    InvalidPhone { value: String },

    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("Not enough arguments provided.")]
    MissingArguments { command: String, expected: usize },

    #[error("Contact {name} not found.")]
    ContactNotFound { name: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BookError {
    /// True for the errors a user can cause by typing a bad command.
    /// These are rendered as a reply instead of being logged as failures.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            BookError::InvalidName
                | BookError::InvalidPhone { .. }
                | BookError::InvalidDate { .. }
                | BookError::MissingArguments { .. }
                | BookError::ContactNotFound { .. }
        )
    }
}

pub type BookResult<T> = Result<T, BookError>;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
