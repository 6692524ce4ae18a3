//! Error types for the trip wizard library.

use std::path::PathBuf;

use thiserror::Error;

use crate::{models::AnswerKey, wizard::Step};

/// Comprehensive error type for all wizard, catalog and storage operations.
#[derive(Error, Debug)]
pub enum TripError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Saved trip not found for the given ID
    #[error("Trip with ID {id} not found")]
    TripNotFound { id: u64 },
    /// Proposed itinerary not found for the given ID
    #[error("Itinerary with ID {id} not found")]
    ItineraryNotFound { id: u32 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// A required question has no usable answer yet
    #[error("Question '{key}' needs an answer before moving on")]
    IncompleteAnswer { key: AnswerKey },
    /// An answer was given for a question that is not on screen
    #[error("Question '{key}' is not active (current step: {step})")]
    InactiveQuestion { key: AnswerKey, step: Step },
    /// The requested transition does not exist from the current step
    #[error("Cannot {action} from step {step}")]
    InvalidTransition { step: Step, action: &'static str },
    /// The geocoder returned no match
    #[error("Place '{query}' not found")]
    PlaceNotFound { query: String },
    /// Transport-level HTTP failures
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// Upstream service answered with an error
    #[error("Service error: {message}")]
    Service { message: String },
    /// The operation was abandoned because its session was closed
    #[error("Operation cancelled: the wizard was closed")]
    Cancelled,
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> TripError {
        TripError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TripError {
        TripError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TripError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a transport error with a message.
    pub fn http(message: impl Into<String>, source: reqwest::Error) -> Self {
        TripError::Http {
            message: message.into(),
            source,
        }
    }

    /// Whether the error is a local validation rejection that left the
    /// wizard untouched.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TripError::IncompleteAnswer { .. }
                | TripError::InactiveQuestion { .. }
                | TripError::InvalidTransition { .. }
                | TripError::InvalidInput { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TripError::database(message).with_source(e))
    }
}

/// Result type alias for wizard and trip operations
pub type Result<T> = std::result::Result<T, TripError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_answer_message() {
        let err = TripError::IncompleteAnswer {
            key: AnswerKey::Companions,
        };
        assert_eq!(
            err.to_string(),
            "Question 'companions' needs an answer before moving on"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = TripError::invalid_input("range").with_reason("start after end");
        assert!(matches!(err, TripError::InvalidInput { ref field, .. } if field == "range"));
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'range': start after end"
        );
    }

    #[test]
    fn test_cancelled_is_not_validation() {
        assert!(!TripError::Cancelled.is_validation());
        assert!(!TripError::PlaceNotFound {
            query: "Atlantis".to_string()
        }
        .is_validation());
    }
}
