// --- File: crates/tibenkana_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for the booking service.
///
/// Crate-specific errors convert into this type with `From` so that handlers
/// can map every failure onto one HTTP representation.
#[derive(Error, Debug)]
pub enum TibenkanaError {
    /// One or more required fields were absent or blank
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// A field was present but its value is not acceptable
    #[error("Invalid booking: {0}")]
    Validation(String),

    /// Storage unavailable or a write failed
    #[error("Database error: {0}")]
    Persistence(String),

    /// Notification transport failure
    #[error("Notification error: {0}")]
    Notification(String),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The service is deliberately not accepting requests
    #[error("{0}")]
    Unavailable(String),

    /// Anything else
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TibenkanaError {
    /// The message that may be shown to a client.
    ///
    /// Validation and availability errors are reported verbatim; server-side
    /// failures get a generic message and the detail stays in the logs.
    pub fn public_message(&self) -> String {
        match self {
            TibenkanaError::MissingFields(_)
            | TibenkanaError::Validation(_)
            | TibenkanaError::Unavailable(_) => self.to_string(),
            TibenkanaError::Persistence(_)
            | TibenkanaError::Notification(_)
            | TibenkanaError::Config(_)
            | TibenkanaError::Internal(_) => "Failed to process booking".to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TibenkanaError::MissingFields(_) | TibenkanaError::Validation(_)
        )
    }
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for TibenkanaError {
    fn status_code(&self) -> u16 {
        match self {
            TibenkanaError::MissingFields(_) => 400,
            TibenkanaError::Validation(_) => 400,
            TibenkanaError::Persistence(_) => 500,
            TibenkanaError::Notification(_) => 502,
            TibenkanaError::Config(_) => 500,
            TibenkanaError::Unavailable(_) => 503,
            TibenkanaError::Internal(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, TibenkanaError>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, TibenkanaError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| TibenkanaError::Internal(format!("{}: {}", context, error)))
    }
}

impl From<serde_json::Error> for TibenkanaError {
    fn from(err: serde_json::Error) -> Self {
        TibenkanaError::Validation(err.to_string())
    }
}

pub fn config_error<T: fmt::Display>(message: T) -> TibenkanaError {
    TibenkanaError::Config(message.to_string())
}
