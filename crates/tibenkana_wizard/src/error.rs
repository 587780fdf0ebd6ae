// --- File: crates/tibenkana_wizard/src/error.rs ---
use chrono::NaiveDate;
use thiserror::Error;

/// Why a booking could not be handed to the server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The server answered with `{ "error": ... }`.
    #[error("Booking failed: {message}")]
    Rejected { status: u16, message: String },
    /// The request never got an answer.
    #[error("Failed to book appointment. Please try again.")]
    Network(String),
    /// The server answered with something that is not a booking response.
    #[error("Unexpected response from booking service: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("'{0}' is not one of the offered services")]
    UnknownService(String),
    #[error("'{0}' is not one of the offered time slots")]
    UnknownTimeSlot(String),
    #[error("group size must be between 1 and {max}, got {got}")]
    GroupSizeOutOfRange { got: u32, max: u32 },
    #[error("{0} is in the past and cannot be booked")]
    DateNotSelectable(NaiveDate),
    #[error("the booking form is not complete")]
    Incomplete,
    #[error("a submission is already in progress")]
    AlreadySubmitting,
    #[error("this booking was already submitted; start a new one")]
    AlreadySubmitted,
    #[error("no submission is in progress")]
    NotSubmitting,
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}
