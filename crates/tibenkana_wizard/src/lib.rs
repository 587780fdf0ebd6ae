// --- File: crates/tibenkana_wizard/src/lib.rs ---
//! Client side of the booking flow: the date picker, the five-step form and
//! the HTTP client that submits it.

pub mod calendar;
#[cfg(test)]
mod calendar_proptest;
#[cfg(test)]
mod calendar_test;
pub mod client;
pub mod confirmation;
pub mod error;
pub mod state;

pub use calendar::{month_grid, CalendarCell, DatePicker};
pub use client::{BookingSubmitter, HttpBookingClient};
pub use confirmation::ConfirmationView;
pub use error::{SubmissionError, WizardError};
pub use state::{BookingForm, BookingWizard, Step, SubmissionStatus};
