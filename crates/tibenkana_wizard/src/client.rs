// --- File: crates/tibenkana_wizard/src/client.rs ---
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::SubmissionError;
use tibenkana_common::http::client::HTTP_CLIENT;
use tibenkana_common::{BookingPayload, BookingRecord, BoxFuture};

/// Sends a completed booking form to the booking service.
pub trait BookingSubmitter: Send + Sync {
    fn submit_booking<'a>(
        &'a self,
        payload: &'a BookingPayload,
    ) -> BoxFuture<'a, BookingRecord, SubmissionError>;
}

#[derive(Debug, Deserialize)]
struct CreatedBody {
    #[serde(default)]
    success: bool,
    booking: BookingRecord,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Submits bookings over HTTP to `{base_url}/bookings`.
#[derive(Debug, Clone)]
pub struct HttpBookingClient {
    base_url: String,
    client: Client,
}

impl HttpBookingClient {
    /// `base_url` is the API root, e.g. `http://127.0.0.1:8086/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, HTTP_CLIENT.clone())
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn bookings_url(&self) -> String {
        format!("{}/bookings", self.base_url)
    }

    async fn post(&self, payload: &BookingPayload) -> Result<BookingRecord, SubmissionError> {
        let url = self.bookings_url();
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                error!("Booking request to {} failed: {}", url, e);
                SubmissionError::Network(e.to_string())
            })?;

        let status = response.status();
        let body: Value = response.json().await.map_err(|e| {
            SubmissionError::InvalidResponse(format!("status {}: {}", status, e))
        })?;

        if !status.is_success() {
            let message = serde_json::from_value::<ErrorBody>(body)
                .map(|b| b.error)
                .unwrap_or_else(|_| format!("HTTP {}", status));
            return Err(SubmissionError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let created: CreatedBody = serde_json::from_value(body)
            .map_err(|e| SubmissionError::InvalidResponse(e.to_string()))?;
        if !created.success {
            return Err(SubmissionError::InvalidResponse(
                "success flag not set".to_string(),
            ));
        }
        Ok(created.booking)
    }
}

impl BookingSubmitter for HttpBookingClient {
    fn submit_booking<'a>(
        &'a self,
        payload: &'a BookingPayload,
    ) -> BoxFuture<'a, BookingRecord, SubmissionError> {
        Box::pin(self.post(payload))
    }
}
