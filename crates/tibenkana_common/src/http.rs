// --- File: crates/tibenkana_common/src/http.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::error::{HttpStatusCode, TibenkanaError};

pub mod client;

/// Extension trait for TibenkanaError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for TibenkanaError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status_code.is_server_error() {
            error!("Request failed ({}): {}", status_code, self);
        }

        // Clients only ever see `{ "error": "<message>" }`
        let body = Json(json!({ "error": self.public_message() }));

        (status_code, body).into_response()
    }
}

impl IntoResponse for TibenkanaError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400_with_plain_error_string() {
        let response = TibenkanaError::MissingFields(vec!["phone".into()]).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": "Missing required fields: phone" }));
    }

    #[tokio::test]
    async fn persistence_error_is_500_with_generic_message() {
        let response = TibenkanaError::Persistence("no such table: bookings".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Failed to process booking");
    }

    #[tokio::test]
    async fn unavailable_is_503_with_its_message() {
        let response = TibenkanaError::Unavailable("Bookings are paused".into()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Bookings are paused");
    }
}
