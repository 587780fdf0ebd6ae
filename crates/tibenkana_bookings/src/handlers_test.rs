#[cfg(test)]
mod tests {
    use crate::routes::routes;
    use crate::test_support::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tibenkana_config::BookingsConfig;
    use tower::ServiceExt;

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn post_json(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/bookings")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_booking_handler_returns_201() {
        let h = harness();
        let app = routes(h.service.clone());
        let body = serde_json::to_string(&scenario_payload()).unwrap();

        let (status, json) = send(app, post_json(body)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Appointment booked successfully");
        assert_eq!(json["booking"]["status"], "confirmed");
        assert_eq!(json["booking"]["id"], "BT-400123");
        assert_eq!(json["booking"]["groupSize"], 2);
    }

    #[tokio::test]
    async fn test_create_booking_handler_missing_phone_is_400() {
        let h = harness();
        let app = routes(h.service.clone());
        let mut payload = serde_json::to_value(scenario_payload()).unwrap();
        payload.as_object_mut().unwrap().remove("phone");

        let (status, json) = send(app, post_json(payload.to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, json!({ "error": "Missing required fields: phone" }));
    }

    #[tokio::test]
    async fn test_create_booking_handler_malformed_json_is_400() {
        let h = harness();
        let app = routes(h.service.clone());

        let (status, json) = send(app, post_json("{ not json".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn test_create_booking_handler_storage_failure_is_500() {
        let app = routes(broken_service());
        let body = serde_json::to_string(&scenario_payload()).unwrap();

        let (status, json) = send(app, post_json(body)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Failed to process booking");
    }

    #[tokio::test]
    async fn test_create_booking_handler_maintenance_is_503() {
        let h = harness_with(BookingsConfig {
            maintenance_mode: true,
            ..BookingsConfig::default()
        });
        let app = routes(h.service.clone());
        let body = serde_json::to_string(&scenario_payload()).unwrap();

        let (status, _) = send(app, post_json(body)).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_list_bookings_handler_counts_bookings() {
        let h = harness();
        h.service.submit(scenario_payload()).await.unwrap();
        h.service.submit(scenario_payload()).await.unwrap();
        let app = routes(h.service.clone());

        let request = Request::builder()
            .uri("/bookings")
            .body(Body::empty())
            .unwrap();
        let (status, json) = send(app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["count"], 2);
        assert_eq!(json["bookings"][0]["id"], "BT-400124");
        assert_eq!(json["bookings"][1]["id"], "BT-400123");
    }

    #[tokio::test]
    async fn test_booking_options_handler() {
        let h = harness();
        let app = routes(h.service.clone());

        let request = Request::builder()
            .uri("/bookings/options")
            .body(Body::empty())
            .unwrap();
        let (status, json) = send(app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["maxGroupSize"], 20);
        assert_eq!(json["timeSlots"][0], "09:00");
    }
}
