// --- File: crates/services/tibenkana_backend/src/lib.rs ---
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

pub mod app_state;
pub mod service_factory;

pub use app_state::AppState;
pub use service_factory::TibenkanaServiceFactory;

pub const WELCOME_MESSAGE: &str = "Welcome to the Tibenkana Booking API!";

/// The complete application: API under `/api`, docs and static files when enabled.
pub fn build_app(state: &AppState) -> Router {
    let api_router = Router::new()
        .route("/", get(|| async { WELCOME_MESSAGE }))
        .merge(tibenkana_bookings::routes(state.bookings.clone()));

    let mut app = Router::new().nest("/api", api_router);

    #[cfg(feature = "openapi")]
    {
        use tibenkana_bookings::doc::BookingsApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Tibenkana Booking API",
                version = "0.1.0",
                description = "Appointment booking endpoints",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            servers((url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(BookingsApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");
        app = app.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc));
    }

    if let Some(dir) = &state.config.server.static_dir {
        info!("Serving static files from {}", dir);
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
