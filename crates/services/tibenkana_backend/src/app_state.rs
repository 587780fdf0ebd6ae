// --- File: crates/services/tibenkana_backend/src/app_state.rs ---
use std::sync::Arc;

use tibenkana_bookings::BookingService;
use tibenkana_common::TibenkanaError;
use tibenkana_config::AppConfig;

use crate::service_factory::TibenkanaServiceFactory;

/// State shared by all routes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub bookings: BookingService,
}

impl AppState {
    /// Build the state from configuration, connecting storage and mail.
    pub async fn new(config: Arc<AppConfig>) -> Result<Self, TibenkanaError> {
        let factory = TibenkanaServiceFactory::new(config).await?;
        Ok(Self::from_factory(&factory))
    }

    pub fn from_factory(factory: &TibenkanaServiceFactory) -> Self {
        Self {
            config: factory.config().clone(),
            bookings: factory.booking_service(),
        }
    }
}
