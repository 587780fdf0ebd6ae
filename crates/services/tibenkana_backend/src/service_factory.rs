// --- File: crates/services/tibenkana_backend/src/service_factory.rs ---
//! Builds the collaborators of the booking service from configuration.

use std::sync::Arc;

use tracing::info;

use tibenkana_bookings::BookingService;
use tibenkana_common::{BookingNotifier, Clock, SystemClock, TibenkanaError};
use tibenkana_config::AppConfig;
use tibenkana_db::{
    BookingRepository, BookingRepositoryFactory, DbClient, InMemoryBookingRepository,
    RepositoryFactory,
};
use tibenkana_mailer::EmailNotificationService;

/// Owns the storage, notifier and clock shared by every request.
pub struct TibenkanaServiceFactory {
    config: Arc<AppConfig>,
    repository: Arc<dyn BookingRepository>,
    notifier: Option<Arc<dyn BookingNotifier>>,
    clock: Arc<dyn Clock>,
}

impl TibenkanaServiceFactory {
    /// Connect storage and mail as configured.
    ///
    /// SQL storage is used when `database.url` is set, in-memory storage
    /// otherwise. Mail is always wired; it skips itself when SMTP is incomplete.
    pub async fn new(config: Arc<AppConfig>) -> Result<Self, TibenkanaError> {
        let repository = build_repository(&config).await?;
        let notifier: Arc<dyn BookingNotifier> =
            Arc::new(EmailNotificationService::from_config(&config));

        Ok(Self::with_parts(
            config,
            repository,
            Some(notifier),
            Arc::new(SystemClock),
        ))
    }

    pub fn with_parts(
        config: Arc<AppConfig>,
        repository: Arc<dyn BookingRepository>,
        notifier: Option<Arc<dyn BookingNotifier>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            repository,
            notifier,
            clock,
        }
    }

    pub fn config(&self) -> &Arc<AppConfig> {
        &self.config
    }

    pub fn repository(&self) -> Arc<dyn BookingRepository> {
        self.repository.clone()
    }

    pub fn booking_service(&self) -> BookingService {
        BookingService::new(
            self.repository.clone(),
            self.notifier.clone(),
            self.clock.clone(),
            self.config.bookings.clone(),
        )
    }
}

async fn build_repository(config: &AppConfig) -> Result<Arc<dyn BookingRepository>, TibenkanaError> {
    match &config.database {
        Some(database) => {
            info!("Using SQL booking storage at {}", database.url);
            let client = DbClient::from_config(database).await?;
            let repository = BookingRepositoryFactory::new().create_repository(client);
            repository.init_schema().await?;
            Ok(Arc::new(repository))
        }
        None => {
            info!("No database configured, bookings are kept in memory");
            Ok(Arc::new(InMemoryBookingRepository::new()))
        }
    }
}
