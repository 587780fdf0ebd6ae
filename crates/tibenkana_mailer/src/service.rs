// --- File: crates/tibenkana_mailer/src/service.rs ---
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::error::NotificationError;
use crate::invite::calendar_link;
use crate::template::{render_html, subject};
use crate::transport::{EmailMessage, MailTransport, SmtpMailTransport};
use tibenkana_common::{BookingNotifier, BookingRecord, NotificationOutcome, NotifyFuture};
use tibenkana_config::{AppConfig, InviteConfig, SmtpConfig};

/// Emails the booking team about every new booking.
///
/// Does nothing (and touches no network) unless the smtp section is complete
/// and at least one recipient is configured.
pub struct EmailNotificationService {
    smtp: SmtpConfig,
    invite: InviteConfig,
    transport: Option<Arc<dyn MailTransport>>,
}

impl EmailNotificationService {
    /// Build the service from config, connecting lettre when smtp is complete.
    pub fn from_config(config: &AppConfig) -> Self {
        let transport: Option<Arc<dyn MailTransport>> = if config.smtp.is_complete() {
            match SmtpMailTransport::from_config(&config.smtp) {
                Ok(transport) => Some(Arc::new(transport)),
                Err(e) => {
                    error!("Booking emails disabled: {}", e);
                    None
                }
            }
        } else {
            info!("SMTP not fully configured, booking emails are disabled");
            None
        };

        Self {
            smtp: config.smtp.clone(),
            invite: config.invite.clone(),
            transport,
        }
    }

    /// Build the service around an existing transport.
    pub fn with_transport(
        smtp: SmtpConfig,
        invite: InviteConfig,
        transport: Arc<dyn MailTransport>,
    ) -> Self {
        Self {
            smtp,
            invite,
            transport: Some(transport),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.transport.is_some() && self.smtp.is_complete() && !self.smtp.recipients.is_empty()
    }

    /// The message that would be sent for `booking`.
    pub fn compose(
        &self,
        booking: &BookingRecord,
    ) -> Result<(EmailMessage, bool), NotificationError> {
        let link = calendar_link(booking, &self.invite);
        if link.is_none() {
            warn!("No calendar link for booking {}", booking.id);
        }
        let message = EmailMessage {
            from: self.smtp.from.clone().unwrap_or_default(),
            to: self.smtp.recipients.clone(),
            subject: subject(booking),
            html: render_html(booking, link.as_deref())?,
        };
        Ok((message, link.is_some()))
    }

    async fn deliver(&self, booking: &BookingRecord) -> NotificationOutcome {
        let transport = match &self.transport {
            Some(transport) if self.smtp.is_complete() => transport,
            _ => {
                info!("Skipping email for booking {}: SMTP not configured", booking.id);
                return NotificationOutcome::Skipped {
                    reason: "SMTP not configured".to_string(),
                };
            }
        };
        if self.smtp.recipients.is_empty() {
            info!("Skipping email for booking {}: no recipients", booking.id);
            return NotificationOutcome::Skipped {
                reason: "no recipients configured".to_string(),
            };
        }

        let (message, calendar_link) = match self.compose(booking) {
            Ok(composed) => composed,
            Err(e) => {
                error!("Failed to compose booking email for {}: {}", booking.id, e);
                return NotificationOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };
        match transport.send(&message).await {
            Ok(()) => {
                info!("Booking email for {} sent", booking.id);
                NotificationOutcome::Sent {
                    recipients: message.to.len(),
                    calendar_link,
                }
            }
            Err(e) => {
                error!("Failed to send booking email for {}: {}", booking.id, e);
                NotificationOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

impl BookingNotifier for EmailNotificationService {
    fn notify<'a>(&'a self, booking: &'a BookingRecord) -> NotifyFuture<'a> {
        Box::pin(self.deliver(booking))
    }
}
