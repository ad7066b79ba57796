use async_trait::async_trait;

use crate::application::ports::email_sender::{EmailSender, OutgoingEmail};

/// Used when no mail API is configured: logs the message and reports success.
#[derive(Debug, Clone, Default)]
pub struct LogEmailSender;

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send(&self, email: &OutgoingEmail) -> anyhow::Result<()> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            body_len = email.text_body.len(),
            "email_transport_not_configured_logging_only"
        );
        Ok(())
    }
}
