use async_trait::async_trait;
use tracing::info;

use crate::email::application::ports::outgoing::EmailSender;

/// Stand-in used when no SMTP relay is configured: records the email in the log.
#[derive(Debug, Default, Clone)]
pub struct LoggingEmailSender;

#[async_trait]
impl EmailSender for LoggingEmailSender {
    async fn send_email(&self, to: &str, subject: &str, _body: &str) -> Result<(), String> {
        info!(to = %to, subject = %subject, "SMTP not configured, email not delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn always_succeeds() {
        let sender = LoggingEmailSender;
        assert!(sender.send_email("a@example.com", "s", "b").await.is_ok());
    }
}
