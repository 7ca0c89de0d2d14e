use async_trait::async_trait;

/// Delivers one plain-text message. The error string is for logs only.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String>;
}
