use crate::config::EmailConfig;
use crate::model::NotifyError;

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::{info, warn};

/// Delivers check results by email, or to stdout when no SMTP configuration
/// was supplied. Delivery failures are logged and swallowed; a failed
/// notification never aborts the monitoring run.
pub struct Notifier {
    email: Option<EmailConfig>,
}

impl Notifier {
    pub fn new(email: Option<EmailConfig>) -> Self {
        Self { email }
    }

    pub fn notify(&self, subject: &str, body: &str) {
        let Some(config) = &self.email else {
            println!("NOTIFICATION: {}", subject);
            println!("{}", body);
            return;
        };

        match send_email(config, subject, body) {
            Ok(()) => info!("Email notification sent successfully"),
            Err(e) => warn!("Error sending email: {}", e),
        }
    }

    /// Sends a fixed test message through the configured transport. Used by
    /// the connectivity self-test; unlike `notify` this surfaces the error.
    pub fn send_test_email(&self) -> Result<(), NotifyError> {
        let config = self
            .email
            .as_ref()
            .ok_or_else(|| NotifyError::Transport("no email configuration".to_string()))?;
        send_email(
            config,
            "Test Email Connectivity",
            "This is a test email from your product monitor.",
        )
    }
}

fn send_email(config: &EmailConfig, subject: &str, body: &str) -> Result<(), NotifyError> {
    let message = Message::builder()
        .from(
            config
                .from_email
                .parse()
                .map_err(|e| NotifyError::Address(format!("{}: {}", config.from_email, e)))?,
        )
        .to(config
            .to_email
            .parse()
            .map_err(|e| NotifyError::Address(format!("{}: {}", config.to_email, e)))?)
        .subject(subject)
        .header(ContentType::TEXT_PLAIN)
        .body(body.to_string())
        .map_err(|e| NotifyError::Message(e.to_string()))?;

    let credentials = Credentials::new(config.from_email.clone(), config.password.clone());

    // STARTTLS upgrade on the configured port, then authenticate and send.
    let mailer = SmtpTransport::starttls_relay(&config.smtp_server)
        .map_err(|e| NotifyError::Transport(e.to_string()))?
        .port(config.smtp_port)
        .credentials(credentials)
        .build();

    mailer
        .send(&message)
        .map(|_| ())
        .map_err(|e| NotifyError::Transport(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config() -> EmailConfig {
        EmailConfig {
            smtp_server: "127.0.0.1".to_string(),
            smtp_port: 1,
            from_email: "monitor@example.com".to_string(),
            to_email: "me@example.com".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn console_notifier_returns_normally() {
        let notifier = Notifier::new(None);
        notifier.notify("Product Alert - AVAILABLE", "Product Status Update:\n");
    }

    #[test]
    fn delivery_failure_is_swallowed() {
        // Nothing listens on port 1; the transport error must not escape.
        let notifier = Notifier::new(Some(unreachable_config()));
        notifier.notify("Product Alert - ERROR", "body");
    }

    #[test]
    fn invalid_address_is_reported_by_self_test() {
        let mut config = unreachable_config();
        config.from_email = "not an address".to_string();
        let notifier = Notifier::new(Some(config));
        assert!(matches!(
            notifier.send_test_email(),
            Err(NotifyError::Address(_))
        ));
    }

    #[test]
    fn self_test_without_config_fails() {
        let notifier = Notifier::new(None);
        assert!(notifier.send_test_email().is_err());
    }
}
