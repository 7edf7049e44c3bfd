use serde::Deserialize;
use std::env;
use std::fs;

/// SMTP settings for the email notification path. When absent the notifier
/// degrades to console output.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    pub smtp_server: String,
    pub smtp_port: u16,
    pub from_email: String,
    pub to_email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub product_url: String,
    #[serde(default)]
    pub email: Option<EmailConfig>,
}

impl AppConfig {
    /// Reads configuration from the environment. The env entry point requires
    /// the full email group; any missing or malformed variable is an error.
    pub fn from_env() -> Result<Self, String> {
        let product_url = require_var("PRODUCT_URL")?;
        let smtp_server = require_var("SMTP_SERVER")?;
        let smtp_port = require_var("SMTP_PORT")?
            .parse::<u16>()
            .map_err(|e| format!("SMTP_PORT is not a valid port number: {}", e))?;
        let from_email = require_var("FROM_EMAIL")?;
        let to_email = require_var("TO_EMAIL")?;
        let password = require_var("EMAIL_PASSWORD")?;

        Ok(AppConfig {
            product_url,
            email: Some(EmailConfig {
                smtp_server,
                smtp_port,
                from_email,
                to_email,
                password,
            }),
        })
    }
}

fn require_var(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("missing environment variable {}", name))
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
