mod classifier;
mod config;
mod logger;
mod model;
mod monitor;
mod notifier;
mod scraper;

use classifier::AvailabilityClassifier;
use config::{AppConfig, load_config};
use logger::FileLogger;
use monitor::Monitor;
use notifier::Notifier;
use crate::scraper::HttpFetcher;
use tracing::error;

const LOG_FILE: &str = "stockwatch.log";

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut config_path: Option<String> = None;
    let mut test_email = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--test-email" => test_email = true,
            path => config_path = Some(path.to_string()),
        }
    }

    // A config file argument wins; otherwise the environment must carry the
    // full variable set (fail fast if not).
    let config: AppConfig = match &config_path {
        Some(path) => match load_config(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Config load error: {}", e);
                std::process::exit(1);
            }
        },
        None => match AppConfig::from_env() {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Config error: {}", e);
                std::process::exit(1);
            }
        },
    };

    let notifier = Notifier::new(config.email);

    if test_email {
        match notifier.send_test_email() {
            Ok(()) => println!("Test email sent successfully!"),
            Err(e) => println!("Failed to send test email: {}", e),
        }
        return;
    }

    let fetcher = match HttpFetcher::new() {
        Ok(f) => f,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let monitor = Monitor::new(
        config.product_url,
        Box::new(fetcher),
        AvailabilityClassifier::new(),
        notifier,
        Box::new(FileLogger::new(LOG_FILE)),
    );

    // One cycle per invocation; repeated checks come from the external
    // scheduler. Every verdict, ERROR included, exits 0.
    monitor.run_once().await;
}
