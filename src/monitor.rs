use crate::classifier::AvailabilityClassifier;
use crate::logger::{RunLogger, TIMESTAMP_FORMAT};
use crate::model::CheckResult;
use crate::notifier::Notifier;
use crate::scraper::PageFetcher;

use chrono::Local;

/// One check cycle: fetch the product page, classify it, notify, log.
/// No state survives between runs; scheduling is the caller's problem.
pub struct Monitor {
    product_url: String,
    fetcher: Box<dyn PageFetcher>,
    classifier: AvailabilityClassifier,
    notifier: Notifier,
    logger: Box<dyn RunLogger>,
}

impl Monitor {
    pub fn new(
        product_url: String,
        fetcher: Box<dyn PageFetcher>,
        classifier: AvailabilityClassifier,
        notifier: Notifier,
        logger: Box<dyn RunLogger>,
    ) -> Self {
        Self {
            product_url,
            fetcher,
            classifier,
            notifier,
            logger,
        }
    }

    pub async fn run_once(&self) -> CheckResult {
        // A failed fetch becomes an Error verdict; classification is never
        // attempted on it.
        let result = match self.fetcher.fetch(&self.product_url).await {
            Ok(html) => self.classifier.classify(&html),
            Err(e) => {
                self.logger
                    .error(&format!("Network error fetching product page: {}", e));
                CheckResult::Error(format!("Error checking availability: {}", e))
            }
        };

        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let status = result.status_label();
        self.logger.info(&format!(
            "[{}] Product is {}: {}",
            timestamp,
            status,
            result.rationale()
        ));

        let subject = format!("Product Alert - {}", status);
        let body = format_notification(&self.product_url, &result, &timestamp);
        self.notifier.notify(&subject, &body);

        result
    }
}

/// Plain-text notification body. The field layout is load-bearing for any
/// downstream consumer parsing these messages; keep it stable.
pub fn format_notification(url: &str, result: &CheckResult, timestamp: &str) -> String {
    format!(
        "Product Status Update:\n\n\
         URL: {}\n\
         Status: {}\n\
         Details: {}\n\
         Time: {}\n\n\
         This is an automated notification from your product monitor.\n",
        url,
        result.status_label(),
        result.rationale(),
        timestamp
    )
}
