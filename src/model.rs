// Core types: the availability verdict and the per-collaborator error taxonomy.
use thiserror::Error;

/// Outcome of one availability check. The variant is the verdict, the payload
/// is a human-readable rationale explaining how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Available(String),
    OutOfStock(String),
    Unavailable(String),
    Error(String),
}

impl CheckResult {
    pub fn status_label(&self) -> &'static str {
        match self {
            CheckResult::Available(_) => "AVAILABLE",
            CheckResult::OutOfStock(_) => "OUT_OF_STOCK",
            CheckResult::Unavailable(_) => "UNAVAILABLE",
            CheckResult::Error(_) => "ERROR",
        }
    }

    pub fn rationale(&self) -> &str {
        match self {
            CheckResult::Available(r)
            | CheckResult::OutOfStock(r)
            | CheckResult::Unavailable(r)
            | CheckResult::Error(r) => r,
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("html parse error: {0}")]
    HtmlParseError(String),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invalid address: {0}")]
    Address(String),
    #[error("message build error: {0}")]
    Message(String),
    #[error("smtp error: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_match_verdicts() {
        assert_eq!(CheckResult::Available("a".into()).status_label(), "AVAILABLE");
        assert_eq!(CheckResult::OutOfStock("b".into()).status_label(), "OUT_OF_STOCK");
        assert_eq!(CheckResult::Unavailable("c".into()).status_label(), "UNAVAILABLE");
        assert_eq!(CheckResult::Error("d".into()).status_label(), "ERROR");
    }

    #[test]
    fn rationale_is_carried_through() {
        let result = CheckResult::OutOfStock("Out of stock text found on page".into());
        assert_eq!(result.rationale(), "Out of stock text found on page");
    }
}
