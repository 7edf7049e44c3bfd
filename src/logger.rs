use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::{error, info, warn};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Logging collaborator for the monitoring run. Injected rather than global
/// so tests can capture the run record without touching real files.
pub trait RunLogger: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Appends one line per event to a log file and echoes it through `tracing`
/// to stdout. A failed file write is reported and ignored.
pub struct FileLogger {
    path: PathBuf,
}

impl FileLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn append(&self, level: &str, message: &str) {
        let line = format!(
            "{} - {} - {}\n",
            Local::now().format(TIMESTAMP_FORMAT),
            level,
            message
        );
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(line.as_bytes()));
        if let Err(e) = result {
            warn!("Failed to write run log {}: {}", self.path.display(), e);
        }
    }
}

impl RunLogger for FileLogger {
    fn info(&self, message: &str) {
        info!("{}", message);
        self.append("INFO", message);
    }

    fn error(&self, message: &str) {
        error!("{}", message);
        self.append("ERROR", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn file_logger_appends_formatted_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");
        let logger = FileLogger::new(&path);

        logger.info("Product is AVAILABLE");
        logger.error("Network error fetching product page");

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(" - INFO - Product is AVAILABLE"));
        assert!(lines[1].contains(" - ERROR - Network error fetching product page"));
    }
}
