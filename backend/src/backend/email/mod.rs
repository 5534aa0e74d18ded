//! # Mailer
//!
//! Fire-and-forget outbound email port. The default implementation writes
//! each message to a local log directory instead of sending, keeping the
//! rest of the system identical whether or not a real delivery service is
//! wired in.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Receipt returned for every accepted message.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryReceipt {
    pub delivery_id: String,
    pub status: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<DeliveryReceipt>;
}

/// Mailer that logs messages to disk: one JSON metadata file and one HTML
/// body per message.
pub struct FileLogMailer {
    from_email: String,
    log_dir: PathBuf,
}

#[derive(Serialize)]
struct EmailLogEntry<'a> {
    to: &'a str,
    from: &'a str,
    subject: &'a str,
    timestamp: String,
}

impl FileLogMailer {
    pub fn new(from_email: String, log_dir: PathBuf) -> Self {
        Self {
            from_email,
            log_dir,
        }
    }
}

#[async_trait]
impl Mailer for FileLogMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<DeliveryReceipt> {
        tokio::fs::create_dir_all(&self.log_dir).await?;

        let now = Utc::now();
        let stamp = now.format("%Y%m%d_%H%M%S%3f").to_string();
        let safe_to = to.replace('@', "_at_");

        let entry = EmailLogEntry {
            to,
            from: &self.from_email,
            subject,
            timestamp: now.to_rfc3339(),
        };
        let meta_path = self.log_dir.join(format!("{}_{}.json", stamp, safe_to));
        tokio::fs::write(&meta_path, serde_json::to_vec_pretty(&entry)?).await?;

        let html_path = self.log_dir.join(format!("{}_{}.html", stamp, safe_to));
        tokio::fs::write(&html_path, html_body).await?;

        info!("Logged email to {} at {}", to, html_path.display());

        Ok(DeliveryReceipt {
            delivery_id: format!("log_{}", stamp),
            status: "logged".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_writes_metadata_and_body() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mailer = FileLogMailer::new(
            "hello@newborn-navigator.com".to_string(),
            dir.path().to_path_buf(),
        );

        let receipt = mailer
            .send("parent@example.com", "Week 3 update", "<h1>Hi!</h1>")
            .await
            .expect("Failed to log email");

        assert_eq!(receipt.status, "logged");
        assert!(receipt.delivery_id.starts_with("log_"));

        let mut json_files = 0;
        let mut html_files = 0;
        for entry in std::fs::read_dir(dir.path()).unwrap() {
            let name = entry.unwrap().file_name().to_string_lossy().to_string();
            assert!(name.contains("parent_at_example.com"));
            if name.ends_with(".json") {
                json_files += 1;
            } else if name.ends_with(".html") {
                html_files += 1;
            }
        }
        assert_eq!((json_files, html_files), (1, 1));
    }
}
