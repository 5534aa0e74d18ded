//! Environment-driven application configuration.
//!
//! Every external knob lives here and is passed explicitly into the
//! components that need it; nothing reads the environment after startup.

use std::env;
use std::path::PathBuf;

const DEFAULT_DATABASE_URL: &str = "sqlite:newborn_navigator.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    /// Empty means the chat provider is disabled: reflections are absent and
    /// chat turns surface a provider error event
    pub anthropic_api_key: String,
    pub admin_username: String,
    pub admin_password: String,
    pub from_email: String,
    pub email_log_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            anthropic_api_key: env::var("ANTHROPIC_API_KEY").unwrap_or_default(),
            admin_username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string()),
            from_email: env::var("FROM_EMAIL")
                .unwrap_or_else(|_| "hello@newborn-navigator.com".to_string()),
            email_log_dir: env::var("EMAIL_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("email_logs")),
        }
    }
}
