//! Application configuration.

use std::env;

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen port for the frontend server
    pub port: u16,
    /// Base URL of the backend diagnosis API
    pub backend_url: String,
    /// Verbose logging switch
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            backend_url: "http://localhost:8000".to_string(),
            debug: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080);

        let backend_url = env::var("BACKEND_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "http://localhost:8000".to_string());

        let debug = resolve_debug(env::var("DEBUG").ok(), env::var("APP_DEBUG").ok());

        Self {
            port,
            backend_url,
            debug,
        }
    }
}

/// The debug switch honors two variable names; the first value that
/// parses as a bool wins, anything else reads as off.
fn resolve_debug(primary: Option<String>, fallback: Option<String>) -> bool {
    primary
        .and_then(|v| v.parse().ok())
        .or_else(|| fallback.and_then(|v| v.parse().ok()))
        .unwrap_or(false)
}
