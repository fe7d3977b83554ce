use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound for uploaded PDF size, enforced via `DefaultBodyLimit`.
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests run in parallel but the process environment is global.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_vars() {
        for key in ["PORT", "RUST_LOG", "MAX_UPLOAD_BYTES"] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_defaults_when_env_unset() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_vars();
        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_env_overrides_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_vars();
        std::env::set_var("PORT", "9000");
        std::env::set_var("RUST_LOG", "debug");
        std::env::set_var("MAX_UPLOAD_BYTES", "1024");
        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.max_upload_bytes, 1024);
        clear_vars();
    }

    #[test]
    fn test_non_numeric_port_reports_context() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_vars();
        std::env::set_var("PORT", "not-a-port");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("PORT must be a valid port number"));
        clear_vars();
    }
}
