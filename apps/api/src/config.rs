use anyhow::{Context, Result};

const DEFAULT_PORT: &str = "8080";
const DEFAULT_MAX_UPLOAD_BYTES: &str = "10485760";

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Body limit for document uploads.
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", DEFAULT_PORT)
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a positive integer")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_env_defaults() {
        let config = Config::default();
        assert_eq!(config.port.to_string(), DEFAULT_PORT);
        assert_eq!(config.max_upload_bytes.to_string(), DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn test_env_or_falls_back() {
        assert_eq!(env_or("ATS_API_SURELY_UNSET_VARIABLE", "fallback"), "fallback");
    }
}
