use anyhow::{Context, Result};

/// 16 MiB, the total request ceiling for one upload batch.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Decoded text beyond this many characters is not scanned for fields.
pub const DEFAULT_MAX_TEXT_CHARS: usize = 200_000;

/// 32 MiB, the most a DOCX body entry may inflate to before it is cut off.
pub const DEFAULT_MAX_INFLATED_BYTES: usize = 32 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    pub max_text_chars: usize,
    pub max_inflated_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
            max_inflated_bytes: DEFAULT_MAX_INFLATED_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            max_text_chars: parse_env("MAX_TEXT_CHARS", defaults.max_text_chars)
                .context("MAX_TEXT_CHARS must be a character count")?,
            max_inflated_bytes: parse_env("MAX_INFLATED_BYTES", defaults.max_inflated_bytes)
                .context("MAX_INFLATED_BYTES must be a byte count")?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
