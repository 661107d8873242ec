use std::time::Duration;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub books_api_url: String,
    pub cover_base_url: String,
    pub request_timeout: Duration,
    pub expand_duration: Duration,
    pub tick: Duration,
    pub log_file: String,
}

const DEFAULT_BOOKS_API_URL: &str = "https://dev.iqrakitab.net/api/books";
const DEFAULT_COVER_BASE_URL: &str = "https://dev.iqrakitab.net";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
const DEFAULT_EXPAND_DURATION_MS: u64 = 300;
const DEFAULT_TICK_MS: u64 = 16;
const DEFAULT_LOG_FILE: &str = "iqra_books.log";

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let books_api_url =
            std::env::var("BOOKS_API_URL").unwrap_or(DEFAULT_BOOKS_API_URL.into());
        let cover_base_url =
            std::env::var("COVER_BASE_URL").unwrap_or(DEFAULT_COVER_BASE_URL.into());
        let log_file = std::env::var("LOG_FILE").unwrap_or(DEFAULT_LOG_FILE.into());
        Ok(Config {
            books_api_url,
            cover_base_url,
            request_timeout: Duration::from_secs(env_u64(
                "REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?),
            expand_duration: Duration::from_millis(env_u64(
                "EXPAND_DURATION_MS",
                DEFAULT_EXPAND_DURATION_MS,
            )?),
            tick: Duration::from_millis(env_u64("TICK_MS", DEFAULT_TICK_MS)?),
            log_file,
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.books_api_url.is_empty() {
            return Err("BOOKS_API_URL is empty".into());
        }
        if self.cover_base_url.is_empty() {
            return Err("COVER_BASE_URL is empty".into());
        }
        if self.request_timeout.is_zero() {
            return Err("REQUEST_TIMEOUT_SECS must be greater than zero".into());
        }
        if self.expand_duration.is_zero() {
            return Err("EXPAND_DURATION_MS must be greater than zero".into());
        }
        if self.tick.is_zero() {
            return Err("TICK_MS must be greater than zero".into());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            books_api_url: DEFAULT_BOOKS_API_URL.into(),
            cover_base_url: DEFAULT_COVER_BASE_URL.into(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            expand_duration: Duration::from_millis(DEFAULT_EXPAND_DURATION_MS),
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            log_file: DEFAULT_LOG_FILE.into(),
        }
    }
}

fn env_u64(key: &str, default: u64) -> anyhow::Result<u64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("Invalid {}: {}", key, raw)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = Config::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.expand_duration, Duration::from_millis(300));
        assert_eq!(c.books_api_url, "https://dev.iqrakitab.net/api/books");
    }

    #[test]
    fn validate_rejects_empty_urls_and_zero_durations() {
        let c = Config {
            books_api_url: String::new(),
            ..Config::default()
        };
        assert_eq!(c.validate().unwrap_err(), "BOOKS_API_URL is empty");

        let c = Config {
            expand_duration: Duration::ZERO,
            ..Config::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn env_u64_falls_back_and_reports_garbage() {
        assert_eq!(env_u64("IQRA_BOOKS_TEST_UNSET_KEY", 7).unwrap(), 7);
        // SAFETY: key is unique to this test.
        unsafe { std::env::set_var("IQRA_BOOKS_TEST_GARBAGE_KEY", "abc") };
        let err = env_u64("IQRA_BOOKS_TEST_GARBAGE_KEY", 7).unwrap_err();
        assert!(err.to_string().contains("IQRA_BOOKS_TEST_GARBAGE_KEY"));
    }
}
