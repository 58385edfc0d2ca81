pub mod aggregator;
pub mod domain;
pub mod engine;
pub mod error;
pub mod fetch;
pub mod ingest;
pub mod resolver;
pub mod sentiment;
pub mod trends;

pub use error::{ErrorKind, SignalError};

pub mod config {
    use anyhow::Context;

    pub const DEFAULT_STOCKS_API_BASE_URL: &str = "https://www.alphavantage.co";
    pub const DEFAULT_NEWS_API_BASE_URL: &str = "https://newsapi.org";
    pub const DEFAULT_NEWS_PAGE_SIZE: usize = 5;
    pub const DEFAULT_HISTORY_WINDOW: usize = 60;
    pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 10;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub stocks_api_base_url: String,
        pub stocks_api_key: Option<String>,
        pub news_api_base_url: String,
        pub news_api_key: Option<String>,
        pub news_page_size: usize,
        pub history_window: usize,
        pub provider_timeout_secs: u64,
        pub sentry_dsn: Option<String>,
    }

    impl Default for Settings {
        fn default() -> Self {
            Self {
                stocks_api_base_url: DEFAULT_STOCKS_API_BASE_URL.to_string(),
                stocks_api_key: None,
                news_api_base_url: DEFAULT_NEWS_API_BASE_URL.to_string(),
                news_api_key: None,
                news_page_size: DEFAULT_NEWS_PAGE_SIZE,
                history_window: DEFAULT_HISTORY_WINDOW,
                provider_timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
                sentry_dsn: None,
            }
        }
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let defaults = Self::default();
            Ok(Self {
                stocks_api_base_url: non_empty_var("STOCKS_API_BASE_URL")
                    .unwrap_or(defaults.stocks_api_base_url),
                stocks_api_key: non_empty_var("STOCKS_API_KEY"),
                news_api_base_url: non_empty_var("NEWS_API_BASE_URL")
                    .unwrap_or(defaults.news_api_base_url),
                news_api_key: non_empty_var("NEWS_API_KEY"),
                news_page_size: parsed_var("NEWS_PAGE_SIZE")?.unwrap_or(defaults.news_page_size),
                history_window: parsed_var("HISTORY_WINDOW")?.unwrap_or(defaults.history_window),
                provider_timeout_secs: parsed_var("PROVIDER_TIMEOUT_SECS")?
                    .unwrap_or(defaults.provider_timeout_secs),
                sentry_dsn: non_empty_var("SENTRY_DSN"),
            })
        }

        pub fn require_stocks_api_key(&self) -> anyhow::Result<&str> {
            self.stocks_api_key
                .as_deref()
                .context("STOCKS_API_KEY is required")
        }

        pub fn require_news_api_key(&self) -> anyhow::Result<&str> {
            self.news_api_key
                .as_deref()
                .context("NEWS_API_KEY is required")
        }
    }

    fn non_empty_var(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.trim().is_empty())
    }

    fn parsed_var<T>(key: &str) -> anyhow::Result<Option<T>>
    where
        T: std::str::FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        non_empty_var(key)
            .map(|s| {
                s.trim()
                    .parse::<T>()
                    .with_context(|| format!("{key} must be a number (got {s:?})"))
            })
            .transpose()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn defaults_cover_the_five_year_monthly_window() {
            let settings = Settings::default();
            assert_eq!(settings.history_window, 60);
            assert_eq!(settings.news_page_size, 5);
            assert!(settings.require_stocks_api_key().is_err());
            assert!(settings.require_news_api_key().is_err());
        }
    }
}
