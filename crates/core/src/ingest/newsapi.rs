use crate::config::Settings;
use crate::domain::NewsItem;
use crate::error::{SignalError, SignalResult};
use crate::ingest::provider::{NewsProvider, NewsQuery};
use crate::ingest::types::EverythingResponse;
use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderValue};
use std::time::Duration;

const EVERYTHING_PATH: &str = "/v2/everything";

/// NewsAPI-compatible article search (`GET {base}/v2/everything`).
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NewsApiClient {
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let api_key = settings.require_news_api_key()?.to_string();

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.provider_timeout_secs))
            .build()
            .context("failed to build news provider http client")?;

        Ok(Self {
            http,
            base_url: settings.news_api_base_url.clone(),
            api_key,
        })
    }

    fn url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), EVERYTHING_PATH)
    }

    fn headers(&self) -> SignalResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&self.api_key)
            .map_err(|e| SignalError::unexpected(format!("news api key is not a valid header: {e}")))?;
        headers.insert("x-api-key", key);
        Ok(headers)
    }
}

#[async_trait::async_trait]
impl NewsProvider for NewsApiClient {
    fn provider_name(&self) -> &'static str {
        "newsapi"
    }

    async fn search_news(&self, query: &NewsQuery) -> SignalResult<Vec<NewsItem>> {
        let page_size = query.effective_page_size().to_string();
        let mut params = vec![
            ("q", query.q.as_str()),
            ("pageSize", page_size.as_str()),
            ("sortBy", "relevance"),
        ];
        if let Some(language) = query.language.as_deref() {
            params.push(("language", language));
        }

        let res = self
            .http
            .get(self.url())
            .headers(self.headers()?)
            .query(&params)
            .send()
            .await?;

        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            tracing::warn!(%status, q = %query.q, "news provider returned non-success status");
            return Err(SignalError::unavailable(format!("news provider HTTP {status}")));
        }

        let parsed = serde_json::from_str::<EverythingResponse>(&text).map_err(|e| {
            SignalError::unavailable(format!("news provider response is not valid JSON: {e}"))
        })?;
        parsed.into_items()
    }
}
