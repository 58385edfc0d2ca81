use crate::config::Settings;
use crate::domain::{PricePoint, Symbol};
use crate::error::{SignalError, SignalResult};
use crate::ingest::provider::StockDataProvider;
use crate::ingest::types::{GlobalQuoteResponse, MonthlyAdjustedResponse, SymbolSearchResponse};
use anyhow::Context;
use serde::de::DeserializeOwned;
use std::time::Duration;

const QUERY_PATH: &str = "/query";

/// Alpha Vantage-compatible stocks endpoint (`GET {base}/query?function=...`).
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AlphaVantageClient {
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let api_key = settings.require_stocks_api_key()?.to_string();

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.provider_timeout_secs))
            .build()
            .context("failed to build stocks provider http client")?;

        Ok(Self {
            http,
            base_url: settings.stocks_api_base_url.clone(),
            api_key,
        })
    }

    fn url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), QUERY_PATH)
    }

    async fn query<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> SignalResult<T> {
        let function = params
            .iter()
            .find(|(k, _)| *k == "function")
            .map(|(_, v)| *v)
            .unwrap_or("unknown");

        let res = self
            .http
            .get(self.url())
            .query(params)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            tracing::warn!(%status, function, "stocks provider returned non-success status");
            return Err(SignalError::unavailable(format!(
                "stocks provider HTTP {status} for {function}"
            )));
        }

        serde_json::from_str::<T>(&text).map_err(|e| {
            SignalError::unavailable(format!(
                "stocks provider response for {function} is not valid JSON: {e}"
            ))
        })
    }
}

#[async_trait::async_trait]
impl StockDataProvider for AlphaVantageClient {
    fn provider_name(&self) -> &'static str {
        "alphavantage"
    }

    async fn search_symbols(&self, keywords: &str) -> SignalResult<Vec<Symbol>> {
        let resp: SymbolSearchResponse = self
            .query(&[("function", "SYMBOL_SEARCH"), ("keywords", keywords)])
            .await?;
        resp.notice.check()?;
        Ok(resp
            .best_matches
            .into_iter()
            .map(|m| Symbol::new(m.symbol))
            .filter(|s| !s.as_str().is_empty())
            .collect())
    }

    async fn fetch_quote(&self, symbol: &Symbol) -> SignalResult<f64> {
        let resp: GlobalQuoteResponse = self
            .query(&[("function", "GLOBAL_QUOTE"), ("symbol", symbol.as_str())])
            .await?;
        resp.into_price()
    }

    async fn fetch_monthly_series(&self, symbol: &Symbol) -> SignalResult<Vec<PricePoint>> {
        let resp: MonthlyAdjustedResponse = self
            .query(&[
                ("function", "TIME_SERIES_MONTHLY_ADJUSTED"),
                ("symbol", symbol.as_str()),
            ])
            .await?;
        resp.into_points()
    }
}
