use crate::domain::{NewsItem, PricePoint};
use crate::error::{SignalError, SignalResult};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Vendor notices that arrive with HTTP 200 instead of the requested payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderNotice {
    #[serde(rename = "Error Message", default)]
    pub error_message: Option<String>,
    #[serde(rename = "Note", default)]
    pub note: Option<String>,
    #[serde(rename = "Information", default)]
    pub information: Option<String>,
}

impl ProviderNotice {
    pub fn check(&self) -> SignalResult<()> {
        if let Some(msg) = &self.error_message {
            return Err(SignalError::not_found(msg.clone()));
        }
        if let Some(msg) = self.note.as_ref().or(self.information.as_ref()) {
            return Err(SignalError::unavailable(msg.clone()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SymbolSearchResponse {
    #[serde(rename = "bestMatches", default)]
    pub best_matches: Vec<SymbolMatch>,
    #[serde(flatten)]
    pub notice: ProviderNotice,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SymbolMatch {
    #[serde(rename = "1. symbol")]
    pub symbol: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote", default)]
    pub quote: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub notice: ProviderNotice,
}

impl GlobalQuoteResponse {
    pub fn into_price(self) -> SignalResult<f64> {
        self.notice.check()?;
        let quote = self
            .quote
            .ok_or_else(|| SignalError::unavailable("response has no \"Global Quote\" object"))?;
        if quote.is_empty() {
            return Err(SignalError::not_found("quote is empty for this symbol"));
        }
        let raw = quote
            .get("05. price")
            .ok_or_else(|| SignalError::unavailable("quote has no \"05. price\" field"))?;
        parse_price(raw, "05. price")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonthlyAdjustedResponse {
    #[serde(rename = "Monthly Adjusted Time Series", default)]
    pub series: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub notice: ProviderNotice,
}

#[derive(Debug, Clone, Deserialize)]
struct MonthlyBar {
    #[serde(rename = "5. adjusted close", default)]
    adjusted_close: Option<Value>,
    #[serde(rename = "4. close", default)]
    close: Option<Value>,
}

impl MonthlyAdjustedResponse {
    /// Converts every period to a `PricePoint`, keeping the vendor's key order.
    pub fn into_points(self) -> SignalResult<Vec<PricePoint>> {
        self.notice.check()?;
        let series = self.series.ok_or_else(|| {
            SignalError::unavailable("response has no \"Monthly Adjusted Time Series\" object")
        })?;

        let mut out = Vec::with_capacity(series.len());
        for (date, bar) in series {
            let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .map_err(|e| SignalError::unexpected(format!("invalid period date {date:?}: {e}")))?;
            let bar = serde_json::from_value::<MonthlyBar>(bar)
                .map_err(|e| SignalError::unavailable(format!("malformed period {date}: {e}")))?;
            let raw = bar.adjusted_close.or(bar.close).ok_or_else(|| {
                SignalError::unavailable(format!("period {date} has no close price"))
            })?;
            out.push(PricePoint::new(date, parse_price(&raw, "close")?));
        }
        Ok(out)
    }
}

/// Vendor prices are string-encoded; plain JSON numbers are accepted as well.
fn parse_price(raw: &Value, field: &str) -> SignalResult<f64> {
    let price = match raw {
        Value::String(s) => s.trim().parse::<f64>().map_err(|e| {
            SignalError::unexpected(format!("{field} is not a number ({s:?}): {e}"))
        })?,
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| SignalError::unexpected(format!("{field} is out of range: {n}")))?,
        other => {
            return Err(SignalError::unexpected(format!(
                "{field} has unexpected type: {other}"
            )))
        }
    };
    if !price.is_finite() || price <= 0.0 {
        return Err(SignalError::unexpected(format!(
            "{field} must be a positive price (got {price})"
        )));
    }
    Ok(price)
}

#[derive(Debug, Clone, Deserialize)]
pub struct EverythingResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub articles: Vec<RawArticle>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl EverythingResponse {
    pub fn into_items(self) -> SignalResult<Vec<NewsItem>> {
        if self.status.as_deref() == Some("error") {
            let msg = self.message.unwrap_or_else(|| "news provider error".to_string());
            return Err(SignalError::unavailable(msg));
        }

        Ok(self
            .articles
            .into_iter()
            .filter_map(|a| {
                let title = a.title.filter(|s| !s.trim().is_empty())?;
                let url = a.url.filter(|s| !s.trim().is_empty())?;
                Some(NewsItem {
                    title,
                    url,
                    description: a.description,
                })
            })
            .collect())
    }
}
