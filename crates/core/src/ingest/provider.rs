use crate::domain::{NewsItem, PricePoint, Symbol};
use crate::error::SignalResult;

/// Symbol search, quotes and monthly history from a single market-data vendor.
#[async_trait::async_trait]
pub trait StockDataProvider: Send + Sync {
    fn provider_name(&self) -> &'static str;

    /// Candidate symbols for a free-text company name, most relevant first.
    async fn search_symbols(&self, keywords: &str) -> SignalResult<Vec<Symbol>>;

    async fn fetch_quote(&self, symbol: &Symbol) -> SignalResult<f64>;

    /// Monthly closes in the order the vendor returned them. Never re-sorted here.
    async fn fetch_monthly_series(&self, symbol: &Symbol) -> SignalResult<Vec<PricePoint>>;
}

#[async_trait::async_trait]
pub trait NewsProvider: Send + Sync {
    fn provider_name(&self) -> &'static str;

    /// Zero articles is `Ok(vec![])`, not an error.
    async fn search_news(&self, query: &NewsQuery) -> SignalResult<Vec<NewsItem>>;
}

/// Largest page the news provider serves in one request.
pub const MAX_NEWS_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    pub q: String,
    pub page_size: usize,
    pub language: Option<String>,
}

impl NewsQuery {
    pub fn new(q: impl Into<String>, page_size: usize) -> Self {
        Self {
            q: q.into(),
            page_size,
            language: None,
        }
    }

    /// Page size actually requested: at least one article, at most `MAX_NEWS_PAGE_SIZE`.
    pub fn effective_page_size(&self) -> usize {
        self.page_size.clamp(1, MAX_NEWS_PAGE_SIZE)
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}
