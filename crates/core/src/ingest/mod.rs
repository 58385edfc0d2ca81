pub mod alphavantage;
pub mod newsapi;
pub mod provider;
pub mod types;

pub use alphavantage::AlphaVantageClient;
pub use newsapi::NewsApiClient;
pub use provider::{NewsProvider, NewsQuery, StockDataProvider, MAX_NEWS_PAGE_SIZE};
