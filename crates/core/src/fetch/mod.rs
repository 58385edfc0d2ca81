pub mod market;
pub mod news;

pub use market::fetch_market_snapshot;
pub use news::{fetch_market_news, fetch_symbol_news, MARKET_NEWS_QUERY};
