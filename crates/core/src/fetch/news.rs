use crate::domain::{NewsItem, Symbol};
use crate::error::SignalResult;
use crate::ingest::{NewsProvider, NewsQuery};

/// Query used for the market-wide trends report.
pub const MARKET_NEWS_QUERY: &str = "stock market growth";

pub async fn fetch_symbol_news(
    provider: &dyn NewsProvider,
    symbol: &Symbol,
    page_size: usize,
) -> SignalResult<Vec<NewsItem>> {
    let query = NewsQuery::new(symbol.as_str(), page_size);
    fetch(provider, &query).await
}

pub async fn fetch_market_news(
    provider: &dyn NewsProvider,
    page_size: usize,
) -> SignalResult<Vec<NewsItem>> {
    let query = NewsQuery::new(MARKET_NEWS_QUERY, page_size).with_language("en");
    fetch(provider, &query).await
}

async fn fetch(provider: &dyn NewsProvider, query: &NewsQuery) -> SignalResult<Vec<NewsItem>> {
    let mut items = provider
        .search_news(query)
        .await
        .map_err(|e| e.at("news"))?;
    items.truncate(query.effective_page_size());

    if items.is_empty() {
        tracing::info!(q = %query.q, provider = provider.provider_name(), "news search returned no articles");
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording {
        seen: Mutex<Vec<NewsQuery>>,
        articles: usize,
    }

    #[async_trait::async_trait]
    impl NewsProvider for Recording {
        fn provider_name(&self) -> &'static str {
            "recording"
        }

        async fn search_news(&self, query: &NewsQuery) -> SignalResult<Vec<NewsItem>> {
            self.seen.lock().unwrap().push(query.clone());
            Ok((0..self.articles)
                .map(|i| NewsItem {
                    title: format!("headline {i}"),
                    url: format!("https://example.com/{i}"),
                    description: None,
                })
                .collect())
        }
    }

    #[tokio::test]
    async fn market_news_uses_fixed_english_query() {
        let provider = Recording::default();
        fetch_market_news(&provider, 5).await.unwrap();

        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen[0].q, MARKET_NEWS_QUERY);
        assert_eq!(seen[0].language.as_deref(), Some("en"));
        assert_eq!(seen[0].page_size, 5);
    }

    #[tokio::test]
    async fn symbol_news_is_capped_at_page_size() {
        let provider = Recording {
            articles: 9,
            ..Default::default()
        };
        let items = fetch_symbol_news(&provider, &Symbol::new("TSLA"), 5)
            .await
            .unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(provider.seen.lock().unwrap()[0].q, "TSLA");
    }

    #[tokio::test]
    async fn zero_page_size_still_keeps_one_article() {
        let provider = Recording {
            articles: 3,
            ..Default::default()
        };
        let items = fetch_symbol_news(&provider, &Symbol::new("TSLA"), 0)
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn zero_articles_is_ok() {
        let provider = Recording::default();
        let items = fetch_symbol_news(&provider, &Symbol::new("TSLA"), 5)
            .await
            .unwrap();
        assert!(items.is_empty());
    }
}
