use crate::config::Settings;
use crate::domain::{NewsItem, SearchReport};
use crate::engine;
use crate::error::SignalResult;
use crate::fetch::{fetch_market_snapshot, fetch_symbol_news};
use crate::ingest::{AlphaVantageClient, NewsApiClient, NewsProvider, StockDataProvider};
use crate::resolver;
use crate::sentiment::{LexiconClassifier, SentimentClassifier, SentimentTally};
use crate::trends::{self, MarketTrends};
use std::sync::Arc;

/// Entry point: resolve, fetch market data and news, recommend, assemble.
#[derive(Clone)]
pub struct Aggregator {
    stocks: Arc<dyn StockDataProvider>,
    news: Arc<dyn NewsProvider>,
    classifier: Arc<dyn SentimentClassifier>,
    news_page_size: usize,
    history_window: usize,
}

impl Aggregator {
    pub fn new(
        stocks: Arc<dyn StockDataProvider>,
        news: Arc<dyn NewsProvider>,
        classifier: Arc<dyn SentimentClassifier>,
        settings: &Settings,
    ) -> Self {
        Self {
            stocks,
            news,
            classifier,
            news_page_size: settings.news_page_size,
            history_window: settings.history_window,
        }
    }

    /// Wires the HTTP provider clients and the lexicon classifier.
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let stocks = AlphaVantageClient::from_settings(settings)?;
        let news = NewsApiClient::from_settings(settings)?;
        Ok(Self::new(
            Arc::new(stocks),
            Arc::new(news),
            Arc::new(LexiconClassifier::new()),
            settings,
        ))
    }

    pub async fn search(&self, identifier: &str) -> SignalResult<SearchReport> {
        let symbol = resolver::resolve(self.stocks.as_ref(), identifier).await?;

        let (market, news) = tokio::join!(
            fetch_market_snapshot(self.stocks.as_ref(), &symbol, self.history_window),
            fetch_symbol_news(self.news.as_ref(), &symbol, self.news_page_size),
        );
        let market = market?;
        let news = news?;

        let sentiment = SentimentTally::from_news(self.classifier.as_ref(), &news);
        let recommendation =
            engine::recommend(&market.historical, market.current_price, &news)?;

        tracing::info!(
            identifier,
            %symbol,
            current_price = market.current_price,
            growth_rate = recommendation.growth_rate,
            news = news.len(),
            action = %recommendation.action,
            "search completed"
        );

        Ok(SearchReport {
            identifier: identifier.to_string(),
            symbol,
            current_price: market.current_price,
            historical: market.historical,
            news: news.into_iter().map(headline_only).collect(),
            action: recommendation.action,
            rationale: recommendation.rationale,
            growth_rate: recommendation.growth_rate,
            sentiment,
        })
    }

    pub async fn market_trends(&self) -> SignalResult<MarketTrends> {
        trends::market_trends(
            self.news.as_ref(),
            self.classifier.as_ref(),
            self.news_page_size,
        )
        .await
    }
}

/// Symbol reports carry title and url only; descriptions are used for the tally.
fn headline_only(item: NewsItem) -> NewsItem {
    NewsItem {
        description: None,
        ..item
    }
}
