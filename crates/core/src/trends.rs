//! Market-wide news sentiment report.

use crate::domain::NewsItem;
use crate::error::SignalResult;
use crate::fetch::fetch_market_news;
use crate::ingest::NewsProvider;
use crate::sentiment::{SentimentBucket, SentimentClassifier, SentimentTally};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MarketTrends {
    pub news_articles: Vec<NewsItem>,
    pub overall: SentimentBucket,
    pub overall_summary: String,
    pub sentiment_summary: Vec<String>,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

pub fn overall_summary(overall: SentimentBucket) -> &'static str {
    match overall {
        SentimentBucket::Positive => {
            "The overall sentiment around the stock market growth is positive. This may indicate a favorable investment climate."
        }
        SentimentBucket::Negative => {
            "The overall sentiment around the stock market growth is negative. Caution is advised before making investment decisions."
        }
        SentimentBucket::Neutral => {
            "The overall sentiment around the stock market growth is neutral. Market conditions may be stable but uncertain."
        }
    }
}

pub fn build_market_trends(
    classifier: &dyn SentimentClassifier,
    news_articles: Vec<NewsItem>,
) -> MarketTrends {
    let tally = SentimentTally::from_news(classifier, &news_articles);
    let overall = tally.overall();

    MarketTrends {
        overall,
        overall_summary: overall_summary(overall).to_string(),
        sentiment_summary: tally.headlines.iter().map(|h| h.summary_line()).collect(),
        positive: tally.positive,
        neutral: tally.neutral,
        negative: tally.negative,
        news_articles,
    }
}

pub async fn market_trends(
    provider: &dyn NewsProvider,
    classifier: &dyn SentimentClassifier,
    page_size: usize,
) -> SignalResult<MarketTrends> {
    let articles = fetch_market_news(provider, page_size).await?;
    let trends = build_market_trends(classifier, articles);

    tracing::info!(
        articles = trends.news_articles.len(),
        positive = trends.positive,
        neutral = trends.neutral,
        negative = trends.negative,
        overall = trends.overall.label(),
        "built market trends report"
    );
    Ok(trends)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::LexiconClassifier;

    fn article(title: &str, description: Option<&str>) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            url: format!("https://example.com/{}", title.len()),
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn summarises_each_described_article() {
        let trends = build_market_trends(
            &LexiconClassifier::new(),
            vec![
                article("Stocks climb", Some("Markets rallied on strong jobs data")),
                article("Futures slip", Some("Shares fell as recession fears grew louder and losses mounted")),
                article("Fed meets", Some("Policymakers gather on Wednesday")),
                article("Video", None),
            ],
        );

        assert_eq!(trends.news_articles.len(), 4);
        assert_eq!(
            trends.sentiment_summary,
            vec![
                "Positive: Stocks climb".to_string(),
                "Negative: Futures slip".to_string(),
                "Neutral: Fed meets".to_string(),
            ]
        );
        assert_eq!(trends.overall, SentimentBucket::Neutral);
        assert_eq!(
            trends.overall_summary,
            "The overall sentiment around the stock market growth is neutral. Market conditions may be stable but uncertain."
        );
    }

    #[test]
    fn positive_majority() {
        let trends = build_market_trends(
            &LexiconClassifier::new(),
            vec![
                article("a", Some("Strong gains across sectors")),
                article("b", Some("Record highs for tech")),
                article("c", Some("Losses in energy")),
            ],
        );
        assert_eq!(trends.overall, SentimentBucket::Positive);
        assert_eq!((trends.positive, trends.negative), (2, 1));
    }

    #[test]
    fn empty_feed_is_neutral() {
        let trends = build_market_trends(&LexiconClassifier::new(), Vec::new());
        assert_eq!(trends.overall, SentimentBucket::Neutral);
        assert!(trends.sentiment_summary.is_empty());
    }
}
