use signal_core::domain::SearchReport;
use signal_core::trends::MarketTrends;
use std::fmt::Write;

pub fn search_report(report: &SearchReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- Analysis for {} ({}) ---", report.identifier, report.symbol);
    let _ = writeln!(out, "Current Price: ${:.2}", report.current_price);
    let _ = writeln!(out, "5-Year Growth: {:.2}%", report.growth_rate);
    let _ = writeln!(out);
    let _ = writeln!(out, "Top News Articles:");
    if report.news.is_empty() {
        let _ = writeln!(out, "- (none)");
    }
    for article in &report.news {
        let _ = writeln!(out, "- {} ({})", article.title, article.url);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Investment Suggestion: {}", report.action);
    let _ = writeln!(out, "Summary: {}", report.rationale);
    out
}

pub fn market_trends(trends: &MarketTrends) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- Market News Articles ---");
    for article in &trends.news_articles {
        let _ = writeln!(out, "- {} ({})", article.title, article.url);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "--- Sentiment Analysis Summary ---");
    for line in &trends.sentiment_summary {
        let _ = writeln!(out, "- {line}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "--- Overall Summary ---");
    let _ = writeln!(out, "{}", trends.overall_summary);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use signal_core::domain::{Action, NewsItem, Symbol};
    use signal_core::sentiment::{SentimentBucket, SentimentTally};

    #[test]
    fn search_report_lists_news_and_suggestion() {
        let report = SearchReport {
            identifier: "Tesla".to_string(),
            symbol: Symbol::new("TSLA"),
            current_price: 250.0,
            historical: Vec::new(),
            news: vec![NewsItem {
                title: "Tesla rallies".to_string(),
                url: "https://example.com/t".to_string(),
                description: None,
            }],
            action: Action::Hold,
            rationale: "The stock has grown by 5.00% over the past 5 years.".to_string(),
            growth_rate: 5.0,
            sentiment: SentimentTally::default(),
        };

        let text = search_report(&report);
        assert!(text.starts_with("--- Analysis for Tesla (TSLA) ---\n"));
        assert!(text.contains("- Tesla rallies (https://example.com/t)\n"));
        assert!(text.contains("Investment Suggestion: Hold\n"));
    }

    #[test]
    fn trends_ends_with_overall_summary() {
        let trends = MarketTrends {
            news_articles: Vec::new(),
            overall: SentimentBucket::Neutral,
            overall_summary: "neutral".to_string(),
            sentiment_summary: vec!["Neutral: Fed meets".to_string()],
            positive: 0,
            neutral: 1,
            negative: 0,
        };
        let text = market_trends(&trends);
        assert!(text.contains("- Neutral: Fed meets\n"));
        assert!(text.ends_with("--- Overall Summary ---\nneutral\n"));
    }
}
