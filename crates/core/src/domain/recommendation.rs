use crate::domain::{NewsItem, PricePoint, Symbol};
use crate::sentiment::SentimentTally;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Invest,
    Hold,
    Avoid,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Invest => "Invest",
            Action::Hold => "Hold",
            Action::Avoid => "Avoid",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub action: Action,
    pub rationale: String,
    pub growth_rate: f64,
}

/// Response payload of a single search request.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    #[serde(rename = "input")]
    pub identifier: String,
    #[serde(rename = "stock_symbol")]
    pub symbol: Symbol,
    pub current_price: f64,
    #[serde(rename = "historical_data")]
    pub historical: Vec<PricePoint>,
    pub news: Vec<NewsItem>,
    #[serde(rename = "suggestion")]
    pub action: Action,
    #[serde(rename = "summary")]
    pub rationale: String,
    pub growth_rate: f64,
    pub sentiment: SentimentTally,
}
