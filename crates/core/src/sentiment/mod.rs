//! Sign-bucketed sentiment over article descriptions.
//!
//! The classifier is a trait so a stronger model can replace the lexicon scorer without touching
//! the recommendation engine or the trends report.

pub mod lexicon;

pub use lexicon::LexiconClassifier;

use crate::domain::NewsItem;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SentimentBucket {
    Positive,
    Neutral,
    Negative,
}

impl SentimentBucket {
    /// Buckets by sign. NaN has no sign and lands in `Neutral`.
    pub fn from_polarity(score: f64) -> Self {
        if score > 0.0 {
            SentimentBucket::Positive
        } else if score < 0.0 {
            SentimentBucket::Negative
        } else {
            SentimentBucket::Neutral
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SentimentBucket::Positive => "Positive",
            SentimentBucket::Neutral => "Neutral",
            SentimentBucket::Negative => "Negative",
        }
    }
}

pub trait SentimentClassifier: Send + Sync {
    /// Polarity in `[-1, 1]`; positive is favourable.
    fn polarity(&self, text: &str) -> f64;

    fn classify(&self, text: &str) -> SentimentBucket {
        SentimentBucket::from_polarity(self.polarity(text))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadlineSentiment {
    pub bucket: SentimentBucket,
    pub title: String,
}

impl HeadlineSentiment {
    /// "Positive: {title}" style line.
    pub fn summary_line(&self) -> String {
        format!("{}: {}", self.bucket.label(), self.title)
    }
}

/// Bucket counts over the items that carry a non-empty description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SentimentTally {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    pub headlines: Vec<HeadlineSentiment>,
}

impl SentimentTally {
    pub fn from_news(classifier: &dyn SentimentClassifier, news: &[NewsItem]) -> Self {
        let mut tally = Self::default();
        for item in news {
            let Some(text) = item.text() else {
                continue;
            };
            let bucket = classifier.classify(text);
            match bucket {
                SentimentBucket::Positive => tally.positive += 1,
                SentimentBucket::Neutral => tally.neutral += 1,
                SentimentBucket::Negative => tally.negative += 1,
            }
            tally.headlines.push(HeadlineSentiment {
                bucket,
                title: item.title.clone(),
            });
        }
        tally
    }

    pub fn classified(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// Positive beats negative, negative beats positive, a tie is neutral.
    pub fn overall(&self) -> SentimentBucket {
        use std::cmp::Ordering;
        match self.positive.cmp(&self.negative) {
            Ordering::Greater => SentimentBucket::Positive,
            Ordering::Less => SentimentBucket::Negative,
            Ordering::Equal => SentimentBucket::Neutral,
        }
    }
}
