use crate::sentiment::SentimentClassifier;
use std::collections::HashSet;

const POSITIVE_WORDS: &[&str] = &[
    "bullish", "rally", "rallies", "rallied", "surge", "surges", "surged", "soar", "soars",
    "soared", "gain", "gains", "gained", "profit", "profits", "profitable", "growth", "grow",
    "grows", "grew", "beat", "beats", "upgrade", "upgraded", "outperform", "outperforms",
    "strong", "stronger", "positive", "rise", "rises", "rose", "increase", "increased",
    "breakthrough", "innovation", "success", "successful", "exceed", "exceeds", "exceeded",
    "momentum", "optimistic", "optimism", "record", "high", "higher", "advance", "advances",
    "dividend", "buyback", "upside", "recovery", "rebound", "rebounds", "expansion", "robust",
    "accelerating", "boost", "boosts", "boosted", "good", "great", "best", "win", "wins",
    "favorable", "confident", "confidence", "tailwind",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bearish", "decline", "declines", "declined", "loss", "losses", "fall", "falls", "fell",
    "plunge", "plunges", "plunged", "crash", "crashes", "crashed", "miss", "misses", "missed",
    "downgrade", "downgraded", "underperform", "weak", "weaker", "negative", "drop", "drops",
    "dropped", "decrease", "decreased", "concern", "concerns", "risk", "risks", "risky", "fail",
    "fails", "failed", "disappoint", "disappointing", "slump", "slumps", "warning", "warns",
    "pessimistic", "low", "lower", "retreat", "fear", "fears", "trouble", "headwind",
    "lawsuit", "investigation", "probe", "default", "bankruptcy", "layoff", "layoffs",
    "downside", "overvalued", "bubble", "recession", "volatile", "volatility", "bad", "worst",
    "uncertain", "uncertainty", "selloff", "sell-off", "tumble", "tumbles", "tumbled",
];

const NEGATION_WORDS: &[&str] = &[
    "not", "no", "never", "don't", "doesn't", "didn't", "isn't", "aren't", "wasn't", "weren't",
    "won't", "wouldn't", "couldn't", "shouldn't", "hardly", "barely", "neither", "nor",
    "without",
];

/// A lexicon hit preceded by a negation within this many words flips sign.
const NEGATION_WINDOW: usize = 3;

/// Word-list polarity scorer: `(positive - negative) / (positive + negative)`.
#[derive(Debug, Clone)]
pub struct LexiconClassifier {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
    negation: HashSet<&'static str>,
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconClassifier {
    pub fn new() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().copied().collect(),
            negative: NEGATIVE_WORDS.iter().copied().collect(),
            negation: NEGATION_WORDS.iter().copied().collect(),
        }
    }

    fn tokens(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '-'))
            .map(|w| w.trim_matches(|c: char| c == '\'' || c == '-'))
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl SentimentClassifier for LexiconClassifier {
    fn polarity(&self, text: &str) -> f64 {
        let words = Self::tokens(text);

        let mut favourable = 0u32;
        let mut unfavourable = 0u32;
        let mut last_negation: Option<usize> = None;

        for (i, word) in words.iter().enumerate() {
            let word = word.as_str();
            if self.negation.contains(word) {
                last_negation = Some(i);
                continue;
            }

            let is_positive = self.positive.contains(word);
            let is_negative = self.negative.contains(word);
            if !is_positive && !is_negative {
                continue;
            }

            let negated = last_negation.is_some_and(|n| i - n <= NEGATION_WINDOW);
            if is_positive != negated {
                favourable += 1;
            } else {
                unfavourable += 1;
            }
        }

        let hits = favourable + unfavourable;
        if hits == 0 {
            return 0.0;
        }
        (f64::from(favourable) - f64::from(unfavourable)) / f64::from(hits)
    }
}
