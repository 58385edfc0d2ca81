//! Rule-based invest/hold/avoid decision over five-year growth and news volume.

use crate::domain::{Action, NewsItem, PricePoint, Recommendation};
use crate::error::{SignalError, SignalResult};

/// Growth (in percent) that must be exceeded for `Invest`.
pub const INVEST_GROWTH_THRESHOLD: f64 = 20.0;

/// News items required alongside strong growth for `Invest`.
pub const INVEST_MIN_NEWS: usize = 3;

/// Percentage change from the chronologically oldest to the newest point.
///
/// Points are ordered by date before taking the endpoints, so the result does not depend on the
/// order the provider returned them in.
pub fn growth_rate(historical: &[PricePoint]) -> SignalResult<f64> {
    let mut points: Vec<&PricePoint> = historical.iter().collect();
    points.sort_by_key(|p| p.date);

    let (Some(oldest), Some(newest)) = (points.first(), points.last()) else {
        return Err(SignalError::unexpected(
            "growth rate needs at least one historical price",
        ));
    };

    if oldest.price == 0.0 {
        return Err(SignalError::unexpected(format!(
            "oldest price on {} is zero; growth rate is undefined",
            oldest.date
        )));
    }

    let rate = (newest.price - oldest.price) / oldest.price * 100.0;
    if !rate.is_finite() {
        return Err(SignalError::unexpected(format!(
            "growth rate is not finite ({} -> {})",
            oldest.price, newest.price
        )));
    }
    Ok(rate)
}

/// First matching row wins: strong growth with enough news, then any growth, then avoid.
pub fn decide(growth_rate: f64, news_count: usize) -> Action {
    if growth_rate > INVEST_GROWTH_THRESHOLD && news_count >= INVEST_MIN_NEWS {
        Action::Invest
    } else if growth_rate > 0.0 {
        Action::Hold
    } else {
        Action::Avoid
    }
}

pub fn rationale(action: Action, growth_rate: f64) -> String {
    match action {
        Action::Invest => format!(
            "The stock has shown a strong growth rate of {growth_rate:.2}% over the past 5 years, \
             and recent news sentiment is predominantly positive. This indicates good potential for investment."
        ),
        Action::Hold => format!(
            "The stock has grown by {growth_rate:.2}% over the past 5 years. However, mixed or neutral news sentiment \
             suggests that it may be better to wait before making a decision."
        ),
        Action::Avoid => format!(
            "The stock has declined by {growth_rate:.2}% over the past 5 years, and recent news sentiment is not \
             favorable. Investing in this stock may carry significant risk."
        ),
    }
}

/// Pure function of its inputs; `current_price` is carried for the report and does not enter
/// the decision.
pub fn recommend(
    historical: &[PricePoint],
    current_price: f64,
    news: &[NewsItem],
) -> SignalResult<Recommendation> {
    let growth_rate = growth_rate(historical)?;
    let action = decide(growth_rate, news.len());

    tracing::debug!(
        growth_rate,
        current_price,
        news = news.len(),
        %action,
        "computed recommendation"
    );

    Ok(Recommendation {
        action,
        rationale: rationale(action, growth_rate),
        growth_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use chrono::{Months, NaiveDate};

    /// Evenly spaced monthly points, newest first like the vendor feed.
    fn series(oldest: f64, newest: f64, len: u32) -> Vec<PricePoint> {
        let newest_date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let step = if len > 1 { (newest - oldest) / f64::from(len - 1) } else { 0.0 };
        (0..len)
            .map(|i| {
                PricePoint::new(newest_date - Months::new(i), newest - step * f64::from(i))
            })
            .collect()
    }

    fn news(n: usize) -> Vec<NewsItem> {
        (0..n)
            .map(|i| NewsItem {
                title: format!("story {i}"),
                url: format!("https://example.com/{i}"),
                description: None,
            })
            .collect()
    }

    #[test]
    fn growth_is_oldest_to_newest_regardless_of_input_order() {
        let newest_first = series(100.0, 130.0, 60);
        let mut oldest_first = newest_first.clone();
        oldest_first.reverse();

        assert!((growth_rate(&newest_first).unwrap() - 30.0).abs() < 1e-9);
        assert!((growth_rate(&oldest_first).unwrap() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn growth_matches_formula() {
        for (oldest, newest) in [(50.0, 40.0), (12.5, 80.0), (3.0, 3.0)] {
            let expected = (newest - oldest) / oldest * 100.0;
            let got = growth_rate(&series(oldest, newest, 12)).unwrap();
            assert!((got - expected).abs() < 1e-9, "{oldest} -> {newest}: {got}");
        }
    }

    #[test]
    fn single_point_has_zero_growth() {
        assert_eq!(growth_rate(&series(42.0, 42.0, 1)).unwrap(), 0.0);
    }

    #[test]
    fn empty_history_is_an_error() {
        assert_eq!(growth_rate(&[]).unwrap_err().kind(), ErrorKind::Unexpected);
    }

    #[test]
    fn zero_oldest_price_is_an_error() {
        let history = series(0.0, 10.0, 5);
        assert_eq!(growth_rate(&history).unwrap_err().kind(), ErrorKind::Unexpected);
    }

    #[test]
    fn decision_table() {
        assert_eq!(decide(25.0, 3), Action::Invest);
        assert_eq!(decide(25.0, 2), Action::Hold);
        assert_eq!(decide(20.0, 5), Action::Hold);
        assert_eq!(decide(0.5, 0), Action::Hold);
        assert_eq!(decide(0.0, 10), Action::Avoid);
        assert_eq!(decide(-5.0, 0), Action::Avoid);
        assert_eq!(decide(-5.0, 5), Action::Avoid);
    }

    #[test]
    fn empty_news_with_strong_growth_holds() {
        let rec = recommend(&series(100.0, 125.0, 60), 126.0, &[]).unwrap();
        assert_eq!(rec.action, Action::Hold);
        assert!(rec.rationale.contains("25.00%"));
    }

    #[test]
    fn strong_growth_with_news_invests() {
        let rec = recommend(&series(100.0, 130.0, 60), 131.0, &news(4)).unwrap();
        assert_eq!(rec.action, Action::Invest);
        assert_eq!(
            rec.rationale,
            "The stock has shown a strong growth rate of 30.00% over the past 5 years, and recent news \
             sentiment is predominantly positive. This indicates good potential for investment."
        );
    }

    #[test]
    fn decline_avoids() {
        let rec = recommend(&series(100.0, 95.0, 60), 94.0, &news(5)).unwrap();
        assert_eq!(rec.action, Action::Avoid);
        assert_eq!(
            rec.rationale,
            "The stock has declined by -5.00% over the past 5 years, and recent news sentiment is not \
             favorable. Investing in this stock may carry significant risk."
        );
    }

    #[test]
    fn hold_rationale_wording() {
        assert_eq!(
            rationale(Action::Hold, 12.3456),
            "The stock has grown by 12.35% over the past 5 years. However, mixed or neutral news sentiment \
             suggests that it may be better to wait before making a decision."
        );
    }
}
