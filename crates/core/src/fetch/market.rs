use crate::domain::{MarketSnapshot, Symbol};
use crate::error::SignalResult;
use crate::ingest::StockDataProvider;

/// Current quote plus at most `window` monthly points, in provider order.
///
/// Both sub-fetches must succeed; there is no partial snapshot.
pub async fn fetch_market_snapshot(
    provider: &dyn StockDataProvider,
    symbol: &Symbol,
    window: usize,
) -> SignalResult<MarketSnapshot> {
    let current_price = provider
        .fetch_quote(symbol)
        .await
        .map_err(|e| e.at("quote"))?;

    let mut historical = provider
        .fetch_monthly_series(symbol)
        .await
        .map_err(|e| e.at("monthly series"))?;
    let available = historical.len();
    historical.truncate(window.max(1));

    tracing::debug!(
        %symbol,
        provider = provider.provider_name(),
        current_price,
        available,
        kept = historical.len(),
        "fetched market data"
    );

    MarketSnapshot::new(current_price, historical).map_err(|e| e.at("monthly series"))
}
