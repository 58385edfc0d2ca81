//! Identifier → symbol resolution.
//!
//! An identifier of at most five characters that is entirely upper-case is taken to already be a
//! symbol; anything else is looked up by name. The heuristic is knowingly ambiguous: a short
//! all-caps company name such as "ACME" is treated as a ticker, and a lower or mixed-case ticker
//! such as "brk.b" goes through name search.

use crate::domain::Symbol;
use crate::error::{SignalError, SignalResult};
use crate::ingest::StockDataProvider;

const MAX_SYMBOL_LEN: usize = 5;

/// True when `identifier` has at most five characters and at least one cased character, all of
/// them upper-case.
pub fn is_symbol(identifier: &str) -> bool {
    identifier.chars().count() <= MAX_SYMBOL_LEN
        && identifier.chars().any(char::is_uppercase)
        && !identifier.chars().any(char::is_lowercase)
}

/// Resolves `identifier` to a symbol, consulting the provider's name search only when needed.
///
/// Every lookup failure, including a provider error, is reported as `NotFound`; there is no
/// fallback symbol.
pub async fn resolve(provider: &dyn StockDataProvider, identifier: &str) -> SignalResult<Symbol> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(SignalError::not_found("identifier is empty"));
    }

    if is_symbol(identifier) {
        return Ok(Symbol::new(identifier));
    }

    let matches = provider.search_symbols(identifier).await.map_err(|err| {
        tracing::warn!(identifier, error = %err, "symbol search failed");
        SignalError::not_found(format!("symbol search for {identifier:?} failed: {}", err.detail()))
    })?;

    let symbol = matches.into_iter().next().ok_or_else(|| {
        SignalError::not_found(format!("no stock symbol matches {identifier:?}"))
    })?;

    tracing::debug!(identifier, %symbol, "resolved company name to symbol");
    Ok(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PricePoint;
    use crate::ErrorKind;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct SearchOnly {
        matches: SignalResult<Vec<Symbol>>,
        calls: AtomicUsize,
    }

    impl SearchOnly {
        fn new(matches: SignalResult<Vec<Symbol>>) -> Self {
            Self {
                matches,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl StockDataProvider for SearchOnly {
        fn provider_name(&self) -> &'static str {
            "search_only"
        }

        async fn search_symbols(&self, _keywords: &str) -> SignalResult<Vec<Symbol>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.matches.clone()
        }

        async fn fetch_quote(&self, _symbol: &Symbol) -> SignalResult<f64> {
            unreachable!("resolver never fetches quotes")
        }

        async fn fetch_monthly_series(&self, _symbol: &Symbol) -> SignalResult<Vec<PricePoint>> {
            unreachable!("resolver never fetches history")
        }
    }

    #[test]
    fn symbol_heuristic() {
        assert!(is_symbol("TSLA"));
        assert!(is_symbol("BRK.B"));
        assert!(is_symbol("F"));
        assert!(!is_symbol("Tesla"));
        assert!(!is_symbol("GOOGLE"));
        assert!(!is_symbol("aapl"));
        assert!(!is_symbol("12345"));
        // Known ambiguity: short all-caps names are taken as tickers.
        assert!(is_symbol("ACME"));
    }

    #[tokio::test]
    async fn symbols_skip_lookup() {
        let provider = SearchOnly::new(Ok(vec![Symbol::new("WRONG")]));
        for id in ["TSLA", "IBM", "BRK.B"] {
            let symbol = resolve(&provider, id).await.unwrap();
            assert_eq!(symbol.as_str(), id);
        }
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn names_take_first_match() {
        let provider = SearchOnly::new(Ok(vec![Symbol::new("AAPL"), Symbol::new("APLE")]));
        let symbol = resolve(&provider, "Apple Inc").await.unwrap();
        assert_eq!(symbol, Symbol::new("AAPL"));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn no_matches_is_not_found() {
        let provider = SearchOnly::new(Ok(Vec::new()));
        let err = resolve(&provider, "Apple Inc").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn provider_failure_is_not_found() {
        let provider = SearchOnly::new(Err(SignalError::unavailable("HTTP 503")));
        let err = resolve(&provider, "Apple Inc").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.detail().contains("HTTP 503"));
    }
}
