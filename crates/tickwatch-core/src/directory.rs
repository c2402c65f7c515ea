//! Caller-facing directory service.
//!
//! Views call this facade, not providers. Every operation degrades to an
//! empty result instead of failing: the data is display-only and a blank
//! list is always a safe outcome.

use std::sync::Arc;

use crate::provider::{SearchRequest, SeriesRequest, StockProvider};
use crate::providers::SyntheticProvider;
use crate::{PricePoint, StockSummary, Symbol};

/// Stock directory over a pluggable provider.
///
/// Stateless per call: nothing is cached between requests, and concurrent
/// calls may complete in any order.
pub struct StockDirectory {
    provider: Arc<dyn StockProvider>,
}

impl Default for StockDirectory {
    fn default() -> Self {
        Self::new(Arc::new(SyntheticProvider::default()))
    }
}

impl StockDirectory {
    pub fn new(provider: Arc<dyn StockProvider>) -> Self {
        Self { provider }
    }

    /// Search the catalog. An empty query returns the whole catalog.
    ///
    /// Never fails: provider errors are logged and yield an empty list.
    pub async fn search_stocks(&self, query: &str) -> Vec<StockSummary> {
        match self.provider.search(SearchRequest::new(query)).await {
            Ok(results) => results,
            Err(error) => {
                tracing::warn!(
                    provider = self.provider.name(),
                    %error,
                    "stock search failed; returning empty result"
                );
                Vec::new()
            }
        }
    }

    /// Fetch the 30-day daily price series for `symbol`, oldest first.
    ///
    /// Never fails: unparseable symbols and provider errors are logged and
    /// yield an empty list.
    pub async fn daily_series(&self, symbol: &str) -> Vec<PricePoint> {
        let parsed = match Symbol::parse(symbol) {
            Ok(parsed) => parsed,
            Err(error) => {
                tracing::warn!(symbol, %error, "rejecting series request");
                return Vec::new();
            }
        };

        match self.provider.daily_series(SeriesRequest::daily(parsed)).await {
            Ok(series) => series.points,
            Err(error) => {
                tracing::warn!(
                    provider = self.provider.name(),
                    symbol,
                    %error,
                    "price series fetch failed; returning empty result"
                );
                Vec::new()
            }
        }
    }
}
