//! Built-in provider that synthesizes all market data locally.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::provider::{SearchRequest, SeriesRequest, SourceError, StockProvider};
use crate::random::{FastrandSource, RandomSource};
use crate::{CalendarDate, PricePoint, PriceSeries, StockSummary, Symbol, ValidationError};

/// Base price for symbols outside the demo catalog.
pub const DEFAULT_BASE_PRICE: f64 = 100.0;

/// Daily upward drift applied toward the present.
const TREND_PER_DAY: f64 = 0.5;

/// Demo provider producing a fixed catalog and randomized daily series.
///
/// Repeated series calls for the same symbol yield different values;
/// inject a [`crate::SequenceSource`] to pin them down.
pub struct SyntheticProvider {
    random: Arc<dyn RandomSource>,
}

impl Default for SyntheticProvider {
    fn default() -> Self {
        Self {
            random: Arc::new(FastrandSource),
        }
    }
}

impl SyntheticProvider {
    pub fn with_random(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    fn filter_catalog(query: &str) -> Vec<StockSummary> {
        let entries = demo_catalog();
        if query.is_empty() {
            return entries;
        }

        let needle = query.to_ascii_uppercase();
        entries
            .into_iter()
            .filter(|entry| {
                entry.symbol.as_str().contains(&needle)
                    || entry.name.to_ascii_uppercase().contains(&needle)
            })
            .collect()
    }

    fn generate_series(&self, req: &SeriesRequest) -> Result<PriceSeries, SourceError> {
        let today = CalendarDate::today_utc();
        let base = base_price(&req.symbol);
        let mut points = Vec::with_capacity(req.days);

        // offset counts down so the series runs oldest-first and ends today.
        for offset in (0..req.days).rev() {
            let date = today.minus_days(offset as u32);
            let jitter = (self.random.next_unit() - 0.45) * 10.0;
            let value = round_cents(base + jitter + TREND_PER_DAY * offset as f64);
            points.push(PricePoint::new(date, value).map_err(validation_to_error)?);
        }

        PriceSeries::new(req.symbol.clone(), points).map_err(validation_to_error)
    }
}

impl StockProvider for SyntheticProvider {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    fn search<'a>(
        &'a self,
        req: SearchRequest,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<StockSummary>, SourceError>> + Send + 'a>> {
        Box::pin(async move { Ok(Self::filter_catalog(&req.query)) })
    }

    fn daily_series<'a>(
        &'a self,
        req: SeriesRequest,
    ) -> Pin<Box<dyn Future<Output = Result<PriceSeries, SourceError>> + Send + 'a>> {
        Box::pin(async move { self.generate_series(&req) })
    }
}

fn demo_catalog() -> Vec<StockSummary> {
    [
        ("AAPL", "Apple Inc.", 172.39, 1.42, 0.83),
        ("MSFT", "Microsoft Corporation", 329.68, -1.29, -0.39),
        ("GOOGL", "Alphabet Inc.", 135.37, 2.05, 1.54),
        ("AMZN", "Amazon.com Inc.", 127.56, -0.87, -0.68),
        ("META", "Meta Platforms Inc.", 305.22, 4.15, 1.38),
        ("TSLA", "Tesla Inc.", 246.93, -5.42, -2.15),
    ]
    .into_iter()
    .map(|(symbol, name, price, change, change_percent)| {
        StockSummary::new(
            Symbol::parse(symbol).expect("catalog symbols are valid"),
            name,
            price,
            change,
            change_percent,
        )
        .expect("catalog entries are valid")
    })
    .collect()
}

fn base_price(symbol: &Symbol) -> f64 {
    match symbol.as_str() {
        "AAPL" => 170.0,
        "MSFT" => 330.0,
        "GOOGL" => 135.0,
        "AMZN" => 125.0,
        "META" => 300.0,
        "TSLA" => 245.0,
        _ => DEFAULT_BASE_PRICE,
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn validation_to_error(error: ValidationError) -> SourceError {
    SourceError::internal(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceSource;
    use crate::SERIES_DAYS;

    #[test]
    fn browse_returns_whole_catalog_in_order() {
        let results = SyntheticProvider::filter_catalog("");
        let symbols: Vec<&str> = results.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(symbols, ["AAPL", "MSFT", "GOOGL", "AMZN", "META", "TSLA"]);
    }

    #[test]
    fn search_matches_symbol_substring_case_insensitively() {
        let results = SyntheticProvider::filter_catalog("aapl");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].symbol.as_str(), "AAPL");
    }

    #[test]
    fn search_matches_name_substring() {
        let results = SyntheticProvider::filter_catalog("platforms");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].symbol.as_str(), "META");
    }

    #[test]
    fn search_preserves_catalog_order_across_matches() {
        // "Inc." appears in every name except Microsoft's.
        let results = SyntheticProvider::filter_catalog("inc.");
        let symbols: Vec<&str> = results.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(symbols, ["AAPL", "GOOGL", "AMZN", "META", "TSLA"]);
    }

    #[test]
    fn unmatched_search_is_empty() {
        assert!(SyntheticProvider::filter_catalog("nonexistent-xyz").is_empty());
    }

    #[tokio::test]
    async fn series_covers_consecutive_days_ending_today() {
        let provider = SyntheticProvider::default();
        let request = SeriesRequest::daily(Symbol::parse("AAPL").expect("valid"));

        let series = provider.daily_series(request).await.expect("must generate");
        assert_eq!(series.len(), SERIES_DAYS);

        let today = CalendarDate::today_utc();
        assert_eq!(series.points.last().expect("non-empty").date, today);
        for pair in series.points.windows(2) {
            assert_eq!(pair[0].date.next_day(), pair[1].date);
        }
    }

    #[tokio::test]
    async fn series_values_are_positive_and_rounded() {
        let provider = SyntheticProvider::default();
        let request = SeriesRequest::daily(Symbol::parse("ZZZZ").expect("valid"));

        let series = provider.daily_series(request).await.expect("must generate");
        for point in &series.points {
            assert!(point.value > 0.0);
            let cents = point.value * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6);
        }
    }

    #[tokio::test]
    async fn injected_sequence_pins_series_values() {
        let provider = SyntheticProvider::with_random(Arc::new(SequenceSource::constant(0.45)));
        let symbol = Symbol::parse("AAPL").expect("valid");

        let series = provider
            .daily_series(SeriesRequest::new(symbol, 3).expect("valid request"))
            .await
            .expect("must generate");

        // Zero jitter leaves base 170 plus the 0.5/day drift toward today.
        let values: Vec<f64> = series.points.iter().map(|p| p.value).collect();
        assert_eq!(values, [171.0, 170.5, 170.0]);
    }

    #[tokio::test]
    async fn unknown_symbol_uses_default_base() {
        let provider = SyntheticProvider::with_random(Arc::new(SequenceSource::constant(0.45)));
        let symbol = Symbol::parse("ZZZZ").expect("valid");

        let series = provider
            .daily_series(SeriesRequest::new(symbol, 1).expect("valid request"))
            .await
            .expect("must generate");

        assert_eq!(series.points[0].value, DEFAULT_BASE_PRICE);
    }
}
