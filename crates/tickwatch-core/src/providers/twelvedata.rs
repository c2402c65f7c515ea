//! TwelveData adapter: the real market-data API the directory is designed to
//! swap in behind the provider seam.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;

use crate::provider::{SearchRequest, SeriesRequest, SourceError, StockProvider};
use crate::transport::{HttpRequest, ReqwestTransport, Transport};
use crate::{CalendarDate, PricePoint, PriceSeries, StockSummary, Symbol};

const DEFAULT_BASE_URL: &str = "https://api.twelvedata.com";

/// Connection settings for the TwelveData API.
#[derive(Debug, Clone)]
pub struct TwelveDataConfig {
    pub api_key: String,
    pub base_url: String,
}

impl TwelveDataConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: String::from(DEFAULT_BASE_URL),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Read the API key from `TWELVEDATA_API_KEY`.
    pub fn from_env() -> Option<Self> {
        std::env::var("TWELVEDATA_API_KEY").ok().map(Self::new)
    }
}

/// Remote provider backed by the TwelveData REST API.
pub struct TwelveDataProvider {
    config: TwelveDataConfig,
    transport: Arc<dyn Transport>,
}

impl TwelveDataProvider {
    pub fn new(config: TwelveDataConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(config: TwelveDataConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    async fn fetch_json(&self, url: String) -> Result<String, SourceError> {
        let response = self
            .transport
            .execute(HttpRequest::get(url))
            .await
            .map_err(|error| {
                if error.retryable() {
                    SourceError::unavailable(format!("twelvedata transport error: {error}"))
                } else {
                    SourceError::internal(format!("twelvedata transport error: {error}"))
                }
            })?;

        if !response.is_success() {
            return Err(SourceError::unavailable(format!(
                "twelvedata upstream returned status {}",
                response.status
            )));
        }

        Ok(response.body)
    }

    async fn execute_search(&self, req: &SearchRequest) -> Result<Vec<StockSummary>, SourceError> {
        let url = format!(
            "{}/stocks?symbol={}&apikey={}",
            self.config.base_url,
            urlencoding::encode(&req.query),
            urlencoding::encode(&self.config.api_key),
        );

        let body = self.fetch_json(url).await?;
        let payload: StocksResponse = serde_json::from_str(&body).map_err(|error| {
            SourceError::malformed_payload(format!("twelvedata stocks payload: {error}"))
        })?;

        if let Some(message) = payload.error_message() {
            return Err(SourceError::unavailable(message));
        }

        let mut results = Vec::with_capacity(payload.data.len());
        for entry in payload.data {
            // Listings occasionally carry tickers outside our symbol grammar;
            // skip those rather than failing the whole page.
            let Ok(symbol) = Symbol::parse(&entry.symbol) else {
                tracing::debug!(ticker = %entry.symbol, "skipping unparseable ticker");
                continue;
            };

            // Quotes are fetched separately; listing rows carry no prices.
            let summary = StockSummary::new(symbol, entry.name, 0.0, 0.0, 0.0)
                .map_err(|error| SourceError::malformed_payload(error.to_string()))?;
            results.push(summary);
        }

        Ok(results)
    }

    async fn execute_series(&self, req: &SeriesRequest) -> Result<PriceSeries, SourceError> {
        let url = format!(
            "{}/time_series?symbol={}&interval=1day&outputsize={}&apikey={}",
            self.config.base_url,
            urlencoding::encode(req.symbol.as_str()),
            req.days,
            urlencoding::encode(&self.config.api_key),
        );

        let body = self.fetch_json(url).await?;
        let payload: TimeSeriesResponse = serde_json::from_str(&body).map_err(|error| {
            SourceError::malformed_payload(format!("twelvedata time_series payload: {error}"))
        })?;

        if let Some(message) = payload.error_message() {
            return Err(SourceError::unavailable(message));
        }

        // The API returns newest-first; the series contract is oldest-first.
        let mut points = Vec::with_capacity(payload.values.len());
        for value in payload.values.into_iter().rev() {
            let date = CalendarDate::parse(&value.datetime).map_err(|error| {
                SourceError::malformed_payload(format!("twelvedata datetime: {error}"))
            })?;
            let close: f64 = value.close.parse().map_err(|_| {
                SourceError::malformed_payload(format!(
                    "twelvedata close is not a number: '{}'",
                    value.close
                ))
            })?;
            points.push(
                PricePoint::new(date, close)
                    .map_err(|error| SourceError::malformed_payload(error.to_string()))?,
            );
        }

        PriceSeries::new(req.symbol.clone(), points)
            .map_err(|error| SourceError::malformed_payload(error.to_string()))
    }
}

impl StockProvider for TwelveDataProvider {
    fn name(&self) -> &'static str {
        "twelvedata"
    }

    fn search<'a>(
        &'a self,
        req: SearchRequest,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<StockSummary>, SourceError>> + Send + 'a>> {
        Box::pin(async move { self.execute_search(&req).await })
    }

    fn daily_series<'a>(
        &'a self,
        req: SeriesRequest,
    ) -> Pin<Box<dyn Future<Output = Result<PriceSeries, SourceError>> + Send + 'a>> {
        Box::pin(async move { self.execute_series(&req).await })
    }
}

#[derive(Debug, Deserialize)]
struct StocksResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Vec<StockListing>,
}

impl StocksResponse {
    fn error_message(&self) -> Option<String> {
        upstream_error(self.status.as_deref(), self.message.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct StockListing {
    symbol: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct TimeSeriesResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    values: Vec<TimeSeriesValue>,
}

impl TimeSeriesResponse {
    fn error_message(&self) -> Option<String> {
        upstream_error(self.status.as_deref(), self.message.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct TimeSeriesValue {
    datetime: String,
    close: String,
}

fn upstream_error(status: Option<&str>, message: Option<&str>) -> Option<String> {
    match status {
        Some("ok") | None => None,
        Some(other) => Some(format!(
            "twelvedata status '{}': {}",
            other,
            message.unwrap_or("no message")
        )),
    }
}
