//! Provider contract and request types for stock data sources.
//!
//! [`StockProvider`] is the substitution seam between the directory service
//! and whatever supplies market data. The built-in implementation synthesizes
//! everything locally; swapping in a real market-data HTTP API means adding
//! another implementation, not changing callers.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{PriceSeries, StockSummary, Symbol};

/// Length of the daily series contract: one point per calendar day, ending
/// today.
pub const SERIES_DAYS: usize = 30;

/// Provider-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    Unavailable,
    InvalidRequest,
    MalformedPayload,
    Internal,
}

/// Structured provider error surfaced to the directory facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
    retryable: bool,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn malformed_payload(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::MalformedPayload,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
            SourceErrorKind::MalformedPayload => "source.malformed_payload",
            SourceErrorKind::Internal => "source.internal",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Free-text catalog search.
///
/// An empty (or whitespace-only) query means "browse": the provider returns
/// its whole catalog in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().trim().to_owned(),
        }
    }

    pub fn is_browse(&self) -> bool {
        self.query.is_empty()
    }
}

/// Daily price-history request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesRequest {
    pub symbol: Symbol,
    pub days: usize,
}

impl SeriesRequest {
    pub fn new(symbol: Symbol, days: usize) -> Result<Self, SourceError> {
        if days == 0 {
            return Err(SourceError::invalid_request(
                "series request must cover at least one day",
            ));
        }
        Ok(Self { symbol, days })
    }

    /// The standard 30-day window ending today.
    pub fn daily(symbol: Symbol) -> Self {
        Self {
            symbol,
            days: SERIES_DAYS,
        }
    }
}

/// Stock data source contract.
///
/// Implementations must be `Send + Sync` and side-effect-free per call:
/// concurrent requests have no ordering guarantee, and callers may discard
/// stale responses without informing the provider.
pub trait StockProvider: Send + Sync {
    /// Short stable name used in logs.
    fn name(&self) -> &'static str;

    /// Search the catalog by free text.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the backing source is unavailable or its
    /// payload cannot be interpreted.
    fn search<'a>(
        &'a self,
        req: SearchRequest,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<StockSummary>, SourceError>> + Send + 'a>>;

    /// Fetch the daily price series for one symbol.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the backing source is unavailable, the
    /// request is invalid, or its payload cannot be interpreted.
    fn daily_series<'a>(
        &'a self,
        req: SeriesRequest,
    ) -> Pin<Box<dyn Future<Output = Result<PriceSeries, SourceError>> + Send + 'a>>;
}
