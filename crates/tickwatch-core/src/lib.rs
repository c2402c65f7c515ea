//! Core contracts for tickwatch.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - The stock provider seam and structured source errors
//! - The built-in synthetic provider and the TwelveData adapter
//! - Randomness and HTTP transport capabilities
//! - The caller-facing directory service

pub mod directory;
pub mod domain;
pub mod error;
pub mod provider;
pub mod providers;
pub mod random;
pub mod transport;

pub use directory::StockDirectory;
pub use domain::{CalendarDate, PricePoint, PriceSeries, StockSummary, Symbol};
pub use error::ValidationError;
pub use provider::{
    SearchRequest, SeriesRequest, SourceError, SourceErrorKind, StockProvider, SERIES_DAYS,
};
pub use providers::{SyntheticProvider, TwelveDataConfig, TwelveDataProvider, DEFAULT_BASE_PRICE};
pub use random::{FastrandSource, RandomSource, SequenceSource};
pub use transport::{
    HttpError, HttpRequest, HttpResponse, NoopTransport, ReqwestTransport, Transport,
};
