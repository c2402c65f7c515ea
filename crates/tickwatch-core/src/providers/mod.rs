mod synthetic;
mod twelvedata;

pub use synthetic::{SyntheticProvider, DEFAULT_BASE_PRICE};
pub use twelvedata::{TwelveDataConfig, TwelveDataProvider};
