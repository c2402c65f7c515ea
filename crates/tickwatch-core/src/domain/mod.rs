mod date;
mod models;
mod symbol;

pub use date::CalendarDate;
pub use models::{PricePoint, PriceSeries, StockSummary};
pub use symbol::Symbol;
