use serde::{Deserialize, Serialize};

use crate::{CalendarDate, Symbol, ValidationError};

/// Catalog entry: one stock with its latest price and previous-close delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSummary {
    pub symbol: Symbol,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
}

impl StockSummary {
    /// Build a validated summary.
    ///
    /// `change` and `change_percent` both derive from the same previous-close
    /// comparison, so they must agree in sign.
    pub fn new(
        symbol: Symbol,
        name: impl Into<String>,
        price: f64,
        change: f64,
        change_percent: f64,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("price", price)?;
        validate_finite("change", change)?;
        validate_finite("change_percent", change_percent)?;

        if (change >= 0.0) != (change_percent >= 0.0) {
            return Err(ValidationError::ChangeSignMismatch {
                change,
                change_percent,
            });
        }

        Ok(Self {
            symbol,
            name: name.into(),
            price,
            change,
            change_percent,
        })
    }
}

/// One synthetic daily close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: CalendarDate,
    pub value: f64,
}

impl PricePoint {
    pub fn new(date: CalendarDate, value: f64) -> Result<Self, ValidationError> {
        validate_positive("value", value)?;
        Ok(Self { date, value })
    }
}

/// Chronologically ascending daily price history for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub symbol: Symbol,
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series, rejecting out-of-order or same-day duplicate points.
    pub fn new(symbol: Symbol, points: Vec<PricePoint>) -> Result<Self, ValidationError> {
        let ascending = points.windows(2).all(|pair| pair[0].date < pair[1].date);
        if !ascending {
            return Err(ValidationError::UnorderedSeries);
        }
        Ok(Self { symbol, points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(())
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    validate_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}

fn validate_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    validate_finite(field, value)?;
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveValue { field });
    }
    Ok(())
}
