use crate::errors::{AppError, AppResult};
use crate::models::currency::DEFAULT_CURRENCY;
use crate::utils::number::parse_or_zero;

pub const MIN_TAX_RATE: f64 = 0.0;
pub const MAX_TAX_RATE: f64 = 100.0;

/// Pay settings: base hourly rate, flat tax percentage and currency code.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub hourly_rate: f64,
    pub tax_rate: f64,
    pub currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hourly_rate: 0.0,
            tax_rate: 0.0,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl Settings {
    /// Validated rate update. Negative values are rejected.
    pub fn set_rate(&mut self, raw: &str) -> AppResult<f64> {
        let value = parse_or_zero(raw);
        if value < 0.0 {
            return Err(AppError::NegativeRate);
        }
        self.hourly_rate = value;
        Ok(value)
    }

    /// Validated tax update. Accepts the closed interval `[0, 100]`.
    pub fn set_tax_rate(&mut self, raw: &str) -> AppResult<f64> {
        let value = parse_or_zero(raw);
        if !(MIN_TAX_RATE..=MAX_TAX_RATE).contains(&value) {
            return Err(AppError::TaxRateOutOfRange);
        }
        self.tax_rate = value;
        Ok(value)
    }

    pub fn set_currency(&mut self, code: &str) {
        self.currency = code.to_string();
    }
}
