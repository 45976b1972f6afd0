//! Exact-precision listing prices.
//!
//! Prices never pass through floating point. They are held as the
//! canonical decimal string `<integer>.<two digits>`, which is also what a
//! `NUMERIC(14,2)` column renders with `::TEXT`.

use std::fmt;

use serde::{Deserialize, Serialize};

use delamere_core::AppError;

/// Maximum digits before the decimal point (`NUMERIC(14,2)`).
const MAX_INTEGER_DIGITS: usize = 12;

/// Maximum digits after the decimal point.
const MAX_FRACTION_DIGITS: usize = 2;

/// A non-negative price in Kenyan shillings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(try_from = "String", into = "String")]
#[sqlx(transparent)]
pub struct Price(String);

impl Price {
    /// Parses and normalizes a decimal price string.
    ///
    /// Accepts `"85000"`, `"85000.5"` and `"85000.50"`; all three normalize to
    /// `"85000.50"` or `"85000.00"` as appropriate.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let raw = raw.trim();
        let invalid = || {
            AppError::validation(format!(
                "Invalid price '{raw}': expected a non-negative amount with at most two decimal places"
            ))
        };

        let (integer, fraction) = match raw.split_once('.') {
            Some((integer, fraction)) => (integer, fraction),
            None => (raw, ""),
        };

        if integer.is_empty() || !integer.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if fraction.len() > MAX_FRACTION_DIGITS || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if raw.ends_with('.') {
            return Err(invalid());
        }

        let integer = integer.trim_start_matches('0');
        let integer = if integer.is_empty() { "0" } else { integer };
        if integer.len() > MAX_INTEGER_DIGITS {
            return Err(AppError::validation(format!(
                "Invalid price '{raw}': amount is too large"
            )));
        }

        Ok(Self(format!("{integer}.{fraction:0<2}")))
    }

    /// Returns the canonical decimal string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Price {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
