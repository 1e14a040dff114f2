//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are never floats. Amounts are [`Decimal`] in the currency's
//! standard unit (dollars, not cents) and formatted to two decimal places
//! for display.

use core::fmt;
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing or parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
    /// The amount is above [`Price::MAX_AMOUNT`].
    #[error("price exceeds the supported maximum (got {0})")]
    TooLarge(Decimal),
    /// The input contains no parseable amount.
    #[error("no price found in {0:?}")]
    Unparseable(String),
    /// The input is not a supported ISO 4217 code.
    #[error("unsupported currency code: {0}")]
    UnknownCurrency(String),
}

/// A non-negative price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    amount: Decimal,
    /// ISO 4217 currency code.
    currency_code: CurrencyCode,
}

impl Price {
    /// Largest accepted amount for a single unit.
    ///
    /// Keeps `unit price * u32::MAX` and cart subtotals far inside
    /// [`Decimal`]'s range.
    pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero, or
    /// [`PriceError::TooLarge`] if it is above [`Price::MAX_AMOUNT`].
    pub fn new(amount: Decimal, currency_code: CurrencyCode) -> Result<Self, PriceError> {
        Ok(Self {
            amount: Self::validate_amount(amount)?,
            currency_code,
        })
    }

    /// Check that `amount` is a usable unit price.
    ///
    /// # Errors
    ///
    /// Same as [`Price::new`].
    pub fn validate_amount(amount: Decimal) -> Result<Decimal, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        if amount > Self::MAX_AMOUNT {
            return Err(PriceError::TooLarge(amount));
        }
        Ok(amount)
    }

    /// A zero price in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency_code,
        }
    }

    /// Get the amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Get the currency code.
    #[must_use]
    pub const fn currency_code(&self) -> CurrencyCode {
        self.currency_code
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        self.currency_code.format(self.amount)
    }

    /// Extract an amount from display text such as `"$45.00"` or `"45 USD"`.
    ///
    /// Every character other than ASCII digits and `.` is dropped before
    /// parsing.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Unparseable`] if nothing numeric remains.
    pub fn parse_display(text: &str) -> Result<Decimal, PriceError> {
        let numeric: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        Decimal::from_str(&numeric).map_err(|_| PriceError::Unparseable(text.to_owned()))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Display symbol placed before the amount.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// The three-letter ISO code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }

    /// Format an amount in this currency: symbol prefix, two decimal places.
    #[must_use]
    pub fn format(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{}{rounded:.2}", self.symbol())
    }
}

impl FromStr for CurrencyCode {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "CAD" => Ok(Self::CAD),
            "AUD" => Ok(Self::AUD),
            _ => Err(PriceError::UnknownCurrency(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_two_decimals() {
        let price = Price::new(Decimal::new(45, 0), CurrencyCode::USD).unwrap();
        assert_eq!(price.display(), "$45.00");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        let price = Price::new(Decimal::new(10_005, 3), CurrencyCode::GBP).unwrap();
        assert_eq!(price.display(), "£10.01");
    }

    #[test]
    fn test_negative_rejected() {
        let result = Price::new(Decimal::new(-1, 2), CurrencyCode::USD);
        assert!(matches!(result, Err(PriceError::Negative(_))));
    }

    #[test]
    fn test_oversized_rejected() {
        assert!(Price::new(Price::MAX_AMOUNT, CurrencyCode::USD).is_ok());
        let result = Price::new(Price::MAX_AMOUNT + Decimal::ONE, CurrencyCode::USD);
        assert!(matches!(result, Err(PriceError::TooLarge(_))));
        assert!(matches!(
            Price::validate_amount(Decimal::MAX),
            Err(PriceError::TooLarge(_))
        ));
    }

    #[test]
    fn test_zero_allowed() {
        let price = Price::new(Decimal::ZERO, CurrencyCode::EUR).unwrap();
        assert_eq!(price, Price::zero(CurrencyCode::EUR));
        assert_eq!(price.display(), "€0.00");
    }

    #[test]
    fn test_parse_display_strips_symbols() {
        assert_eq!(Price::parse_display("$45.00").unwrap(), Decimal::new(4500, 2));
        assert_eq!(Price::parse_display(" 38 USD ").unwrap(), Decimal::new(38, 0));
    }

    #[test]
    fn test_parse_display_rejects_empty() {
        assert!(matches!(
            Price::parse_display("Sold out"),
            Err(PriceError::Unparseable(_))
        ));
        assert!(Price::parse_display("").is_err());
    }

    #[test]
    fn test_parse_display_drops_minus_sign() {
        // The minus sign is not kept, so display text can never yield a negative.
        assert_eq!(Price::parse_display("-12.50").unwrap(), Decimal::new(1250, 2));
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("usd".parse::<CurrencyCode>().unwrap(), CurrencyCode::USD);
        assert_eq!("GBP".parse::<CurrencyCode>().unwrap(), CurrencyCode::GBP);
        assert!("JPY".parse::<CurrencyCode>().is_err());
    }

    #[test]
    fn test_currency_format() {
        assert_eq!(CurrencyCode::USD.format(Decimal::new(9, 0)), "$9.00");
        assert_eq!(CurrencyCode::EUR.format(Decimal::new(12_345, 3)), "€12.35");
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(CurrencyCode::CAD.symbol(), "$");
        assert_eq!(CurrencyCode::EUR.symbol(), "€");
        assert_eq!(CurrencyCode::AUD.code(), "AUD");
    }
}
