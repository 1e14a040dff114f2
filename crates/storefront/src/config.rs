//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; unset variables fall back to the defaults
//! given by [`StorefrontConfig::default`].
//!
//! - `APEXFIT_CURRENCY` - Session currency (default: USD)
//! - `APEXFIT_TOAST_DURATION_MS` - How long a toast stays up (default: 4000)
//! - `APEXFIT_QUICK_ADD_LATENCY_MS` - Simulated add latency (default: 500)
//! - `APEXFIT_QUICK_ADD_RESET_MS` - Delay before the button resets (default: 2000)
//! - `APEXFIT_DEFAULT_PRICE` - Price used when a card shows none (default: 45.00)
//! - `APEXFIT_DEFAULT_TITLE` - Title used when a card shows none (default: Product)
//! - `APEXFIT_DEFAULT_IMAGE` - Image used when a card shows none (default: images/product-1.jpg)
//! - `APEXFIT_DEFAULT_COLOR` - Color for quick adds (default: Midnight Black)
//! - `APEXFIT_DEFAULT_SIZE` - Size for quick adds (default: M)
//! - `APEXFIT_LOG_FORMAT` - `text` or `json` log lines on stderr (default: text)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::str::FromStr;
use std::time::Duration;

use apexfit_core::{CurrencyCode, Price};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::telemetry::LogFormat;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Currency every price in the session is shown in
    pub currency: CurrencyCode,
    /// How long a toast stays on screen
    pub toast_duration: Duration,
    /// Quick-add button timings
    pub quick_add: QuickAddConfig,
    /// Fallbacks for product cards with incomplete markup
    pub product_defaults: ProductDefaults,
    /// Log line format
    pub log_format: LogFormat,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "production", "staging")
    pub sentry_environment: Option<String>,
}

/// Quick-add button timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAddConfig {
    /// Time spent in the loading state before the add is applied
    pub latency: Duration,
    /// Time spent in the success state before the button resets
    pub reset_after: Duration,
}

/// Values substituted for display fields a product card does not provide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDefaults {
    pub title: String,
    pub image_url: String,
    pub unit_price: Decimal,
    pub color: String,
    pub size: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::USD,
            toast_duration: Duration::from_millis(4000),
            quick_add: QuickAddConfig::default(),
            product_defaults: ProductDefaults::default(),
            log_format: LogFormat::default(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl Default for QuickAddConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(500),
            reset_after: Duration::from_millis(2000),
        }
    }
}

impl Default for ProductDefaults {
    fn default() -> Self {
        Self {
            title: "Product".to_string(),
            image_url: "images/product-1.jpg".to_string(),
            unit_price: Decimal::new(4500, 2),
            color: "Midnight Black".to_string(),
            size: "M".to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value is present but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let currency = parse_or("APEXFIT_CURRENCY", &lookup, defaults.currency)?;
        let toast_duration = millis_or(
            "APEXFIT_TOAST_DURATION_MS",
            &lookup,
            defaults.toast_duration,
        )?;
        let quick_add = QuickAddConfig {
            latency: millis_or(
                "APEXFIT_QUICK_ADD_LATENCY_MS",
                &lookup,
                defaults.quick_add.latency,
            )?,
            reset_after: millis_or(
                "APEXFIT_QUICK_ADD_RESET_MS",
                &lookup,
                defaults.quick_add.reset_after,
            )?,
        };

        let product_defaults = ProductDefaults {
            title: lookup("APEXFIT_DEFAULT_TITLE").unwrap_or(defaults.product_defaults.title),
            image_url: lookup("APEXFIT_DEFAULT_IMAGE")
                .unwrap_or(defaults.product_defaults.image_url),
            unit_price: default_price(&lookup, defaults.product_defaults.unit_price)?,
            color: lookup("APEXFIT_DEFAULT_COLOR").unwrap_or(defaults.product_defaults.color),
            size: lookup("APEXFIT_DEFAULT_SIZE").unwrap_or(defaults.product_defaults.size),
        };

        Ok(Self {
            currency,
            toast_duration,
            quick_add,
            product_defaults,
            log_format: parse_or("APEXFIT_LOG_FORMAT", &lookup, defaults.log_format)?,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable with `FromStr`, or fall back to `default` when unset.
fn parse_or<T>(
    key: &str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

/// Parse a millisecond count into a `Duration`.
fn millis_or(
    key: &str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: Duration,
) -> Result<Duration, ConfigError> {
    lookup(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

/// Parse the fallback price, rejecting negatives.
fn default_price(
    lookup: &impl Fn(&str) -> Option<String>,
    default: Decimal,
) -> Result<Decimal, ConfigError> {
    const KEY: &str = "APEXFIT_DEFAULT_PRICE";
    let amount = parse_or(KEY, lookup, default)?;
    Price::new(amount, CurrencyCode::default())
        .map(|price| price.amount())
        .map_err(|e| ConfigError::InvalidEnvVar(KEY.to_string(), e.to_string()))
}
