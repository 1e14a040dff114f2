//! Core types for the APEXFIT storefront.
//!
//! This module provides type-safe wrappers for common cart concepts.

pub mod id;
pub mod line_key;
pub mod price;
pub mod quantity;

pub use id::ProductId;
pub use line_key::LineKey;
pub use price::{CurrencyCode, Price, PriceError};
pub use quantity::Quantity;
