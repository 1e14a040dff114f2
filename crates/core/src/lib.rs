//! APEXFIT Core - Shared types library.
//!
//! This crate provides the value types the storefront cart engine is built on:
//! - `storefront` - Cart store, drawer controller, and page-side collaborators
//! - `integration-tests` - End-to-end cart scenarios
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no rendering, no clocks.
//! This keeps it lightweight and trivially testable.
//!
//! # Modules
//!
//! - [`types`] - Product IDs, line keys, prices, and quantities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
