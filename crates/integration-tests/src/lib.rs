//! Integration tests for the APEXFIT storefront cart engine.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p apexfit-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - user journeys through the drawer controller
//! - `cart_properties` - invariants over arbitrary intent sequences
//!
//! This library holds the fixtures both share.

use apexfit_core::{CurrencyCode, ProductId};
use apexfit_storefront::cart::{CartStore, ProductSelection};
use apexfit_storefront::drawer::DrawerController;
use apexfit_storefront::notify::{Notifier, Severity};
use apexfit_storefront::surface::HtmlSurface;
use rust_decimal::Decimal;

/// Notifier that keeps every request for later assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub sent: Vec<(String, Severity)>,
}

impl RecordingNotifier {
    /// Messages sent with `severity`, in order.
    #[must_use]
    pub fn messages(&self, severity: Severity) -> Vec<&str> {
        self.sent
            .iter()
            .filter(|(_, s)| *s == severity)
            .map(|(m, _)| m.as_str())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str, severity: Severity) {
        self.sent.push((message.to_string(), severity));
    }
}

pub type TestController = DrawerController<HtmlSurface, RecordingNotifier>;

/// A fresh USD controller with a closed drawer and an empty cart.
#[must_use]
pub fn controller() -> TestController {
    DrawerController::new(
        CartStore::new(CurrencyCode::USD),
        HtmlSurface::new(),
        RecordingNotifier::default(),
    )
}

/// A selection priced in cents.
#[must_use]
pub fn selection(id: &str, size: &str, color: &str, cents: i64) -> ProductSelection {
    ProductSelection {
        product_id: ProductId::new(id),
        title: format!("Product {id}"),
        unit_price: Decimal::new(cents, 2),
        image_url: format!("images/product-{id}.jpg"),
        size: size.to_string(),
        color: color.to_string(),
    }
}
