//! Product card trigger: turns what a card shows into a cart selection.
//!
//! Cards on the page are not guaranteed to carry complete markup. Missing
//! display fields are filled from [`ProductDefaults`] here, before the cart
//! engine ever sees the selection. A missing or unreadable price falls back
//! to the configured default price and is logged.

use apexfit_core::{Price, ProductId};
use serde::Deserialize;

use crate::cart::ProductSelection;
use crate::config::ProductDefaults;

/// The data a product card exposes to its quick-add button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProductCard {
    /// `data-product-id` attribute.
    pub product_id: Option<String>,
    /// Text of the card title.
    pub title: Option<String>,
    /// `src` of the card image.
    pub image_url: Option<String>,
    /// Text of the price element, e.g. `"$45.00"`.
    pub price_text: Option<String>,
}

impl ProductCard {
    /// Build the selection a quick add submits.
    ///
    /// Size and color always come from `defaults`: quick add skips variant
    /// pickers.
    #[must_use]
    pub fn selection(&self, defaults: &ProductDefaults) -> ProductSelection {
        let product_id = non_empty(self.product_id.as_deref())
            .map_or_else(ProductId::generate, ProductId::new);

        let parsed = self
            .price_text
            .as_deref()
            .map(|text| Price::parse_display(text).and_then(Price::validate_amount));
        let unit_price = match parsed {
            Some(Ok(amount)) => amount,
            Some(Err(e)) => {
                tracing::warn!(product_id = %product_id, error = %e, "Unreadable card price, using default");
                defaults.unit_price
            }
            None => defaults.unit_price,
        };

        ProductSelection {
            product_id,
            title: non_empty(self.title.as_deref())
                .map_or_else(|| defaults.title.clone(), str::to_string),
            unit_price,
            image_url: non_empty(self.image_url.as_deref())
                .map_or_else(|| defaults.image_url.clone(), str::to_string),
            size: defaults.size.clone(),
            color: defaults.color.clone(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_complete_card() {
        let card = ProductCard {
            product_id: Some("12".to_string()),
            title: Some("  Seamless Legging ".to_string()),
            image_url: Some("images/legging.jpg".to_string()),
            price_text: Some("$68.00".to_string()),
        };

        let selection = card.selection(&ProductDefaults::default());
        assert_eq!(selection.product_id.as_str(), "12");
        assert_eq!(selection.title, "Seamless Legging");
        assert_eq!(selection.unit_price, Decimal::new(6800, 2));
        assert_eq!(selection.image_url, "images/legging.jpg");
        assert_eq!(selection.color, "Midnight Black");
        assert_eq!(selection.size, "M");
    }

    #[test]
    fn test_empty_card_uses_defaults() {
        let defaults = ProductDefaults::default();
        let selection = ProductCard::default().selection(&defaults);

        assert_eq!(selection.title, "Product");
        assert_eq!(selection.image_url, "images/product-1.jpg");
        assert_eq!(selection.unit_price, Decimal::new(4500, 2));
        assert!(!selection.product_id.as_str().is_empty());
    }

    #[test]
    fn test_unparseable_price_uses_default() {
        let card = ProductCard {
            price_text: Some("Sold out".to_string()),
            ..ProductCard::default()
        };
        let selection = card.selection(&ProductDefaults::default());
        assert_eq!(selection.unit_price, Decimal::new(4500, 2));
    }

    #[test]
    fn test_oversized_price_uses_default() {
        let card = ProductCard {
            price_text: Some(format!("${}", "9".repeat(28))),
            ..ProductCard::default()
        };
        let selection = card.selection(&ProductDefaults::default());
        assert_eq!(selection.unit_price, Decimal::new(4500, 2));
    }

    #[test]
    fn test_cards_without_id_do_not_merge() {
        let defaults = ProductDefaults::default();
        let a = ProductCard::default().selection(&defaults);
        let b = ProductCard::default().selection(&defaults);
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn test_blank_id_is_treated_as_missing() {
        let card = ProductCard {
            product_id: Some("   ".to_string()),
            ..ProductCard::default()
        };
        let selection = card.selection(&ProductDefaults::default());
        assert_ne!(selection.product_id.as_str().trim(), "");
    }
}
