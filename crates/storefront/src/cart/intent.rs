//! Requested cart mutations.

use apexfit_core::{LineKey, Price, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// A product variant as picked on the page, ready to be added to the cart.
///
/// Display fields are expected to be filled in by the caller; see
/// [`crate::product_card::ProductCard::selection`] for the defaults applied
/// when the page markup is incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSelection {
    pub product_id: ProductId,
    pub title: String,
    #[serde(deserialize_with = "validated_unit_price")]
    pub unit_price: Decimal,
    pub image_url: String,
    pub size: String,
    pub color: String,
}

impl ProductSelection {
    /// The line key this selection merges under.
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey::new(self.product_id.clone(), self.size.clone(), self.color.clone())
    }
}

/// Decoded selections carry a valid unit price or fail to decode.
fn validated_unit_price<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
    Price::validate_amount(amount).map_err(serde::de::Error::custom)
}

/// A requested mutation to cart state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartIntent {
    /// Add one unit of a selection, merging with an existing line if present.
    Add(ProductSelection),
    /// Add one unit to an existing line.
    Increment(LineKey),
    /// Remove one unit from an existing line; the line goes away at one.
    Decrement(LineKey),
    /// Drop an existing line entirely.
    Remove(LineKey),
}

impl CartIntent {
    /// The line this intent targets.
    #[must_use]
    pub fn key(&self) -> LineKey {
        match self {
            Self::Add(selection) => selection.key(),
            Self::Increment(key) | Self::Decrement(key) | Self::Remove(key) => key.clone(),
        }
    }

    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Increment(_) => "increment",
            Self::Decrement(_) => "decrement",
            Self::Remove(_) => "remove",
        }
    }
}
