//! Cart view-model: a display-ready projection of [`CartState`].
//!
//! Rendering is a pure function of the snapshot. Formatting happens here so
//! templates only interpolate strings.

use apexfit_core::{CurrencyCode, LineKey};
use serde::Serialize;

use super::store::{CartState, LineItem};

/// Whether the drawer shows its empty-state block or the item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CartMode {
    /// No items: show the empty-state affordance, hide footer and totals.
    Empty,
    /// At least one item: show rows, footer, and totals.
    Populated,
}

/// Cart item display data for templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartRowView {
    /// Identity carried by the row's quantity and remove controls.
    pub key: LineKey,
    pub title: String,
    pub image_url: String,
    /// `"{color} / {size}"`.
    pub variant_label: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

/// Cart display data for templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartViewModel {
    pub mode: CartMode,
    pub rows: Vec<CartRowView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartViewModel {
    /// Project a snapshot into display data.
    #[must_use]
    pub fn render(state: &CartState) -> Self {
        let currency = state.currency();
        let rows = state
            .items()
            .iter()
            .map(|item| CartRowView::project(item, currency))
            .collect::<Vec<_>>();

        Self {
            mode: if rows.is_empty() {
                CartMode::Empty
            } else {
                CartMode::Populated
            },
            rows,
            subtotal: currency.format(state.subtotal()),
            item_count: state.item_count(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mode == CartMode::Empty
    }
}

impl From<&CartState> for CartViewModel {
    fn from(state: &CartState) -> Self {
        Self::render(state)
    }
}

impl CartRowView {
    fn project(item: &LineItem, currency: CurrencyCode) -> Self {
        Self {
            key: item.key.clone(),
            title: item.title.clone(),
            image_url: item.image_url.clone(),
            variant_label: format!("{} / {}", item.key.color, item.key.size),
            quantity: item.quantity.get(),
            unit_price: currency.format(item.unit_price),
            line_total: currency.format(item.line_total()),
        }
    }
}
