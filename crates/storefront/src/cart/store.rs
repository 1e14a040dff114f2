//! The cart store: sole owner of cart state.
//!
//! Every mutation goes through [`CartStore::apply`] (or its outcome-reporting
//! twin [`CartStore::execute`]). Aggregates are recomputed from the item list
//! on every read, so they cannot drift from it.

use apexfit_core::{CurrencyCode, LineKey, Quantity};
use rust_decimal::Decimal;
use serde::Serialize;

use super::intent::{CartIntent, ProductSelection};

/// One distinct variant in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub key: LineKey,
    pub title: String,
    pub image_url: String,
    /// Price per unit captured when the line was first added.
    pub unit_price: Decimal,
    pub quantity: Quantity,
}

impl LineItem {
    fn from_selection(selection: ProductSelection) -> Self {
        let key = selection.key();
        Self {
            key,
            title: selection.title,
            image_url: selection.image_url,
            unit_price: selection.unit_price,
            quantity: Quantity::ONE,
        }
    }

    /// `unit_price * quantity`, saturating at [`Decimal::MAX`].
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price
            .checked_mul(self.quantity.as_decimal())
            .unwrap_or(Decimal::MAX)
    }
}

/// A read of the cart at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartState {
    items: Vec<LineItem>,
    currency: CurrencyCode,
}

impl CartState {
    /// An empty cart priced in `currency`.
    #[must_use]
    pub const fn empty(currency: CurrencyCode) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a line by key.
    #[must_use]
    pub fn get(&self, key: &LineKey) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.key == key)
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |sum, item| sum.saturating_add(item.quantity.get()))
    }

    /// Sum of all line totals, saturating at [`Decimal::MAX`].
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().fold(Decimal::ZERO, |sum, item| {
            sum.checked_add(item.line_total()).unwrap_or(Decimal::MAX)
        })
    }

    fn position(&self, key: &LineKey) -> Option<usize> {
        self.items.iter().position(|item| &item.key == key)
    }
}

/// Derived totals shown in the page chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Aggregates {
    pub item_count: u32,
    pub subtotal: Decimal,
}

/// What an intent did to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// A new line was appended.
    Inserted,
    /// An `Add` matched an existing line and bumped it to `quantity`.
    Merged { quantity: Quantity },
    Incremented { quantity: Quantity },
    Decremented { quantity: Quantity },
    /// The line left the cart (explicit remove or decrement at one).
    Removed { item: LineItem },
    /// The intent referenced a line that is not in the cart. Not an error:
    /// stale controls can outlive the line they were rendered for.
    IdentityNotFound,
}

impl Applied {
    /// Whether the intent changed cart state.
    #[must_use]
    pub const fn changed(&self) -> bool {
        !matches!(self, Self::IdentityNotFound)
    }
}

/// Single source of truth for cart state.
#[derive(Debug, Clone)]
pub struct CartStore {
    state: CartState,
}

impl CartStore {
    /// Create an empty store for a new page session.
    #[must_use]
    pub const fn new(currency: CurrencyCode) -> Self {
        Self {
            state: CartState::empty(currency),
        }
    }

    /// Apply an intent and return the resulting snapshot.
    pub fn apply(&mut self, intent: CartIntent) -> &CartState {
        self.execute(intent);
        &self.state
    }

    /// Apply an intent and report what it did.
    pub fn execute(&mut self, intent: CartIntent) -> Applied {
        match intent {
            CartIntent::Add(selection) => self.add(selection),
            CartIntent::Increment(key) => self.increment(&key),
            CartIntent::Decrement(key) => self.decrement(&key),
            CartIntent::Remove(key) => self.remove(&key),
        }
    }

    /// The current state.
    #[must_use]
    pub const fn snapshot(&self) -> &CartState {
        &self.state
    }

    /// Item count and subtotal, computed from the current items.
    #[must_use]
    pub fn aggregates(&self) -> Aggregates {
        Aggregates {
            item_count: self.state.item_count(),
            subtotal: self.state.subtotal(),
        }
    }

    /// Empty the cart, as happens when the page session ends.
    pub fn reset(&mut self) {
        self.state.items.clear();
    }

    fn add(&mut self, selection: ProductSelection) -> Applied {
        let key = selection.key();
        if let Some(item) = self.state.items.iter_mut().find(|item| item.key == key) {
            item.quantity = item.quantity.increment();
            return Applied::Merged {
                quantity: item.quantity,
            };
        }

        self.state.items.push(LineItem::from_selection(selection));
        Applied::Inserted
    }

    fn increment(&mut self, key: &LineKey) -> Applied {
        let Some(item) = self.state.items.iter_mut().find(|item| &item.key == key) else {
            return Applied::IdentityNotFound;
        };
        item.quantity = item.quantity.increment();
        Applied::Incremented {
            quantity: item.quantity,
        }
    }

    fn decrement(&mut self, key: &LineKey) -> Applied {
        let Some(index) = self.state.position(key) else {
            return Applied::IdentityNotFound;
        };

        if let Some(item) = self.state.items.get_mut(index)
            && let Some(quantity) = item.quantity.decrement()
        {
            item.quantity = quantity;
            return Applied::Decremented { quantity };
        }

        // Floor reached: the line goes rather than dropping to zero.
        Applied::Removed {
            item: self.state.items.remove(index),
        }
    }

    fn remove(&mut self, key: &LineKey) -> Applied {
        match self.state.position(key) {
            Some(index) => Applied::Removed {
                item: self.state.items.remove(index),
            },
            None => Applied::IdentityNotFound,
        }
    }
}
