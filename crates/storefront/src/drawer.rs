//! Cart drawer controller.
//!
//! Bridges UI events to the [`CartStore`] and keeps the drawer painted.
//! All drawer-related clicks arrive through one delegated entry point,
//! [`DrawerController::dispatch`], decoded from the clicked element's data
//! attributes by [`DrawerEvent::from_dataset`]. Rendering cadence and event
//! wiring are therefore independent.
//!
//! Visibility is the controller's only local state:
//!
//! ```text
//! Closed --open()--> Open --close()--> Closed
//! ```

use std::collections::BTreeMap;

use apexfit_core::LineKey;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::cart::{Applied, CartIntent, CartState, CartStore, CartViewModel, ProductSelection};
use crate::error::{add_breadcrumb, report};
use crate::notify::{Notifier, Severity};
use crate::surface::CartSurface;

/// Drawer visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

/// Which quantity control was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Plus,
    Minus,
}

/// A UI event the drawer reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawerEvent {
    /// Header cart button.
    Toggle,
    CloseButton,
    OverlayClicked,
    ContinueShopping,
    EscapePressed,
    Quantity { key: LineKey, direction: Direction },
    Remove { key: LineKey },
}

impl DrawerEvent {
    /// Decode a click from the clicked element's `data-action` and data
    /// attributes (`product-id`, `size`, `color`, keyed without the `data-`
    /// prefix).
    ///
    /// Returns `None` for unknown actions and for line controls whose
    /// identity is incomplete.
    #[must_use]
    pub fn from_dataset(action: &str, dataset: &BTreeMap<String, String>) -> Option<Self> {
        let line_key = || {
            Some(LineKey::new(
                dataset.get("product-id")?.as_str(),
                dataset.get("size")?.as_str(),
                dataset.get("color")?.as_str(),
            ))
        };

        match action {
            "toggle-cart" => Some(Self::Toggle),
            "close-cart" => Some(Self::CloseButton),
            "overlay" => Some(Self::OverlayClicked),
            "continue-shopping" => Some(Self::ContinueShopping),
            "increment" => line_key().map(|key| Self::Quantity {
                key,
                direction: Direction::Plus,
            }),
            "decrement" => line_key().map(|key| Self::Quantity {
                key,
                direction: Direction::Minus,
            }),
            "remove" => line_key().map(|key| Self::Remove { key }),
            _ => None,
        }
    }
}

/// Owns the cart store and drives the drawer surface.
pub struct DrawerController<S, N> {
    store: CartStore,
    surface: S,
    notifier: N,
    state: DrawerState,
}

impl<S: CartSurface, N: Notifier> DrawerController<S, N> {
    /// Create a controller for a fresh page session. The drawer starts closed.
    pub fn new(store: CartStore, surface: S, notifier: N) -> Self {
        Self {
            store,
            surface,
            notifier,
            state: DrawerState::Closed,
        }
    }

    /// Read-only access to the store.
    pub const fn store(&self) -> &CartStore {
        &self.store
    }

    /// The current cart snapshot.
    pub const fn snapshot(&self) -> &CartState {
        self.store.snapshot()
    }

    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    pub const fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub const fn state(&self) -> DrawerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DrawerState::Open
    }

    /// Open the drawer, repaint it, and lock page scroll.
    #[instrument(skip(self))]
    pub fn open(&mut self) {
        self.state = DrawerState::Open;
        self.surface.set_drawer_open(true);
        self.repaint();
        self.surface.set_scroll_locked(true);
    }

    /// Close the drawer and restore page scroll.
    #[instrument(skip(self))]
    pub fn close(&mut self) {
        self.state = DrawerState::Closed;
        self.surface.set_drawer_open(false);
        self.surface.set_scroll_locked(false);
    }

    /// Handle a product card's add trigger.
    #[instrument(skip(self, selection), fields(product_id = %selection.product_id))]
    pub fn on_add_trigger(&mut self, selection: ProductSelection) {
        let message = format!("{} added to cart", selection.title);
        let applied = self.apply(CartIntent::Add(selection));
        tracing::info!(outcome = ?applied, "Added to cart");
        // open() repaints
        self.open();
        self.notifier.notify(&message, Severity::Success);
    }

    /// Handle a `+` or `-` click on a line's quantity control.
    #[instrument(skip(self, key), fields(key = %key))]
    pub fn on_quantity_control_clicked(&mut self, key: LineKey, direction: Direction) {
        let intent = match direction {
            Direction::Plus => CartIntent::Increment(key),
            Direction::Minus => CartIntent::Decrement(key),
        };
        self.apply(intent);
        self.repaint();
    }

    /// Handle a line's remove control.
    #[instrument(skip(self, key), fields(key = %key))]
    pub fn on_remove_control_clicked(&mut self, key: LineKey) {
        if let Applied::Removed { item } = self.apply(CartIntent::Remove(key)) {
            tracing::info!(title = %item.title, "Removed from cart");
        }
        self.repaint();

        if self.store.aggregates().item_count == 0 {
            self.notifier.notify("Item removed from cart", Severity::Info);
        }
    }

    /// Single delegated entry point for drawer UI events.
    pub fn dispatch(&mut self, event: DrawerEvent) {
        match event {
            DrawerEvent::Toggle => self.open(),
            DrawerEvent::CloseButton
            | DrawerEvent::OverlayClicked
            | DrawerEvent::ContinueShopping => self.close(),
            DrawerEvent::EscapePressed => {
                if self.is_open() {
                    self.close();
                }
            }
            DrawerEvent::Quantity { key, direction } => {
                self.on_quantity_control_clicked(key, direction);
            }
            DrawerEvent::Remove { key } => self.on_remove_control_clicked(key),
        }
    }

    /// End the page session: empty the cart and close the drawer.
    pub fn reset(&mut self) {
        self.store.reset();
        self.close();
        self.repaint();
    }

    fn apply(&mut self, intent: CartIntent) -> Applied {
        let name = intent.name();
        let key = intent.key();
        let applied = self.store.execute(intent);

        if applied.changed() {
            add_breadcrumb(
                "cart",
                name,
                Some(&[
                    ("product_id", key.product_id.as_str()),
                    ("size", key.size.as_str()),
                    ("color", key.color.as_str()),
                ]),
            );
        } else {
            tracing::debug!(intent = name, key = %key, "Intent referenced a missing line, ignored");
        }
        applied
    }

    fn repaint(&mut self) {
        let view = CartViewModel::render(self.store.snapshot());
        if let Err(e) = self.surface.paint(&view) {
            report(&e, "Failed to paint cart drawer");
        }
    }
}
