//! Paint targets for the cart drawer and page chrome.
//!
//! The drawer controller never touches markup directly. It pushes a
//! [`CartViewModel`] and visibility flags into a [`CartSurface`]; the
//! [`HtmlSurface`] implementation renders them with Askama templates.

use askama::Template;

use crate::cart::CartViewModel;
use crate::error::RenderError;

/// Where the controller paints cart state.
pub trait CartSurface {
    /// Repaint the drawer contents, the header badge, and the subtotal text.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the markup cannot be produced.
    fn paint(&mut self, view: &CartViewModel) -> Result<(), RenderError>;

    /// Show or hide the drawer and its overlay.
    fn set_drawer_open(&mut self, open: bool);

    /// Suppress or restore background page scroll.
    fn set_scroll_locked(&mut self, locked: bool);
}

/// Drawer contents template: empty state, item rows, footer.
#[derive(Template)]
#[template(path = "partials/cart_drawer.html")]
pub struct CartDrawerTemplate<'a> {
    pub cart: &'a CartViewModel,
}

/// Cart count badge template.
#[derive(Template)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// A surface that keeps the latest rendered fragments in memory.
#[derive(Debug, Clone, Default)]
pub struct HtmlSurface {
    drawer_html: String,
    badge_html: String,
    subtotal_text: String,
    drawer_open: bool,
    scroll_locked: bool,
    paints: u64,
}

impl HtmlSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last rendered drawer contents.
    #[must_use]
    pub fn drawer_html(&self) -> &str {
        &self.drawer_html
    }

    /// Last rendered header badge.
    #[must_use]
    pub fn badge_html(&self) -> &str {
        &self.badge_html
    }

    /// Text bound to the `.subtotal-amount` element.
    #[must_use]
    pub fn subtotal_text(&self) -> &str {
        &self.subtotal_text
    }

    #[must_use]
    pub const fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    #[must_use]
    pub const fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Number of successful paints so far.
    #[must_use]
    pub const fn paints(&self) -> u64 {
        self.paints
    }
}

impl CartSurface for HtmlSurface {
    fn paint(&mut self, view: &CartViewModel) -> Result<(), RenderError> {
        let drawer_html = CartDrawerTemplate { cart: view }.render()?;
        let badge_html = CartCountTemplate {
            count: view.item_count,
        }
        .render()?;

        self.drawer_html = drawer_html;
        self.badge_html = badge_html;
        self.subtotal_text.clone_from(&view.subtotal);
        self.paints += 1;
        Ok(())
    }

    fn set_drawer_open(&mut self, open: bool) {
        self.drawer_open = open;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}
