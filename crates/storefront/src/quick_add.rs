//! Quick-add button state machine.
//!
//! ```text
//! Idle --press--> Loading --(latency)--> Success --settle (reset delay)--> Idle
//!                    |
//!                    +--cancel--> Idle
//! ```
//!
//! The simulated latency runs *before* the add reaches the cart, so the
//! store never sees a pending intent: a press that is dropped mid-latency
//! never touches the cart.

use apexfit_core::LineKey;
use thiserror::Error;

use crate::config::{ProductDefaults, QuickAddConfig};
use crate::drawer::DrawerController;
use crate::notify::Notifier;
use crate::product_card::ProductCard;
use crate::surface::CartSurface;

/// Button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuickAddState {
    #[default]
    Idle,
    Loading,
    Success,
}

impl QuickAddState {
    /// Button label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle | Self::Loading => "QUICK ADD",
            Self::Success => "ADDED",
        }
    }

    /// CSS modifier class, if any.
    #[must_use]
    pub const fn css_class(&self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Loading => Some("loading"),
            Self::Success => Some("success"),
        }
    }

    /// Whether the button ignores clicks.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    const fn can_become(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Loading)
                | (Self::Loading, Self::Success | Self::Idle)
                | (Self::Success, Self::Idle)
        )
    }
}

/// Errors driving the quick-add button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuickAddError {
    #[error("invalid quick-add transition from {from:?} to {to:?}")]
    InvalidTransition {
        from: QuickAddState,
        to: QuickAddState,
    },
}

/// One product card's quick-add button.
#[derive(Debug, Clone)]
pub struct QuickAddButton {
    state: QuickAddState,
    timing: QuickAddConfig,
}

impl QuickAddButton {
    #[must_use]
    pub const fn new(timing: QuickAddConfig) -> Self {
        Self {
            state: QuickAddState::Idle,
            timing,
        }
    }

    #[must_use]
    pub const fn state(&self) -> QuickAddState {
        self.state
    }

    /// Move to `next`, rejecting transitions not in the state diagram.
    ///
    /// # Errors
    ///
    /// Returns [`QuickAddError::InvalidTransition`] for an illegal move.
    pub fn transition(&mut self, next: QuickAddState) -> Result<(), QuickAddError> {
        if !self.state.can_become(next) {
            return Err(QuickAddError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        tracing::debug!(from = ?self.state, to = ?next, "Quick add transition");
        self.state = next;
        Ok(())
    }

    /// Handle a click: wait out the latency, then add the card's product.
    ///
    /// Clicks while the button is not idle are ignored and return `None`.
    ///
    /// # Errors
    ///
    /// Returns [`QuickAddError`] if the state changed underneath the press.
    pub async fn press<S, N>(
        &mut self,
        card: &ProductCard,
        defaults: &ProductDefaults,
        controller: &mut DrawerController<S, N>,
    ) -> Result<Option<LineKey>, QuickAddError>
    where
        S: CartSurface,
        N: Notifier,
    {
        if self.state.is_disabled() {
            tracing::debug!(state = ?self.state, "Quick add ignored while busy");
            return Ok(None);
        }

        let selection = card.selection(defaults);
        let key = selection.key();

        self.transition(QuickAddState::Loading)?;
        tokio::time::sleep(self.timing.latency).await;
        self.transition(QuickAddState::Success)?;

        controller.on_add_trigger(selection);
        Ok(Some(key))
    }

    /// Hold the success state for the reset delay, then return to idle.
    ///
    /// # Errors
    ///
    /// Returns [`QuickAddError`] if the button is not in the success state.
    pub async fn settle(&mut self) -> Result<(), QuickAddError> {
        if self.state != QuickAddState::Success {
            return Err(QuickAddError::InvalidTransition {
                from: self.state,
                to: QuickAddState::Idle,
            });
        }
        tokio::time::sleep(self.timing.reset_after).await;
        self.transition(QuickAddState::Idle)
    }

    /// Abandon a press that was dropped mid-latency.
    ///
    /// # Errors
    ///
    /// Returns [`QuickAddError`] if the button is not loading.
    pub fn cancel(&mut self) -> Result<(), QuickAddError> {
        if self.state != QuickAddState::Loading {
            return Err(QuickAddError::InvalidTransition {
                from: self.state,
                to: QuickAddState::Idle,
            });
        }
        self.transition(QuickAddState::Idle)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::cart::CartStore;
    use crate::notify::ToastCenter;
    use crate::surface::HtmlSurface;
    use apexfit_core::CurrencyCode;

    fn controller() -> DrawerController<HtmlSurface, ToastCenter> {
        DrawerController::new(
            CartStore::new(CurrencyCode::USD),
            HtmlSurface::new(),
            ToastCenter::new(Duration::from_secs(4)),
        )
    }

    fn card() -> ProductCard {
        ProductCard {
            product_id: Some("3".to_string()),
            title: Some("Training Short".to_string()),
            image_url: None,
            price_text: Some("$38.00".to_string()),
        }
    }

    #[test]
    fn test_labels_and_disabled() {
        assert_eq!(QuickAddState::Idle.label(), "QUICK ADD");
        assert_eq!(QuickAddState::Success.label(), "ADDED");
        assert!(!QuickAddState::Idle.is_disabled());
        assert!(QuickAddState::Loading.is_disabled());
        assert_eq!(QuickAddState::Loading.css_class(), Some("loading"));
        assert_eq!(QuickAddState::Idle.css_class(), None);
    }

    #[test]
    fn test_illegal_transition_rejected() {
        let mut button = QuickAddButton::new(QuickAddConfig::default());
        let err = button.transition(QuickAddState::Success).unwrap_err();
        assert_eq!(
            err,
            QuickAddError::InvalidTransition {
                from: QuickAddState::Idle,
                to: QuickAddState::Success,
            }
        );
        assert_eq!(button.state(), QuickAddState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_cycle() {
        let mut button = QuickAddButton::new(QuickAddConfig::default());
        let mut ctl = controller();
        let defaults = ProductDefaults::default();

        let started = tokio::time::Instant::now();
        let key = button.press(&card(), &defaults, &mut ctl).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(500));
        assert_eq!(button.state(), QuickAddState::Success);

        let key = key.unwrap();
        assert_eq!(ctl.snapshot().get(&key).map(|i| i.quantity.get()), Some(1));
        assert!(ctl.is_open());
        assert_eq!(
            ctl.notifier().current().map(|t| t.message.as_str()),
            Some("Training Short added to cart")
        );

        button.settle().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(2500));
        assert_eq!(button.state(), QuickAddState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_press_ignored_while_success() {
        let mut button = QuickAddButton::new(QuickAddConfig::default());
        let mut ctl = controller();
        let defaults = ProductDefaults::default();

        button.press(&card(), &defaults, &mut ctl).await.unwrap();
        let second = button.press(&card(), &defaults, &mut ctl).await.unwrap();

        assert!(second.is_none());
        assert_eq!(ctl.store().aggregates().item_count, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_press_never_reaches_cart() {
        let mut button = QuickAddButton::new(QuickAddConfig::default());
        let mut ctl = controller();
        let defaults = ProductDefaults::default();

        let result = tokio::time::timeout(
            Duration::from_millis(100),
            button.press(&card(), &defaults, &mut ctl),
        )
        .await;

        assert!(result.is_err());
        assert!(ctl.snapshot().is_empty());
        assert_eq!(button.state(), QuickAddState::Loading);
        button.cancel().unwrap();
        assert_eq!(button.state(), QuickAddState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_requires_success() {
        let mut button = QuickAddButton::new(QuickAddConfig::default());
        assert!(button.settle().await.is_err());
    }
}
