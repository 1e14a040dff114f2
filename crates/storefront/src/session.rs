//! Page session: the composition root for one storefront page load.
//!
//! A [`PageSession`] owns the drawer controller (and through it the cart
//! store), the toast center, and the quick-add button. Nothing is global;
//! a new session starts with an empty cart and [`PageSession::end`] throws
//! it away.
//!
//! Sessions can be driven from a JSON script of [`SessionStep`]s, which is
//! how the `apexfit-session` binary replays user journeys.

use std::collections::BTreeMap;

use apexfit_core::LineKey;
use serde::Deserialize;

use crate::cart::{CartStore, ProductSelection};
use crate::config::StorefrontConfig;
use crate::drawer::{Direction, DrawerController, DrawerEvent};
use crate::error::Result;
use crate::notify::ToastCenter;
use crate::product_card::ProductCard;
use crate::quick_add::QuickAddButton;
use crate::surface::HtmlSurface;

/// One user action in a session script.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionStep {
    /// A direct add trigger with a fully specified selection.
    Add(ProductSelection),
    /// A quick-add click on a product card, including its reset delay.
    QuickAdd(ProductCard),
    Increment(LineKey),
    Decrement(LineKey),
    Remove(LineKey),
    /// A click inside the drawer container, decoded from data attributes.
    Click {
        action: String,
        #[serde(default)]
        dataset: BTreeMap<String, String>,
    },
    Open,
    Close,
    Escape,
    DismissToast,
}

/// A page load's worth of cart state and collaborators.
pub struct PageSession {
    config: StorefrontConfig,
    controller: DrawerController<HtmlSurface, ToastCenter>,
    quick_add: QuickAddButton,
}

impl PageSession {
    /// Start a session with an empty cart.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let controller = DrawerController::new(
            CartStore::new(config.currency),
            HtmlSurface::new(),
            ToastCenter::new(config.toast_duration),
        );
        let quick_add = QuickAddButton::new(config.quick_add);
        Self {
            config,
            controller,
            quick_add,
        }
    }

    /// Parse a JSON array of steps.
    ///
    /// # Errors
    ///
    /// Returns an error if the script is not valid JSON or has unknown steps.
    pub fn parse_script(json: &str) -> Result<Vec<SessionStep>> {
        Ok(serde_json::from_str(json)?)
    }

    pub const fn controller(&self) -> &DrawerController<HtmlSurface, ToastCenter> {
        &self.controller
    }

    pub const fn quick_add(&self) -> &QuickAddButton {
        &self.quick_add
    }

    /// Run one step to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the quick-add button is driven out of order.
    pub async fn run_step(&mut self, step: SessionStep) -> Result<()> {
        self.controller
            .notifier_mut()
            .expire(tokio::time::Instant::now().into_std());

        match step {
            SessionStep::Add(selection) => self.controller.on_add_trigger(selection),
            SessionStep::QuickAdd(card) => {
                let added = self
                    .quick_add
                    .press(&card, &self.config.product_defaults, &mut self.controller)
                    .await?;
                if added.is_some() {
                    self.quick_add.settle().await?;
                }
            }
            SessionStep::Increment(key) => {
                self.controller
                    .on_quantity_control_clicked(key, Direction::Plus);
            }
            SessionStep::Decrement(key) => {
                self.controller
                    .on_quantity_control_clicked(key, Direction::Minus);
            }
            SessionStep::Remove(key) => self.controller.on_remove_control_clicked(key),
            SessionStep::Click { action, dataset } => {
                match DrawerEvent::from_dataset(&action, &dataset) {
                    Some(event) => self.controller.dispatch(event),
                    None => tracing::debug!(action = %action, "Click outside cart controls ignored"),
                }
            }
            SessionStep::Open => self.controller.dispatch(DrawerEvent::Toggle),
            SessionStep::Close => self.controller.dispatch(DrawerEvent::CloseButton),
            SessionStep::Escape => self.controller.dispatch(DrawerEvent::EscapePressed),
            SessionStep::DismissToast => {
                self.controller.notifier_mut().dismiss();
            }
        }
        Ok(())
    }

    /// Run every step in order.
    ///
    /// # Errors
    ///
    /// Stops at the first step that fails.
    pub async fn replay(&mut self, steps: Vec<SessionStep>) -> Result<()> {
        for step in steps {
            self.run_step(step).await?;
        }
        Ok(())
    }

    /// End the session: the cart does not outlive the page.
    pub fn end(&mut self) {
        self.controller.reset();
        self.controller.notifier_mut().dismiss();
    }
}
