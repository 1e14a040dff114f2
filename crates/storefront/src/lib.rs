//! APEXFIT storefront cart engine.
//!
//! An in-memory cart for one page session: a [`cart::CartStore`] that turns
//! intents into state, a drawer controller that keeps the markup in step
//! with it, toast notifications, and quick-add buttons on product cards.
//!
//! # Layout
//!
//! - [`cart`] - intents, state, and the pure view projection
//! - [`drawer`] - UI events to intents, repaint after every change
//! - [`surface`] - where the drawer is painted (Askama-rendered HTML)
//! - [`notify`] - toasts
//! - [`product_card`] / [`quick_add`] - the add-to-cart entry points
//! - [`session`] - one page load, scriptable for replay

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod drawer;
pub mod error;
pub mod notify;
pub mod product_card;
pub mod quick_add;
pub mod session;
pub mod surface;
pub mod telemetry;
