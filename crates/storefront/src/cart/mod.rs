//! Cart state engine.
//!
//! - [`intent`] - Requested mutations (`Add`, `Increment`, `Decrement`, `Remove`)
//! - [`store`] - The store that owns [`CartState`] and applies intents
//! - [`view`] - Pure projection of a snapshot into a [`CartViewModel`]

pub mod intent;
pub mod store;
pub mod view;

pub use intent::{CartIntent, ProductSelection};
pub use store::{Aggregates, Applied, CartState, CartStore, LineItem};
pub use view::{CartMode, CartRowView, CartViewModel};
