//! Line item quantity with a floor of one.

use core::fmt;
use core::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How many units of a variant sit in the cart.
///
/// A quantity is always at least 1. Reaching zero is represented by the
/// absence of a quantity ([`Quantity::decrement`] returns `None`), so a
/// line item can never hold zero units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A single unit.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Create a quantity, or `None` for zero.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Create a quantity, raising zero to one.
    #[must_use]
    pub const fn clamped(value: u32) -> Self {
        match NonZeroU32::new(value) {
            Some(n) => Self(n),
            None => Self::ONE,
        }
    }

    /// Get the underlying count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// One more unit, saturating at `u32::MAX`.
    #[must_use]
    pub const fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// One fewer unit, or `None` when the floor is reached.
    #[must_use]
    pub const fn decrement(self) -> Option<Self> {
        Self::new(self.0.get() - 1)
    }

    /// The quantity as a decimal multiplier for price arithmetic.
    #[must_use]
    pub fn as_decimal(self) -> Decimal {
        Decimal::from(self.0.get())
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.get()
    }
}
