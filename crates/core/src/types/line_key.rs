//! Composite identity of a purchasable variant.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// Identifies one purchasable variant in the cart: product, size, and color.
///
/// Two selections with equal keys always resolve to the same line item.
/// Fields are compared structurally, so values containing separators such
/// as `-` or `/` can never collide with each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineKey {
    pub product_id: ProductId,
    pub size: String,
    pub color: String,
}

impl LineKey {
    /// Create a new line key.
    #[must_use]
    pub fn new(
        product_id: impl Into<ProductId>,
        size: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            size: size.into(),
            color: color.into(),
        }
    }
}

/// Human-readable form for logs only. Never parse this back.
impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} / {})", self.product_id, self.color, self.size)
    }
}
