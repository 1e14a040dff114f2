//! Unified error handling with Sentry integration.
//!
//! The cart engine itself never fails: stale identities are no-ops and
//! selections are validated upstream. Errors only arise at the edges, when
//! loading configuration, rendering templates, driving the quick-add button,
//! or reading a session script.

use thiserror::Error;

use crate::config::ConfigError;
use crate::quick_add::QuickAddError;

/// A template failed to render.
#[derive(Debug, Error)]
#[error("Render error: {0}")]
pub struct RenderError(#[from] askama::Error);

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A template failed to render.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The quick-add button was driven out of order.
    #[error("Quick add error: {0}")]
    QuickAdd(#[from] QuickAddError),

    /// A session script could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A session script is malformed.
    #[error("Script error: {0}")]
    Script(#[from] serde_json::Error),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

/// Capture an error to Sentry and log it with the event ID.
pub fn report(error: &(dyn std::error::Error + 'static), context: &str) {
    let event_id = sentry::capture_error(error);
    tracing::error!(
        error = %error,
        sentry_event_id = %event_id,
        "{context}"
    );
}

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of cart
/// actions leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Added to cart", Some(&[("product_id", "123")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_storefront_error_display() {
        let err = StorefrontError::Config(ConfigError::InvalidEnvVar(
            "APEXFIT_CURRENCY".to_string(),
            "unsupported currency code: JPY".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "Config error: Invalid environment variable APEXFIT_CURRENCY: unsupported currency code: JPY"
        );
    }

    #[test]
    fn test_script_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = StorefrontError::from(json_err);
        assert!(err.to_string().starts_with("Script error:"));
    }

    #[test]
    fn test_breadcrumb_without_client_is_harmless() {
        // No Sentry client is bound in tests; this must not panic.
        add_breadcrumb("cart", "Added to cart", Some(&[("product_id", "1")]));
        add_breadcrumb("cart", "Drawer opened", None);
    }
}
