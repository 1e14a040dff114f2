//! Toast notifications.
//!
//! The cart engine only ever *requests* a toast through [`Notifier`]; it
//! never reads one back. [`ToastCenter`] is the page-side implementation:
//! one toast at a time, auto-dismissed after a configured duration.
//!
//! Timestamps come from the tokio clock so toast expiry and the quick-add
//! timers advance together, including under paused test time.

use std::time::{Duration, Instant};

use askama::Template;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RenderError;

/// Toast severity, mapped to a `notification-*` CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Warning,
}

impl Severity {
    /// CSS modifier class.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Info => "notification-info",
            Self::Success => "notification-success",
            Self::Warning => "notification-warning",
        }
    }
}

/// Fire-and-forget sink for user-facing messages.
pub trait Notifier {
    fn notify(&mut self, message: &str, severity: Severity);
}

/// A visible toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub shown_at: Instant,
}

/// Toast fragment template.
#[derive(Template)]
#[template(path = "partials/toast.html")]
struct ToastTemplate<'a> {
    toast: &'a Toast,
}

/// Holds at most one toast; a new one replaces the current one.
#[derive(Debug, Clone)]
pub struct ToastCenter {
    current: Option<Toast>,
    duration: Duration,
}

impl ToastCenter {
    /// Create a toast center whose toasts last `duration`.
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    /// The toast on screen, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Show `message`, replacing whatever is on screen.
    pub fn show(&mut self, message: &str, severity: Severity, now: Instant) -> Uuid {
        let id = Uuid::new_v4();
        if let Some(previous) = self.current.take() {
            tracing::debug!(replaced = %previous.id, "Replacing toast");
        }
        self.current = Some(Toast {
            id,
            message: message.to_string(),
            severity,
            shown_at: now,
        });
        id
    }

    /// Close the current toast (close button).
    pub fn dismiss(&mut self) -> Option<Toast> {
        self.current.take()
    }

    /// Drop the current toast once its duration has elapsed.
    ///
    /// Returns the expired toast, if one was removed.
    pub fn expire(&mut self, now: Instant) -> Option<Toast> {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|toast| now.saturating_duration_since(toast.shown_at) >= self.duration);
        if expired { self.current.take() } else { None }
    }

    /// Render the current toast's markup, or an empty string when none is shown.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the template fails to render.
    pub fn render(&self) -> Result<String, RenderError> {
        match &self.current {
            Some(toast) => Ok(ToastTemplate { toast }.render()?),
            None => Ok(String::new()),
        }
    }
}

impl Notifier for ToastCenter {
    fn notify(&mut self, message: &str, severity: Severity) {
        tracing::info!(severity = ?severity, toast = message, "Toast requested");
        self.show(message, severity, tokio::time::Instant::now().into_std());
    }
}
