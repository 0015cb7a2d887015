use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ToastPlacement;

/// Severity or category for user-visible notifications.
///
/// This enum classifies notifications by their intent and visual styling,
/// allowing the UI binding to display them appropriately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Neutral informational message that does not indicate success or failure.
    #[default]
    Info,
    /// Indicates a successful operation or positive outcome.
    Success,
    /// Indicates a non-critical issue that the user should be aware of, but
    /// does not prevent normal operation.
    Warning,
    /// Indicates an error or failure that may affect functionality.
    Error,
}

impl Severity {
    /// All severities, in increasing order of urgency.
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Success,
        Severity::Warning,
        Severity::Error,
    ];

    /// Resolves a severity from its lowercase name. Unknown names fall back to
    /// [`Severity::Info`] so that a typo never prevents a message from showing.
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    /// Lowercase name of the severity.
    pub fn name(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// The visual channel used by the theme. Errors are rendered on the
    /// `danger` channel, every other severity on its own name.
    pub fn channel(self) -> &'static str {
        match self {
            Severity::Error => "danger",
            other => other.name(),
        }
    }

    /// Icon name displayed next to the message.
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "check-circle",
            Severity::Error => "exclamation-triangle",
            Severity::Warning => "exclamation-circle",
            Severity::Info => "info-circle",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.name())
    }
}

/// A notification payload intended for the user interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// The text content to display to the user.
    pub message: String,
    /// The severity of the notification, determining its visual style.
    pub severity: Severity,
    /// Moment the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            created_at: Utc::now(),
        }
    }
}

/// Identifier of a toast surface mounted through a [`crate::binding::UiBinding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u64);

impl std::fmt::Display for SurfaceId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "toast-{}", self.0)
    }
}

/// Everything a UI binding needs to render one notification.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastSurface {
    pub message: String,
    pub severity: Severity,
    /// Full class list, e.g. `alert alert-danger alert-dismissible fade show position-fixed`.
    pub class_name: String,
    pub icon: &'static str,
    pub placement: ToastPlacement,
    /// Whether the surface shows a close button.
    pub dismissible: bool,
}

impl ToastSurface {
    pub fn new(notification: &Notification, placement: &ToastPlacement) -> Self {
        let severity = notification.severity;
        Self {
            message: notification.message.clone(),
            severity,
            class_name: format!(
                "alert alert-{} alert-dismissible fade show position-fixed",
                severity.channel()
            ),
            icon: severity.icon(),
            placement: placement.clone(),
            dismissible: true,
        }
    }
}
