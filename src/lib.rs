//! Client-side support library for server-rendered pages.
//!
//! The library is made of three independent components:
//! - [`HttpClient`]: JSON requests with uniform defaults;
//! - [`NotificationCenter`]: transient, auto-expiring notifications;
//! - [`FormValidator`]: field and form validation with inline feedback.
//!
//! [`PageKit`] bundles one instance of each around a single [`UiBinding`]
//! and wires the decorative page effects on [`PageKit::activate`]. Nothing is
//! global: every component can also be constructed on its own.

pub mod effects;
pub mod formatting;
pub mod loading;

use std::sync::Arc;

pub use pagekit_bridge::config::Config;
pub use pagekit_bridge::{Severity, UiBinding};
pub use pagekit_forms::FormValidator;
pub use pagekit_http::{HttpClient, HttpError, RequestOptions};
pub use pagekit_notify::NotificationCenter;

use crate::effects::Activation;

/// The components used by one page.
pub struct PageKit {
    pub http: HttpClient,
    pub notifications: NotificationCenter,
    pub forms: FormValidator,
    binding: Arc<dyn UiBinding>,
    config: Config,
}

impl PageKit {
    /// Builds the components for a page served from `base_url`.
    pub fn new(binding: Arc<dyn UiBinding>, base_url: &str, config: Config) -> Result<Self, HttpError> {
        Ok(Self {
            http: HttpClient::new(base_url, config.http.clone())?,
            notifications: NotificationCenter::new(binding.clone(), config.notifications.clone()),
            forms: FormValidator::new(config.validation.clone()),
            binding,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Wires animations, hover effects and tooltips. Call once the page has
    /// finished loading.
    pub fn activate(&self) -> Activation {
        effects::activate(self.binding.as_ref(), &self.config.effects)
    }
}
