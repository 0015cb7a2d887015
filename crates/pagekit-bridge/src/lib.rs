//! Bridge between the pagekit core and a concrete UI toolkit.
//!
//! This crate defines the vocabulary shared by every other pagekit crate:
//! - notification types ([`notification::Severity`],
//!   [`notification::Notification`], [`notification::ToastSurface`]);
//! - the traits a UI toolkit implements to host toasts, decorative effects,
//!   loading indicators and form fields ([`binding`], [`form`]);
//! - the library [`config::Config`].
//!
//! Nothing in here performs I/O. The core crates depend on these traits
//! only, so the same logic drives a browser binding, a native widget set or
//! the in-memory binding used by tests.

pub mod binding;
pub mod config;
pub mod form;
pub mod notification;

pub use binding::{DismissCallback, ElementId, HoverEffect, LoadingTarget, UiBinding};
pub use config::{Config, ConfigError, CredentialScope};
pub use form::{FieldElement, FormElement, InputType};
pub use notification::{Notification, Severity, SurfaceId, ToastSurface};
