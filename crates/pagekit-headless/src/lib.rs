//! In-memory UI binding.
//!
//! [`HeadlessPage`] hosts toasts and decorative effects, [`HeadlessForm`] and
//! [`HeadlessField`] model form controls with their feedback containers, and
//! [`HeadlessButton`] stands in for a submit button. Everything is observable,
//! which makes the binding suitable for previews and tests.

mod form;
mod page;

pub use form::{ContainerNode, HeadlessButton, HeadlessField, HeadlessForm};
pub use page::{HeadlessPage, ScheduledAnimation};
