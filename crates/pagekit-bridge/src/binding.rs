//! Traits implemented by a concrete UI toolkit.
//!
//! The core never touches a document directly. Toasts, decorative effects and
//! loading indicators go through [`UiBinding`] and [`LoadingTarget`]; form
//! fields go through [`crate::form::FieldElement`].

use std::sync::Arc;
use std::time::Duration;

use crate::notification::{SurfaceId, ToastSurface};

/// Callback invoked by the binding when the user presses a toast's close
/// button.
pub type DismissCallback = Arc<dyn Fn() + Send + Sync>;

/// Transform applied while the pointer hovers an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverEffect {
    /// Transform applied on pointer enter.
    pub enter_transform: &'static str,
    /// Transition used for the enter transform.
    pub transition: &'static str,
    /// Transform applied on pointer leave.
    pub leave_transform: &'static str,
}

/// Identifier of an element matched by [`UiBinding::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

pub trait UiBinding: Send + Sync + 'static {
    /// Inserts a toast surface under `id`. When the user activates the close
    /// button the binding calls `on_dismiss`; it must not remove the surface
    /// on its own.
    fn mount_toast(&self, id: SurfaceId, surface: &ToastSurface, on_dismiss: DismissCallback);

    /// Whether the surface is still attached to the page.
    fn contains_toast(&self, id: SurfaceId) -> bool;

    /// Detaches the surface. Only called after [`UiBinding::contains_toast`]
    /// returned `true`.
    fn remove_toast(&self, id: SurfaceId);

    /// Returns the elements matching a CSS selector, in document order.
    fn select(&self, selector: &str) -> Vec<ElementId>;

    /// Starts a CSS animation on an element after `delay`.
    fn schedule_animation(&self, element: ElementId, animation: &str, delay: Duration);

    /// Binds pointer enter/leave transforms to an element.
    fn bind_hover(&self, element: ElementId, effect: &HoverEffect);

    /// Instantiates a tooltip on an element.
    fn attach_tooltip(&self, element: ElementId);
}

/// A control (usually a button) that can display a loading indicator.
pub trait LoadingTarget {
    fn inner_html(&self) -> String;
    fn set_inner_html(&mut self, html: &str);
    fn set_disabled(&mut self, disabled: bool);
    /// Reads a `data-*` attribute.
    fn data(&self, key: &str) -> Option<String>;
    /// Writes a `data-*` attribute.
    fn set_data(&mut self, key: &str, value: &str);
}
