//! Transient notifications ("toasts").
//!
//! A notification lives until its display duration elapses or the user
//! presses its close button, whichever happens first. Both paths go through
//! the same removal routine, which checks that the surface is still attached
//! before detaching it, so racing or repeated dismissals are harmless.

mod center;

pub use center::NotificationCenter;
pub use pagekit_bridge::{Notification, Severity, SurfaceId};
