use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use pagekit_bridge::{DismissCallback, ElementId, HoverEffect, SurfaceId, ToastSurface, UiBinding};

struct MountedToast {
    surface: ToastSurface,
    on_dismiss: DismissCallback,
}

/// A plain element that effects can be attached to.
#[derive(Debug, Clone, Default)]
struct Element {
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
}

/// An animation started through [`UiBinding::schedule_animation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledAnimation {
    pub element: ElementId,
    pub animation: String,
    pub delay: Duration,
}

#[derive(Default)]
struct PageState {
    elements: Vec<Element>,
    toasts: BTreeMap<SurfaceId, MountedToast>,
    removed_toasts: Vec<SurfaceId>,
    animations: Vec<ScheduledAnimation>,
    hovers: Vec<(ElementId, HoverEffect)>,
    tooltips: Vec<ElementId>,
}

/// In-memory page implementing [`UiBinding`].
///
/// Toasts are kept in mount order. Removing a toast that is not attached
/// panics, so a caller skipping the presence check is caught in tests.
#[derive(Default)]
pub struct HeadlessPage {
    state: Mutex<PageState>,
}

impl HeadlessPage {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds an element with the given classes and attributes.
    pub fn add_element(&self, classes: &[&str], attributes: &[(&str, &str)]) -> ElementId {
        let mut state = self.state();
        state.elements.push(Element {
            classes: classes.iter().map(|class| class.to_string()).collect(),
            attributes: attributes
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        });
        ElementId(state.elements.len() as u64 - 1)
    }

    /// Currently attached toasts, in mount order.
    pub fn toasts(&self) -> Vec<(SurfaceId, ToastSurface)> {
        self.state()
            .toasts
            .iter()
            .map(|(id, toast)| (*id, toast.surface.clone()))
            .collect()
    }

    pub fn toast_count(&self) -> usize {
        self.state().toasts.len()
    }

    /// Every toast removed so far, one entry per removal.
    pub fn removed_toasts(&self) -> Vec<SurfaceId> {
        self.state().removed_toasts.clone()
    }

    /// Simulates a click on the close button of a toast. Returns `false` when
    /// the toast is no longer on the page.
    pub fn click_dismiss(&self, id: SurfaceId) -> bool {
        let callback = {
            let state = self.state();
            match state.toasts.get(&id) {
                Some(toast) => toast.on_dismiss.clone(),
                None => return false,
            }
        };
        callback();
        true
    }

    pub fn scheduled_animations(&self) -> Vec<ScheduledAnimation> {
        self.state().animations.clone()
    }

    pub fn hover_bindings(&self) -> Vec<(ElementId, HoverEffect)> {
        self.state().hovers.clone()
    }

    pub fn tooltips(&self) -> Vec<ElementId> {
        self.state().tooltips.clone()
    }
}

/// Supports `.class`, `[attr]` and `[attr="value"]` selectors.
fn matches(element: &Element, selector: &str) -> bool {
    if let Some(class) = selector.strip_prefix('.') {
        return element.classes.iter().any(|candidate| candidate == class);
    }

    let Some(inner) = selector
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    else {
        return false;
    };

    match inner.split_once('=') {
        Some((name, value)) => {
            let value = value.trim_matches('"');
            element.attributes.get(name).map(String::as_str) == Some(value)
        }
        None => element.attributes.contains_key(inner),
    }
}

impl UiBinding for HeadlessPage {
    fn mount_toast(&self, id: SurfaceId, surface: &ToastSurface, on_dismiss: DismissCallback) {
        log::debug!("Mounting {id} ({}): {}", surface.severity, surface.message);
        self.state().toasts.insert(
            id,
            MountedToast {
                surface: surface.clone(),
                on_dismiss,
            },
        );
    }

    fn contains_toast(&self, id: SurfaceId) -> bool {
        self.state().toasts.contains_key(&id)
    }

    fn remove_toast(&self, id: SurfaceId) {
        let mut state = self.state();
        assert!(
            state.toasts.remove(&id).is_some(),
            "removed {id} which is not attached"
        );
        state.removed_toasts.push(id);
    }

    fn select(&self, selector: &str) -> Vec<ElementId> {
        self.state()
            .elements
            .iter()
            .enumerate()
            .filter(|(_, element)| matches(element, selector))
            .map(|(index, _)| ElementId(index as u64))
            .collect()
    }

    fn schedule_animation(&self, element: ElementId, animation: &str, delay: Duration) {
        self.state().animations.push(ScheduledAnimation {
            element,
            animation: animation.to_string(),
            delay,
        });
    }

    fn bind_hover(&self, element: ElementId, effect: &HoverEffect) {
        self.state().hovers.push((element, effect.clone()));
    }

    fn attach_tooltip(&self, element: ElementId) {
        self.state().tooltips.push(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_match_classes_and_attributes() {
        let page = HeadlessPage::new();
        let card = page.add_element(&["card", "fade-in"], &[]);
        let tip = page.add_element(&["btn"], &[("data-bs-toggle", "tooltip")]);
        let other = page.add_element(&["btn"], &[("data-bs-toggle", "modal")]);

        assert_eq!(page.select(".card"), vec![card]);
        assert_eq!(page.select(".btn"), vec![tip, other]);
        assert_eq!(page.select(r#"[data-bs-toggle="tooltip"]"#), vec![tip]);
        assert_eq!(page.select("[data-bs-toggle]"), vec![tip, other]);
        assert!(page.select("div").is_empty());
    }
}
