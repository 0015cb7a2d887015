use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::thread;

use pagekit_bridge::config::NotificationConfig;
use pagekit_bridge::{DismissCallback, Notification, Severity, SurfaceId, ToastSurface, UiBinding};
use tokio::task::AbortHandle;

/// How a notification left the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Removal {
    Expired,
    Dismissed,
}

struct LiveToast {
    notification: Notification,
    timer: Option<AbortHandle>,
}

struct Inner {
    binding: Arc<dyn UiBinding>,
    config: NotificationConfig,
    next_id: AtomicU64,
    live: Mutex<BTreeMap<SurfaceId, LiveToast>>,
}

impl Inner {
    fn live(&self) -> MutexGuard<'_, BTreeMap<SurfaceId, LiveToast>> {
        self.live.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Removes the surface if it is still attached. Returns whether this call
    /// removed it.
    fn remove(&self, id: SurfaceId, removal: Removal) -> bool {
        let mut live = self.live();
        if let Some(toast) = live.remove(&id)
            && removal == Removal::Dismissed
            && let Some(timer) = toast.timer
        {
            timer.abort();
        }

        if !self.binding.contains_toast(id) {
            log::debug!("{id} is already gone ({removal:?})");
            return false;
        }

        self.binding.remove_toast(id);
        log::debug!("Removed {id} ({removal:?})");
        true
    }
}

/// Creates, displays and expires transient notifications.
///
/// Every call to [`NotificationCenter::show`] mounts a new surface through the
/// [`UiBinding`] and starts its own expiry timer. Surfaces are never merged:
/// showing the same message twice yields two independent toasts.
///
/// Cloning the center is cheap and yields a handle to the same set of toasts.
#[derive(Clone)]
pub struct NotificationCenter {
    inner: Arc<Inner>,
}

impl NotificationCenter {
    pub fn new(binding: Arc<dyn UiBinding>, config: NotificationConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                binding,
                config,
                next_id: AtomicU64::new(1),
                live: Mutex::new(BTreeMap::new()),
            }),
        }
    }

    /// Shows a notification and schedules its removal.
    ///
    /// The expiry timer runs on the current Tokio runtime. Without one it
    /// falls back to a helper thread, so the toast still expires. A manual
    /// dismissal then leaves the helper thread nothing to remove.
    pub fn show(&self, message: impl Into<String>, severity: Severity) -> SurfaceId {
        let inner = &self.inner;
        let id = SurfaceId(inner.next_id.fetch_add(1, Ordering::Relaxed));
        let notification = Notification::new(message, severity);
        let surface = ToastSurface::new(&notification, &inner.config.placement);

        let weak: Weak<Inner> = Arc::downgrade(inner);
        let on_dismiss: DismissCallback = Arc::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.remove(id, Removal::Dismissed);
            }
        });

        log::debug!("Showing {id} ({severity}): {}", notification.message);
        inner.live().insert(
            id,
            LiveToast {
                notification,
                timer: None,
            },
        );
        inner.binding.mount_toast(id, &surface, on_dismiss);

        let expiring = Arc::clone(inner);
        let duration = inner.config.display_duration();
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let timer = handle.spawn(async move {
                    tokio::time::sleep(duration).await;
                    expiring.remove(id, Removal::Expired);
                });
                if let Some(toast) = inner.live().get_mut(&id) {
                    toast.timer = Some(timer.abort_handle());
                }
            }
            Err(err) => {
                log::warn!("No Tokio runtime for {id} ({err}), expiring it from a helper thread");
                thread::spawn(move || {
                    thread::sleep(duration);
                    expiring.remove(id, Removal::Expired);
                });
            }
        }

        id
    }

    /// Shows a notification whose severity is given by name. Unknown names
    /// are displayed as [`Severity::Info`].
    pub fn show_named(&self, message: impl Into<String>, severity: &str) -> SurfaceId {
        self.show(message, Severity::from_name(severity))
    }

    /// Removes a notification immediately and cancels its timer. Dismissing a
    /// notification that is already gone is a no-op returning `false`.
    pub fn dismiss(&self, id: SurfaceId) -> bool {
        self.inner.remove(id, Removal::Dismissed)
    }

    /// Notifications currently on screen, oldest first.
    pub fn active(&self) -> Vec<Notification> {
        self.inner
            .live()
            .values()
            .map(|toast| toast.notification.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.live().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.live().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pagekit_headless::HeadlessPage;

    use super::*;

    fn center() -> (Arc<HeadlessPage>, NotificationCenter) {
        let page = Arc::new(HeadlessPage::new());
        let center = NotificationCenter::new(page.clone(), NotificationConfig::default());
        (page, center)
    }

    async fn advance(millis: u64) {
        tokio::time::sleep(Duration::from_millis(millis)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn every_severity_mounts_one_surface_and_expires() {
        for severity in Severity::ALL {
            let (page, center) = center();
            let id = center.show("Saved", severity);

            let toasts = page.toasts();
            assert_eq!(toasts.len(), 1);
            assert_eq!(toasts[0].0, id);
            assert_eq!(toasts[0].1.severity, severity);

            advance(4_999).await;
            assert!(page.contains_toast(id));

            advance(2).await;
            assert!(!page.contains_toast(id));
            assert!(center.is_empty());
            assert_eq!(page.removed_toasts(), vec![id]);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn manual_dismiss_is_idempotent_and_cancels_timer() {
        let (page, center) = center();
        let id = center.show("Uploading", Severity::Info);

        assert!(center.dismiss(id));
        assert!(!center.dismiss(id));
        assert_eq!(page.toast_count(), 0);

        advance(6_000).await;
        assert_eq!(page.removed_toasts(), vec![id]);
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_after_expiry_is_a_no_op() {
        let (page, center) = center();
        let id = center.show("Done", Severity::Success);

        advance(5_001).await;
        assert!(!center.dismiss(id));
        assert!(!page.click_dismiss(id));
        assert_eq!(page.removed_toasts(), vec![id]);
    }

    #[tokio::test(start_paused = true)]
    async fn close_button_removes_immediately() {
        let (page, center) = center();
        let id = center.show("Heads up", Severity::Warning);

        assert!(page.click_dismiss(id));
        assert_eq!(page.toast_count(), 0);
        assert!(center.active().is_empty());

        advance(5_001).await;
        assert_eq!(page.removed_toasts(), vec![id]);
    }

    #[tokio::test(start_paused = true)]
    async fn identical_messages_have_independent_timers() {
        let (page, center) = center();
        let first = center.show("Retrying", Severity::Warning);
        advance(2_000).await;
        let second = center.show("Retrying", Severity::Warning);
        assert_ne!(first, second);
        assert_eq!(page.toast_count(), 2);
        assert_eq!(center.len(), 2);

        advance(3_001).await;
        assert!(!page.contains_toast(first));
        assert!(page.contains_toast(second));

        advance(2_000).await;
        assert_eq!(page.toast_count(), 0);
        assert_eq!(page.removed_toasts(), vec![first, second]);
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_severity_uses_info_treatment() {
        let (page, center) = center();
        center.show_named("Hello", "fatal");

        let (_, surface) = page.toasts().remove(0);
        assert_eq!(surface.severity, Severity::Info);
        assert_eq!(surface.icon, "info-circle");
        assert!(surface.class_name.contains("alert-info"));
    }

    #[tokio::test(start_paused = true)]
    async fn error_surfaces_use_the_danger_channel() {
        let (page, center) = center();
        center.show("Failed", Severity::Error);

        let (_, surface) = page.toasts().remove(0);
        assert!(surface.class_name.contains("alert-danger"));
        assert_eq!(surface.placement.top, 20);
        assert_eq!(surface.placement.right, 20);
    }

    #[tokio::test(start_paused = true)]
    async fn display_duration_is_configurable() {
        let page = Arc::new(HeadlessPage::new());
        let config = NotificationConfig {
            display_duration_ms: 1_000,
            ..NotificationConfig::default()
        };
        let center = NotificationCenter::new(page.clone(), config);
        center.show("Quick", Severity::Info);

        advance(1_001).await;
        assert_eq!(page.toast_count(), 0);
    }

    #[test]
    fn show_without_runtime_mounts_and_still_expires() {
        let page = Arc::new(HeadlessPage::new());
        let config = NotificationConfig {
            display_duration_ms: 50,
            ..NotificationConfig::default()
        };
        let center = NotificationCenter::new(page.clone(), config);

        let id = center.show("Offline", Severity::Warning);
        assert!(page.contains_toast(id));
        assert_eq!(center.len(), 1);

        std::thread::sleep(Duration::from_millis(500));
        assert_eq!(page.toast_count(), 0);
        assert!(center.is_empty());
        assert!(!center.dismiss(id));
        assert_eq!(page.removed_toasts(), vec![id]);
    }

    #[tokio::test(start_paused = true)]
    async fn active_lists_live_notifications_in_order() {
        let (_, center) = center();
        center.show("one", Severity::Info);
        let second = center.show("two", Severity::Error);
        center.dismiss(second);
        center.show("three", Severity::Success);

        let messages: Vec<_> = center
            .active()
            .into_iter()
            .map(|notification| notification.message)
            .collect();
        assert_eq!(messages, vec!["one", "three"]);
    }
}
