use pagekit_bridge::LoadingTarget;

/// `data-*` key holding the content shown before the loading indicator.
const ORIGINAL_TEXT_KEY: &str = "original-text";

const SPINNER_HTML: &str = r#"<i class="fas fa-spinner fa-spin me-2"></i>Loading..."#;

/// Toggles the loading indicator of a control.
///
/// Entering the loading state stashes the current content and disables the
/// control. Leaving it restores the stashed content, or `fallback` when none
/// was stashed, and enables the control again.
pub fn set_loading<T: LoadingTarget + ?Sized>(target: &mut T, loading: bool, fallback: &str) {
    if loading {
        let current = target.inner_html();
        target.set_data(ORIGINAL_TEXT_KEY, &current);
        target.set_inner_html(SPINNER_HTML);
        target.set_disabled(true);
    } else {
        let original = target
            .data(ORIGINAL_TEXT_KEY)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        target.set_inner_html(&original);
        target.set_disabled(false);
    }
}
