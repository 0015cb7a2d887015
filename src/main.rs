use std::sync::Arc;
use std::time::Duration;

use pagekit::{Config, PageKit, Severity};
use pagekit_bridge::InputType;
use pagekit_headless::{HeadlessField, HeadlessForm, HeadlessPage};

/// Renders a sample page with the headless binding: activates effects,
/// validates a form and reports the outcome as a notification.
async fn run_preview() -> anyhow::Result<()> {
    let page = Arc::new(HeadlessPage::new());
    page.add_element(&["card", "fade-in"], &[]);
    page.add_element(&["stat-card", "fade-in"], &[]);
    page.add_element(&["btn"], &[("data-bs-toggle", "tooltip")]);

    let kit = PageKit::new(page.clone(), "http://localhost:5000", Config::default())?;
    kit.activate();

    let mut form = HeadlessForm::new([
        HeadlessField::new("name", InputType::Text).required(),
        HeadlessField::new("email", InputType::Email).with_value("ada@example.com"),
        HeadlessField::new("size", InputType::Number).with_value("ten"),
    ]);

    if kit.forms.validate_form(&mut form) {
        kit.notifications.show("Form is valid", Severity::Success);
    } else {
        for field in &form.fields {
            if let Some(feedback) = field.feedback() {
                log::warn!("{}: {feedback}", field.name);
            }
        }
        kit.notifications
            .show("Please fix the highlighted fields", Severity::Error);
    }

    for (id, toast) in page.toasts() {
        log::info!("{id} [{}] {}", toast.class_name, toast.message);
    }

    tokio::time::sleep(kit.config().notifications.display_duration() + Duration::from_millis(50))
        .await;
    log::info!("{} notifications left on screen", page.toast_count());

    Ok(())
}

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .init()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_preview())
}
