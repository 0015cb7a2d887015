use std::time::Duration;

use pagekit_bridge::config::EffectsConfig;
use pagekit_bridge::{HoverEffect, UiBinding};

const FADE_IN_SELECTOR: &str = ".fade-in";
const FADE_IN_ANIMATION: &str = "fadeIn 0.6s ease-in forwards";
const TOOLTIP_SELECTOR: &str = r#"[data-bs-toggle="tooltip"]"#;

const CARD_HOVER: HoverEffect = HoverEffect {
    enter_transform: "translateY(-2px)",
    transition: "transform 0.2s ease",
    leave_transform: "translateY(0)",
};

const STAT_CARD_HOVER: HoverEffect = HoverEffect {
    enter_transform: "translateY(-5px) scale(1.02)",
    transition: "transform 0.3s ease",
    leave_transform: "translateY(0) scale(1)",
};

/// Summary of what [`activate`] wired up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Activation {
    pub fade_ins: usize,
    pub hovers: usize,
    pub tooltips: usize,
}

/// Wires the decorative behaviour of a freshly loaded page: staggered fade-in
/// animations, hover lifts on cards and tooltips.
pub fn activate(binding: &dyn UiBinding, config: &EffectsConfig) -> Activation {
    let mut activation = Activation::default();

    for (index, element) in binding.select(FADE_IN_SELECTOR).into_iter().enumerate() {
        let delay = Duration::from_millis(config.fade_in_stagger_ms.saturating_mul(index as u64));
        binding.schedule_animation(element, FADE_IN_ANIMATION, delay);
        activation.fade_ins += 1;
    }

    if config.enable_hover {
        for (selector, effect) in [(".card", &CARD_HOVER), (".stat-card", &STAT_CARD_HOVER)] {
            for element in binding.select(selector) {
                binding.bind_hover(element, effect);
                activation.hovers += 1;
            }
        }
    }

    if config.enable_tooltips {
        for element in binding.select(TOOLTIP_SELECTOR) {
            binding.attach_tooltip(element);
            activation.tooltips += 1;
        }
    }

    log::info!(
        "Page initialized: {} fade-ins, {} hover effects, {} tooltips",
        activation.fade_ins,
        activation.hovers,
        activation.tooltips
    );
    activation
}

#[cfg(test)]
mod tests {
    use pagekit_headless::HeadlessPage;

    use super::*;

    #[test]
    fn fade_ins_are_staggered_in_document_order() {
        let page = HeadlessPage::new();
        let first = page.add_element(&["fade-in"], &[]);
        page.add_element(&["navbar"], &[]);
        let second = page.add_element(&["fade-in", "card"], &[]);

        let activation = activate(&page, &EffectsConfig::default());
        assert_eq!(activation.fade_ins, 2);

        let animations = page.scheduled_animations();
        assert_eq!(animations[0].element, first);
        assert_eq!(animations[0].delay, Duration::ZERO);
        assert_eq!(animations[1].element, second);
        assert_eq!(animations[1].delay, Duration::from_millis(100));
        assert!(animations.iter().all(|a| a.animation == FADE_IN_ANIMATION));
    }

    #[test]
    fn cards_and_stat_cards_get_their_own_hover() {
        let page = HeadlessPage::new();
        let card = page.add_element(&["card"], &[]);
        let stat = page.add_element(&["stat-card"], &[]);

        activate(&page, &EffectsConfig::default());
        assert_eq!(
            page.hover_bindings(),
            vec![(card, CARD_HOVER), (stat, STAT_CARD_HOVER)]
        );
    }

    #[test]
    fn tooltips_only_on_tooltip_toggles() {
        let page = HeadlessPage::new();
        let tip = page.add_element(&[], &[("data-bs-toggle", "tooltip")]);
        page.add_element(&[], &[("data-bs-toggle", "dropdown")]);

        let activation = activate(&page, &EffectsConfig::default());
        assert_eq!(activation.tooltips, 1);
        assert_eq!(page.tooltips(), vec![tip]);
    }

    #[test]
    fn huge_stagger_saturates() {
        let page = HeadlessPage::new();
        page.add_element(&["fade-in"], &[]);
        page.add_element(&["fade-in"], &[]);
        page.add_element(&["fade-in"], &[]);

        let config = EffectsConfig {
            fade_in_stagger_ms: u64::MAX,
            ..EffectsConfig::default()
        };
        activate(&page, &config);

        let delays: Vec<_> = page
            .scheduled_animations()
            .into_iter()
            .map(|animation| animation.delay)
            .collect();
        assert_eq!(
            delays,
            vec![
                Duration::ZERO,
                Duration::from_millis(u64::MAX),
                Duration::from_millis(u64::MAX),
            ]
        );
    }

    #[test]
    fn disabled_effects_are_skipped() {
        let page = HeadlessPage::new();
        page.add_element(&["card"], &[("data-bs-toggle", "tooltip")]);

        let config = EffectsConfig {
            enable_hover: false,
            enable_tooltips: false,
            ..EffectsConfig::default()
        };
        assert_eq!(activate(&page, &config), Activation::default());
    }
}
