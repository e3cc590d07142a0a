#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod content;
pub mod dock;
pub mod error;
pub mod motion;
pub mod scroll;
pub mod sections;
pub mod splash;
pub mod stickers;
pub mod theme;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    // a second init (hot reload) only fails to replace the logger
    let _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(App);
}

#[cfg(test)]
mod tests {
    const STYLESHEET: &str = include_str!("../input.css");

    /// Classes whose look or motion lives only in the stylesheet.
    const STYLED_CLASSES: [&str; 53] = [
        "reveal",
        "revealed",
        "char-drop",
        "char-tilt-left",
        "char-tilt-right",
        "splash",
        "exiting",
        "splash-greeting",
        "splash-brand",
        "splash-hint",
        "splash-orb-a",
        "splash-orb-b",
        "wipe-blob",
        "wipe-blob-1",
        "wipe-blob-2",
        "wipe-blob-3",
        "skip-flash",
        "splash-fade-out",
        "splash-grain",
        "sticker",
        "hamburger",
        "open",
        "hamburger-top",
        "hamburger-middle",
        "hamburger-bottom",
        "menu-overlay",
        "menu-item",
        "page-transition",
        "entering",
        "dock-enter",
        "dock-dot",
        "active",
        "photo-card",
        "photo-drift",
        "drifting",
        "photo-shine",
        "flip-button",
        "flip-face",
        "flip-front",
        "flip-back",
        "flipped",
        "about-loading",
        "about-loading-title",
        "about-photo",
        "enter-up",
        "enter-blur",
        "photo-float",
        "shimmer",
        "ring",
        "ring-stroke",
        "ring-tail",
        "lite",
        "project-link",
    ];

    fn has_selector(css: &str, class: &str) -> bool {
        let needle = format!(".{class}");
        css.match_indices(&needle).any(|(at, _)| {
            css[at + needle.len()..]
                .chars()
                .next()
                .is_none_or(|c| !(c.is_ascii_alphanumeric() || c == '-'))
        })
    }

    #[test]
    fn test_selector_matches_whole_class() {
        assert!(has_selector(".lite .project-link {", "lite"));
        assert!(!has_selector(".lite-mode {", "lite"));
        assert!(!has_selector(".ring-stroke {", "ring"));
    }

    #[test]
    fn test_component_classes_have_rules() {
        for class in STYLED_CLASSES {
            assert!(has_selector(STYLESHEET, class), "no rule for .{class}");
        }
        assert!(has_selector(STYLESHEET, "social-button"));
    }
}
