//! Thin wrappers over the browser APIs the components poke at directly.
//!
//! Only call these from effects and event handlers; they touch `window()`.

use leptos::prelude::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{
    NavigationType, PerformanceNavigationTiming, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Storage,
};

use crate::error::{Result, SiteError};
use crate::theme::AppliedTheme;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub fn media_matches(query: &str) -> bool {
    window()
        .match_media(query)
        .ok()
        .flatten()
        .is_some_and(|list| list.matches())
}

pub fn prefers_reduced_motion() -> bool {
    media_matches(REDUCED_MOTION_QUERY)
}

fn session_storage() -> Result<Storage> {
    window()
        .session_storage()
        .map_err(SiteError::storage)?
        .ok_or_else(|| SiteError::Storage("sessionStorage is disabled".to_string()))
}

/// Session flags are stored as `"1"`; anything else reads as unset.
pub fn session_flag(key: &str) -> Result<bool> {
    let value = session_storage()?
        .get_item(key)
        .map_err(SiteError::storage)?;
    Ok(value.as_deref() == Some("1"))
}

pub fn set_session_flag(key: &str) -> Result<()> {
    session_storage()?
        .set_item(key, "1")
        .map_err(SiteError::storage)
}

pub fn clear_session_flag(key: &str) -> Result<()> {
    session_storage()?
        .remove_item(key)
        .map_err(SiteError::storage)
}

/// Whether the current document was loaded by a reload.
pub fn is_reload() -> bool {
    let Some(performance) = window().performance() else {
        return false;
    };
    performance
        .get_entries_by_type("navigation")
        .get(0)
        .dyn_into::<PerformanceNavigationTiming>()
        .is_ok_and(|nav| nav.type_() == NavigationType::Reload)
}

/// Hides body overflow and returns the previous inline value.
pub fn lock_body_scroll() -> Result<String> {
    let body = document()
        .body()
        .ok_or_else(|| SiteError::Dom("document has no body".to_string()))?;
    let style = body.style();
    let previous = style
        .get_property_value("overflow")
        .map_err(SiteError::dom)?;
    style
        .set_property("overflow", "hidden")
        .map_err(SiteError::dom)?;
    Ok(previous)
}

pub fn restore_body_scroll(previous: &str) -> Result<()> {
    let Some(body) = document().body() else {
        return Ok(());
    };
    let style = body.style();
    if previous.is_empty() {
        style.remove_property("overflow").map_err(SiteError::dom)?;
    } else {
        style
            .set_property("overflow", previous)
            .map_err(SiteError::dom)?;
    }
    Ok(())
}

/// Whether something (the splash) currently holds the body's overflow.
pub fn is_scroll_locked() -> bool {
    document()
        .body()
        .and_then(|body| body.style().get_property_value("overflow").ok())
        .is_some_and(|overflow| overflow == "hidden")
}

pub fn set_document_theme(theme: AppliedTheme) -> Result<()> {
    let root = document()
        .document_element()
        .ok_or_else(|| SiteError::Dom("document has no root element".to_string()))?;
    root.set_attribute("data-theme", theme.as_str())
        .map_err(SiteError::dom)
}

pub fn element_by_id(id: &str) -> Option<web_sys::Element> {
    document().get_element_by_id(id)
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}

pub fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default()
}

/// Furthest the page can scroll down.
pub fn max_scroll() -> f64 {
    let height = document()
        .document_element()
        .map(|root| root.scroll_height() as f64)
        .unwrap_or_default();
    (height - viewport_height()).max(0.0)
}

pub fn scroll_to(y: f64) {
    window().scroll_to_with_x_and_y(0.0, y);
}

/// Top edge of `element` in document coordinates.
pub fn document_top(element: &web_sys::Element) -> f64 {
    element.get_bounding_client_rect().top() + scroll_y()
}

/// Scrolls the element with `id` to the top of the viewport, smoothly unless
/// reduced motion is requested. Returns `false` when it isn't in the DOM.
pub fn scroll_into_view(id: &str) -> bool {
    let Some(target) = element_by_id(id) else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(if prefers_reduced_motion() {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    });
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub fn location_hash() -> String {
    window().location().hash().unwrap_or_default()
}

pub fn decode_uri_component(value: &str) -> String {
    js_sys::decode_uri_component(value)
        .map(String::from)
        .unwrap_or_else(|_| value.to_string())
}

/// Uniform sample in `[0, 1)`.
pub fn random() -> f64 {
    js_sys::Math::random()
}
