use leptos::{ev, html::ElementType, prelude::*};
use leptos_use::{use_event_listener, use_media_query, use_window};
use wasm_bindgen::JsCast;

use super::dom;
use crate::sections::visible_fraction;

const FINE_POINTER_QUERY: &str = "(pointer: fine)";
const MOBILE_QUERY: &str = "(max-width: 768px), (pointer: coarse)";

pub fn use_reduced_motion() -> Signal<bool> {
    use_media_query(dom::REDUCED_MOTION_QUERY)
}

pub fn use_fine_pointer() -> Signal<bool> {
    use_media_query(FINE_POINTER_QUERY)
}

pub fn use_mobile_layout() -> Signal<bool> {
    use_media_query(MOBILE_QUERY)
}

/// Tracks whether at least `amount` of the element's height is on screen.
///
/// Re-measured on scroll and resize, and whenever `amount` changes.
pub fn use_in_view<E>(target: NodeRef<E>, amount: impl Into<Signal<f64>>) -> Signal<bool>
where
    E: ElementType + 'static,
    E::Output: JsCast + Clone + AsRef<web_sys::Element> + 'static,
{
    let amount = amount.into();
    let in_view = RwSignal::new(false);

    let measure = move || {
        let Some(el) = target.get_untracked() else {
            return;
        };
        let rect = AsRef::<web_sys::Element>::as_ref(&el).get_bounding_client_rect();
        let fraction = visible_fraction(rect.top(), rect.height(), dom::viewport_height());
        let visible = fraction > 0.0 && fraction >= amount.get_untracked();
        if in_view.get_untracked() != visible {
            in_view.set(visible);
        }
    };

    Effect::new(move |_| {
        if target.get().is_some() {
            amount.track();
            measure();
        }
    });
    let _ = use_event_listener(use_window(), ev::scroll, move |_| measure());
    let _ = use_event_listener(use_window(), ev::resize, move |_| measure());

    in_view.into()
}
