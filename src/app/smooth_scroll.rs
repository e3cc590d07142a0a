use leptos::{
    ev::{self, MouseEvent, WheelEvent},
    prelude::*,
};
use leptos_use::{
    use_document, use_event_listener, use_event_listener_with_options, use_raf_fn_with_options,
    use_window, utils::Pausable, UseEventListenerOptions, UseRafFnCallbackArgs, UseRafFnOptions,
};
use wasm_bindgen::JsCast;

use super::{dom, hooks::use_reduced_motion};
use crate::scroll::{wheel_delta_pixels, ScrollDriver};

const IN_PAGE_LINK: &str = "a[href^=\"#\"]";
const MAX_FRAME_SECS: f64 = 0.05;

/// Eased wheel scrolling and animated in-page anchor jumps for the whole app.
///
/// Renders nothing; everything happens in window and document listeners.
#[component]
pub fn SmoothScroll() -> impl IntoView {
    let reduced_motion = use_reduced_motion();
    let driver = StoredValue::new(ScrollDriver::default());
    // the frame loop only runs while the driver has work
    let (animating, set_animating) = signal(false);

    let Pausable { pause, resume, .. } = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let dt = (args.delta / 1000.0).min(MAX_FRAME_SECS);
            let Some(Some(y)) = driver.try_update_value(|d| d.tick(dt)) else {
                set_animating.set(false);
                return;
            };
            dom::scroll_to(y);
            if driver.with_value(ScrollDriver::is_idle) {
                set_animating.set(false);
            }
        },
        UseRafFnOptions::default().immediate(false),
    );

    Effect::new(move |_| {
        if reduced_motion.get() {
            driver.update_value(ScrollDriver::stop);
            set_animating.set(false);
        }
    });

    Effect::new(move |_| {
        if animating.get() {
            resume();
        } else {
            pause();
        }
    });

    let _ = use_event_listener_with_options(
        use_window(),
        ev::wheel,
        move |ev: WheelEvent| {
            if reduced_motion.get_untracked() || ev.ctrl_key() || dom::is_scroll_locked() {
                return;
            }
            ev.prevent_default();
            let delta = wheel_delta_pixels(ev.delta_y(), ev.delta_mode(), dom::viewport_height());
            driver.update_value(|d| d.wheel(delta, dom::scroll_y(), dom::max_scroll()));
            set_animating.set(true);
        },
        UseEventListenerOptions::default().passive(false),
    );

    let _ = use_event_listener(use_document(), ev::click, move |ev: MouseEvent| {
        if reduced_motion.get_untracked() || ev.default_prevented() {
            return;
        }
        let Some(link) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(IN_PAGE_LINK).ok().flatten())
        else {
            return;
        };
        let Some(id) = link
            .get_attribute("href")
            .and_then(|href| href.strip_prefix('#').map(str::to_string))
            .filter(|id| !id.is_empty())
        else {
            return;
        };
        let Some(target) = dom::element_by_id(&dom::decode_uri_component(&id)) else {
            return;
        };
        ev.prevent_default();

        let to = dom::document_top(&target).min(dom::max_scroll());
        driver.update_value(|d| d.jump(dom::scroll_y(), to));
        set_animating.set(true);
    });
}
