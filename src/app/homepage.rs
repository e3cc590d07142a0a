use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    about::AboutSection,
    contact::ContactSection,
    dock::BottomDock,
    dom,
    hero::Hero,
    navbar::Navbar,
    projects::ProjectSection,
    splash::{resolve_splash_gate, SplashScreen},
};
use crate::sections::{hash_target, HashRetry, HASH_SCROLL_RETRY_INTERVAL};

/// Scrolls to the location hash once the sections exist, retrying on a short
/// interval while they are still mounting.
fn scroll_to_location_hash(
    retry: StoredValue<HashRetry>,
    interval: StoredValue<Option<IntervalHandle>>,
) {
    let hash = dom::location_hash();
    let Some(target) = hash_target(&hash) else {
        return;
    };
    let target = dom::decode_uri_component(target);
    if dom::scroll_into_view(&target) {
        return;
    }

    let tick = move || {
        let pending = retry
            .try_update_value(|r| r.poll(|| dom::scroll_into_view(&target)))
            .unwrap_or(false);
        if !pending {
            if let Some(Some(handle)) = interval.try_update_value(Option::take) {
                handle.clear();
            }
            if let Some(attempts) = retry.try_with_value(HashRetry::attempts) {
                log::debug!("hash scroll to #{target} settled after {attempts} misses");
            }
        }
    };
    match set_interval_with_handle(tick, HASH_SCROLL_RETRY_INTERVAL) {
        Ok(handle) => interval.set_value(Some(handle)),
        Err(err) => log::warn!("Couldn't schedule hash scroll: {err:?}"),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (gate_resolved, set_gate_resolved) = signal(false);
    let (show_splash, set_show_splash) = signal(false);
    let gate_frame = StoredValue::new(None::<AnimationFrameRequestHandle>);
    let hash_retry = StoredValue::new(HashRetry::default());
    let hash_interval = StoredValue::new(None::<IntervalHandle>);

    // wait one frame so the gate reads session state after hydration
    Effect::new(move |_| {
        match request_animation_frame_with_handle(move || {
            set_show_splash.set(resolve_splash_gate().show);
            set_gate_resolved.set(true);
        }) {
            Ok(handle) => gate_frame.set_value(Some(handle)),
            Err(err) => {
                log::warn!("Couldn't defer the splash gate: {err:?}");
                set_gate_resolved.set(true);
            }
        }
    });
    on_cleanup(move || {
        if let Some(Some(handle)) = gate_frame.try_get_value() {
            handle.cancel();
        }
        hash_retry.try_update_value(HashRetry::cancel);
        if let Some(Some(handle)) = hash_interval.try_update_value(Option::take) {
            handle.clear();
        }
    });

    Effect::new(move |_| {
        if gate_resolved.get() {
            scroll_to_location_hash(hash_retry, hash_interval);
        }
    });

    view! {
        <Title text="Home" />
        <Show
            when=move || gate_resolved.get()
            fallback=|| view! { <div class="min-h-screen bg-[var(--bg-page)]" /> }
        >
            <Show when=move || show_splash.get()>
                <SplashScreen on_finish=Callback::new(move |_| set_show_splash.set(false)) />
            </Show>
            <Navbar />
            <main>
                <Hero />
                <AboutSection />
                <ProjectSection />
                <ContactSection />
            </main>
            <BottomDock />
        </Show>
    }
}
