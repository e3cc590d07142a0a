use leptos::{html, prelude::*};

use super::{
    hooks::{use_in_view, use_mobile_layout, use_reduced_motion},
    text::AnimatedText,
};
use crate::content::PROFILE;

const PREFIX: &str = "Tap or click to view";
const EMPHASIS: &str = "my projects";
const CHAR_STEP_MS: u32 = 26;
const EMPHASIS_BASE_MS: u32 = 180;
const DESKTOP_IN_VIEW_AMOUNT: f64 = 0.55;
const MOBILE_IN_VIEW_AMOUNT: f64 = 0.22;

const RING_PATH: &str = "M28 76C18 48 58 16 170 12C282 8 346 30 350 58C354 88 284 106 176 108C66 110 16 94 22 70C28 44 92 24 188 22";
const RING_TAIL_PATH: &str = "M186 22C252 20 318 34 336 52";

/// Hand-drawn ring around the emphasised words.
#[component]
fn Ring(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <svg
            aria-hidden="true"
            viewBox="0 0 360 120"
            preserveAspectRatio="none"
            class="ring pointer-events-none absolute -inset-x-4 -inset-y-3 h-[calc(100%+1.5rem)] w-[calc(100%+2rem)] overflow-visible"
            class:revealed=move || visible.get()
        >
            <path
                d=RING_PATH
                pathLength="1"
                class="ring-stroke"
                fill="none"
                stroke="var(--accent-2)"
                stroke-width="3"
                stroke-linecap="round"
            />
            <path
                d=RING_TAIL_PATH
                pathLength="1"
                class="ring-stroke ring-tail"
                fill="none"
                stroke="var(--accent-1)"
                stroke-width="2"
                stroke-linecap="round"
            />
        </svg>
    }
}

#[component]
pub fn ProjectSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let mobile = use_mobile_layout();
    let reduced_motion = use_reduced_motion();
    let lite = Signal::derive(move || reduced_motion.get() || mobile.get());
    let amount = Signal::derive(move || {
        if mobile.get() {
            MOBILE_IN_VIEW_AMOUNT
        } else {
            DESKTOP_IN_VIEW_AMOUNT
        }
    });
    let in_view = use_in_view(section_ref, amount);
    // bumping this remounts the mobile ring so its stroke animation replays
    let (cue_tick, set_cue_tick) = signal(0u32);

    let heading = move || {
        if lite.get() {
            view! {
                <h2 class="text-3xl font-semibold leading-snug md:text-5xl">
                    <span class="text-[var(--text-secondary)]">{PREFIX}</span>
                    " "
                    <span class="relative inline-block font-bold text-[var(--text-primary)]">
                        {EMPHASIS}
                        {move || {
                            cue_tick.track();
                            view! { <Ring visible=in_view /> }
                        }}
                    </span>
                </h2>
            }
            .into_any()
        } else {
            view! {
                <h2 class="group text-3xl font-semibold leading-snug md:text-6xl">
                    <AnimatedText
                        text=PREFIX
                        visible=in_view
                        step_ms=CHAR_STEP_MS
                        class="flex-wrap text-[var(--text-secondary)]"
                    />
                    " "
                    <span class="relative inline-block">
                        <AnimatedText
                            text=EMPHASIS
                            visible=in_view
                            base_delay_ms=EMPHASIS_BASE_MS
                            step_ms=CHAR_STEP_MS
                            expressive=true
                            class="shimmer font-bold"
                        />
                        <Ring visible=in_view />
                    </span>
                </h2>
            }
            .into_any()
        }
    };

    view! {
        <section
            id="project"
            node_ref=section_ref
            class="relative flex min-h-screen items-center justify-center overflow-hidden bg-[var(--bg-page)] px-6 py-24 text-center text-[var(--text-primary)]"
            class:lite=move || lite.get()
        >
            <div
                aria-hidden="true"
                class="pointer-events-none absolute left-1/2 top-1/2 h-[420px] w-[420px] -translate-x-1/2 -translate-y-1/2 rounded-full bg-[var(--glow-accent)] blur-3xl"
            />
            <a
                href=PROFILE.projects_url.clone()
                target="_blank"
                rel="noreferrer"
                on:pointerdown=move |_| {
                    if lite.get_untracked() {
                        set_cue_tick.update(|tick| *tick = tick.wrapping_add(1));
                    }
                }
                class="project-link reveal relative z-10 block max-w-4xl rounded-3xl px-4 py-6 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-[var(--accent-2)]"
                class:revealed=move || in_view.get()
            >
                {heading}
            </a>
        </section>
    }
}
