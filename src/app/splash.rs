use std::time::Duration;

use leptos::{ev::KeyboardEvent, prelude::*};

use super::{dom, text::AnimatedText};
use crate::splash::{
    timeline, ExitReason, SplashGate, SplashMachine, SplashPhase, BRAND_STAGGER_MS, BRAND_TEXT,
    LANDING_SPLASH_SHOWN_FLAG, SKIP_SPLASH_ONCE_FLAG,
};

/// Reads and updates the session flags that decide whether this landing
/// gets the intro.
pub fn resolve_splash_gate() -> SplashGate {
    let read = |key: &str| {
        dom::session_flag(key).unwrap_or_else(|err| {
            log::warn!("Couldn't read splash flag {key}: {err}");
            false
        })
    };
    let gate = SplashGate::decide(
        read(SKIP_SPLASH_ONCE_FLAG),
        read(LANDING_SPLASH_SHOWN_FLAG),
        dom::is_reload(),
    );
    if gate.clear_skip_once {
        if let Err(err) = dom::clear_session_flag(SKIP_SPLASH_ONCE_FLAG) {
            log::warn!("Couldn't clear splash skip flag: {err}");
        }
    }
    if gate.mark_shown {
        if let Err(err) = dom::set_session_flag(LANDING_SPLASH_SHOWN_FLAG) {
            log::warn!("Couldn't mark splash as shown: {err}");
        }
    }
    log::debug!("splash gate: {gate:?}");
    gate
}

#[component]
pub fn SplashScreen(#[prop(into)] on_finish: Callback<()>) -> impl IntoView {
    let machine = RwSignal::new(SplashMachine::new(false));
    let reduced_motion = RwSignal::new(false);
    let cue_timers = StoredValue::new(Vec::<TimeoutHandle>::new());
    let finish_timer = StoredValue::new(None::<TimeoutHandle>);
    let scroll_lock = StoredValue::new(None::<String>);

    let clear_cues = move || {
        cue_timers.try_update_value(|timers| timers.drain(..).for_each(|t| t.clear()));
    };

    let finish_after = move |delay: Duration| {
        match set_timeout_with_handle(move || on_finish.run(()), delay) {
            Ok(handle) => finish_timer.set_value(Some(handle)),
            Err(err) => {
                log::warn!("Couldn't schedule splash finish: {err:?}");
                on_finish.run(());
            }
        }
    };

    let start_exit = move |reason: ExitReason| {
        if let Some(Some(delay)) = machine.try_update(|m| m.exit(reason)) {
            clear_cues();
            finish_after(delay);
        }
    };

    Effect::new(move |_| {
        let reduced = dom::prefers_reduced_motion();
        reduced_motion.set(reduced);
        machine.set(SplashMachine::new(reduced));

        match dom::lock_body_scroll() {
            Ok(previous) => scroll_lock.set_value(Some(previous)),
            Err(err) => log::warn!("Couldn't lock scrolling under the splash: {err}"),
        }

        let timers = timeline(reduced)
            .into_iter()
            .filter_map(|(at, cue)| {
                set_timeout_with_handle(
                    move || {
                        if let Some(Some(delay)) = machine.try_update(|m| m.apply(cue)) {
                            finish_after(delay);
                        }
                    },
                    at,
                )
                .map_err(|err| log::warn!("Couldn't schedule splash cue: {err:?}"))
                .ok()
            })
            .collect::<Vec<_>>();
        cue_timers.set_value(timers);
    });

    on_cleanup(move || {
        clear_cues();
        if let Some(Some(timer)) = finish_timer.try_get_value() {
            timer.clear();
        }
        if let Some(Some(previous)) = scroll_lock.try_get_value() {
            if let Err(err) = dom::restore_body_scroll(&previous) {
                log::warn!("Couldn't restore scrolling after the splash: {err}");
            }
        }
    });

    let phase = Memo::new(move |_| machine.with(|m| m.phase()));
    let skipping = Memo::new(move |_| machine.with(|m| m.is_skipping()));
    let greeting = Memo::new(move |_| {
        machine.with(|m| (m.phase() == SplashPhase::Greetings).then(|| m.current_greeting()))
    });
    let exiting = move || phase.get() == SplashPhase::Exiting;

    let heading = move || match greeting.get() {
        Some(greeting) => view! {
            <h1
                dir=greeting.dir.as_str()
                class="splash-greeting text-[clamp(2.2rem,9vw,5.6rem)] font-semibold leading-tight tracking-tight text-white/96"
            >
                {greeting.text}
            </h1>
        }
        .into_any(),
        None => view! {
            <h1 class="splash-brand text-[clamp(2rem,8vw,5.2rem)] font-semibold leading-tight tracking-tight text-white/95">
                <AnimatedText text=BRAND_TEXT visible=true step_ms=BRAND_STAGGER_MS />
            </h1>
        }
        .into_any(),
    };

    view! {
        <div
            class="splash fixed inset-0 z-[200] flex cursor-pointer items-center justify-center overflow-hidden bg-black"
            class:exiting=exiting
            role="button"
            tabindex="0"
            aria-label="Close splash screen"
            on:click=move |_| {
                if !exiting() {
                    start_exit(ExitReason::Skip);
                }
            }
            on:keydown=move |ev: KeyboardEvent| {
                if exiting() {
                    return;
                }
                let key = ev.key();
                if key == "Enter" || key == " " {
                    ev.prevent_default();
                    start_exit(ExitReason::Skip);
                }
            }
        >
            <div class="pointer-events-none absolute inset-0">
                <div class="splash-orb splash-orb-a absolute -left-20 top-[-180px] h-[460px] w-[460px] rounded-full bg-cyan-400/14 blur-3xl" />
                <div class="splash-orb splash-orb-b absolute -right-24 bottom-[-210px] h-[520px] w-[520px] rounded-full bg-blue-500/14 blur-3xl" />
            </div>

            <div class="relative z-10 px-6 text-center">
                {heading}
                <Show when=move || !exiting()>
                    <p class="splash-hint mt-4 text-xs uppercase tracking-[0.2em] text-white/55">
                        "Click anywhere to skip"
                    </p>
                </Show>
            </div>

            <Show when=exiting>
                <div class="pointer-events-none absolute inset-0 z-20 overflow-hidden">
                    {move || {
                        if reduced_motion.get() {
                            view! { <div class="splash-fade-out absolute inset-0 bg-black" /> }
                                .into_any()
                        } else {
                            view! {
                                <div class="wipe-blob wipe-blob-1 absolute -bottom-[36vmax] -right-[34vmax] h-[82vmax] w-[82vmax] bg-[#75d8ff]" />
                                <div class="wipe-blob wipe-blob-2 absolute -bottom-[34vmax] -right-[30vmax] h-[74vmax] w-[74vmax] bg-[#38bdf8]/90 mix-blend-screen" />
                                <div class="wipe-blob wipe-blob-3 absolute -bottom-[42vmax] -left-[36vmax] h-[70vmax] w-[70vmax] bg-[#22d3ee]/70 mix-blend-screen" />
                                <Show when=move || skipping.get()>
                                    <div class="skip-flash absolute inset-0 bg-white" />
                                </Show>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </Show>

            <div aria-hidden="true" class="splash-grain pointer-events-none absolute inset-0 opacity-[0.07]" />

            <div class="pointer-events-none absolute bottom-6 left-1/2 z-30 -translate-x-1/2 text-[10px] uppercase tracking-[0.25em] text-white/35">
                {move || {
                    if phase.get() == SplashPhase::Greetings { "Loading Sequence" } else { BRAND_TEXT }
                }}
            </div>
        </div>
    }
}
