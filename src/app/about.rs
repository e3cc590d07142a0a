use std::time::Duration;

use leptos::{ev::PointerEvent, html, prelude::*};
use leptos_meta::Title;
use leptos_router::{hooks::use_navigate, NavigateOptions};
use leptos_use::{
    use_event_listener, use_raf_fn_with_options, use_window, utils::Pausable,
    UseRafFnCallbackArgs, UseRafFnOptions,
};

use super::{
    hooks::{use_fine_pointer, use_in_view, use_reduced_motion},
    navbar::Navbar,
};
use crate::content::PROFILE;
use crate::motion::{card_tilt, Spring, SpringConfig};

const PHOTO_TILT_X_MAX: f64 = 8.0;
const PHOTO_TILT_Y_MAX: f64 = 10.0;
const TILT_SPRING: SpringConfig = SpringConfig::new(220.0, 22.0, 0.35);
/// Resting lamp position as a share of the section's size.
const LAMP_REST: (f64, f64) = (0.5, 0.4);
const ABOUT_TRANSITION: Duration = Duration::from_millis(780);
const REDUCED_ABOUT_TRANSITION: Duration = Duration::from_millis(220);
const MAX_FRAME_SECS: f64 = 0.05;

const PHOTO_OFFSETS: [&str; 3] = ["mt-4 md:mt-7", "-mt-3 md:-mt-6", "mt-7 md:mt-11"];

#[derive(Debug, Clone, Copy)]
struct CardTilt {
    x: Spring,
    y: Spring,
}

impl CardTilt {
    fn new() -> Self {
        Self {
            x: Spring::new(TILT_SPRING, 0.0),
            y: Spring::new(TILT_SPRING, 0.0),
        }
    }

    fn aim(&mut self, (x, y): (f64, f64)) {
        self.x.set_target(x);
        self.y.set_target(y);
    }

    fn step(&mut self, dt: f64) -> (f64, f64) {
        (self.x.step(dt), self.y.step(dt))
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let left_ref = NodeRef::<html::Div>::new();
    let right_ref = NodeRef::<html::Div>::new();
    let card_ref = NodeRef::<html::Div>::new();

    let fine_pointer = use_fine_pointer();
    let reduced_motion = use_reduced_motion();
    let left_in_view = use_in_view(left_ref, 0.45);
    let right_in_view = use_in_view(right_ref, 0.35);
    let ambient =
        Signal::derive(move || right_in_view.get() && fine_pointer.get() && !reduced_motion.get());

    let (loading, set_loading) = signal(false);
    let (touch_flip, set_touch_flip) = signal(false);
    let lamp = RwSignal::new((0.0, 0.0));
    let mask = RwSignal::new((0.0, 0.0));
    let tilt = StoredValue::new(CardTilt::new());
    let (angles, set_angles) = signal((0.0, 0.0));
    let nav_timer = StoredValue::new(None::<TimeoutHandle>);
    let navigate = use_navigate();

    let set_lamp_by_client = move |client_x: f64, client_y: f64| {
        let Some(section) = section_ref.get_untracked() else {
            return;
        };
        let rect = section.get_bounding_client_rect();
        lamp.set((client_x - rect.left(), client_y - rect.top()));

        let Some(card) = card_ref.get_untracked() else {
            return;
        };
        let rect = card.get_bounding_client_rect();
        let (x, y) = (client_x - rect.left(), client_y - rect.top());
        mask.set((x, y));
        let target = card_tilt(x, y, rect.width(), rect.height(), PHOTO_TILT_X_MAX, PHOTO_TILT_Y_MAX);
        tilt.update_value(|t| t.aim(target));
    };

    let center_lamp = move || {
        let Some(section) = section_ref.get_untracked() else {
            return;
        };
        let rect = section.get_bounding_client_rect();
        set_lamp_by_client(
            rect.left() + section.client_width() as f64 * LAMP_REST.0,
            rect.top() + section.client_height() as f64 * LAMP_REST.1,
        );
        tilt.update_value(|t| t.aim((0.0, 0.0)));
    };

    Effect::new(move |_| {
        if section_ref.get().is_some() {
            center_lamp();
        }
    });
    let _ = use_event_listener(use_window(), leptos::ev::resize, move |_| center_lamp());

    let Pausable { pause, resume, .. } = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let dt = (args.delta / 1000.0).min(MAX_FRAME_SECS);
            if let Some(next) = tilt.try_update_value(|t| t.step(dt)) {
                if angles.get_untracked() != next {
                    set_angles.set(next);
                }
            }
        },
        UseRafFnOptions::default().immediate(false),
    );

    Effect::new(move |_| {
        if left_in_view.get() || right_in_view.get() {
            resume();
        } else {
            pause();
        }
    });

    on_cleanup(move || {
        if let Some(Some(timer)) = nav_timer.try_get_value() {
            timer.clear();
        }
    });

    let open_about = move |_| {
        if loading.get_untracked() {
            return;
        }
        set_loading.set(true);
        let delay = if reduced_motion.get_untracked() {
            REDUCED_ABOUT_TRANSITION
        } else {
            ABOUT_TRANSITION
        };
        let navigate = navigate.clone();
        match set_timeout_with_handle(move || navigate("/about", NavigateOptions::default()), delay)
        {
            Ok(timer) => nav_timer.set_value(Some(timer)),
            Err(err) => log::warn!("Couldn't schedule navigation to /about: {err:?}"),
        }
    };

    let photo = PROFILE.about_photo.clone();
    let mask_style = move || {
        let (x, y) = mask.get();
        let gradient = format!(
            "radial-gradient(250px circle at {x:.1}px {y:.1}px, rgba(255, 255, 255, 1) 0%, rgba(255, 255, 255, 0.92) 38%, rgba(255, 255, 255, 0.46) 63%, rgba(0, 0, 0, 0) 84%)"
        );
        format!("-webkit-mask-image: {gradient}; mask-image: {gradient}")
    };

    view! {
        <section
            id="about"
            node_ref=section_ref
            on:pointermove=move |ev: PointerEvent| {
                if fine_pointer.get_untracked() {
                    set_lamp_by_client(ev.client_x() as f64, ev.client_y() as f64);
                }
            }
            on:pointerdown=move |ev: PointerEvent| {
                if !fine_pointer.get_untracked() {
                    set_lamp_by_client(ev.client_x() as f64, ev.client_y() as f64);
                }
            }
            on:pointerleave=move |_| center_lamp()
            class="relative flex min-h-screen items-center overflow-hidden bg-[var(--bg-surface)] px-6 py-24 text-[var(--text-primary)] md:px-16"
        >
            <div
                aria-hidden="true"
                class="pointer-events-none absolute inset-0"
                style:background=move || {
                    let (x, y) = lamp.get();
                    format!(
                        "radial-gradient(420px circle at {x:.1}px {y:.1}px, rgba(56, 189, 248, 0.14), rgba(59, 130, 246, 0.05) 55%, transparent 75%)",
                    )
                }
            />
            <div class="relative z-0 mx-auto grid w-full max-w-6xl items-center gap-10 md:grid-cols-2">
                <div
                    node_ref=left_ref
                    class="reveal"
                    class:revealed=move || left_in_view.get()
                    style="--reveal-y: 18px"
                >
                    <p class="text-sm uppercase tracking-[0.2em] text-[var(--text-muted)]">
                        "About Me"
                    </p>
                    <h2 class="mt-3 text-4xl md:text-6xl font-bold leading-tight">
                        {PROFILE.headline.clone()}
                    </h2>
                    <p class="mt-6 text-base leading-relaxed text-[var(--text-secondary)] md:text-lg">
                        {PROFILE.summary.clone()}
                    </p>
                    <div
                        class="reveal mt-7"
                        class:revealed=move || left_in_view.get()
                        style="--reveal-y: 14px; --reveal-delay: 120ms; --reveal-duration: 400ms"
                    >
                        <button
                            type="button"
                            disabled=move || loading.get()
                            on:click=open_about
                            on:pointerdown=move |_| {
                                if !fine_pointer.get_untracked() {
                                    set_touch_flip.set(true);
                                }
                            }
                            on:pointerup=move |_| set_touch_flip.set(false)
                            on:pointercancel=move |_| set_touch_flip.set(false)
                            on:pointerleave=move |_| set_touch_flip.set(false)
                            class="flip-button relative inline-grid place-items-center rounded-full focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-[var(--accent-2)] disabled:pointer-events-none disabled:opacity-65"
                            class:flipped=move || touch_flip.get()
                        >
                            <span class="flip-face flip-front col-start-1 row-start-1 inline-flex items-center gap-2 rounded-full border border-[var(--border-subtle)] bg-[var(--accent-2)] px-5 py-2.5 text-sm font-semibold text-white shadow-[0_10px_28px_rgba(0,0,0,0.2)]">
                                <span>"About Me"</span>
                                <span aria-hidden="true">"->"</span>
                            </span>
                            <span class="flip-face flip-back col-start-1 row-start-1 inline-flex items-center gap-2 rounded-full border border-[var(--border-subtle)] bg-[var(--accent-2)]/90 px-5 py-2.5 text-sm font-semibold text-white shadow-[0_10px_28px_rgba(0,0,0,0.2)]">
                                <span>"About Me"</span>
                                <span aria-hidden="true">"->"</span>
                            </span>
                        </button>
                    </div>
                </div>

                <div
                    node_ref=right_ref
                    class="reveal"
                    class:revealed=move || right_in_view.get()
                    style="--reveal-y: 22px; --reveal-delay: 50ms; --reveal-duration: 550ms"
                >
                    <div
                        node_ref=card_ref
                        class="photo-card relative aspect-[4/3] w-full max-w-[560px] overflow-hidden rounded-3xl border border-[var(--border-subtle)] shadow-[0_20px_70px_rgba(0,0,0,0.35)] md:aspect-[5/4]"
                        style:transform=move || {
                            let (x, y) = angles.get();
                            format!("perspective(900px) rotateX({x:.3}deg) rotateY({y:.3}deg)")
                        }
                    >
                        <div class="absolute inset-0 bg-[linear-gradient(160deg,var(--bg-surface)_0%,var(--bg-elev)_48%,var(--bg-page)_100%)]" />
                        <div
                            class="photo-drift absolute inset-0 bg-cover bg-center"
                            class:drifting=move || ambient.get()
                            style:background-image=format!("url('{photo}')")
                        />
                        <div
                            aria-hidden="true"
                            class="absolute inset-0 bg-cover bg-center"
                            style=move || format!("background-image: url('{}'); {}", PROFILE.about_photo, mask_style())
                        />
                        <div class="absolute inset-0 bg-white/5" />
                        <div
                            aria-hidden="true"
                            class="photo-shine pointer-events-none absolute -inset-y-12 -left-1/2 w-1/2 bg-gradient-to-r from-transparent via-white/28 to-transparent"
                            class:drifting=move || ambient.get()
                        />
                    </div>
                </div>
            </div>

            <Show when=move || loading.get()>
                <div class="about-loading fixed inset-0 z-[160] flex items-center justify-center bg-[var(--bg-page)]/92">
                    <h3 class="about-loading-title text-[clamp(1.25rem,4vw,2.6rem)] font-semibold uppercase tracking-[0.08em] text-[var(--text-primary)]">
                        "faisporto-v1"
                    </h3>
                </div>
            </Show>
        </section>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let reduced_motion = use_reduced_motion();

    let photos = PROFILE
        .about_photos
        .iter()
        .enumerate()
        .map(|(i, photo)| {
            let offset = PHOTO_OFFSETS.get(i).copied().unwrap_or_default();
            let tilt = photo.tilt;
            let float = format!(
                "--float-offset: {}px; --float-duration: {:.2}s",
                photo.float_offset,
                5.2 + i as f64 * 0.55
            );
            view! {
                <figure
                    class=format!(
                        "about-photo enter-up relative aspect-[3/4] overflow-hidden rounded-2xl border border-[var(--border-subtle)] bg-[var(--bg-surface)] shadow-[0_20px_45px_rgba(0,0,0,0.24)] {offset}",
                    )
                    style=move || {
                        let rotate = if reduced_motion.get() { 0.0 } else { tilt };
                        format!("rotate: {rotate}deg; --enter-delay: {}ms", 120 + i * 60)
                    }
                >
                    <div class="photo-float relative h-full w-full" style=float>
                        <img
                            src=photo.src.clone()
                            alt=photo.alt.clone()
                            loading=if i == 0 { "eager" } else { "lazy" }
                            class="absolute inset-0 h-full w-full object-cover transition duration-500 ease-out hover:scale-[1.06]"
                        />
                        <div class="pointer-events-none absolute inset-0 bg-gradient-to-t from-black/20 via-transparent to-white/10" />
                    </div>
                </figure>
            }
        })
        .collect_view();

    let introduction = PROFILE
        .introduction
        .iter()
        .enumerate()
        .map(|(i, paragraph)| {
            let spacing = if i == 0 { "mt-5" } else { "mt-4" };
            view! {
                <p class=format!(
                    "{spacing} max-w-xl text-sm leading-relaxed text-[var(--text-secondary)] md:text-base",
                )>{paragraph.clone()}</p>
            }
        })
        .collect_view();

    view! {
        <Title text="About" />
        <Navbar />
        <main class="min-h-screen bg-[var(--bg-page)] px-6 pb-16 pt-28 text-[var(--text-primary)] md:px-16 md:pt-32">
            <div class="mx-auto w-full max-w-6xl">
                <section class="enter-blur mb-10">
                    <p class="text-xs uppercase tracking-[0.2em] text-[var(--text-muted)]">"About"</p>
                    <span class="mt-4 block h-[3px] w-24 rounded-full bg-[var(--text-secondary)]/70" />
                    <h1 class="mt-3 text-[clamp(2rem,7vw,4.25rem)] font-semibold leading-[1.04] tracking-tight">
                        "Who Am I"
                    </h1>
                </section>

                <section class="grid items-start gap-8 lg:grid-cols-[1.1fr_1fr] lg:gap-12">
                    <div class="enter-up grid grid-cols-3 gap-3 md:gap-4" style="--enter-delay: 80ms">
                        {photos}
                    </div>
                    <article
                        class="enter-up rounded-3xl border border-[var(--border-subtle)] bg-[var(--bg-surface)]/70 p-6 md:p-8"
                        style="--enter-delay: 160ms"
                    >
                        <p class="text-xs uppercase tracking-[0.2em] text-[var(--text-muted)]">
                            "Pengenalan"
                        </p>
                        <h2 class="mt-3 text-[clamp(1.5rem,4vw,2.4rem)] font-semibold leading-tight tracking-tight">
                            {PROFILE.full_name.clone()}
                        </h2>
                        {introduction}
                    </article>
                </section>
            </div>
        </main>
    }
}
