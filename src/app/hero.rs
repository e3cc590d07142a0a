use leptos::{
    ev::{MouseEvent, PointerEvent},
    html,
    prelude::*,
};
use leptos_use::{
    use_event_listener, use_raf_fn_with_options, use_window, utils::Pausable,
    UseRafFnCallbackArgs, UseRafFnOptions,
};

use super::{
    dom,
    hooks::{use_fine_pointer, use_in_view, use_reduced_motion},
};
use crate::content::PROFILE;
use crate::stickers::{Bounds, Point, Sticker, StickerField, STICKER_COUNT};

const HERO_IN_VIEW_AMOUNT: f64 = 0.55;

#[component]
pub fn Hero() -> impl IntoView {
    let hero_ref = NodeRef::<html::Section>::new();
    let in_view = use_in_view(hero_ref, HERO_IN_VIEW_AMOUNT);
    let reduced_motion = use_reduced_motion();
    let fine_pointer = use_fine_pointer();
    let animating = Signal::derive(move || in_view.get() && !reduced_motion.get());

    let field = StoredValue::new(StickerField::default());
    let pointer = StoredValue::new(None::<Point>);
    let prev_frame = StoredValue::new(None::<f64>);
    let (stickers, set_stickers) = signal(Vec::<Sticker>::new());

    let bounds = move || {
        hero_ref
            .get_untracked()
            .map(|hero| Bounds::new(hero.client_width() as f64, hero.client_height() as f64))
    };
    let publish = move || field.with_value(|f| set_stickers.set(f.stickers().to_vec()));

    Effect::new(move |_| {
        let Some(hero) = hero_ref.get() else {
            return;
        };
        let bounds = Bounds::new(hero.client_width() as f64, hero.client_height() as f64);
        let mut rng = dom::random;
        field.set_value(StickerField::spawn(bounds, &mut rng));
        publish();
    });

    let _ = use_event_listener(use_window(), leptos::ev::resize, move |_| {
        if let Some(bounds) = bounds() {
            field.update_value(|f| f.clamp_to(bounds));
            publish();
        }
    });

    let Pausable { pause, resume, .. } = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let Some(bounds) = bounds() else {
                return;
            };
            let now = args.timestamp;
            let prev = prev_frame.get_value();
            prev_frame.set_value(Some(now));
            field.update_value(|f| f.step(now, prev, pointer.get_value(), bounds));
            publish();
        },
        UseRafFnOptions::default().immediate(false),
    );

    Effect::new(move |_| {
        if animating.get() {
            resume();
        } else {
            pause();
            prev_frame.set_value(None);
        }
    });

    let push_sticker = move |id: usize, source: Option<Point>, now: f64| {
        field.update_value(|f| {
            let Some(source) = source.or_else(|| f.get(id).map(Sticker::center)) else {
                return;
            };
            let mut rng = dom::random;
            f.push_away(id, source, now, &mut rng);
        });
    };

    let relative_to_hero = move |client_x: i32, client_y: i32| {
        hero_ref.get_untracked().map(|hero| {
            let rect = hero.get_bounding_client_rect();
            Point::new(client_x as f64 - rect.left(), client_y as f64 - rect.top())
        })
    };

    let sticker_views = move || {
        (0..STICKER_COUNT)
            .map(|id| {
                let (image, size) = stickers
                    .with_untracked(|all| all.get(id).map(|s| (s.image(), format!("{}px", s.size))))
                    .unwrap_or_default();
                view! {
                    <img
                        src=image
                        alt=format!("sticker-{}", id + 1)
                        draggable="false"
                        class="sticker absolute top-0 left-0 select-none pointer-events-auto will-change-transform"
                        class:revealed=move || in_view.get()
                        style:width=size.clone()
                        style:height=size
                        style:transform=move || {
                            stickers.with(|all| all.get(id).map(Sticker::transform)).unwrap_or_default()
                        }
                        on:click=move |ev: MouseEvent| push_sticker(id, None, ev.time_stamp())
                        on:pointerdown=move |ev: PointerEvent| {
                            if let Some(source) = relative_to_hero(ev.client_x(), ev.client_y()) {
                                push_sticker(id, Some(source), ev.time_stamp());
                            }
                        }
                    />
                }
            })
            .collect_view()
    };

    view! {
        <section
            id="home"
            node_ref=hero_ref
            on:pointermove=move |ev: PointerEvent| {
                if animating.get_untracked() && fine_pointer.get_untracked() {
                    pointer.set_value(relative_to_hero(ev.client_x(), ev.client_y()));
                }
            }
            on:pointerleave=move |_| pointer.set_value(None)
            class="relative flex h-screen items-center justify-center overflow-hidden bg-[var(--bg-hero)] text-[var(--text-primary)]"
        >
            <div class="text-center z-10 px-4" class:revealed=move || in_view.get()>
                <h1
                    class="reveal text-4xl md:text-6xl font-bold"
                    style="--reveal-y: 40px; --reveal-duration: 800ms"
                >
                    {format!("Hi, I'm {}", PROFILE.first_name)}
                </h1>
                <p
                    class="reveal mt-4 text-base text-[var(--text-secondary)] md:text-lg"
                    style="--reveal-y: 10px; --reveal-delay: 500ms"
                >
                    {PROFILE.tagline.clone()}
                </p>
                <div
                    class="reveal mt-8 flex flex-col sm:flex-row items-center justify-center gap-3"
                    style="--reveal-y: 12px; --reveal-delay: 750ms; --reveal-duration: 450ms"
                >
                    <a
                        href=PROFILE.cv_path.clone()
                        download
                        class="inline-flex items-center justify-center rounded-full border border-[var(--border-subtle)] bg-[var(--text-primary)] px-6 py-3 text-sm font-semibold text-[var(--bg-page)] transition-transform duration-200 hover:scale-[1.03]"
                    >
                        "Download CV"
                    </a>
                    <a
                        href="#contact"
                        class="inline-flex items-center justify-center rounded-full border border-[var(--border-subtle)] px-6 py-3 text-sm font-semibold text-[var(--text-primary)] transition-colors duration-200 hover:bg-[var(--accent-soft)]"
                    >
                        "Contact Me"
                    </a>
                </div>
            </div>

            <Show when=move || stickers.with(|all| !all.is_empty())>{sticker_views}</Show>
        </section>
    }
}
