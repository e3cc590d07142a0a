use leptos::{ev::PointerEvent, html, prelude::*};
use leptos_use::{use_event_listener, use_raf_fn, use_window, UseRafFnCallbackArgs};

use super::{dom, icons::SectionIcon};
use crate::dock::{DockFrame, DockMagnifier};
use crate::sections::{active_section, scroll_probe, Section};

const MAX_FRAME_SECS: f64 = 0.05;

fn current_section() -> Section {
    let offsets = Section::ALL
        .iter()
        .filter_map(|&section| {
            dom::element_by_id(section.id()).map(|el| (section, dom::document_top(&el)))
        })
        .collect::<Vec<_>>();
    active_section(&offsets, scroll_probe(dom::scroll_y(), dom::viewport_height()))
}

#[component]
fn DockItem(
    section: Section,
    /// Pointer x in viewport coordinates, infinite while off the dock.
    pointer_x: Signal<f64>,
    active: Signal<bool>,
) -> impl IntoView {
    let item_ref = NodeRef::<html::A>::new();
    let magnifier = StoredValue::new(DockMagnifier::default());
    let (frame, set_frame) = signal(DockFrame::default());

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let Some(item) = item_ref.get_untracked() else {
            return;
        };
        let rect = item.get_bounding_client_rect();
        let distance = pointer_x.get_untracked() - (rect.left() + rect.width() / 2.0);
        let dt = (args.delta / 1000.0).min(MAX_FRAME_SECS);
        if let Some(Some(next)) = magnifier.try_update_value(|m| m.step(distance, dt)) {
            set_frame.set(next);
        }
    });

    view! {
        <a
            node_ref=item_ref
            href=section.href(true)
            aria-label=section.label()
            title=section.label()
            class="relative flex h-12 w-12 origin-bottom items-center justify-center rounded-2xl text-[var(--text-primary)] will-change-transform"
            style:transform=move || {
                frame.with(|f| format!("translateY({:.2}px) scale({:.3})", f.lift, f.scale))
            }
        >
            <span
                aria-hidden="true"
                class="pointer-events-none absolute inset-0 rounded-2xl bg-[var(--accent-soft)] shadow-[0_0_24px_var(--glow-accent)]"
                style:opacity=move || frame.with(|f| format!("{:.3}", f.glow))
            />
            <span
                class="relative scale-[0.64]"
                style:opacity=move || frame.with(|f| format!("{:.3}", f.icon_opacity))
            >
                <SectionIcon section />
            </span>
            <span
                aria-hidden="true"
                class="dock-dot absolute -bottom-2 left-1/2 h-1 w-1 -translate-x-1/2 rounded-full bg-[var(--text-primary)]"
                class:active=move || active.get()
            />
        </a>
    }
}

#[component]
pub fn BottomDock() -> impl IntoView {
    let (active, set_active) = signal(Section::Home);
    let pointer_x = RwSignal::new(f64::INFINITY);
    let (hovering, set_hovering) = signal(false);
    let lamp = RwSignal::new((0.0, 0.0));
    let dock_ref = NodeRef::<html::Nav>::new();

    let track = move || {
        let section = current_section();
        if active.get_untracked() != section {
            log::debug!("active section: {section:?}");
            set_active.set(section);
        }
    };
    Effect::new(move |_| {
        if dock_ref.get().is_some() {
            track();
        }
    });
    let _ = use_event_listener(use_window(), leptos::ev::scroll, move |_| track());
    let _ = use_event_listener(use_window(), leptos::ev::resize, move |_| track());

    let items = Section::ALL
        .iter()
        .map(|&section| {
            let is_active = Signal::derive(move || active.get() == section);
            view! { <DockItem section pointer_x=pointer_x.into() active=is_active /> }
        })
        .collect_view();

    view! {
        <nav
            node_ref=dock_ref
            aria-label="Sections"
            on:pointermove=move |ev: PointerEvent| {
                let x = ev.client_x() as f64;
                pointer_x.set(x);
                if let Some(dock) = dock_ref.get_untracked() {
                    let rect = dock.get_bounding_client_rect();
                    lamp.set((x - rect.left(), ev.client_y() as f64 - rect.top()));
                }
            }
            on:pointerenter=move |_| set_hovering.set(true)
            on:pointerleave=move |_| {
                pointer_x.set(f64::INFINITY);
                set_hovering.set(false);
            }
            class="dock-enter fixed bottom-6 left-1/2 z-50 flex -translate-x-1/2 items-end gap-4 overflow-visible rounded-3xl border border-[var(--border-subtle)] bg-[var(--bg-elev)]/70 px-4 pb-3 pt-3 shadow-[0_18px_50px_rgba(0,0,0,0.35)] backdrop-blur-xl"
        >
            <div
                aria-hidden="true"
                class="pointer-events-none absolute inset-0 rounded-3xl transition-opacity duration-300"
                style:opacity=move || if hovering.get() { "1" } else { "0" }
                style:background=move || {
                    let (x, y) = lamp.get();
                    format!(
                        "radial-gradient(120px circle at {x:.1}px {y:.1}px, var(--accent-soft), transparent 70%)",
                    )
                }
            />
            {items}
        </nav>
    }
}
