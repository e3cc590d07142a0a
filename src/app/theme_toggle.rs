use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::{storage::use_local_storage, use_preferred_dark};

use super::{dom, icons::ThemeIcon};
use crate::theme::{ThemeMode, THEME_STORAGE_KEY};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    // unreadable stored values fall back to ThemeMode::default()
    let (mode, set_mode, _) = use_local_storage::<ThemeMode, FromToStringCodec>(THEME_STORAGE_KEY);
    let prefers_dark = use_preferred_dark();
    let next = Memo::new(move |_| mode.get().next());

    // persist the resolved mode once, replacing a missing or unreadable value
    Effect::new(move |_| set_mode.set(mode.get_untracked()));

    Effect::new(move |_| {
        let applied = mode.get().applied(prefers_dark.get());
        if let Err(err) = dom::set_document_theme(applied) {
            log::warn!("Couldn't apply theme {}: {err}", applied.as_str());
        }
    });

    view! {
        <button
            type="button"
            on:click=move |_| set_mode.set(next.get_untracked())
            aria-label=move || format!("Theme mode {}. Switch to {}", mode.get(), next.get())
            title=move || format!("Theme: {} (click for {})", mode.get(), next.get())
            class="inline-flex h-10 w-10 items-center justify-center rounded-full border border-[var(--border-subtle)] bg-[var(--bg-elev)]/75 text-[var(--text-primary)] transition-colors duration-200 hover:bg-[var(--bg-elev)] focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-[var(--accent-2)]"
        >
            {move || view! { <ThemeIcon mode=mode.get() /> }}
        </button>
    }
}
