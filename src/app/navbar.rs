use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::{dom, theme_toggle::ThemeToggle};
use crate::content::PROFILE;
use crate::sections::Section;
use crate::splash::SKIP_SPLASH_ONCE_FLAG;

const MENU_STAGGER_MS: usize = 100;

#[component]
pub fn Navbar() -> impl IntoView {
    let (open, set_open) = signal(false);
    let location = use_location();
    let on_landing = Memo::new(move |_| location.pathname.get() == "/");

    let menu_items = move || {
        Section::ALL
            .iter()
            .enumerate()
            .map(|(i, &section)| {
                view! {
                    <li class="menu-item" style=format!("--item-delay: {}ms", i * MENU_STAGGER_MS)>
                        <a
                            href=move || section.href(on_landing.get())
                            on:click=move |_| {
                                // coming back to the landing page shouldn't replay the intro
                                if !on_landing.get_untracked() {
                                    if let Err(err) = dom::set_session_flag(SKIP_SPLASH_ONCE_FLAG) {
                                        log::warn!("Couldn't set splash skip flag: {err}");
                                    }
                                }
                                set_open.set(false);
                            }
                            class="group relative text-4xl md:text-6xl font-semibold text-white tracking-wide"
                        >
                            {section.label()}
                            <span class="absolute left-0 -bottom-2 w-0 h-[2px] bg-white transition-all duration-300 group-hover:w-full" />
                        </a>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="fixed top-0 left-0 w-full flex justify-between items-center px-8 md:px-16 py-8 z-50">
            <h1 class="text-lg font-medium tracking-wider text-white">
                {PROFILE.first_name.clone()}
            </h1>
            <div class="flex items-center gap-5">
                <ThemeToggle />
                <button
                    type="button"
                    aria-label=move || if open.get() { "Close menu" } else { "Open menu" }
                    aria-expanded=move || open.get().to_string()
                    on:click=move |_| set_open.update(|open| *open = !*open)
                    class="hamburger relative w-8 h-6 flex flex-col justify-between"
                    class:open=move || open.get()
                >
                    <span class="hamburger-top h-[2px] w-full bg-white origin-left" />
                    <span class="hamburger-middle h-[2px] w-full bg-white" />
                    <span class="hamburger-bottom h-[2px] w-full bg-white origin-left" />
                </button>
            </div>
        </nav>

        <Show when=move || open.get()>
            <div class="menu-overlay fixed inset-0 z-40 flex items-center justify-center bg-gradient-to-br from-[#0f172a] via-[#1e293b] to-[#111827] backdrop-blur-xl">
                <ul class="space-y-10 text-center">{menu_items}</ul>
            </div>
        </Show>
    }
}
