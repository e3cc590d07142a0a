use leptos::prelude::*;

use crate::content::SocialKind;
use crate::sections::Section;
use crate::theme::ThemeMode;

const SOCIAL_STROKE: &str = "fill-none stroke-current stroke-[1.9] transition-transform duration-300 ease-out";

#[component]
fn Outline(size: u32, children: Children) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {children()}
        </svg>
    }
}

#[component]
pub fn ThemeIcon(mode: ThemeMode) -> impl IntoView {
    match mode {
        ThemeMode::Dark => view! {
            <Outline size=17>
                <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" />
            </Outline>
        }
        .into_any(),
        ThemeMode::Light => view! {
            <Outline size=17>
                <circle cx="12" cy="12" r="4" />
                <path d="M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" />
            </Outline>
        }
        .into_any(),
        ThemeMode::System => view! {
            <Outline size=17>
                <path d="M20 16V7a2 2 0 0 0-2-2H6a2 2 0 0 0-2 2v9m16 0H4m16 0 1.28 2.55a1 1 0 0 1-.9 1.45H3.62a1 1 0 0 1-.9-1.45L4 16" />
            </Outline>
        }
        .into_any(),
    }
}

#[component]
pub fn SectionIcon(section: Section) -> impl IntoView {
    match section {
        Section::Home => view! {
            <Outline size=28>
                <path d="M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8" />
                <path d="M3 10a2 2 0 0 1 .709-1.528l7-5.999a2 2 0 0 1 2.582 0l7 5.999A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" />
            </Outline>
        }
        .into_any(),
        Section::About => view! {
            <Outline size=28>
                <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" />
                <circle cx="12" cy="7" r="4" />
            </Outline>
        }
        .into_any(),
        Section::Project => view! {
            <Outline size=28>
                <path d="M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2Z" />
            </Outline>
        }
        .into_any(),
        Section::Contact => view! {
            <Outline size=28>
                <rect width="20" height="16" x="2" y="4" rx="2" />
                <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
            </Outline>
        }
        .into_any(),
    }
}

#[component]
pub fn SocialIcon(kind: SocialKind) -> impl IntoView {
    let glyph = match kind {
        SocialKind::Mail => view! {
            <rect x="3.5" y="5.5" width="17" height="13" rx="2.5" class=SOCIAL_STROKE />
            <path d="M4.5 7l7.5 6 7.5-6" class=SOCIAL_STROKE />
        }
        .into_any(),
        SocialKind::Github => view! {
            <path
                d="M12 3.8a8.3 8.3 0 0 0-2.6 16.2c.4.1.5-.2.5-.4v-1.6c-2.1.5-2.6-.9-2.6-.9-.4-.9-.9-1.1-.9-1.1-.8-.5.1-.5.1-.5.9.1 1.4.9 1.4.9.8 1.3 2.1 1 2.6.8.1-.6.3-1 .6-1.2-1.7-.2-3.6-.9-3.6-3.9 0-.8.3-1.5.8-2-.1-.2-.4-1 .1-2.1 0 0 .7-.2 2.2.8a7.8 7.8 0 0 1 4 0c1.5-1 2.2-.8 2.2-.8.5 1.1.2 1.9.1 2.1.5.5.8 1.2.8 2 0 3-1.9 3.6-3.7 3.8.3.3.6.8.6 1.7v2.4c0 .2.1.5.5.4A8.3 8.3 0 0 0 12 3.8Z"
                class=SOCIAL_STROKE
            />
        }
        .into_any(),
        SocialKind::Instagram => view! {
            <rect x="4.2" y="4.2" width="15.6" height="15.6" rx="4.6" class=SOCIAL_STROKE />
            <circle cx="12" cy="12" r="3.5" class=SOCIAL_STROKE />
            <circle cx="17.2" cy="6.8" r="0.9" class=SOCIAL_STROKE />
        }
        .into_any(),
        SocialKind::Linkedin => view! {
            <rect x="4.2" y="4.2" width="15.6" height="15.6" rx="2.2" class=SOCIAL_STROKE />
            <path
                d="M8.3 10.3v5.8M8.3 7.8v.1M11.7 16.1v-3.2a2 2 0 0 1 4 0v3.2"
                class=SOCIAL_STROKE
            />
        }
        .into_any(),
        SocialKind::Discord => view! {
            <path
                d="M7.1 8.4c1.4-1 2.8-1.1 2.8-1.1l.3.7c-1 .2-1.5.5-1.5.5m5.1-.1c-1-.4-2-.4-2-.4l.3-.7s1.4.1 2.8 1.1M7.1 15.8c1.8 1.4 3.7 1.4 4.9 1.4 1.2 0 3.1 0 4.9-1.4.5-1.8.8-3.5.8-3.5-.7-.6-1.4-.9-1.4-.9-.6.4-1.3.7-1.3.7-.6.2-1.2.4-3 .4s-2.4-.2-3-.4c0 0-.7-.3-1.3-.7 0 0-.7.3-1.4.9 0 0 .3 1.7.8 3.5Z"
                class=SOCIAL_STROKE
            />
            <circle cx="10" cy="12.6" r="1" class=SOCIAL_STROKE />
            <circle cx="14" cy="12.6" r="1" class=SOCIAL_STROKE />
        }
        .into_any(),
    };

    view! {
        <svg viewBox="0 0 24 24" class="h-7 w-7 text-white" aria-hidden="true">
            {glyph}
        </svg>
    }
}
