use leptos::{html, prelude::*};

use super::{hooks::use_in_view, icons::SocialIcon};
use crate::content::{SocialLink, PROFILE};

const LEFT_IN_VIEW_AMOUNT: f64 = 0.45;
const RIGHT_IN_VIEW_AMOUNT: f64 = 0.35;
const SOCIAL_STAGGER_MS: usize = 70;

#[component]
fn SocialIconButton(link: SocialLink, index: usize) -> impl IntoView {
    let external = link.is_external();
    let label = format!("{}: {}", link.label, link.value);

    view! {
        <a
            href=link.href
            target=external.then_some("_blank")
            rel=external.then_some("noreferrer")
            aria-label=label.clone()
            title=label
            class="social-button reveal inline-flex h-14 w-14 items-center justify-center rounded-2xl border border-white/15 bg-white/10 shadow-[0_10px_30px_rgba(0,0,0,0.25)] focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-[var(--accent-2)]"
            style=format!(
                "--reveal-y: 12px; --reveal-delay: {}ms; --reveal-duration: 400ms",
                200 + index * SOCIAL_STAGGER_MS,
            )
        >
            <SocialIcon kind=link.kind />
        </a>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let left_ref = NodeRef::<html::Div>::new();
    let right_ref = NodeRef::<html::Div>::new();
    let left_in_view = use_in_view(left_ref, LEFT_IN_VIEW_AMOUNT);
    let right_in_view = use_in_view(right_ref, RIGHT_IN_VIEW_AMOUNT);

    let socials = PROFILE
        .socials
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, link)| view! { <SocialIconButton link index /> })
        .collect_view();

    view! {
        <section
            id="contact"
            class="relative flex min-h-screen flex-col justify-between overflow-hidden bg-[var(--bg-hero)] px-6 pb-32 pt-24 text-[var(--text-primary)] md:px-16"
        >
            <div class="mx-auto grid w-full max-w-6xl flex-1 items-center gap-12 md:grid-cols-2">
                <div
                    node_ref=left_ref
                    class="reveal"
                    class:revealed=move || left_in_view.get()
                    style="--reveal-y: 18px"
                >
                    <p class="text-sm uppercase tracking-[0.2em] text-[var(--text-muted)]">
                        "Contact"
                    </p>
                    <h2 class="mt-3 text-4xl font-bold leading-tight md:text-6xl">"Get In Touch"</h2>
                    <p class="mt-6 max-w-lg text-base leading-relaxed text-[var(--text-secondary)] md:text-lg">
                        "Have a project in mind or just want to say hi? My inbox is always open."
                    </p>
                    <a
                        href=PROFILE.mailto()
                        class="mt-6 inline-block text-lg font-semibold text-[var(--accent-2)] underline-offset-4 hover:underline"
                    >
                        {PROFILE.email.clone()}
                    </a>
                    <div class="mt-8 flex flex-wrap gap-4" class:revealed=move || left_in_view.get()>
                        {socials}
                    </div>
                </div>

                <div
                    node_ref=right_ref
                    class="reveal"
                    class:revealed=move || right_in_view.get()
                    style="--reveal-y: 22px; --reveal-delay: 50ms; --reveal-duration: 550ms"
                >
                    <div class="relative mx-auto aspect-[4/5] w-full max-w-[420px] overflow-hidden rounded-3xl border border-[var(--border-subtle)] shadow-[0_20px_70px_rgba(0,0,0,0.35)]">
                        <img
                            src=PROFILE.contact_photo.clone()
                            alt=format!("Portrait of {}", PROFILE.first_name)
                            loading="lazy"
                            class="h-full w-full object-cover"
                        />
                        <div class="pointer-events-none absolute inset-0 bg-gradient-to-t from-black/30 via-transparent to-transparent" />
                    </div>
                </div>
            </div>

            <footer class="mx-auto mt-16 w-full max-w-6xl border-t border-[var(--border-subtle)] pt-6 text-xs text-[var(--text-muted)]">
                {format!("© {} · Last built {}", PROFILE.full_name, env!("BUILD_TIME"))}
            </footer>
        </section>
    }
}
