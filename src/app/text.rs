use leptos::prelude::*;

use crate::motion::stagger;

/// Text that drops in one character at a time while `visible` holds.
///
/// The motion itself lives in the stylesheet (`.char-drop`); each character
/// only carries its delay.
#[component]
pub fn AnimatedText(
    #[prop(into)] text: String,
    #[prop(into)] visible: Signal<bool>,
    #[prop(default = 0)] base_delay_ms: u32,
    step_ms: u32,
    /// Alternate characters tilt on hover.
    #[prop(optional)]
    expressive: bool,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let chars = stagger(&text, base_delay_ms, step_ms)
        .into_iter()
        .enumerate()
        .map(|(i, c)| {
            let tilt = match (expressive, i % 2) {
                (false, _) => "",
                (true, 0) => "char-tilt-left",
                (true, _) => "char-tilt-right",
            };
            let gap = if c.is_gap { "w-[0.34em]" } else { "" };
            view! {
                <span
                    class=format!("char-drop inline-block {tilt} {gap}")
                    style=format!("--char-delay: {}ms", c.delay_ms)
                >
                    {c.ch.to_string()}
                </span>
            }
        })
        .collect_view();

    view! {
        <span class=format!("inline-flex {class}") class:revealed=move || visible.get()>
            {chars}
        </span>
    }
}
