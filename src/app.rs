mod about;
mod contact;
mod dock;
mod dom;
mod hero;
mod homepage;
mod hooks;
mod icons;
mod navbar;
mod projects;
mod smooth_scroll;
mod splash;
mod text;
mod theme_toggle;
mod transition;

use about::AboutPage;
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use smooth_scroll::SmoothScroll;
use transition::{provide_route_rendered, PageTransition};

use crate::content::PROFILE;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <meta name="description" content=PROFILE.tagline.clone() />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-[var(--bg-page)] font-sans text-[var(--text-primary)] antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_route_rendered();

    view! {
        // sets the document title
        <Title formatter=|title| format!("{} - {title}", PROFILE.first_name) />

        <SmoothScroll />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=path!("/")
                    view=|| view! { <PageTransition><HomePage /></PageTransition> }
                />
                <Route
                    path=path!("/about")
                    view=|| view! { <PageTransition><AboutPage /></PageTransition> }
                />
            </Routes>
        </Router>
    }
}
