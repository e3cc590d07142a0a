use leptos::prelude::*;

/// Set once the first route has rendered, so hydration keeps the server markup
/// and only later navigations animate.
#[derive(Debug, Clone, Copy)]
pub struct RouteRendered(StoredValue<bool>);

pub fn provide_route_rendered() {
    provide_context(RouteRendered(StoredValue::new(false)));
}

#[component]
pub fn PageTransition(children: Children) -> impl IntoView {
    let animate = use_context::<RouteRendered>()
        .map(|RouteRendered(rendered)| {
            let seen = rendered.get_value();
            rendered.set_value(true);
            seen
        })
        .unwrap_or(false);

    view! {
        <div class="page-transition" class:entering=animate>
            {children()}
        </div>
    }
}
