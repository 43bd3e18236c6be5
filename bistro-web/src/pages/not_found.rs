use crate::components::nav_link::NavLink;
use crate::router::Route;
use yew::prelude::*;

/// Shown when the path matches no known page.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="page not-found" aria-live="assertive">
            <h1>{ "Page not found" }</h1>
            <p>{ "That page is not on our menu." }</p>
            <NavLink to={Route::Home} class="button">{ "Back to the front door" }</NavLink>
        </section>
    }
}
