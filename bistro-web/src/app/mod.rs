use crate::hooks;
use crate::router::Route;
use bistro_core::{CategoryFilter, DisplayMode, query_param};
use yew::prelude::*;
use yew_router::prelude::*;

pub mod handlers;
pub mod models;
pub mod state;
pub mod view;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

/// Application shell; must be rendered inside a router.
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let query = use_location()
        .map(|location| location.query_str().to_string())
        .unwrap_or_default();

    let display = DisplayMode::from_query(&query);
    let filter = CategoryFilter::from_query(query_param(&query, "category"));
    let active = app_state.overlay.active().clone();

    // Lock first: its release restores the page offset before the chrome tracker
    // takes its baseline from it.
    hooks::use_scroll_lock(active.locks_scroll());
    let chrome_hidden =
        hooks::use_scroll_visibility(display.shows_chrome() && !active.locks_scroll());
    hooks::use_close_transition(app_state.overlay.clone());

    let handlers = handlers::AppHandlers::new(&app_state, navigator, display);
    hooks::use_escape(active.is_open(), handlers.escape.clone());

    {
        let close_menu = handlers.close_menu.clone();
        use_effect_with(route.clone(), move |_| close_menu.emit(()));
    }

    view::render_app(
        &app_state,
        &handlers,
        &view::ViewContext {
            route: &route,
            filter,
            display,
            chrome_hidden,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kiosk_query_hides_chrome_and_keeps_category() {
        let query = "?display=qr&category=soups";
        assert!(!DisplayMode::from_query(query).shows_chrome());
        assert_eq!(
            CategoryFilter::from_query(query_param(query, "category")),
            CategoryFilter::Only(bistro_core::Category::Soups)
        );
    }
}
