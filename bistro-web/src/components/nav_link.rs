use crate::paths::router_base;
use crate::router::Route;
use bistro_core::{DisplayMode, encode_query, nav_query};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub to: Route,
    /// Single query pair appended to the path, e.g. `("category", "soups")`.
    #[prop_or_default]
    pub query: Option<(AttrValue, AttrValue)>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub current: bool,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub on_navigate: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

/// Full `href` for `route`, including the deployment base and query pairs.
#[must_use]
pub fn href_for(route: &Route, query: &[(&str, &str)]) -> String {
    format!(
        "{}{}{}",
        router_base().unwrap_or_default(),
        route.to_path(),
        encode_query(query)
    )
}

/// Push `route` with `query`, keeping the display mode of the current page.
pub fn navigate(
    nav: &Navigator,
    route: &Route,
    display: DisplayMode,
    page_query: Option<(&str, &str)>,
) {
    let pairs = nav_query(display, page_query);
    if pairs.is_empty() {
        nav.push(route);
    } else if let Err(err) = nav.push_with_query(route, &pairs) {
        log::warn!("navigation to {} failed: {err}", route.to_path());
    }
}

/// Anchor that renders a real `href` and navigates in-app when a router is present.
///
/// Kiosk mode, read from context, is carried into the target URL.
#[function_component(NavLink)]
pub fn nav_link(p: &Props) -> Html {
    let navigator = use_navigator();
    let display = use_context::<DisplayMode>().unwrap_or_default();
    let page_query = p.query.as_ref().map(|(k, v)| (k.as_str(), v.as_str()));
    let href = href_for(&p.to, &nav_query(display, page_query));

    let onclick = {
        let to = p.to.clone();
        let query = p.query.clone();
        let on_navigate = p.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(cb) = on_navigate.as_ref() {
                cb.emit(());
            }
            let Some(nav) = navigator.as_ref() else {
                return;
            };
            if e.button() != 0 || e.ctrl_key() || e.meta_key() || e.shift_key() || e.alt_key() {
                return;
            }
            e.prevent_default();
            let page_query = query.as_ref().map(|(k, v)| (k.as_str(), v.as_str()));
            navigate(nav, &to, display, page_query);
        })
    };

    html! {
        <a
            id={p.id.clone()}
            class={p.class.clone()}
            href={href}
            aria-current={p.current.then_some("page")}
            onclick={onclick}
        >
            { p.children.clone() }
        </a>
    }
}
