use crate::components::nav_link::NavLink;
use crate::router::Route;
use yew::prelude::*;

/// Element the fly-to-cart animation aims at.
pub const CART_TARGET_ID: &str = "cart-target";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub hidden: bool,
    pub cart_count: u32,
    pub menu_open: bool,
    pub current: Option<Route>,
    pub on_toggle_menu: Callback<()>,
    pub on_close_menu: Callback<()>,
    pub on_open_cart: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let toggle_menu = {
        let cb = p.on_toggle_menu.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let open_cart = {
        let cb = p.on_open_cart.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let class = classes!(
        "site-header",
        p.hidden.then_some("site-header--hidden"),
        p.menu_open.then_some("site-header--menu-open")
    );
    let cart_label = match p.cart_count {
        0 => "Your order is empty".to_string(),
        1 => "Your order, 1 item".to_string(),
        n => format!("Your order, {n} items"),
    };

    html! {
        <header role="banner" class={class} data-hidden={p.hidden.to_string()}>
            <a href="#main" class="sr-only">{ "Skip to content" }</a>
            <div class="header-content">
                <NavLink to={Route::Home} class="brand" on_navigate={p.on_close_menu.clone()}>
                    { "Bistro" }
                </NavLink>
                <button
                    type="button"
                    class="menu-toggle"
                    aria-controls="site-nav"
                    aria-expanded={p.menu_open.to_string()}
                    aria-label={if p.menu_open { "Close navigation" } else { "Open navigation" }}
                    onclick={toggle_menu}
                >
                    <span aria-hidden="true">{ if p.menu_open { "✕" } else { "☰" } }</span>
                </button>
                <nav id="site-nav" aria-label="Main" class="header-nav">
                    <ul>
                        { for Route::NAV.iter().map(|route| html! {
                            <li>
                                <NavLink
                                    to={route.clone()}
                                    current={p.current.as_ref() == Some(route)}
                                    on_navigate={p.on_close_menu.clone()}
                                >
                                    { route.label() }
                                </NavLink>
                            </li>
                        }) }
                    </ul>
                </nav>
                <button
                    type="button"
                    id={CART_TARGET_ID}
                    class="cart-button"
                    aria-label={cart_label}
                    onclick={open_cart}
                >
                    <span aria-hidden="true">{ "🛒" }</span>
                    if p.cart_count > 0 {
                        <span class="cart-badge">{ p.cart_count }</span>
                    }
                </button>
            </div>
        </header>
    }
}
