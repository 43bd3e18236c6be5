use bistro_core::Overlay;
use yew::prelude::*;

/// Fallback fly-to-cart target when the header is scrolled away.
pub const FAB_CART_ID: &str = "fab-cart";
pub const FAB_CATEGORIES_ID: &str = "fab-categories";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub hidden: bool,
    pub cart_count: u32,
    pub active: Overlay,
    pub on_toggle_categories: Callback<()>,
    pub on_toggle_cart: Callback<()>,
}

/// Floating buttons for the category panel and the cart panel.
#[function_component(Fab)]
pub fn fab(p: &Props) -> Html {
    let categories_open = p.active == Overlay::CategoryPanel;
    let cart_open = p.active == Overlay::CartPanel;
    let toggle_categories = {
        let cb = p.on_toggle_categories.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_cart = {
        let cb = p.on_toggle_cart.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class={classes!("fab", p.hidden.then_some("fab--hidden"))} data-hidden={p.hidden.to_string()}>
            <button
                type="button"
                id={FAB_CATEGORIES_ID}
                class={classes!("fab__button", categories_open.then_some("fab__button--active"))}
                aria-expanded={categories_open.to_string()}
                aria-label="Browse categories"
                onclick={toggle_categories}
            >
                <span aria-hidden="true">{ "☰" }</span>
            </button>
            <button
                type="button"
                id={FAB_CART_ID}
                class={classes!("fab__button", cart_open.then_some("fab__button--active"))}
                aria-expanded={cart_open.to_string()}
                aria-label="Your order"
                onclick={toggle_cart}
            >
                <span aria-hidden="true">{ "🛒" }</span>
                if p.cart_count > 0 {
                    <span class="cart-badge">{ p.cart_count }</span>
                }
            </button>
        </div>
    }
}
