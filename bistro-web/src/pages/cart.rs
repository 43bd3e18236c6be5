use crate::components::cart_summary::{CartSummary, CartView};
use bistro_core::ClearConfirm;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub view: CartView,
    pub clear: ClearConfirm,
    pub on_increment: Callback<AttrValue>,
    pub on_decrement: Callback<AttrValue>,
    pub on_remove: Callback<AttrValue>,
    pub on_request_clear: Callback<()>,
    pub on_confirm_clear: Callback<()>,
    pub on_cancel_clear: Callback<()>,
}

/// Standalone order page at `/cart`.
#[function_component(CartPage)]
pub fn cart_page(p: &Props) -> Html {
    html! {
        <section class="page cart">
            <h1>{ "Your order" }</h1>
            <p class="cart__hint">{ "Show this list to your server when you are ready to order." }</p>
            <CartSummary
                view={p.view.clone()}
                clear={p.clear}
                on_increment={p.on_increment.clone()}
                on_decrement={p.on_decrement.clone()}
                on_remove={p.on_remove.clone()}
                on_request_clear={p.on_request_clear.clone()}
                on_confirm_clear={p.on_confirm_clear.clone()}
                on_cancel_clear={p.on_cancel_clear.clone()}
            />
        </section>
    }
}
