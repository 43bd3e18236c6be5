use crate::components::nav_link::NavLink;
use crate::router::Route;
use bistro_core::{Cart, CartTotals, Catalog, ClearConfirm, format_amount, format_price};
use yew::prelude::*;

/// One owned, render-ready cart line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineView {
    pub id: AttrValue,
    pub name: AttrValue,
    pub quantity: u32,
    pub unit: AttrValue,
    pub line_total: Option<f64>,
}

/// Cart contents resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartView {
    pub lines: Vec<LineView>,
    pub totals: CartTotals,
}

impl CartView {
    #[must_use]
    pub fn new(cart: &Cart, catalog: &Catalog) -> Self {
        let lines = cart
            .lines(catalog)
            .into_iter()
            .map(|line| LineView {
                id: line.item.id.clone().into(),
                name: line.item.name.clone().into(),
                quantity: line.quantity,
                unit: format_price(line.item.price).into(),
                line_total: line.line_total,
            })
            .collect();
        Self {
            lines,
            totals: cart.totals(catalog),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

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
    /// Shown in the compact panel: opens the full cart view.
    #[prop_or_default]
    pub on_expand: Option<Callback<()>>,
}

#[function_component(CartSummary)]
pub fn cart_summary(p: &Props) -> Html {
    if p.view.is_empty() {
        return html! {
            <div class="cart-summary cart-summary--empty">
                <p>{ "Your order is empty." }</p>
                <NavLink to={Route::Menu} class="button">{ "Browse the menu" }</NavLink>
            </div>
        };
    }

    let emit_unit = |cb: &Callback<()>| {
        let cb = cb.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let emit_id = |cb: &Callback<AttrValue>, id: &AttrValue| {
        let cb = cb.clone();
        let id = id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };

    let totals = p.view.totals;
    let clear_controls = match p.clear {
        ClearConfirm::Idle => html! {
            <button type="button" class="cart-summary__clear" onclick={emit_unit(&p.on_request_clear)}>
                { "Clear order" }
            </button>
        },
        ClearConfirm::Pending => html! {
            <div class="cart-summary__confirm" role="alertdialog" aria-label="Confirm clearing the order">
                <p>{ "Remove everything from your order?" }</p>
                <button type="button" class="danger" onclick={emit_unit(&p.on_confirm_clear)}>
                    { "Yes, clear" }
                </button>
                <button type="button" onclick={emit_unit(&p.on_cancel_clear)}>{ "Keep order" }</button>
            </div>
        },
    };

    html! {
        <div class="cart-summary">
            <ul class="cart-summary__lines">
                { for p.view.lines.iter().map(|line| html! {
                    <li class="cart-line" key={line.id.to_string()} data-item={line.id.clone()}>
                        <span class="cart-line__name">{ line.name.clone() }</span>
                        <span class="cart-line__unit">{ line.unit.clone() }</span>
                        <div class="cart-line__qty">
                            <button
                                type="button"
                                aria-label={format!("One less {}", line.name)}
                                onclick={emit_id(&p.on_decrement, &line.id)}
                            >{ "−" }</button>
                            <span aria-live="polite">{ line.quantity }</span>
                            <button
                                type="button"
                                aria-label={format!("One more {}", line.name)}
                                onclick={emit_id(&p.on_increment, &line.id)}
                            >{ "+" }</button>
                        </div>
                        <span class="cart-line__total">
                            { line.line_total.map(format_amount).unwrap_or_default() }
                        </span>
                        <button
                            type="button"
                            class="cart-line__remove"
                            aria-label={format!("Remove {}", line.name)}
                            onclick={emit_id(&p.on_remove, &line.id)}
                        >{ "Remove" }</button>
                    </li>
                }) }
            </ul>
            <div class="cart-summary__totals">
                <span>{ format!("{} items", totals.item_count) }</span>
                <strong class="cart-summary__subtotal">{ format_amount(totals.subtotal) }</strong>
                if totals.incomplete {
                    <p class="cart-summary__note">{ "Some items are priced by the server; total is incomplete." }</p>
                }
            </div>
            <div class="cart-summary__actions">
                if let Some(expand) = p.on_expand.as_ref() {
                    <button type="button" class="button" onclick={emit_unit(expand)}>{ "Review order" }</button>
                }
                { clear_controls }
            </div>
        </div>
    }
}
