use crate::components::category_picker::CategoryPicker;
use crate::components::menu_card::{AddToCart, MenuCard};
use crate::content;
use bistro_core::{Cart, CategoryFilter, catalog_view, category_counts};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub filter: CategoryFilter,
    pub cart: Cart,
    pub on_add: Callback<AddToCart>,
    pub on_open_photo: Callback<AttrValue>,
    pub on_select: Callback<CategoryFilter>,
    pub on_open_sheet: Callback<()>,
}

#[function_component(MenuPage)]
pub fn menu_page(p: &Props) -> Html {
    let catalog = content::catalog();
    let items = catalog_view(catalog, p.filter);
    let open_sheet = {
        let cb = p.on_open_sheet.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="page menu" data-category={p.filter.slug().unwrap_or("all")}>
            <div class="menu__heading">
                <h1>{ p.filter.label() }</h1>
                <span class="menu__count">{ format!("{} dishes", items.len()) }</span>
                <button type="button" class="menu__sheet-toggle" onclick={open_sheet}>
                    { "Categories" }
                </button>
            </div>
            <CategoryPicker
                active={p.filter}
                counts={category_counts(catalog.items())}
                on_select={p.on_select.clone()}
            />
            if items.is_empty() {
                <p class="menu__empty">{ "Nothing here yet." }</p>
            } else {
                <div class="menu__grid">
                    { for items.into_iter().map(|item| html! {
                        <MenuCard
                            key={item.id.clone()}
                            item={item.clone()}
                            quantity={p.cart.quantity(&item.id)}
                            on_add={p.on_add.clone()}
                            on_open_photo={p.on_open_photo.clone()}
                        />
                    }) }
                </div>
            }
        </section>
    }
}
