use bistro_core::{Category, CategoryFilter};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub active: CategoryFilter,
    pub counts: BTreeMap<Category, usize>,
    pub on_select: Callback<CategoryFilter>,
    /// `chips` for the inline strip, `list` inside sheets and panels.
    #[prop_or(AttrValue::Static("chips"))]
    pub layout: AttrValue,
}

#[function_component(CategoryPicker)]
pub fn category_picker(p: &Props) -> Html {
    let total: usize = p.counts.values().sum();
    let count_for = |filter: CategoryFilter| match filter {
        CategoryFilter::All => total,
        CategoryFilter::Only(category) => p.counts.get(&category).copied().unwrap_or(0),
    };

    html! {
        <div class={classes!("category-picker", format!("category-picker--{}", p.layout))} role="group" aria-label="Categories">
            { for CategoryFilter::choices().into_iter().filter(|f| count_for(*f) > 0).map(|filter| {
                let selected = filter == p.active;
                let onclick = {
                    let cb = p.on_select.clone();
                    Callback::from(move |_| cb.emit(filter))
                };
                html! {
                    <button
                        type="button"
                        class={classes!("category-chip", selected.then_some("category-chip--active"))}
                        aria-pressed={selected.to_string()}
                        data-category={filter.slug().unwrap_or("all")}
                        onclick={onclick}
                    >
                        <span class="category-chip__label">{ filter.label() }</span>
                        <span class="category-chip__count">{ count_for(filter) }</span>
                    </button>
                }
            }) }
        </div>
    }
}
