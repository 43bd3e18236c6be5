use crate::components::lazy_image::LazyImage;
use crate::dom;
use bistro_core::money::MARKET_PRICE_LABEL;
use bistro_core::{MenuItem, Point, format_price};
use yew::prelude::*;

/// An add-to-cart request from a card, with the launch point for the fly animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AddToCart {
    pub id: AttrValue,
    pub image: AttrValue,
    pub origin: Option<Point>,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub item: MenuItem,
    #[prop_or_default]
    pub quantity: u32,
    pub on_add: Callback<AddToCart>,
    pub on_open_photo: Callback<AttrValue>,
}

#[function_component(MenuCard)]
pub fn menu_card(p: &Props) -> Html {
    let image_ref = use_node_ref();
    let item = &p.item;

    let open_photo = {
        let cb = p.on_open_photo.clone();
        let id = AttrValue::from(item.id.clone());
        Callback::from(move |_| cb.emit(id.clone()))
    };

    let action = if item.is_orderable() {
        let on_add = {
            let cb = p.on_add.clone();
            let image_ref = image_ref.clone();
            let id = AttrValue::from(item.id.clone());
            let image = AttrValue::from(item.image.src.clone());
            Callback::from(move |_: MouseEvent| {
                let origin = image_ref
                    .cast::<web_sys::Element>()
                    .map(|el| dom::rect_center(&el));
                cb.emit(AddToCart {
                    id: id.clone(),
                    image: image.clone(),
                    origin,
                });
            })
        };
        html! {
            <button
                type="button"
                class="menu-card__add"
                aria-label={format!("Add {} to your order", item.name)}
                onclick={on_add}
            >
                { "Add" }
                if p.quantity > 0 {
                    <span class="menu-card__qty" aria-label={format!("{} in order", p.quantity)}>
                        { p.quantity }
                    </span>
                }
            </button>
        }
    } else {
        html! { <span class="menu-card__ask">{ "Ask your server" }</span> }
    };

    html! {
        <article
            class={classes!("menu-card", item.is_promoted().then_some("menu-card--featured"))}
            data-item={item.id.clone()}
            data-category={item.category.slug()}
        >
            <button
                type="button"
                class="menu-card__photo"
                aria-label={format!("View photo of {}", item.name)}
                onclick={open_photo}
            >
                <LazyImage
                    src={item.image.src.clone()}
                    alt={item.image.alt.clone()}
                    node_ref={image_ref}
                />
            </button>
            <div class="menu-card__body">
                <h3 class="menu-card__name">
                    { item.name.clone() }
                    if let Some(local) = item.local_name.as_ref() {
                        <span class="menu-card__local" lang="ko">{ local.clone() }</span>
                    }
                </h3>
                if !item.tags.is_empty() {
                    <ul class="menu-card__tags">
                        { for item.tags.iter().map(|tag| html! {
                            <li class="tag">{ tag.label() }</li>
                        }) }
                    </ul>
                }
                if let Some(desc) = item.description.as_ref() {
                    <p class="menu-card__desc">{ desc.clone() }</p>
                }
                <div class="menu-card__footer">
                    <span
                        class={classes!("menu-card__price", item.price.is_market().then_some("menu-card__price--market"))}
                        title={item.price.is_market().then_some(MARKET_PRICE_LABEL)}
                    >
                        { format_price(item.price) }
                    </span>
                    { action }
                </div>
            </div>
        </article>
    }
}
