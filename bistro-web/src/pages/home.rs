use crate::components::hero_carousel::HeroCarousel;
use crate::components::menu_card::{AddToCart, MenuCard};
use crate::components::nav_link::NavLink;
use crate::content;
use crate::router::Route;
use bistro_core::{Cart, MediaEnv};
use yew::prelude::*;

/// Featured dishes shown under the hero.
const FEATURED_LIMIT: usize = 4;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub media_env: MediaEnv,
    pub cart: Cart,
    pub on_add: Callback<AddToCart>,
    pub on_open_photo: Callback<AttrValue>,
}

#[function_component(HomePage)]
pub fn home_page(p: &Props) -> Html {
    let featured = content::featured(FEATURED_LIMIT);
    html! {
        <section class="page home">
            <HeroCarousel
                slides={content::slides("home").to_vec()}
                label="Highlights"
                media_env={p.media_env}
            />
            <div class="home__intro">
                <h1>{ "Bistro" }</h1>
                <p>{ "Charcoal grill, slow stews and hand-folded dumplings." }</p>
                <NavLink to={Route::Menu} class="button">{ "See the full menu" }</NavLink>
            </div>
            if !featured.is_empty() {
                <div class="home__featured">
                    <h2>{ "Chef's picks" }</h2>
                    <div class="menu__grid">
                        { for featured.into_iter().map(|item| {
                            let quantity = p.cart.quantity(&item.id);
                            let key = item.id.clone();
                            html! {
                                <MenuCard
                                    key={key}
                                    {quantity}
                                    {item}
                                    on_add={p.on_add.clone()}
                                    on_open_photo={p.on_open_photo.clone()}
                                />
                            }
                        }) }
                    </div>
                </div>
            }
        </section>
    }
}
