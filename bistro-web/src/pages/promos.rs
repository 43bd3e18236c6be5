use crate::components::hero_carousel::HeroCarousel;
use crate::content;
use bistro_core::MediaEnv;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub media_env: MediaEnv,
}

#[function_component(PromosPage)]
pub fn promos_page(p: &Props) -> Html {
    let slides = content::slides("promos");
    html! {
        <section class="page promos">
            <h1>{ "Promotions" }</h1>
            <HeroCarousel
                slides={slides.to_vec()}
                label="Current promotions"
                media_env={p.media_env}
                pausable={true}
            />
            <ul class="promos__list">
                { for slides.iter().filter_map(|slide| slide.alt.as_ref().map(|alt| html! {
                    <li key={slide.id.clone()}>{ alt.clone() }</li>
                })) }
            </ul>
        </section>
    }
}
