use crate::paths::asset_url;
use bistro_core::{MenuItem, format_price};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub item: MenuItem,
}

/// Large photo with the dish details; rendered inside an overlay surface.
#[function_component(Lightbox)]
pub fn lightbox(p: &Props) -> Html {
    let failed = use_state_eq(|| false);
    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };
    let item = &p.item;

    html! {
        <figure class="lightbox">
            if !*failed {
                <img
                    class="lightbox__image"
                    src={asset_url(&item.image.src)}
                    alt={item.image.alt.clone()}
                    onerror={onerror}
                />
            }
            <figcaption>
                <strong>{ item.name.clone() }</strong>
                if let Some(local) = item.local_name.as_ref() {
                    <span class="lightbox__local" lang="ko">{ local.clone() }</span>
                }
                if let Some(desc) = item.description.as_ref() {
                    <p>{ desc.clone() }</p>
                }
                <span class="lightbox__price">{ format_price(item.price) }</span>
            </figcaption>
        </figure>
    }
}
