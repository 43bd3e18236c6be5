use crate::app::state::SharedPreload;
use crate::paths::asset_url;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Path relative to the site root, as stored in content data.
    pub src: AttrValue,
    #[prop_or_default]
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Load immediately instead of when scrolled into view.
    #[prop_or_default]
    pub eager: bool,
    #[prop_or_default]
    pub node_ref: NodeRef,
}

/// Image that registers itself in the preload cache and disappears if it fails to load.
#[function_component(LazyImage)]
pub fn lazy_image(p: &Props) -> Html {
    let failed = use_state_eq(|| false);
    let preload = use_context::<SharedPreload>();

    {
        let failed = failed.clone();
        use_effect_with(p.src.clone(), move |src| {
            failed.set(false);
            if let Some(cache) = preload {
                let _ = cache.claim(src);
            }
        });
    }

    if *failed {
        return Html::default();
    }

    let onerror = {
        let failed = failed.clone();
        let src = p.src.clone();
        Callback::from(move |_: Event| {
            log::debug!("image failed to load: {src}");
            failed.set(true);
        })
    };

    html! {
        <img
            ref={p.node_ref.clone()}
            class={p.class.clone()}
            src={asset_url(&p.src)}
            alt={p.alt.clone()}
            loading={if p.eager { "eager" } else { "lazy" }}
            decoding="async"
            onerror={onerror}
        />
    }
}
