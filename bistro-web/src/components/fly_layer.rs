use crate::paths::asset_url;
use bistro_core::Flight;
use gloo::render::request_animation_frame;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub flights: Vec<Flight>,
    pub on_land: Callback<u64>,
}

/// Thumbnails flying from a menu card to the cart button.
#[function_component(FlyLayer)]
pub fn fly_layer(p: &Props) -> Html {
    if p.flights.is_empty() {
        return Html::default();
    }
    html! {
        <div class="fly-layer" aria-hidden="true">
            { for p.flights.iter().map(|flight| html! {
                <FlightSprite key={flight.id} flight={flight.clone()} on_land={p.on_land.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct SpriteProps {
    pub flight: Flight,
    pub on_land: Callback<u64>,
}

/// One flight, re-rendered every animation frame until it lands.
#[function_component(FlightSprite)]
pub fn flight_sprite(p: &SpriteProps) -> Html {
    let now = use_state(|| p.flight.started_ms);

    {
        let now = now.clone();
        let flight = p.flight.clone();
        let on_land = p.on_land.clone();
        use_effect_with(*now, move |_| {
            let frame = request_animation_frame(move |timestamp| {
                if flight.is_done(timestamp) {
                    on_land.emit(flight.id);
                } else {
                    now.set(timestamp);
                }
            });
            move || drop(frame)
        });
    }

    let pos = p.flight.position(*now);
    let scale = p.flight.scale(*now);
    let style = format!(
        "position:fixed;left:0;top:0;pointer-events:none;\
         transform:translate({:.1}px,{:.1}px) translate(-50%,-50%) scale({scale:.3});",
        pos.x, pos.y
    );

    html! {
        <img class="fly-sprite" src={asset_url(&p.flight.image)} alt="" style={style} />
    }
}
