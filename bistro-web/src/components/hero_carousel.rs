//! Autoplaying hero carousel with swipe, keyboard and video handling.

use crate::app::state::SharedPreload;
use crate::components::lazy_image::LazyImage;
use crate::components::nav_link::NavLink;
use crate::dom;
use crate::paths::asset_url;
use crate::router::Route;
use bistro_core::carousel::{SOUND_TOAST_MS, Swipe};
use bistro_core::{
    Carousel, CtaTarget, MediaEnv, Presentation, Slide, SwipeTracker, TapAction, VideoState,
    presentation,
};
use gloo::timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use yew::prelude::*;
use yew_router::Routable;

/// Delay before warming the next slide's image.
const IDLE_PRELOAD_MS: u32 = 600;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CarouselModel(Carousel);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
    Key(String),
    Swipe(Swipe),
    TogglePause,
    ReducedMotion(bool),
}

impl Reducible for CarouselModel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut carousel = self.0.clone();
        match action {
            CarouselAction::Next => {
                carousel.next();
            }
            CarouselAction::Prev => {
                carousel.prev();
            }
            CarouselAction::GoTo(index) => {
                carousel.go_to(i64::try_from(index).unwrap_or(0));
            }
            CarouselAction::Key(key) => {
                carousel.on_key(&key);
            }
            CarouselAction::Swipe(swipe) => {
                carousel.apply_swipe(swipe);
            }
            CarouselAction::TogglePause => {
                carousel.toggle_paused();
            }
            CarouselAction::ReducedMotion(reduced) => carousel.set_reduced_motion(reduced),
        }
        if carousel == self.0 {
            self
        } else {
            Rc::new(Self(carousel))
        }
    }
}

/// Playback state plus the activation its pending `play()` results belong to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VideoModel(VideoState, u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoAction {
    Activate { activation: u32 },
    Started { from_tap: bool, activation: u32 },
    Blocked { activation: u32 },
    Tap,
    DismissToast,
}

impl Reducible for VideoModel {
    type Action = VideoAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut video = self.0;
        let mut current = self.1;
        match action {
            VideoAction::Activate { activation } => {
                video.activate();
                current = activation;
            }
            // Results from a slide that is no longer active are dropped.
            VideoAction::Started { activation, .. } | VideoAction::Blocked { activation }
                if activation != current => {}
            VideoAction::Started { from_tap, .. } => video.playback_started(from_tap),
            VideoAction::Blocked { .. } => video.playback_blocked(),
            VideoAction::Tap => {
                video.tap();
            }
            VideoAction::DismissToast => video.dismiss_toast(),
        }
        if video == self.0 && current == self.1 {
            self
        } else {
            Rc::new(Self(video, current))
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub slides: Vec<Slide>,
    pub label: AttrValue,
    #[prop_or_default]
    pub media_env: MediaEnv,
    /// Offer a pause/play control.
    #[prop_or_default]
    pub pausable: bool,
}

fn play(
    el: &web_sys::HtmlMediaElement,
    video: UseReducerHandle<VideoModel>,
    from_tap: bool,
    activation: u32,
) {
    match el.play() {
        Ok(promise) => spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => video.dispatch(VideoAction::Started {
                    from_tap,
                    activation,
                }),
                Err(err) => {
                    log::debug!("playback refused: {}", dom::js_error_message(&err));
                    video.dispatch(VideoAction::Blocked { activation });
                }
            }
        }),
        Err(_) => video.dispatch(VideoAction::Blocked { activation }),
    }
}

/// Split an internal CTA like `/menu?category=soups` into path and first query pair.
fn split_query(href: &str) -> (&str, Option<(AttrValue, AttrValue)>) {
    let Some((path, query)) = href.split_once('?') else {
        return (href, None);
    };
    let pair = query.split('&').next().and_then(|pair| pair.split_once('=')).map(|(k, v)| {
        (AttrValue::from(k.to_string()), AttrValue::from(v.to_string()))
    });
    (path, pair)
}

#[function_component(HeroCarousel)]
pub fn hero_carousel(p: &Props) -> Html {
    let carousel = {
        let slides = p.slides.clone();
        use_reducer(move || CarouselModel(Carousel::new(&slides)))
    };
    let video = use_reducer(VideoModel::default);
    let activations = use_mut_ref(|| 0_u32);
    let swipe = use_mut_ref(SwipeTracker::default);
    let video_ref = use_node_ref();
    let preload = use_context::<SharedPreload>();

    let active = carousel.0.active();
    let dwell = carousel.0.dwell_ms();
    let active_slide = p.slides.get(active).cloned();
    let shows_video = active_slide
        .as_ref()
        .is_some_and(|slide| matches!(presentation(slide, true, p.media_env), Presentation::Video { .. }));

    {
        let carousel = carousel.clone();
        use_effect_with(p.media_env.reduced_motion, move |&reduced| {
            carousel.dispatch(CarouselAction::ReducedMotion(reduced));
        });
    }

    // Autoplay; keyed on the active index so manual navigation restarts the dwell.
    {
        let carousel = carousel.clone();
        use_effect_with((active, dwell), move |&(_, dwell)| {
            let timer = dwell.map(|ms| {
                Timeout::new(ms, move || carousel.dispatch(CarouselAction::Next))
            });
            move || drop(timer)
        });
    }

    // Muted autoplay attempt whenever a video slide becomes active.
    {
        let video = video.clone();
        let video_ref = video_ref.clone();
        let activations = activations.clone();
        use_effect_with((active, shows_video), move |&(_, shows_video)| {
            let activation = {
                let mut count = activations.borrow_mut();
                *count = count.wrapping_add(1);
                *count
            };
            video.dispatch(VideoAction::Activate { activation });
            if shows_video && let Some(el) = video_ref.cast::<web_sys::HtmlMediaElement>() {
                el.set_muted(true);
                play(&el, video, false, activation);
            }
        });
    }

    {
        let video = video.clone();
        use_effect_with(video.0.toast(), move |toast| {
            let timer = toast.map(|_| {
                Timeout::new(SOUND_TOAST_MS, move || video.dispatch(VideoAction::DismissToast))
            });
            move || drop(timer)
        });
    }

    // Warm the next slide once the current one has settled.
    {
        let next = p
            .slides
            .get((active + 1) % p.slides.len().max(1))
            .and_then(|slide| slide.still_src().map(str::to_string));
        use_effect_with((active, next), move |(_, next)| {
            let timer = next.clone().map(|src| {
                Timeout::new(IDLE_PRELOAD_MS, move || {
                    let fresh = preload.as_ref().is_none_or(|cache| cache.claim(&src));
                    if fresh {
                        dom::preload_image(&asset_url(&src));
                    }
                })
            });
            move || drop(timer)
        });
    }

    if p.slides.is_empty() {
        return Html::default();
    }

    let on_touch_start = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                swipe.borrow_mut().start(f64::from(touch.client_x()));
            }
        })
    };
    let on_touch_move = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                swipe.borrow_mut().track(f64::from(touch.client_x()));
            }
        })
    };
    let on_touch_end = {
        let swipe = swipe.clone();
        let carousel = carousel.clone();
        Callback::from(move |_: TouchEvent| {
            let gesture = swipe.borrow_mut().end();
            if let Some(gesture) = gesture {
                carousel.dispatch(CarouselAction::Swipe(gesture));
            }
        })
    };
    let on_keydown = {
        let carousel = carousel.clone();
        Callback::from(move |e: KeyboardEvent| {
            let key = e.key();
            if matches!(key.as_str(), "ArrowLeft" | "ArrowRight") {
                e.prevent_default();
                carousel.dispatch(CarouselAction::Key(key));
            }
        })
    };
    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_| carousel.dispatch(CarouselAction::Prev))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_| carousel.dispatch(CarouselAction::Next))
    };
    let on_tap = {
        let video = video.clone();
        let video_ref = video_ref.clone();
        let activations = activations.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(el) = video_ref.cast::<web_sys::HtmlMediaElement>() else {
                return;
            };
            let mut next = video.0;
            match next.tap() {
                TapAction::StartPlayback => {
                    el.set_muted(false);
                    play(&el, video.clone(), true, *activations.borrow());
                }
                TapAction::SetMuted(muted) => {
                    el.set_muted(muted);
                    video.dispatch(VideoAction::Tap);
                }
            }
        })
    };

    let slides = p.slides.iter().enumerate().map(|(index, slide)| {
        let is_active = index == active;
        let media = match presentation(slide, is_active, p.media_env) {
            Presentation::Still(src) => html! {
                <LazyImage
                    class="hero__media"
                    src={src.to_string()}
                    alt={slide.alt.clone().unwrap_or_default()}
                    eager={index == 0 || is_active}
                />
            },
            Presentation::Video { src, poster } => html! {
                <video
                    ref={video_ref.clone()}
                    class="hero__media"
                    src={asset_url(src)}
                    poster={poster.map(asset_url)}
                    muted={true}
                    playsinline={true}
                    loop={true}
                    preload="metadata"
                    aria-label={slide.alt.clone().unwrap_or_default()}
                    onclick={on_tap.clone()}
                />
            },
            Presentation::Blank => html! { <div class="hero__media hero__media--blank" /> },
        };
        let cta = slide.cta.as_ref().map(|cta| match cta.target() {
            CtaTarget::Internal(href) => {
                let (path, query) = split_query(href);
                html! {
                    <NavLink
                        class="hero__cta"
                        to={Route::recognize(path).unwrap_or(Route::NotFound)}
                        query={query}
                    >
                        { cta.label.clone() }
                    </NavLink>
                }
            }
            CtaTarget::External(url) => {
                let new_tab = url.starts_with("http");
                html! {
                    <a
                        class="hero__cta"
                        href={url.to_string()}
                        target={new_tab.then_some("_blank")}
                        rel={new_tab.then_some("noopener noreferrer")}
                    >
                        { cta.label.clone() }
                    </a>
                }
            }
        });
        html! {
            <div
                key={slide.id.clone()}
                class={classes!("hero__slide", is_active.then_some("hero__slide--active"))}
                role="group"
                aria-roledescription="slide"
                aria-label={format!("{} of {}", index + 1, p.slides.len())}
                aria-hidden={(!is_active).then_some("true")}
                data-kind={if slide.is_video() { "video" } else { "image" }}
            >
                { media }
                { for cta }
            </div>
        }
    });

    let dots = (0..p.slides.len()).map(|index| {
        let carousel = carousel.clone();
        let onclick = Callback::from(move |_| carousel.dispatch(CarouselAction::GoTo(index)));
        html! {
            <button
                type="button"
                class={classes!("hero__dot", (index == active).then_some("hero__dot--active"))}
                aria-label={format!("Go to slide {}", index + 1)}
                aria-current={(index == active).then_some("true")}
                onclick={onclick}
            />
        }
    });

    let pause_control = p.pausable.then(|| {
        let paused = carousel.0.paused();
        let carousel = carousel.clone();
        let onclick = Callback::from(move |_| carousel.dispatch(CarouselAction::TogglePause));
        html! {
            <button
                type="button"
                class="hero__pause"
                aria-pressed={paused.to_string()}
                aria-label={if paused { "Play slideshow" } else { "Pause slideshow" }}
                onclick={onclick}
            >
                { if paused { "▶" } else { "❚❚" } }
            </button>
        }
    });

    html! {
        <section
            class="hero"
            aria-roledescription="carousel"
            aria-label={p.label.clone()}
            tabindex="0"
            onkeydown={on_keydown}
            ontouchstart={on_touch_start}
            ontouchmove={on_touch_move}
            ontouchend={on_touch_end}
            data-active={active.to_string()}
        >
            <div class="hero__track" aria-live={if dwell.is_some() { "off" } else { "polite" }}>
                { for slides }
            </div>
            if shows_video && video.0.needs_tap() {
                <button type="button" class="hero__tap" onclick={on_tap.clone()}>{ "Tap to play" }</button>
            }
            if let Some(toast) = video.0.toast() {
                <div class="hero__toast" role="status">{ toast.label() }</div>
            }
            if p.slides.len() > 1 {
                <>
                    <button type="button" class="hero__prev" aria-label="Previous slide" onclick={on_prev}>{ "‹" }</button>
                    <button type="button" class="hero__next" aria-label="Next slide" onclick={on_next}>{ "›" }</button>
                    <div class="hero__dots">{ for dots }</div>
                </>
            }
            { for pause_control }
            if let Some(slide) = active_slide.as_ref() {
                <span class="sr-only" aria-live="polite">{ slide.alt.clone().unwrap_or_default() }</span>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_core::carousel::SlideKind;

    fn model(len: usize) -> Rc<CarouselModel> {
        Rc::new(CarouselModel(Carousel::from_kinds(vec![SlideKind::Image; len])))
    }

    #[test]
    fn navigation_wraps_through_reducer() {
        let start = model(3);
        let back = start.reduce(CarouselAction::Prev);
        assert_eq!(back.0.active(), 2);
        let swiped = back.reduce(CarouselAction::Swipe(Swipe::Left));
        assert_eq!(swiped.0.active(), 0);
        let keyed = swiped.reduce(CarouselAction::Key("ArrowRight".to_string()));
        assert_eq!(keyed.0.active(), 1);
    }

    #[test]
    fn cta_query_is_split_from_path() {
        let (path, query) = split_query("/menu?category=soups");
        assert_eq!(path, "/menu");
        assert_eq!(query, Some(("category".into(), "soups".into())));
        assert_eq!(split_query("/promos"), ("/promos", None));
    }

    #[test]
    fn empty_carousel_keeps_identity() {
        let empty = model(0);
        let after = empty.clone().reduce(CarouselAction::Next);
        assert!(Rc::ptr_eq(&empty, &after));
    }

    #[test]
    fn video_tap_toggles_sound_after_playback() {
        let video = Rc::new(VideoModel::default());
        let playing = video.reduce(VideoAction::Started {
            from_tap: false,
            activation: 0,
        });
        assert!(playing.0.muted());
        let unmuted = playing.reduce(VideoAction::Tap);
        assert!(!unmuted.0.muted());
        assert!(unmuted.0.toast().is_some());
        let quiet = unmuted.reduce(VideoAction::DismissToast);
        assert!(quiet.0.toast().is_none());
    }

    #[test]
    fn playback_result_for_a_previous_slide_is_dropped() {
        let first = Rc::new(VideoModel::default()).reduce(VideoAction::Activate { activation: 1 });
        let second = first.reduce(VideoAction::Activate { activation: 2 });

        let stale = second.clone().reduce(VideoAction::Started {
            from_tap: false,
            activation: 1,
        });
        assert!(Rc::ptr_eq(&second, &stale));
        assert!(!stale.0.playing());
        let stale_block = second.clone().reduce(VideoAction::Blocked { activation: 1 });
        assert!(Rc::ptr_eq(&second, &stale_block));

        let current = second.reduce(VideoAction::Started {
            from_tap: false,
            activation: 2,
        });
        assert!(current.0.playing());
    }
}
