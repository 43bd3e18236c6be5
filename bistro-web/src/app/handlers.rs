use crate::app::models::{CartAction, FlightAction, OverlayAction};
use crate::app::state::AppState;
use crate::components::fab::FAB_CART_ID;
use crate::components::header::CART_TARGET_ID;
use crate::components::menu_card::AddToCart;
use crate::components::nav_link::navigate;
use crate::content;
use crate::dom;
use crate::router::Route;
use bistro_core::{CategoryFilter, DisplayMode, MenuItem, Overlay};
use yew::prelude::*;
use yew_router::prelude::Navigator;

#[derive(Clone, PartialEq)]
pub struct AppHandlers {
    pub add_to_cart: Callback<AddToCart>,
    pub increment: Callback<AttrValue>,
    pub decrement: Callback<AttrValue>,
    pub remove: Callback<AttrValue>,
    pub request_clear: Callback<()>,
    pub confirm_clear: Callback<()>,
    pub cancel_clear: Callback<()>,
    pub open_sheet: Callback<()>,
    pub toggle_category_panel: Callback<()>,
    pub toggle_cart_panel: Callback<()>,
    pub open_cart_page: Callback<()>,
    pub open_photo: Callback<AttrValue>,
    pub close_overlay: Callback<()>,
    pub escape: Callback<()>,
    pub select_category: Callback<CategoryFilter>,
    pub land_flight: Callback<u64>,
    pub toggle_menu: Callback<()>,
    pub close_menu: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, navigator: Option<Navigator>, display: DisplayMode) -> Self {
        Self {
            add_to_cart: build_add_to_cart(state),
            increment: build_cart_action(state, CartAction::Add),
            decrement: build_cart_action(state, CartAction::Decrement),
            remove: build_cart_action(state, CartAction::Remove),
            request_clear: build_cart_signal(state, CartAction::RequestClear),
            confirm_clear: build_cart_signal(state, CartAction::ConfirmClear),
            cancel_clear: build_cart_signal(state, CartAction::CancelClear),
            open_sheet: build_overlay_signal(state, OverlayAction::Open(Overlay::CategorySheet)),
            toggle_category_panel: build_overlay_signal(
                state,
                OverlayAction::Toggle(Overlay::CategoryPanel),
            ),
            toggle_cart_panel: build_overlay_signal(state, OverlayAction::Toggle(Overlay::CartPanel)),
            open_cart_page: build_overlay_signal(state, OverlayAction::Open(Overlay::CartPage)),
            open_photo: build_open_photo(state),
            close_overlay: build_overlay_signal(state, OverlayAction::Close),
            escape: build_overlay_signal(state, OverlayAction::Escape),
            select_category: build_select_category(state, navigator, display),
            land_flight: build_land_flight(state),
            toggle_menu: build_toggle_menu(state),
            close_menu: build_close_menu(state),
        }
    }
}

fn build_add_to_cart(state: &AppState) -> Callback<AddToCart> {
    let cart = state.cart.clone();
    let flights = state.flights.clone();
    let reduced_motion = state.media_env.reduced_motion;
    Callback::from(move |request: AddToCart| {
        let orderable = content::catalog()
            .find(&request.id)
            .is_some_and(MenuItem::is_orderable);
        cart.dispatch(CartAction::Add(request.id.clone()));
        if !orderable || reduced_motion {
            return;
        }
        let target = dom::element_center(CART_TARGET_ID)
            .filter(|point| point.y >= 0.0)
            .or_else(|| dom::element_center(FAB_CART_ID));
        if let (Some(from), Some(to)) = (request.origin, target) {
            flights.dispatch(FlightAction::Launch {
                image: request.image.to_string(),
                from,
                to,
                now_ms: dom::now_ms(),
            });
        }
    })
}

fn build_cart_action(
    state: &AppState,
    action: fn(AttrValue) -> CartAction,
) -> Callback<AttrValue> {
    let cart = state.cart.clone();
    Callback::from(move |id: AttrValue| cart.dispatch(action(id)))
}

fn build_cart_signal(state: &AppState, action: CartAction) -> Callback<()> {
    let cart = state.cart.clone();
    Callback::from(move |()| cart.dispatch(action.clone()))
}

fn build_overlay_signal(state: &AppState, action: OverlayAction) -> Callback<()> {
    let overlay = state.overlay.clone();
    Callback::from(move |()| overlay.dispatch(action.clone()))
}

fn build_open_photo(state: &AppState) -> Callback<AttrValue> {
    let overlay = state.overlay.clone();
    Callback::from(move |id: AttrValue| {
        overlay.dispatch(OverlayAction::Open(Overlay::Lightbox(id.to_string())));
    })
}

fn build_select_category(
    state: &AppState,
    navigator: Option<Navigator>,
    display: DisplayMode,
) -> Callback<CategoryFilter> {
    let overlay = state.overlay.clone();
    Callback::from(move |filter: CategoryFilter| {
        if let Some(nav) = navigator.as_ref() {
            let page_query = filter.slug().map(|slug| ("category", slug));
            navigate(nav, &Route::Menu, display, page_query);
        }
        overlay.dispatch(OverlayAction::CategorySelected);
    })
}

fn build_land_flight(state: &AppState) -> Callback<u64> {
    let flights = state.flights.clone();
    Callback::from(move |id: u64| flights.dispatch(FlightAction::Land(id)))
}

fn build_toggle_menu(state: &AppState) -> Callback<()> {
    let menu_open = state.menu_open.clone();
    Callback::from(move |()| menu_open.set(!*menu_open))
}

fn build_close_menu(state: &AppState) -> Callback<()> {
    let menu_open = state.menu_open.clone();
    Callback::from(move |()| menu_open.set(false))
}
