use crate::app::handlers::AppHandlers;
use crate::app::state::{AppState, SharedPreload};
use crate::components::cart_summary::{CartSummary, CartView};
use crate::components::category_picker::CategoryPicker;
use crate::components::fab::{FAB_CART_ID, FAB_CATEGORIES_ID, Fab};
use crate::components::fly_layer::FlyLayer;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::lightbox::Lightbox;
use crate::components::overlay_surface::OverlaySurface;
use crate::content;
use crate::pages::cart::CartPage;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::menu::MenuPage;
use crate::pages::not_found::NotFound;
use crate::pages::promos::PromosPage;
use crate::router::Route;
use bistro_core::{CategoryFilter, DisplayMode, Overlay, category_counts};
use yew::prelude::*;

/// Everything the layout needs besides app state.
pub struct ViewContext<'a> {
    pub route: &'a Route,
    pub filter: CategoryFilter,
    pub display: DisplayMode,
    pub chrome_hidden: bool,
}

pub fn render_app(state: &AppState, handlers: &AppHandlers, ctx: &ViewContext<'_>) -> Html {
    let cart_view = CartView::new(state.cart.cart(), content::catalog());
    let chrome = ctx.display.shows_chrome();

    html! {
        <ContextProvider<SharedPreload> context={state.preload.clone()}>
        <ContextProvider<DisplayMode> context={ctx.display}>
            <div class={classes!("app-shell", (!chrome).then_some("app-shell--kiosk"))}>
                if chrome {
                    <Header
                        hidden={ctx.chrome_hidden}
                        cart_count={state.cart_count()}
                        menu_open={*state.menu_open}
                        current={Some(ctx.route.clone())}
                        on_toggle_menu={handlers.toggle_menu.clone()}
                        on_close_menu={handlers.close_menu.clone()}
                        on_open_cart={handlers.toggle_cart_panel.clone()}
                    />
                }
                <main id="main" role="main">
                    { render_page(state, handlers, ctx, &cart_view) }
                </main>
                if chrome {
                    <>
                        <Footer />
                        <Fab
                            hidden={ctx.chrome_hidden}
                            cart_count={state.cart_count()}
                            active={state.overlay.active().clone()}
                            on_toggle_categories={handlers.toggle_category_panel.clone()}
                            on_toggle_cart={handlers.toggle_cart_panel.clone()}
                        />
                    </>
                }
                { render_overlays(state, handlers, ctx, &cart_view) }
                <FlyLayer
                    flights={state.flights.flights().to_vec()}
                    on_land={handlers.land_flight.clone()}
                />
            </div>
        </ContextProvider<DisplayMode>>
        </ContextProvider<SharedPreload>>
    }
}

fn render_page(
    state: &AppState,
    handlers: &AppHandlers,
    ctx: &ViewContext<'_>,
    cart_view: &CartView,
) -> Html {
    let cart = state.cart.cart().clone();
    match ctx.route {
        Route::Home => html! {
            <HomePage
                media_env={state.media_env}
                cart={cart}
                on_add={handlers.add_to_cart.clone()}
                on_open_photo={handlers.open_photo.clone()}
            />
        },
        Route::Menu => html! {
            <MenuPage
                filter={ctx.filter}
                cart={cart}
                on_add={handlers.add_to_cart.clone()}
                on_open_photo={handlers.open_photo.clone()}
                on_select={handlers.select_category.clone()}
                on_open_sheet={handlers.open_sheet.clone()}
            />
        },
        Route::Promos => html! { <PromosPage media_env={state.media_env} /> },
        Route::Contact => html! { <ContactPage /> },
        Route::Cart => html! {
            <CartPage
                view={cart_view.clone()}
                clear={state.cart.clear_state()}
                on_increment={handlers.increment.clone()}
                on_decrement={handlers.decrement.clone()}
                on_remove={handlers.remove.clone()}
                on_request_clear={handlers.request_clear.clone()}
                on_confirm_clear={handlers.confirm_clear.clone()}
                on_cancel_clear={handlers.cancel_clear.clone()}
            />
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

fn render_overlays(
    state: &AppState,
    handlers: &AppHandlers,
    ctx: &ViewContext<'_>,
    cart_view: &CartView,
) -> Html {
    let overlay = &*state.overlay;
    let active = overlay.active();
    let counts = category_counts(content::catalog().items());
    let summary = |expand: Option<Callback<()>>| {
        html! {
            <CartSummary
                view={cart_view.clone()}
                clear={state.cart.clear_state()}
                on_increment={handlers.increment.clone()}
                on_decrement={handlers.decrement.clone()}
                on_remove={handlers.remove.clone()}
                on_request_clear={handlers.request_clear.clone()}
                on_confirm_clear={handlers.confirm_clear.clone()}
                on_cancel_clear={handlers.cancel_clear.clone()}
                on_expand={expand}
            />
        }
    };
    let picker = || {
        html! {
            <CategoryPicker
                active={ctx.filter}
                counts={counts.clone()}
                on_select={handlers.select_category.clone()}
                layout="list"
            />
        }
    };
    let lightbox = active
        .lightbox_item()
        .or_else(|| overlay.leaving().and_then(Overlay::lightbox_item))
        .and_then(|id| content::catalog().find(id))
        .map(|item| {
            html! {
                <OverlaySurface
                    open={active.lightbox_item().is_some()}
                    mounted={true}
                    title={item.name.clone()}
                    variant="lightbox"
                    on_close={handlers.close_overlay.clone()}
                >
                    <Lightbox item={item.clone()} />
                </OverlaySurface>
            }
        });

    html! {
        <>
            <OverlaySurface
                open={*active == Overlay::CategorySheet}
                mounted={overlay.is_mounted(&Overlay::CategorySheet)}
                title="Categories"
                variant="sheet"
                on_close={handlers.close_overlay.clone()}
            >
                { picker() }
            </OverlaySurface>
            <OverlaySurface
                open={*active == Overlay::CategoryPanel}
                mounted={overlay.is_mounted(&Overlay::CategoryPanel)}
                title="Jump to"
                variant="panel"
                floating={true}
                return_focus_id={AttrValue::Static(FAB_CATEGORIES_ID)}
                on_close={handlers.close_overlay.clone()}
            >
                { picker() }
            </OverlaySurface>
            <OverlaySurface
                open={*active == Overlay::CartPanel}
                mounted={overlay.is_mounted(&Overlay::CartPanel)}
                title="Your order"
                variant="panel"
                floating={true}
                return_focus_id={AttrValue::Static(FAB_CART_ID)}
                on_close={handlers.close_overlay.clone()}
            >
                { summary(Some(handlers.open_cart_page.clone())) }
            </OverlaySurface>
            <OverlaySurface
                open={*active == Overlay::CartPage}
                mounted={overlay.is_mounted(&Overlay::CartPage)}
                title="Your order"
                variant="page"
                return_focus_id={AttrValue::Static(FAB_CART_ID)}
                on_close={handlers.close_overlay.clone()}
            >
                { summary(None) }
            </OverlaySurface>
            { for lightbox }
        </>
    }
}
