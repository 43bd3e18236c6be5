use bistro_core::{
    Cart, CategoryFilter, ClearConfirm, DisplayMode, MediaEnv, Overlay, category_counts,
};
use bistro_web::components::cart_summary::{CartSummary, CartView};
use bistro_web::components::category_picker::CategoryPicker;
use bistro_web::components::fab::Fab;
use bistro_web::components::footer::Footer;
use bistro_web::components::header::Header;
use bistro_web::components::hero_carousel::HeroCarousel;
use bistro_web::components::menu_card::MenuCard;
use bistro_web::components::nav_link::NavLink;
use bistro_web::components::overlay_surface::OverlaySurface;
use bistro_web::content;
use futures::executor::block_on;
use yew::html::ChildrenRenderer;
use bistro_web::router::Route;
use yew::prelude::*;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn item(id: &str) -> bistro_core::MenuItem {
    content::catalog().find(id).cloned().expect("bundled item")
}

fn cart_view(entries: &[(&str, u32)]) -> CartView {
    let mut cart = Cart::new();
    for (id, qty) in entries {
        for _ in 0..*qty {
            cart.increment(content::catalog(), id).expect("orderable");
        }
    }
    CartView::new(&cart, content::catalog())
}

fn summary_props(view: CartView, clear: ClearConfirm) -> bistro_web::components::cart_summary::Props {
    bistro_web::components::cart_summary::Props {
        view,
        clear,
        on_increment: Callback::noop(),
        on_decrement: Callback::noop(),
        on_remove: Callback::noop(),
        on_request_clear: Callback::noop(),
        on_confirm_clear: Callback::noop(),
        on_cancel_clear: Callback::noop(),
        on_expand: None,
    }
}

#[test]
fn header_renders_nav_and_cart_badge() {
    let props = bistro_web::components::header::Props {
        hidden: false,
        cart_count: 3,
        menu_open: false,
        current: Some(bistro_web::router::Route::Menu),
        on_toggle_menu: Callback::noop(),
        on_close_menu: Callback::noop(),
        on_open_cart: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("cart-target"));
    assert!(html.contains("cart-badge"));
    assert!(html.contains("href=\"/menu\""));
    assert!(html.contains("aria-current=\"page\""));
    assert!(!html.contains("site-header--hidden"));
}

#[test]
fn hidden_header_carries_hidden_class() {
    let props = bistro_web::components::header::Props {
        hidden: true,
        cart_count: 0,
        menu_open: true,
        current: None,
        on_toggle_menu: Callback::noop(),
        on_close_menu: Callback::noop(),
        on_open_cart: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("site-header--hidden"));
    assert!(html.contains("site-header--menu-open"));
    assert!(!html.contains("cart-badge"));
}

#[test]
fn footer_renders_contact_links() {
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains("<footer"));
    assert!(html.contains("tel:"));
}

#[test]
fn fixed_price_card_offers_add_button() {
    let props = bistro_web::components::menu_card::Props {
        item: item("stew-1"),
        quantity: 2,
        on_add: Callback::noop(),
        on_open_photo: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<MenuCard>::with_props(props).render());
    assert!(html.contains("menu-card__add"));
    assert!(html.contains("$12.50"));
    assert!(html.contains("menu-card__qty"));
}

#[test]
fn market_price_card_has_no_add_button() {
    let props = bistro_web::components::menu_card::Props {
        item: item("beef-bbq-1"),
        quantity: 0,
        on_add: Callback::noop(),
        on_open_photo: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<MenuCard>::with_props(props).render());
    assert!(!html.contains("menu-card__add"));
    assert!(html.contains("Market price"));
    assert!(html.contains("menu-card--featured"));
}

#[test]
fn empty_cart_summary_links_to_menu() {
    let props = summary_props(CartView::default(), ClearConfirm::Idle);
    let html = block_on(LocalServerRenderer::<CartSummary>::with_props(props).render());
    assert!(html.contains("cart-summary--empty"));
    assert!(html.contains("href=\"/menu\""));
}

#[test]
fn cart_summary_lists_lines_and_rounded_total() {
    let props = summary_props(cart_view(&[("stew-1", 2)]), ClearConfirm::Idle);
    let html = block_on(LocalServerRenderer::<CartSummary>::with_props(props).render());
    assert!(html.contains("data-item=\"stew-1\""));
    assert!(html.contains("$25.00"));
    assert!(html.contains("Clear order"));
    assert!(!html.contains("Yes, clear"));
}

#[test]
fn pending_clear_asks_for_confirmation() {
    let props = summary_props(cart_view(&[("stew-1", 1)]), ClearConfirm::Pending);
    let html = block_on(LocalServerRenderer::<CartSummary>::with_props(props).render());
    assert!(html.contains("Yes, clear"));
    assert!(html.contains("Keep order"));
}

#[test]
fn category_picker_marks_active_choice() {
    let props = bistro_web::components::category_picker::Props {
        active: CategoryFilter::Only(bistro_core::Category::Soups),
        counts: category_counts(content::catalog().items()),
        on_select: Callback::noop(),
        layout: AttrValue::from("chips"),
    };
    let html = block_on(LocalServerRenderer::<CategoryPicker>::with_props(props).render());
    assert!(html.contains("data-category=\"all\""));
    assert!(html.contains("data-category=\"soups\""));
    assert!(html.contains("category-chip--active"));
}

#[test]
fn overlay_surface_tracks_mount_and_closing_state() {
    let props = |open: bool, mounted: bool| bistro_web::components::overlay_surface::Props {
        open,
        mounted,
        title: AttrValue::from("Categories"),
        on_close: Callback::noop(),
        variant: AttrValue::from("sheet"),
        floating: false,
        return_focus_id: None,
        children: ChildrenRenderer::default(),
    };
    let open = block_on(LocalServerRenderer::<OverlaySurface>::with_props(props(true, true)).render());
    assert!(open.contains("data-state=\"open\""));
    assert!(open.contains("overlay-backdrop"));

    let closing =
        block_on(LocalServerRenderer::<OverlaySurface>::with_props(props(false, true)).render());
    assert!(closing.contains("data-state=\"closing\""));

    let gone =
        block_on(LocalServerRenderer::<OverlaySurface>::with_props(props(false, false)).render());
    assert!(!gone.contains("role=\"dialog\""));
}

#[test]
fn fab_reflects_open_panel() {
    let props = bistro_web::components::fab::Props {
        hidden: false,
        cart_count: 1,
        active: Overlay::CartPanel,
        on_toggle_categories: Callback::noop(),
        on_toggle_cart: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Fab>::with_props(props).render());
    assert!(html.contains("fab-cart"));
    assert!(html.contains("fab__button--active"));
}

#[test]
fn carousel_starts_on_first_slide_with_video() {
    let props = bistro_web::components::hero_carousel::Props {
        slides: content::slides("home").to_vec(),
        label: AttrValue::from("Highlights"),
        media_env: MediaEnv::default(),
        pausable: false,
    };
    let html = block_on(LocalServerRenderer::<HeroCarousel>::with_props(props).render());
    assert!(html.contains("data-active=\"0\""));
    assert!(html.contains("<video"));
    assert!(html.contains("hero__dots"));
}

#[test]
fn constrained_environment_shows_poster_instead_of_video() {
    let props = bistro_web::components::hero_carousel::Props {
        slides: content::slides("home").to_vec(),
        label: AttrValue::from("Highlights"),
        media_env: MediaEnv {
            reduced_motion: false,
            save_data: true,
        },
        pausable: true,
    };
    let html = block_on(LocalServerRenderer::<HeroCarousel>::with_props(props).render());
    assert!(!html.contains("<video"));
    assert!(html.contains("grill-poster.webp"));
    assert!(html.contains("hero__pause"));
}

#[test]
fn empty_carousel_renders_nothing() {
    let props = bistro_web::components::hero_carousel::Props {
        slides: Vec::new(),
        label: AttrValue::from("Nothing"),
        media_env: MediaEnv::default(),
        pausable: false,
    };
    let html = block_on(LocalServerRenderer::<HeroCarousel>::with_props(props).render());
    assert!(!html.contains("hero__track"));
}

#[function_component(KioskLinks)]
fn kiosk_links() -> Html {
    html! {
        <ContextProvider<DisplayMode> context={DisplayMode::Kiosk}>
            <NavLink to={Route::Cart}>{ "Cart" }</NavLink>
            <NavLink
                to={Route::Menu}
                query={Some((AttrValue::from("category"), AttrValue::from("soups")))}
            >
                { "Soups" }
            </NavLink>
        </ContextProvider<DisplayMode>>
    }
}

#[test]
fn kiosk_links_keep_display_flag() {
    let html = block_on(LocalServerRenderer::<KioskLinks>::new().render());
    assert!(html.contains("href=\"/cart?display=qr\""));
    assert!(
        html.contains("/menu?category=soups&amp;display=qr")
            || html.contains("/menu?category=soups&display=qr")
    );
}

#[test]
fn standard_links_have_no_query() {
    let props = bistro_web::components::nav_link::Props {
        to: Route::Promos,
        query: None,
        class: Classes::new(),
        current: false,
        id: None,
        on_navigate: None,
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<NavLink>::with_props(props).render());
    assert!(html.contains("href=\"/promos\""));
}
