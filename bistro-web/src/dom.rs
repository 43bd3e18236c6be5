use bistro_core::{MediaEnv, Point};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Storage, Window,
};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Current vertical page offset.
#[must_use]
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn scroll_to(top: f64, smooth: bool) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Instant
    });
    win.scroll_to_with_scroll_to_options(&opts);
}

/// High-resolution timestamp on the same clock as animation frames.
#[must_use]
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|win| win.performance())
        .map_or_else(js_sys::Date::now, |perf| perf.now())
}

/// Centre of the element with `id`, in viewport coordinates.
#[must_use]
pub fn element_center(id: &str) -> Option<Point> {
    let el = web_sys::window()?.document()?.get_element_by_id(id)?;
    Some(rect_center(&el))
}

#[must_use]
pub fn rect_center(el: &Element) -> Point {
    let rect = el.get_bounding_client_rect();
    Point::new(
        rect.left() + rect.width() / 2.0,
        rect.top() + rect.height() / 2.0,
    )
}

/// Viewer preferences that rule out autoplaying video.
#[must_use]
pub fn media_env() -> MediaEnv {
    let Some(win) = web_sys::window() else {
        return MediaEnv::default();
    };
    let reduced_motion = win
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .is_some_and(|mql| mql.matches());
    let save_data = js_sys::Reflect::get(&win.navigator(), &JsValue::from_str("connection"))
        .ok()
        .filter(|conn| !conn.is_undefined() && !conn.is_null())
        .and_then(|conn| js_sys::Reflect::get(&conn, &JsValue::from_str("saveData")).ok())
        .and_then(|flag| flag.as_bool())
        .unwrap_or(false);
    MediaEnv {
        reduced_motion,
        save_data,
    }
}

/// Freeze the page at `offset` so overlays can scroll independently.
pub fn lock_body(offset: f64) {
    let Some(body) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.body())
    else {
        return;
    };
    let style = body.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("top", &format!("-{offset}px"));
    let _ = style.set_property("left", "0");
    let _ = style.set_property("right", "0");
    let _ = style.set_property("overflow", "hidden");
}

/// Undo [`lock_body`] and jump back to `offset`.
pub fn unlock_body(offset: f64) {
    if let Some(body) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.body())
    {
        let style = body.style();
        for prop in ["position", "top", "left", "right", "overflow"] {
            let _ = style.remove_property(prop);
        }
    }
    scroll_to(offset, false);
}

/// Start fetching `src` into the browser cache.
pub fn preload_image(src: &str) {
    if let Ok(img) = web_sys::HtmlImageElement::new() {
        img.set_src(src);
    }
}

const FOCUSABLE: &str = "a[href], button:not([disabled]), input:not([disabled]), \
select:not([disabled]), textarea:not([disabled]), [tabindex]:not([tabindex='-1'])";

/// Element holding keyboard focus, if it is an HTML element.
#[must_use]
pub fn active_element() -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .active_element()?
        .dyn_into()
        .ok()
}

/// Tabbable descendants of `container`, in document order.
#[must_use]
pub fn focusables(container: &Element) -> Vec<HtmlElement> {
    let Ok(list) = container.query_selector_all(FOCUSABLE) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Focus is inside `container` or has fallen back to the page body.
#[must_use]
pub fn focus_within_or_lost(container: Option<&Element>) -> bool {
    let Some(doc) = web_sys::window().and_then(|win| win.document()) else {
        return false;
    };
    let Some(active) = doc.active_element() else {
        return true;
    };
    doc.body().is_some_and(|body| *body == active)
        || container.is_some_and(|el| el.contains(Some(active.as_ref())))
}

/// Put focus back on `saved` if it is still in the page, else on the element with `fallback_id`.
pub fn restore_focus(saved: Option<HtmlElement>, fallback_id: Option<&str>) {
    let target = saved.filter(|el| el.is_connected()).or_else(|| {
        web_sys::window()?
            .document()?
            .get_element_by_id(fallback_id?)?
            .dyn_into::<HtmlElement>()
            .ok()
    });
    if let Some(el) = target {
        let _ = el.focus();
    }
}
