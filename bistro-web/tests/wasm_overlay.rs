#![cfg(target_arch = "wasm32")]

use bistro_web::components::overlay_surface::{OverlaySurface, Props};
use bistro_web::dom;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, KeyboardEvent, KeyboardEventInit};
use yew::html::ChildrenRenderer;
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn props(open: bool) -> Props {
    Props {
        open,
        mounted: true,
        title: AttrValue::from("Your order"),
        on_close: Callback::noop(),
        variant: AttrValue::from("panel"),
        floating: true,
        return_focus_id: None,
        children: ChildrenRenderer::new(vec![html! {
            <button type="button" id="overlay-last">{ "Checkout" }</button>
        }]),
    }
}

fn append(tag: &str, id: &str) -> HtmlElement {
    let doc = dom::document();
    let el = doc.create_element(tag).expect("create element");
    el.set_id(id);
    doc.body()
        .expect("body")
        .append_child(&el)
        .expect("append");
    el.dyn_into().expect("html element")
}

async fn settle() {
    yew::platform::time::sleep(Duration::from_millis(0)).await;
}

fn press_tab(target: &HtmlElement, shift: bool) {
    let init = KeyboardEventInit::new();
    init.set_key("Tab");
    init.set_shift_key(shift);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("event");
    target.dispatch_event(&event).expect("dispatch");
}

#[wasm_bindgen_test]
async fn closing_returns_focus_to_the_opener() {
    let opener = append("button", "opener-restore");
    let _ = opener.focus();
    let root = append("div", "root-restore");

    let mut handle = yew::Renderer::<OverlaySurface>::with_root_and_props(root.into(), props(true))
        .render();
    settle().await;
    assert_ne!(dom::active_element(), Some(opener.clone()));

    handle.update(props(false));
    settle().await;
    assert_eq!(dom::active_element(), Some(opener));
    handle.destroy();
}

#[wasm_bindgen_test]
async fn tab_wraps_inside_the_open_surface() {
    let root = append("div", "root-trap");
    let handle = yew::Renderer::<OverlaySurface>::with_root_and_props(root.into(), props(true))
        .render();
    settle().await;

    let doc = dom::document();
    let last: HtmlElement = doc
        .get_element_by_id("overlay-last")
        .expect("last button")
        .dyn_into()
        .expect("html element");
    let _ = last.focus();
    press_tab(&last, false);
    let wrapped = dom::active_element().expect("focused");
    assert!(wrapped.class_name().contains("overlay__close"));

    press_tab(&wrapped, true);
    assert_eq!(dom::active_element(), Some(last));
    handle.destroy();
}
