use crate::dom;
use bistro_core::{TabMove, trap_tab};
use std::sync::atomic::{AtomicUsize, Ordering};
use yew::prelude::*;

static SURFACE_IDS: AtomicUsize = AtomicUsize::new(0);

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// The surface is the active overlay.
    pub open: bool,
    /// Still in the tree: open, or animating out.
    pub mounted: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    /// `sheet`, `panel`, `lightbox` or `page`; selects the CSS treatment.
    pub variant: AttrValue,
    /// Floating panels sit above the page without a dimming backdrop.
    #[prop_or_default]
    pub floating: bool,
    /// Element to focus on close when the opener is no longer in the page.
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Modal-like container shared by the sheet, panels, lightbox and full cart view.
#[function_component(OverlaySurface)]
pub fn overlay_surface(props: &Props) -> Html {
    let surface_id = use_state(|| SURFACE_IDS.fetch_add(1, Ordering::Relaxed));
    let container_ref = use_node_ref();

    let prev_open = use_mut_ref(|| false);
    let opener = use_mut_ref(|| None::<web_sys::HtmlElement>);

    {
        let container_ref = container_ref.clone();
        use_effect_with(
            (props.open, props.return_focus_id.clone()),
            move |(open, return_focus)| {
                let was_open = std::mem::replace(&mut *prev_open.borrow_mut(), *open);
                if *open {
                    if !was_open {
                        *opener.borrow_mut() = dom::active_element();
                    }
                    if let Some(el) = container_ref.cast::<web_sys::HtmlElement>() {
                        let _ = el.set_attribute("tabindex", "-1");
                        let _ = el.focus();
                    }
                } else if was_open {
                    let saved = opener.borrow_mut().take();
                    // Another surface may already have taken focus.
                    let container = container_ref.cast::<web_sys::Element>();
                    if dom::focus_within_or_lost(container.as_ref()) {
                        dom::restore_focus(saved, return_focus.as_deref());
                    }
                }
            },
        );
    }

    let on_keydown = {
        let container_ref = container_ref.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() != "Tab" {
                return;
            }
            let Some(container) = container_ref.cast::<web_sys::Element>() else {
                return;
            };
            let items = dom::focusables(&container);
            let current = dom::active_element()
                .and_then(|active| items.iter().position(|item| *item == active));
            match trap_tab(items.len(), current, event.shift_key()) {
                TabMove::Browser => {}
                TabMove::Stay => event.prevent_default(),
                TabMove::Focus(index) => {
                    event.prevent_default();
                    if let Some(item) = items.get(index) {
                        let _ = item.focus();
                    }
                }
            }
        })
    };

    if !props.mounted {
        return Html::default();
    }

    let title_id = format!("overlay-title-{}", *surface_id);
    let state = if props.open { "open" } else { "closing" };
    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let surface = html! {
        <div
            id={format!("overlay-{}", *surface_id)}
            class={classes!("overlay", format!("overlay--{}", props.variant))}
            role="dialog"
            aria-modal={(!props.floating).to_string()}
            aria-labelledby={title_id.clone()}
            aria-hidden={(!props.open).then_some("true")}
            data-state={state}
            onclick={stop}
            onkeydown={on_keydown}
            ref={container_ref}
        >
            <div class="overlay__header">
                <h2 id={title_id}>{ props.title.clone() }</h2>
                <button type="button" class="overlay__close" aria-label="Close" onclick={on_close.clone()}>
                    { "✕" }
                </button>
            </div>
            <div class="overlay__body">
                { props.children.clone() }
            </div>
        </div>
    };

    if props.floating {
        surface
    } else {
        html! {
            <div class="overlay-backdrop" role="presentation" data-state={state} onclick={on_close}>
                { surface }
            </div>
        }
    }
}
