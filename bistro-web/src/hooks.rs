//! Hooks binding core state machines to browser events and timers.
//!
//! Everything touching the DOM runs inside effects, which never execute during
//! server-side rendering.

use crate::app::models::{OverlayAction, OverlayModel};
use crate::dom;
use bistro_core::{FrameGate, LockChange, MediaEnv, ScrollLock, ScrollVisibility};
use gloo::events::EventListener;
use gloo::render::{AnimationFrame, request_animation_frame};
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Length of the overlay exit animation.
pub const OVERLAY_EXIT_MS: u32 = 220;

/// Whether chrome should be hidden, driven by frame-coalesced scroll samples.
///
/// Passing `enabled = false` detaches the listener and forces the chrome visible.
#[hook]
pub fn use_scroll_visibility(enabled: bool) -> bool {
    let hidden = use_state_eq(|| false);
    {
        let hidden = hidden.clone();
        use_effect_with(enabled, move |&enabled| {
            let listener = if enabled {
                let tracker = Rc::new(RefCell::new(ScrollVisibility::default()));
                tracker.borrow_mut().enable(dom::scroll_y());
                let gate = Rc::new(RefCell::new(FrameGate::default()));
                let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::default();
                Some(EventListener::new(&dom::window(), "scroll", move |_| {
                    if !gate.borrow_mut().request() {
                        return;
                    }
                    let tracker = tracker.clone();
                    let gate = gate.clone();
                    let hidden = hidden.clone();
                    let pending = request_animation_frame(move |_| {
                        gate.borrow_mut().complete();
                        let now_hidden = tracker.borrow_mut().sample(dom::scroll_y());
                        hidden.set(now_hidden);
                    });
                    *frame.borrow_mut() = Some(pending);
                }))
            } else {
                hidden.set(false);
                None
            };
            move || drop(listener)
        });
    }
    *hidden
}

/// Suspend page scroll while `locked`, restoring the captured offset afterwards.
#[hook]
pub fn use_scroll_lock(locked: bool) {
    let lock = use_mut_ref(ScrollLock::default);
    use_effect_with(locked, move |&locked| {
        let offset = dom::scroll_y();
        if lock.borrow_mut().sync(locked, offset) == LockChange::Engage {
            dom::lock_body(offset);
        }
        move || {
            let change = lock.borrow_mut().sync(false, 0.0);
            if let LockChange::Release { restore_to } = change {
                dom::unlock_body(restore_to);
            }
        }
    });
}

/// Emit `on_escape` for Escape key presses anywhere in the document while `enabled`.
///
/// The listener is attached once per enable; the latest callback is read at key time.
#[hook]
pub fn use_escape(enabled: bool, on_escape: Callback<()>) {
    let latest = use_mut_ref(|| on_escape.clone());
    *latest.borrow_mut() = on_escape;
    use_effect_with(enabled, move |&enabled| {
        let listener = enabled.then(|| {
            EventListener::new(&dom::document(), "keydown", move |event| {
                let is_escape = event
                    .dyn_ref::<web_sys::KeyboardEvent>()
                    .is_some_and(|key| key.key() == "Escape");
                if is_escape {
                    let on_escape = latest.borrow().clone();
                    on_escape.emit(());
                }
            })
        });
        move || drop(listener)
    });
}

/// Reduced-motion and data-saver hints, read once after mount.
#[hook]
pub fn use_media_env() -> MediaEnv {
    let env = use_state_eq(MediaEnv::default);
    {
        let env = env.clone();
        use_effect_with((), move |_| {
            env.set(dom::media_env());
        });
    }
    *env
}

/// Unmount a closing overlay once its exit animation has run, then apply any
/// deferred scroll-to-top.
#[hook]
pub fn use_close_transition(overlay: UseReducerHandle<OverlayModel>) {
    let snapshot = (**overlay).clone();
    use_effect_with(snapshot, move |state| {
        let timer = state.leaving().is_some().then(|| {
            let scroll_after = state.has_pending();
            Timeout::new(OVERLAY_EXIT_MS, move || {
                overlay.dispatch(OverlayAction::FinishClose);
                if scroll_after {
                    dom::scroll_to(0.0, true);
                }
            })
        });
        move || drop(timer)
    });
}
