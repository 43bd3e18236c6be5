use crate::app::models::{CartModel, FlightModel, OverlayModel};
use crate::hooks::use_media_env;
use bistro_core::{MediaEnv, PreloadCache};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Process-wide "already requested" image set, shared through context.
#[derive(Clone, Debug, Default)]
pub struct SharedPreload(Rc<RefCell<PreloadCache>>);

impl SharedPreload {
    /// Mark `url` as requested. Returns `true` the first time only.
    #[must_use]
    pub fn claim(&self, url: &str) -> bool {
        self.0.borrow_mut().claim(url)
    }

    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.0.borrow().contains(url)
    }
}

impl PartialEq for SharedPreload {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub cart: UseReducerHandle<CartModel>,
    pub overlay: UseReducerHandle<OverlayModel>,
    pub flights: UseReducerHandle<FlightModel>,
    pub menu_open: UseStateHandle<bool>,
    pub media_env: MediaEnv,
    pub preload: SharedPreload,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        cart: use_reducer(CartModel::open),
        overlay: use_reducer(OverlayModel::default),
        flights: use_reducer(FlightModel::default),
        menu_open: use_state_eq(|| false),
        media_env: use_media_env(),
        preload: (*use_state(SharedPreload::default)).clone(),
    }
}

impl AppState {
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart.cart().item_count()
    }
}

#[cfg(test)]
mod tests {
    use super::SharedPreload;

    #[test]
    fn shared_preload_compares_by_identity() {
        let a = SharedPreload::default();
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, SharedPreload::default());
        assert!(a.claim("static/img/hero/grill.webp"));
        assert!(!b.claim("static/img/hero/grill.webp"));
        assert!(b.contains("static/img/hero/grill.webp"));
    }
}
