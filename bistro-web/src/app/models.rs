//! Reducer-backed app state.
//!
//! Each model wraps a core state machine so timers and listeners always
//! dispatch against the latest value instead of a captured snapshot.

use crate::content;
use crate::storage::LocalCartStorage;
use bistro_core::{Cart, CartError, CartStore, FlightDeck, Overlay, OverlayState, Point};
use std::ops::Deref;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct CartModel(CartStore<LocalCartStorage>);

impl CartModel {
    /// Rehydrate from `localStorage` against the bundled catalog.
    #[must_use]
    pub fn open() -> Self {
        Self(CartStore::open(LocalCartStorage, content::catalog()))
    }

    #[must_use]
    pub const fn with_cart(cart: Cart) -> Self {
        Self(CartStore::with_cart(LocalCartStorage, cart))
    }
}

impl Deref for CartModel {
    type Target = CartStore<LocalCartStorage>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    Add(AttrValue),
    Decrement(AttrValue),
    Remove(AttrValue),
    RequestClear,
    CancelClear,
    ConfirmClear,
}

impl Reducible for CartModel {
    type Action = CartAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let catalog = content::catalog();
        let mut store = self.0.clone();
        let outcome: Result<(), CartError> = match &action {
            CartAction::Add(id) => store.add(catalog, id).map(drop),
            CartAction::Decrement(id) => store.decrement(id).map(drop),
            CartAction::Remove(id) => store.remove(id),
            CartAction::RequestClear => {
                store.request_clear();
                Ok(())
            }
            CartAction::CancelClear => {
                store.cancel_clear();
                Ok(())
            }
            CartAction::ConfirmClear => {
                store.confirm_clear();
                Ok(())
            }
        };
        match outcome {
            Ok(()) if store != self.0 => Rc::new(Self(store)),
            Ok(()) => self,
            Err(err) => {
                log::debug!("cart action {action:?} ignored: {err}");
                self
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverlayModel(OverlayState);

impl Deref for OverlayModel {
    type Target = OverlayState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayAction {
    Open(Overlay),
    Toggle(Overlay),
    Close,
    Escape,
    CategorySelected,
    FinishClose,
}

impl Reducible for OverlayModel {
    type Action = OverlayAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        match action {
            OverlayAction::Open(overlay) => state.open(overlay),
            OverlayAction::Toggle(overlay) => state.toggle(overlay),
            OverlayAction::Close => {
                state.close();
            }
            OverlayAction::Escape => {
                state.escape();
            }
            OverlayAction::CategorySelected => {
                state.category_selected();
            }
            OverlayAction::FinishClose => {
                // Deferred work is read by the transition hook before dispatch.
                let _ = state.finish_close();
            }
        }
        if state == self.0 {
            self
        } else {
            Rc::new(Self(state))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlightModel(FlightDeck);

impl Deref for FlightModel {
    type Target = FlightDeck;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FlightAction {
    Launch {
        image: String,
        from: Point,
        to: Point,
        now_ms: f64,
    },
    Land(u64),
}

impl Reducible for FlightModel {
    type Action = FlightAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut deck = self.0.clone();
        match action {
            FlightAction::Launch {
                image,
                from,
                to,
                now_ms,
            } => {
                deck.launch(image, from, to, now_ms);
            }
            FlightAction::Land(id) => {
                if !deck.land(id) {
                    return self;
                }
            }
        }
        Rc::new(Self(deck))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart_with(id: &str, qty: u32) -> Cart {
        let mut cart = Cart::new();
        for _ in 0..qty {
            cart.increment(content::catalog(), id).expect("orderable item");
        }
        cart
    }

    #[test]
    fn cart_actions_apply_and_rejections_keep_identity() {
        let model = Rc::new(CartModel::with_cart(Cart::new()));
        let added = model.clone().reduce(CartAction::Add("stew-1".into()));
        assert_eq!(added.cart().quantity("stew-1"), 1);

        let rejected = added.clone().reduce(CartAction::Add("beef-bbq-1".into()));
        assert!(Rc::ptr_eq(&added, &rejected));

        let removed = rejected.reduce(CartAction::Decrement("stew-1".into()));
        assert!(removed.cart().is_empty());
    }

    #[test]
    fn clearing_takes_two_steps() {
        let model = Rc::new(CartModel::with_cart(cart_with("stew-1", 2)));
        let confirmed_early = model.clone().reduce(CartAction::ConfirmClear);
        assert!(Rc::ptr_eq(&model, &confirmed_early));

        let cleared = model
            .reduce(CartAction::RequestClear)
            .reduce(CartAction::ConfirmClear);
        assert!(cleared.cart().is_empty());
    }

    #[test]
    fn overlay_category_selection_defers_scroll() {
        let model = Rc::new(OverlayModel::default());
        let open = model.reduce(OverlayAction::Open(Overlay::CategorySheet));
        let picked = open.reduce(OverlayAction::CategorySelected);
        assert_eq!(picked.active(), &Overlay::None);
        assert!(picked.has_pending());
        let finished = picked.reduce(OverlayAction::FinishClose);
        assert!(!finished.has_pending());
        assert!(finished.leaving().is_none());
    }

    #[test]
    fn flights_launch_and_land() {
        let model = Rc::new(FlightModel::default());
        let flying = model.reduce(FlightAction::Launch {
            image: "static/img/menu/stew.webp".to_string(),
            from: Point::new(0.0, 0.0),
            to: Point::new(100.0, 10.0),
            now_ms: 0.0,
        });
        let id = flying.flights()[0].id;
        let unknown = flying.clone().reduce(FlightAction::Land(id + 1));
        assert!(Rc::ptr_eq(&flying, &unknown));
        assert!(flying.reduce(FlightAction::Land(id)).is_empty());
    }
}
