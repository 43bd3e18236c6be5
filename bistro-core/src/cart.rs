//! Shopping cart, its persistence, and derived totals
use crate::catalog::{Catalog, MenuItem};
use crate::money::round_money;
use serde::Serialize;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Fixed `localStorage` key holding the serialised quantity map.
pub const CART_STORAGE_KEY: &str = "bistro.cart";

/// Why a cart mutation was rejected. Callers treat these as silent no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("unknown menu item `{0}`")]
    UnknownItem(String),
    #[error("`{0}` is sold at market price and cannot be ordered")]
    MarketPrice(String),
    #[error("`{0}` is not in the cart")]
    NotInCart(String),
}

/// Map from item id to a strictly positive quantity.
///
/// Serialise-only: persisted payloads come back through [`Cart::sanitize`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    entries: BTreeMap<String, u32>,
}

/// One cart entry joined with its catalog item.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    pub item: &'a MenuItem,
    pub quantity: u32,
    /// `None` for market-price items.
    pub line_total: Option<f64>,
}

/// Derived totals over the cart.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartTotals {
    /// Sum of fixed-price lines, rounded to cents.
    pub subtotal: f64,
    pub item_count: u32,
    /// Some entries had no fixed price and were left out of `subtotal`.
    pub incomplete: bool,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `id`.
    ///
    /// # Errors
    ///
    /// Rejects ids missing from the catalog and market-price items; the cart is unchanged.
    pub fn increment(&mut self, catalog: &Catalog, id: &str) -> Result<u32, CartError> {
        let item = catalog
            .find(id)
            .ok_or_else(|| CartError::UnknownItem(id.to_string()))?;
        if !item.is_orderable() {
            return Err(CartError::MarketPrice(id.to_string()));
        }
        let qty = self.entries.entry(item.id.clone()).or_insert(0);
        *qty = qty.saturating_add(1);
        Ok(*qty)
    }

    /// Same as [`Cart::increment`]; the "add to cart" entry point.
    ///
    /// # Errors
    ///
    /// See [`Cart::increment`].
    pub fn add(&mut self, catalog: &Catalog, id: &str) -> Result<u32, CartError> {
        self.increment(catalog, id)
    }

    /// Remove one unit of `id`; the entry disappears when it reaches zero.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotInCart`] if there is nothing to remove.
    pub fn decrement(&mut self, id: &str) -> Result<u32, CartError> {
        let Some(qty) = self.entries.get_mut(id) else {
            return Err(CartError::NotInCart(id.to_string()));
        };
        if *qty <= 1 {
            self.entries.remove(id);
            return Ok(0);
        }
        *qty -= 1;
        Ok(*qty)
    }

    /// Drop every unit of `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotInCart`] if `id` is absent.
    pub fn remove(&mut self, id: &str) -> Result<(), CartError> {
        self.entries
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CartError::NotInCart(id.to_string()))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn quantity(&self, id: &str) -> u32 {
        self.entries.get(id).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Total units across all entries.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.entries
            .values()
            .fold(0_u32, |acc, qty| acc.saturating_add(*qty))
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(id, qty)| (id.as_str(), *qty))
    }

    /// Entries joined with the catalog, in catalog order. Unknown ids are skipped.
    #[must_use]
    pub fn lines<'a>(&self, catalog: &'a Catalog) -> Vec<CartLine<'a>> {
        catalog
            .items()
            .iter()
            .filter_map(|item| {
                let quantity = self.quantity(&item.id);
                (quantity > 0).then(|| CartLine {
                    item,
                    quantity,
                    line_total: item
                        .price
                        .amount()
                        .map(|unit| round_money(unit * f64::from(quantity))),
                })
            })
            .collect()
    }

    #[must_use]
    pub fn totals(&self, catalog: &Catalog) -> CartTotals {
        let mut sum = 0.0;
        let mut incomplete = false;
        for (id, qty) in &self.entries {
            match catalog.find(id).and_then(|item| item.price.amount()) {
                Some(unit) => sum += unit * f64::from(*qty),
                None => incomplete = true,
            }
        }
        CartTotals {
            subtotal: round_money(sum),
            item_count: self.item_count(),
            incomplete,
        }
    }

    /// Rebuild a cart from persisted JSON, keeping only entries that are still valid.
    ///
    /// Drops unknown ids, market-price items, and quantities that are not positive
    /// finite numbers; floors fractional quantities. Malformed input yields an empty cart.
    #[must_use]
    pub fn sanitize(json: &str, catalog: &Catalog) -> Self {
        let Ok(Value::Object(map)) = serde_json::from_str::<Value>(json) else {
            log::debug!("discarding unreadable cart payload");
            return Self::new();
        };
        let mut entries = BTreeMap::new();
        for (id, raw_qty) in map {
            let Some(item) = catalog.find(&id) else {
                log::debug!("dropping unknown cart item {id}");
                continue;
            };
            if !item.is_orderable() {
                log::debug!("dropping market-price cart item {id}");
                continue;
            }
            if let Some(qty) = parse_quantity(&raw_qty) {
                entries.insert(id, qty);
            }
        }
        Self { entries }
    }

    /// # Errors
    ///
    /// Propagates serialisation failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_quantity(raw: &Value) -> Option<u32> {
    let value = match raw {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !value.is_finite() || value <= 0.0 {
        return None;
    }
    let floored = value.floor();
    if floored < 1.0 {
        return None;
    }
    Some(floored.min(f64::from(u32::MAX)) as u32)
}

/// Durable key-value string store.
pub trait CartStorage {
    type Error: std::error::Error + 'static;

    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// # Errors
    ///
    /// Returns an error if the store rejects the write (unavailable, quota).
    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// # Errors
    ///
    /// Returns an error if the store cannot be modified.
    fn remove(&self, key: &str) -> Result<(), Self::Error>;
}

impl<T: CartStorage + ?Sized> CartStorage for &T {
    type Error = T::Error;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        (**self).remove(key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// In-process storage used by tests and the tester.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
    offline: Cell<bool>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that fails every operation.
    #[must_use]
    pub fn unavailable() -> Self {
        let storage = Self::default();
        storage.offline.set(true);
        storage
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    /// Raw stored value, bypassing the offline flag.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.offline.get() {
            Err(StorageError::Unavailable(String::from("memory store offline")))
        } else {
            Ok(())
        }
    }
}

impl CartStorage for MemoryStorage {
    type Error = StorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        self.check()?;
        Ok(self.values.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.check()?;
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        self.check()?;
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

/// Load and sanitise the persisted cart. Any storage failure yields an empty cart.
pub fn load_cart<S: CartStorage>(storage: &S, catalog: &Catalog) -> Cart {
    match storage.read(CART_STORAGE_KEY) {
        Ok(Some(json)) => Cart::sanitize(&json, catalog),
        Ok(None) => Cart::new(),
        Err(err) => {
            log::warn!("cart storage unreadable, starting empty: {err}");
            Cart::new()
        }
    }
}

/// Mirror `cart` into storage. Failures are logged and otherwise ignored.
pub fn save_cart<S: CartStorage>(storage: &S, cart: &Cart) {
    let result = if cart.is_empty() {
        storage.remove(CART_STORAGE_KEY)
    } else {
        match cart.to_json() {
            Ok(json) => storage.write(CART_STORAGE_KEY, &json),
            Err(err) => {
                log::warn!("cart serialisation failed: {err}");
                return;
            }
        }
    };
    if let Err(err) = result {
        log::warn!("cart not persisted: {err}");
    }
}

/// Two-step confirmation for the destructive clear action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearConfirm {
    #[default]
    Idle,
    Pending,
}

/// A cart mirrored to durable storage on every change.
#[derive(Debug, Clone, PartialEq)]
pub struct CartStore<S: CartStorage> {
    cart: Cart,
    storage: S,
    clear: ClearConfirm,
}

impl<S: CartStorage> CartStore<S> {
    /// Rehydrate from `storage`, falling back to an empty cart.
    pub fn open(storage: S, catalog: &Catalog) -> Self {
        let cart = load_cart(&storage, catalog);
        Self::with_cart(storage, cart)
    }

    /// Wrap an already-loaded cart.
    pub const fn with_cart(storage: S, cart: Cart) -> Self {
        Self {
            cart,
            storage,
            clear: ClearConfirm::Idle,
        }
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn into_cart(self) -> Cart {
        self.cart
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub const fn clear_state(&self) -> ClearConfirm {
        self.clear
    }

    /// # Errors
    ///
    /// See [`Cart::increment`]. Nothing is persisted on rejection.
    pub fn add(&mut self, catalog: &Catalog, id: &str) -> Result<u32, CartError> {
        self.increment(catalog, id)
    }

    /// # Errors
    ///
    /// See [`Cart::increment`]. Nothing is persisted on rejection.
    pub fn increment(&mut self, catalog: &Catalog, id: &str) -> Result<u32, CartError> {
        let qty = self.cart.increment(catalog, id)?;
        self.clear = ClearConfirm::Idle;
        self.persist();
        Ok(qty)
    }

    /// # Errors
    ///
    /// See [`Cart::decrement`].
    pub fn decrement(&mut self, id: &str) -> Result<u32, CartError> {
        let qty = self.cart.decrement(id)?;
        self.clear = ClearConfirm::Idle;
        self.persist();
        Ok(qty)
    }

    /// # Errors
    ///
    /// See [`Cart::remove`].
    pub fn remove(&mut self, id: &str) -> Result<(), CartError> {
        self.cart.remove(id)?;
        self.clear = ClearConfirm::Idle;
        self.persist();
        Ok(())
    }

    /// First step of clearing; nothing changes until [`CartStore::confirm_clear`].
    pub fn request_clear(&mut self) {
        if !self.cart.is_empty() {
            self.clear = ClearConfirm::Pending;
        }
    }

    pub fn cancel_clear(&mut self) {
        self.clear = ClearConfirm::Idle;
    }

    /// Clear the cart if a request is pending. Returns whether anything happened.
    pub fn confirm_clear(&mut self) -> bool {
        if self.clear != ClearConfirm::Pending {
            return false;
        }
        self.clear = ClearConfirm::Idle;
        self.cart.clear();
        self.persist();
        true
    }

    fn persist(&self) {
        save_cart(&self.storage, &self.cart);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MENU: &str = r#"{"items":[
        {"id":"stew-1","name":"Beef Stew","category":"soups","image":{"src":"/img/stew.webp"},"price":12.5},
        {"id":"beef-bbq-1","name":"BBQ Platter","category":"grill","image":{"src":"/img/bbq.webp"},"price":"market"},
        {"id":"tea-1","name":"Iced Tea","category":"drinks","image":{"src":"/img/tea.webp"},"price":2.25}
    ]}"#;

    fn catalog() -> Catalog {
        Catalog::from_json(MENU).unwrap()
    }

    #[test]
    fn increment_twice_sums_quantity_and_total() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.increment(&catalog, "stew-1").unwrap();
        assert_eq!(cart.increment(&catalog, "stew-1"), Ok(2));
        assert_eq!(cart.quantity("stew-1"), 2);
        let totals = cart.totals(&catalog);
        assert!((totals.subtotal - 25.0).abs() < f64::EPSILON);
        assert_eq!(totals.item_count, 2);
        assert!(!totals.incomplete);
    }

    #[test]
    fn market_price_and_unknown_items_are_rejected() {
        let catalog = catalog();
        let mut cart = Cart::new();
        assert_eq!(
            cart.add(&catalog, "beef-bbq-1"),
            Err(CartError::MarketPrice(String::from("beef-bbq-1")))
        );
        assert_eq!(
            cart.add(&catalog, "ghost"),
            Err(CartError::UnknownItem(String::from("ghost")))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn decrement_to_zero_removes_entry() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "stew-1").unwrap();
        assert_eq!(cart.decrement("stew-1"), Ok(0));
        assert!(cart.is_empty());
        assert_eq!(
            cart.decrement("stew-1"),
            Err(CartError::NotInCart(String::from("stew-1")))
        );
    }

    #[test]
    fn lines_follow_catalog_order() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "tea-1").unwrap();
        cart.add(&catalog, "stew-1").unwrap();
        cart.add(&catalog, "tea-1").unwrap();
        let lines = cart.lines(&catalog);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].item.id, "stew-1");
        assert_eq!(lines[1].quantity, 2);
        assert_eq!(lines[1].line_total, Some(4.5));
    }

    #[test]
    fn totals_flag_entries_without_fixed_price() {
        let catalog = catalog();
        let cart = Cart::sanitize(r#"{"stew-1":1}"#, &catalog);
        let mut with_stale = cart.clone();
        with_stale
            .entries
            .insert(String::from("removed-dish"), 3);
        let totals = with_stale.totals(&catalog);
        assert!(totals.incomplete);
        assert!((totals.subtotal - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn sanitize_drops_invalid_entries_and_floors() {
        let catalog = catalog();
        let cart = Cart::sanitize(
            r#"{"stew-1":2.9,"tea-1":"3","beef-bbq-1":4,"ghost":1,"x":-1}"#,
            &catalog,
        );
        assert_eq!(cart.quantity("stew-1"), 2);
        assert_eq!(cart.quantity("tea-1"), 3);
        assert_eq!(cart.quantity("beef-bbq-1"), 0);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn sanitize_drops_zero_negative_and_fractional_below_one() {
        let catalog = catalog();
        let cart = Cart::sanitize(r#"{"stew-1":0.5,"tea-1":0}"#, &catalog);
        assert!(cart.is_empty());
        let cart = Cart::sanitize(r#"{"stew-1":null,"tea-1":[1]}"#, &catalog);
        assert!(cart.is_empty());
    }

    #[test]
    fn sanitize_tolerates_garbage() {
        let catalog = catalog();
        assert!(Cart::sanitize("not json", &catalog).is_empty());
        assert!(Cart::sanitize("[1,2,3]", &catalog).is_empty());
    }

    #[test]
    fn store_persists_every_mutation() {
        let catalog = catalog();
        let mut store = CartStore::open(MemoryStorage::new(), &catalog);
        store.add(&catalog, "stew-1").unwrap();
        assert_eq!(
            store.storage().peek(CART_STORAGE_KEY).as_deref(),
            Some(r#"{"stew-1":1}"#)
        );
        store.decrement("stew-1").unwrap();
        assert_eq!(store.storage().peek(CART_STORAGE_KEY), None);
    }

    #[test]
    fn store_rehydrates_from_storage() {
        let catalog = catalog();
        let storage = MemoryStorage::new();
        storage
            .write(CART_STORAGE_KEY, r#"{"tea-1":2,"beef-bbq-1":1}"#)
            .unwrap();
        let store = CartStore::open(storage, &catalog);
        assert_eq!(store.cart().quantity("tea-1"), 2);
        assert_eq!(store.cart().len(), 1);
    }

    #[test]
    fn unavailable_storage_falls_back_to_empty_and_keeps_working() {
        let catalog = catalog();
        let mut store = CartStore::open(MemoryStorage::unavailable(), &catalog);
        assert!(store.cart().is_empty());
        assert_eq!(store.add(&catalog, "stew-1"), Ok(1));
    }

    #[test]
    fn clear_requires_confirmation() {
        let catalog = catalog();
        let mut store = CartStore::open(MemoryStorage::new(), &catalog);
        store.add(&catalog, "stew-1").unwrap();
        assert!(!store.confirm_clear());
        assert_eq!(store.cart().quantity("stew-1"), 1);

        store.request_clear();
        assert_eq!(store.clear_state(), ClearConfirm::Pending);
        store.cancel_clear();
        assert!(!store.confirm_clear());

        store.request_clear();
        assert!(store.confirm_clear());
        assert!(store.cart().is_empty());
        assert_eq!(store.storage().peek(CART_STORAGE_KEY), None);
    }

    #[test]
    fn other_mutations_cancel_pending_clear() {
        let catalog = catalog();
        let mut store = CartStore::open(MemoryStorage::new(), &catalog);
        store.add(&catalog, "stew-1").unwrap();
        store.request_clear();
        store.add(&catalog, "tea-1").unwrap();
        assert_eq!(store.clear_state(), ClearConfirm::Idle);
        assert!(!store.confirm_clear());
    }

    #[test]
    fn rejected_mutations_keep_pending_clear() {
        let catalog = catalog();
        let mut store = CartStore::open(MemoryStorage::new(), &catalog);
        store.add(&catalog, "stew-1").unwrap();
        store.request_clear();
        assert!(store.add(&catalog, "beef-bbq-1").is_err());
        assert!(store.decrement("tea-1").is_err());
        assert!(store.remove("ghost").is_err());
        assert_eq!(store.clear_state(), ClearConfirm::Pending);
        assert!(store.confirm_clear());
    }

    #[test]
    fn stale_payload_with_market_and_zero_entries_is_sanitized() {
        let catalog = catalog();
        let cart = Cart::sanitize(r#"{"beef-bbq-1":3,"stew-1":0,"ghost":1,"tea-1":2}"#, &catalog);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity("tea-1"), 2);
        let totals = cart.totals(&catalog);
        assert_eq!(totals.item_count, 2);
        assert!(!totals.incomplete);
        assert_eq!(Cart::sanitize(&cart.to_json().unwrap(), &catalog), cart);
    }

    #[test]
    fn request_clear_on_empty_cart_stays_idle() {
        let catalog = catalog();
        let mut store = CartStore::open(MemoryStorage::new(), &catalog);
        store.request_clear();
        assert_eq!(store.clear_state(), ClearConfirm::Idle);
    }
}
