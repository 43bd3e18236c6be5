use anyhow::{Result, ensure};
use bistro_core::{
    CART_STORAGE_KEY, Cart, CartError, CartStorage, CartStore, Catalog, ClearConfirm,
    MemoryStorage, load_cart, round_money,
};
use rand::Rng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde_json::{Map, Value, json};

use crate::logic::TesterContent;

const STEPS: usize = 60;
const BOGUS_ID: &str = "not-on-the-menu";

fn pick_id<'a>(catalog: &'a Catalog, rng: &mut ChaCha8Rng) -> &'a str {
    if rng.gen_ratio(1, 12) {
        return BOGUS_ID;
    }
    catalog
        .items()
        .choose(rng)
        .map_or(BOGUS_ID, |item| item.id.as_str())
}

/// Quantities stay positive, market items never enter, totals and storage agree.
pub fn random_operations(content: &TesterContent, rng: &mut ChaCha8Rng) -> Result<()> {
    let catalog = &content.catalog;
    let mut store = CartStore::open(MemoryStorage::new(), catalog);

    for step in 0..STEPS {
        let id = pick_id(catalog, rng);
        let before = store.cart().quantity(id);
        match rng.gen_range(0..4) {
            0 | 1 => match store.add(catalog, id) {
                Ok(qty) => ensure!(qty == before + 1, "step {step}: add {id} gave {qty}"),
                Err(CartError::UnknownItem(_)) => {
                    ensure!(catalog.find(id).is_none(), "step {step}: {id} rejected as unknown");
                }
                Err(CartError::MarketPrice(_)) => {
                    ensure!(before == 0, "step {step}: market item {id} was in the cart");
                }
                Err(err) => anyhow::bail!("step {step}: unexpected {err}"),
            },
            2 => {
                let result = store.decrement(id);
                ensure!(
                    result.is_ok() == (before > 0),
                    "step {step}: decrement {id} from {before} gave {result:?}"
                );
            }
            _ => {
                let result = store.remove(id);
                ensure!(
                    result.is_ok() == (before > 0),
                    "step {step}: remove {id} from {before} gave {result:?}"
                );
                ensure!(store.cart().quantity(id) == 0, "step {step}: {id} survived remove");
            }
        }
        check_cart(catalog, store.cart(), step)?;
        check_persisted(catalog, &store, step)?;
    }
    Ok(())
}

fn check_cart(catalog: &Catalog, cart: &Cart, step: usize) -> Result<()> {
    let mut expected = 0.0;
    for (id, qty) in cart.entries() {
        ensure!(qty > 0, "step {step}: {id} has zero quantity");
        let item = catalog.find(id);
        ensure!(
            item.is_some_and(|item| item.is_orderable()),
            "step {step}: {id} is not orderable"
        );
        if let Some(amount) = item.and_then(|item| item.price.amount()) {
            expected += amount * f64::from(qty);
        }
    }
    let totals = cart.totals(catalog);
    ensure!(
        (totals.subtotal - round_money(expected)).abs() < 1e-9,
        "step {step}: subtotal {} != {}",
        totals.subtotal,
        round_money(expected)
    );
    ensure!(
        totals.item_count == cart.item_count(),
        "step {step}: item count mismatch"
    );
    Ok(())
}

fn check_persisted(catalog: &Catalog, store: &CartStore<MemoryStorage>, step: usize) -> Result<()> {
    let stored = store.storage().peek(CART_STORAGE_KEY);
    ensure!(
        stored.is_none() == store.cart().is_empty(),
        "step {step}: storage presence disagrees with cart"
    );
    let reloaded = load_cart(store.storage(), catalog);
    ensure!(
        &reloaded == store.cart(),
        "step {step}: reload gave {reloaded:?}, expected {:?}",
        store.cart()
    );
    Ok(())
}

/// Garbage in storage never panics and never yields an invalid cart.
pub fn corrupted_payloads(content: &TesterContent, rng: &mut ChaCha8Rng) -> Result<()> {
    let catalog = &content.catalog;
    let storage = MemoryStorage::new();

    for round in 0..20 {
        let payload = random_payload(catalog, rng);
        storage.write(CART_STORAGE_KEY, &payload)?;
        let store = CartStore::open(&storage, catalog);
        check_cart(catalog, store.cart(), round)?;
    }

    storage.set_offline(true);
    let store = CartStore::open(&storage, catalog);
    ensure!(store.cart().is_empty(), "offline storage produced a cart");
    Ok(())
}

fn random_payload(catalog: &Catalog, rng: &mut ChaCha8Rng) -> String {
    match rng.gen_range(0..4) {
        0 => String::from("{not json"),
        1 => json!([1, 2, 3]).to_string(),
        2 => String::new(),
        _ => {
            let mut map = Map::new();
            for _ in 0..rng.gen_range(1..6) {
                let id = pick_id(catalog, rng).to_string();
                let qty = match rng.gen_range(0..6) {
                    0 => json!(-3),
                    1 => json!(0),
                    2 => json!(2.7),
                    3 => json!("4"),
                    4 => Value::Null,
                    _ => json!(rng.gen_range(1..9)),
                };
                map.insert(id, qty);
            }
            Value::Object(map).to_string()
        }
    }
}

/// `confirm_clear` does nothing unless a request is pending; any edit cancels it.
pub fn two_step_clear(content: &TesterContent, rng: &mut ChaCha8Rng) -> Result<()> {
    let catalog = &content.catalog;
    let orderable: Vec<&str> = catalog
        .items()
        .iter()
        .filter(|item| item.is_orderable())
        .map(|item| item.id.as_str())
        .collect();
    let mut store = CartStore::open(MemoryStorage::new(), catalog);

    for id in orderable.choose_multiple(rng, 3) {
        store.add(catalog, id)?;
    }
    ensure!(!store.confirm_clear(), "clear confirmed without a request");
    ensure!(!store.cart().is_empty(), "cart emptied without confirmation");

    store.request_clear();
    ensure!(store.clear_state() == ClearConfirm::Pending, "request not pending");
    if rng.gen_bool(0.5) {
        store.cancel_clear();
    } else if let Some(id) = orderable.choose(rng) {
        store.add(catalog, id)?;
    }
    ensure!(store.clear_state() == ClearConfirm::Idle, "request survived an edit");
    ensure!(!store.confirm_clear(), "stale request confirmed");

    store.request_clear();
    ensure!(store.confirm_clear(), "confirmed request ignored");
    ensure!(store.cart().is_empty(), "cart not cleared");
    ensure!(
        store.storage().peek(CART_STORAGE_KEY).is_none(),
        "cleared cart left a stored payload"
    );
    Ok(())
}
