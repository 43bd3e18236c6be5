//! Category filtering and display ordering
use crate::catalog::{Catalog, Category, CategoryFilter, MenuItem};
use std::collections::BTreeMap;

/// Items visible under `filter`, promoted items first, catalog order otherwise.
///
/// Pure and idempotent: the same inputs always produce the same order.
#[must_use]
pub fn filter_sort(items: &[MenuItem], filter: CategoryFilter) -> Vec<&MenuItem> {
    let mut view: Vec<(usize, &MenuItem)> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| filter.matches(item.category))
        .collect();
    view.sort_by_key(|(index, item)| (std::cmp::Reverse(promotion_score(item)), *index));
    view.into_iter().map(|(_, item)| item).collect()
}

/// Convenience wrapper over a whole [`Catalog`].
#[must_use]
pub fn catalog_view(catalog: &Catalog, filter: CategoryFilter) -> Vec<&MenuItem> {
    filter_sort(catalog.items(), filter)
}

fn promotion_score(item: &MenuItem) -> u8 {
    u8::from(item.is_promoted())
}

/// Item count per category, for picker badges. Empty categories are omitted.
#[must_use]
pub fn category_counts(items: &[MenuItem]) -> BTreeMap<Category, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(item.category).or_insert(0) += 1;
    }
    counts
}

/// Count for one picker entry; `All` counts the whole catalog.
#[must_use]
pub fn count_for(items: &[MenuItem], filter: CategoryFilter) -> usize {
    items
        .iter()
        .filter(|item| filter.matches(item.category))
        .count()
}
