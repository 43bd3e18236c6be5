//! Bundled site content
//!
//! The catalog and slide lists are embedded at build time and parsed once.

use bistro_core::{Catalog, ContentError, ContentLoader, MenuItem, Slide, SlideDeck};
use once_cell::sync::Lazy;

const MENU_JSON: &str = include_str!("../static/assets/data/menu.json");
const SLIDES_JSON: &str = include_str!("../static/assets/data/slides.json");

/// Content loader over the embedded JSON assets.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebContentLoader;

#[derive(Debug, thiserror::Error)]
pub enum WebContentError {
    #[error(transparent)]
    Content(#[from] ContentError),
}

impl ContentLoader for WebContentLoader {
    type Error = WebContentError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        Ok(Catalog::from_json(MENU_JSON)?)
    }

    fn load_slides(&self) -> Result<SlideDeck, Self::Error> {
        Ok(SlideDeck::from_json(SLIDES_JSON)?)
    }
}

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    WebContentLoader.load_catalog().unwrap_or_else(|err| {
        log::error!("menu data unusable: {err}");
        Catalog::default()
    })
});

static SLIDES: Lazy<SlideDeck> = Lazy::new(|| {
    WebContentLoader.load_slides().unwrap_or_else(|err| {
        log::error!("slide data unusable: {err}");
        SlideDeck::default()
    })
});

#[must_use]
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Slides for `page`; an unknown page renders an empty (inert) carousel.
#[must_use]
pub fn slides(page: &str) -> &'static [Slide] {
    SLIDES.page(page).unwrap_or_else(|err| {
        log::warn!("{err}");
        &[]
    })
}

/// Promoted items across the whole menu, in catalog order.
#[must_use]
pub fn featured(limit: usize) -> Vec<MenuItem> {
    catalog()
        .items()
        .iter()
        .filter(|item| item.is_promoted())
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        assert!(WebContentLoader.load_catalog().is_ok());
        assert!(!catalog().is_empty());
        assert!(!slides("home").is_empty());
        assert!(slides("nowhere").is_empty());
    }

    #[test]
    fn featured_items_are_promoted() {
        let items = featured(3);
        assert!(!items.is_empty());
        assert!(items.len() <= 3);
        assert!(items.iter().all(MenuItem::is_promoted));
    }
}
