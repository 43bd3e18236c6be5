//! Bistro interaction core
//!
//! Platform-agnostic state for the Bistro restaurant site: the menu catalog and
//! its category views, the persisted cart, carousel control, scroll-driven
//! chrome visibility and overlay handling. Nothing here touches the browser;
//! the web crate binds these state machines to DOM events and timers.

pub mod carousel;
pub mod cart;
pub mod catalog;
pub mod display;
pub mod flight;
pub mod menu;
pub mod money;
pub mod overlay;
pub mod preload;
pub mod scroll;
pub mod slide;

// Re-export commonly used types
pub use carousel::{
    Carousel, MediaEnv, Presentation, SlideKind, SoundToast, Swipe, SwipeTracker, TapAction,
    VideoState, presentation,
};
pub use cart::{
    CART_STORAGE_KEY, Cart, CartError, CartLine, CartStorage, CartStore, CartTotals,
    ClearConfirm, MemoryStorage, StorageError, load_cart, save_cart,
};
pub use catalog::{Catalog, Category, CategoryFilter, ContentError, ImageRef, MenuItem, Price, Tag};
pub use display::{DisplayMode, encode_query, nav_query, query_param};
pub use flight::{Flight, FlightDeck, Point};
pub use menu::{catalog_view, category_counts, count_for, filter_sort};
pub use money::{format_amount, format_price, round_money};
pub use overlay::{
    AfterClose, LockChange, Overlay, OverlayState, ScrollLock, TabMove, trap_tab,
};
pub use preload::PreloadCache;
pub use scroll::{FrameGate, ScrollThresholds, ScrollVisibility};
pub use slide::{Cta, CtaTarget, Media, Slide, SlideDeck};

/// Source of the bundled, read-only site content.
/// Platform-specific implementations should provide this
pub trait ContentLoader {
    type Error: std::error::Error + 'static;

    /// Load the menu catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or is invalid.
    fn load_catalog(&self) -> Result<Catalog, Self::Error>;

    /// Load the slide deck for every page
    ///
    /// # Errors
    ///
    /// Returns an error if the slide data cannot be loaded or parsed.
    fn load_slides(&self) -> Result<SlideDeck, Self::Error>;
}

/// Loader over in-memory JSON strings, used by tests and tooling.
#[derive(Debug, Clone, Copy)]
pub struct JsonContent<'a> {
    pub menu: &'a str,
    pub slides: &'a str,
}

impl ContentLoader for JsonContent<'_> {
    type Error = ContentError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        Catalog::from_json(self.menu)
    }

    fn load_slides(&self) -> Result<SlideDeck, Self::Error> {
        SlideDeck::from_json(self.slides)
    }
}
