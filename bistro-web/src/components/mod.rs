pub mod cart_summary;
pub mod category_picker;
pub mod fab;
pub mod fly_layer;
pub mod footer;
pub mod header;
pub mod hero_carousel;
pub mod lazy_image;
pub mod lightbox;
pub mod menu_card;
pub mod nav_link;
pub mod overlay_surface;
