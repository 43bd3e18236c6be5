pub mod cart;
pub mod contact;
pub mod home;
pub mod menu;
pub mod not_found;
pub mod promos;
