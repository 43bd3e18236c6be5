use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/menu")]
    Menu,
    #[at("/promos")]
    Promos,
    #[at("/contact")]
    Contact,
    #[at("/cart")]
    Cart,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Entries shown in the header navigation, in order.
    pub const NAV: [Self; 4] = [Self::Home, Self::Menu, Self::Promos, Self::Contact];

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Menu => "Menu",
            Self::Promos => "Promotions",
            Self::Contact => "Contact",
            Self::Cart => "Your order",
            Self::NotFound => "Not found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn paths_round_trip() {
        for route in [Route::Home, Route::Menu, Route::Promos, Route::Contact, Route::Cart] {
            assert_eq!(Route::recognize(&route.to_path()), Some(route));
        }
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/reservations"), Some(Route::NotFound));
    }
}
