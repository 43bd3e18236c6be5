use crate::components::nav_link::NavLink;
use crate::pages::contact::{MESSAGE_URL, PHONE_DISPLAY, PHONE_HREF};
use crate::router::Route;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <p class="footer-brand">{ "Bistro · Korean kitchen & grill" }</p>
                <p>
                    <a href={PHONE_HREF}>{ PHONE_DISPLAY }</a>
                    { " · " }
                    <a href={MESSAGE_URL} target="_blank" rel="noopener noreferrer">{ "Message us" }</a>
                </p>
                <nav aria-label="Footer">
                    <NavLink to={Route::Menu}>{ "Menu" }</NavLink>
                    { " · " }
                    <NavLink to={Route::Promos}>{ "Promotions" }</NavLink>
                    { " · " }
                    <NavLink to={Route::Contact}>{ "Contact" }</NavLink>
                </nav>
            </div>
        </footer>
    }
}
