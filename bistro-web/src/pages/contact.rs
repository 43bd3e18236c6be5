use yew::prelude::*;

pub const PHONE_DISPLAY: &str = "(555) 014-2200";
pub const PHONE_HREF: &str = "tel:+15550142200";
pub const MESSAGE_URL: &str = "https://pf.kakao.com/_bistro";
pub const ADDRESS: &str = "128 Harbor Street, Suite 2";

const HOURS: [(&str, &str); 3] = [
    ("Monday – Thursday", "11:30 – 21:30"),
    ("Friday – Saturday", "11:30 – 23:00"),
    ("Sunday", "12:00 – 21:00"),
];

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    html! {
        <section class="page contact">
            <h1>{ "Visit us" }</h1>
            <address>
                <p>{ ADDRESS }</p>
                <p>
                    <a class="button" href={PHONE_HREF}>{ format!("Call {PHONE_DISPLAY}") }</a>
                </p>
                <p>
                    <a class="button" href={MESSAGE_URL} target="_blank" rel="noopener noreferrer">
                        { "Message us" }
                    </a>
                </p>
            </address>
            <h2>{ "Hours" }</h2>
            <dl class="contact__hours">
                { for HOURS.iter().map(|(days, hours)| html! {
                    <>
                        <dt>{ *days }</dt>
                        <dd>{ *hours }</dd>
                    </>
                }) }
            </dl>
        </section>
    }
}
