use yew::prelude::*;
use yew_router::prelude::*;

use crate::analytics::use_telemetry;
use crate::config::{CONTACT_EMAIL, WHATSAPP_URL};
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let telemetry = use_telemetry();
    let on_whatsapp = {
        let telemetry = telemetry.clone();
        Callback::from(move |_: MouseEvent| telemetry.whatsapp_click())
    };
    let on_email = Callback::from(move |_: MouseEvent| telemetry.email_click());

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3>{"Victor Mirault"}</h3>
                    <p>{"Sites web autonomes avec interface admin simple et formation incluse."}</p>
                </div>
                <div>
                    <h4>{"Navigation"}</h4>
                    <ul>
                        <li><Link<Route> to={Route::Services}>{"Services"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Portfolio}>{"Portfolio"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Process}>{"Processus"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Blog}>{"Blog"}</Link<Route>></li>
                    </ul>
                </div>
                <div>
                    <h4>{"Contact"}</h4>
                    <ul>
                        <li><a href={WHATSAPP_URL} target="_blank" rel="noopener" onclick={on_whatsapp}>{"WhatsApp"}</a></li>
                        <li><a href={format!("mailto:{}", CONTACT_EMAIL)} onclick={on_email}>{CONTACT_EMAIL}</a></li>
                    </ul>
                </div>
            </div>
            <p class="footer-note">{"© Victor Mirault · Formation incluse · Support illimité"}</p>
        </footer>
    }
}
