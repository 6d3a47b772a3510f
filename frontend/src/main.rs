use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod analytics;
mod config;
mod consent;
mod content;
mod crash;
mod reveal;
mod seo;
mod forms {
    pub mod hook;
    pub mod machine;
    pub mod schema;
    pub mod transport;
    pub mod validation;
}
mod components {
    pub mod availability;
    pub mod contact_form;
    pub mod cookie_consent;
    pub mod faq;
    pub mod footer;
    pub mod header;
    pub mod newsletter;
    pub mod process_timeline;
    pub mod section;
}
mod pages {
    pub mod blog;
    pub mod contact;
    pub mod home;
    pub mod portfolio;
    pub mod process;
    pub mod services;
}

use analytics::{GtagAnalytics, Telemetry};
use components::{cookie_consent::CookieConsent, footer::Footer, header::Header};
use pages::{
    blog::Blog, contact::Contact, home::Home, portfolio::Portfolio, process::Process,
    services::Services,
};
use seo::SeoSync;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/portfolio")]
    Portfolio,
    #[at("/processus")]
    Process,
    #[at("/blog")]
    Blog,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        }
        Route::Process => {
            info!("Rendering Process page");
            html! { <Process /> }
        }
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        // Unknown paths fall back to the home page.
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let telemetry = use_state(|| Telemetry::new(GtagAnalytics));

    html! {
        <ContextProvider<Telemetry> context={(*telemetry).clone()}>
            <BrowserRouter>
                <SeoSync />
                <Header />
                <main class="site-main">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
                <CookieConsent />
            </BrowserRouter>
        </ContextProvider<Telemetry>>
    }
}

fn main() {
    // Panic hook first so a failed render still leaves a usable page.
    crash::install();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_match_site_paths() {
        assert_eq!(Route::Process.to_path(), "/processus");
        assert_eq!(Route::Contact.to_path(), "/contact");
        assert!(matches!(Route::recognize("/services"), Some(Route::Services)));
    }
}
