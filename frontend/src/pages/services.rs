use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::section::{CardGrid, RevealSection};
use crate::content::{Service, Theme, GUARANTEES, SERVICES};
use crate::Route;

#[derive(Properties, PartialEq)]
struct ServiceDetailProps {
    service: Service,
}

#[function_component(ServiceDetail)]
fn service_detail(props: &ServiceDetailProps) -> Html {
    let service = &props.service;
    html! {
        <article class="service-detail" id={service.id}>
            <div class="service-heading">
                <span class="card-icon">{service.icon}</span>
                <div>
                    <h3>{service.title}</h3>
                    <p>{service.description}</p>
                </div>
            </div>
            <ul class="card-bullets">
                { for service.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
            </ul>
            <div class="service-footer">
                <span class="price">{service.price}</span>
                <span class="delivery">{format!("Livraison : {}", service.delivery_time)}</span>
                <Link<Route> to={Route::Contact} classes="link-button">{"Demander un devis"}</Link<Route>>
            </div>
        </article>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="services-page">
            <section class="page-hero">
                <h1>{"Services "}<span class="accent">{"autonomes"}</span></h1>
                <p>{"Sites vitrine, e-commerce et applications web avec interface admin simple. Formation personnalisée incluse."}</p>
            </section>

            <RevealSection title="Choisissez votre formule">
                { for SERVICES.iter().map(|service| html! { <ServiceDetail service={*service} /> }) }
            </RevealSection>

            <RevealSection title="Inclus dans chaque projet" theme={Theme::Green}>
                <CardGrid cards={GUARANTEES.to_vec()} columns={4} />
            </RevealSection>

            <RevealSection
                title="Demander un devis"
                subtitle="Réponse sous 24h, devis détaillé sous 48h."
                theme={Theme::Sand}
            >
                <ContactForm />
            </RevealSection>
        </div>
    }
}
