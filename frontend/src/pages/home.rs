use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::availability::AvailabilitySection;
use crate::components::process_timeline::ProcessTimeline;
use crate::components::section::{CardGrid, RevealSection};
use crate::content::{Card, Theme, GUARANTEES, PROJECTS, SERVICES};
use crate::reveal::{reveal_class, use_reveal, RevealOptions};
use crate::Route;

const HERO_FEATURES: &[(&str, &str)] = &[
    ("⚡", "Livraison express"),
    ("🎓", "Formation incluse"),
    ("🌍", "Toute la France"),
];

#[function_component(Hero)]
fn hero() -> Html {
    // The hero is above the fold; threshold 0 reveals it on first paint.
    let (node, visible) = use_reveal(RevealOptions {
        threshold: 0.0,
        ..RevealOptions::default()
    });

    let scroll_to_process = Callback::from(|_: MouseEvent| {
        if let Some(section) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("process-timeline"))
        {
            section.scroll_into_view();
        }
    });

    html! {
        <section ref={node} class={classes!("hero", reveal_class(visible))}>
            <div class="hero-inner">
                <h1>{"Victor Mirault"}</h1>
                <p class="hero-subtitle">
                    {"Des sites web autonomes : interface admin simple + formation incluse = vous gérez tout, sans moi."}
                </p>
                <div class="hero-features">
                    { for HERO_FEATURES.iter().map(|(icon, label)| html! {
                        <span class="hero-feature"><span>{*icon}</span>{*label}</span>
                    }) }
                </div>
                <button class="hero-cta" onclick={scroll_to_process}>
                    {"Découvrir ma méthode →"}
                </button>
                <p class="hero-availability">{"🟢 Disponible pour de nouveaux projets ce mois-ci"}</p>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let service_cards: Vec<Card> = SERVICES.iter().map(|service| service.card()).collect();

    html! {
        <div class="home-page">
            <Hero />

            <RevealSection
                title="Ce que je construis pour vous"
                subtitle="Trois formules, une même promesse : votre autonomie complète."
            >
                <CardGrid cards={service_cards} />
                <div class="section-actions">
                    <Link<Route> to={Route::Services} classes="link-button">{"Voir les services"}</Link<Route>>
                </div>
            </RevealSection>

            <ProcessTimeline id="process-timeline" />

            <AvailabilitySection />

            <RevealSection title="Ils gèrent leur site seuls" subtitle="Quelques réalisations récentes.">
                <div class="project-strip">
                    { for PROJECTS.iter().take(3).map(|project| html! {
                        <figure class="project-thumb">
                            <img src={project.image} alt={project.title} loading="lazy" />
                            <figcaption>
                                <strong>{project.title}</strong>
                                <span>{project.category}</span>
                            </figcaption>
                        </figure>
                    }) }
                </div>
                <div class="section-actions">
                    <Link<Route> to={Route::Portfolio} classes="link-button">{"Tout le portfolio"}</Link<Route>>
                </div>
            </RevealSection>

            <RevealSection title="Mes garanties" theme={Theme::Green}>
                <CardGrid cards={GUARANTEES.to_vec()} columns={4} />
            </RevealSection>

            <RevealSection
                title="Prêt(e) pour votre autonomie web ?"
                subtitle="Devis personnalisé sous 48h, formation incluse."
                theme={Theme::Sand}
            >
                <div class="section-actions">
                    <Link<Route> to={Route::Contact} classes="hero-cta">{"Démarrer mon projet autonome"}</Link<Route>>
                </div>
            </RevealSection>
        </div>
    }
}
