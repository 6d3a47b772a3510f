use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::process_timeline::ProcessTimeline;
use crate::components::section::{CardGrid, RevealSection};
use crate::content::{ProcessStep, Theme, GUARANTEES, PROCESS_STEPS};
use crate::reveal::{reveal_class, use_reveal, RevealOptions};
use crate::Route;

#[derive(Properties, PartialEq)]
struct StepProps {
    step: ProcessStep,
}

/// Timeline entry; each step reveals on its own as the visitor scrolls.
#[function_component(TimelineStep)]
fn timeline_step(props: &StepProps) -> Html {
    let (node, visible) = use_reveal(RevealOptions::default());
    let step = &props.step;
    let side = if step.number % 2 == 0 { "right" } else { "left" };

    html! {
        <li ref={node} class={classes!("timeline-step", side, reveal_class(visible))}>
            <span class="step-number">{step.number}</span>
            <div class="step-body">
                <h3>{step.icon}{" "}{step.title}</h3>
                <span class="step-duration">{step.duration}</span>
                <p>{step.description}</p>
                <ul class="card-bullets">
                    { for step.deliverables.iter().map(|item| html! { <li>{*item}</li> }) }
                </ul>
            </div>
        </li>
    }
}

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <div class="process-page">
            <section class="page-hero">
                <h1>{"Ma méthode pour "}<span class="accent">{"votre autonomie"}</span></h1>
                <p>{"Six étapes, de l'analyse de vos besoins jusqu'à votre maîtrise complète."}</p>
            </section>

            <ProcessTimeline details_link={false} />

            <section class="site-section">
                <ol class="timeline">
                    { for PROCESS_STEPS.iter().map(|step| html! { <TimelineStep step={*step} /> }) }
                </ol>
            </section>

            <RevealSection title="Mes engagements" theme={Theme::Green}>
                <CardGrid cards={GUARANTEES.to_vec()} columns={4} />
            </RevealSection>

            <RevealSection
                title="On commence quand vous voulez"
                subtitle="Décrivez votre projet, je réponds sous 24h."
                theme={Theme::Sand}
            >
                <ContactForm />
                <div class="section-actions">
                    <Link<Route> to={Route::Contact} classes="link-button">{"Autres moyens de me contacter"}</Link<Route>>
                </div>
            </RevealSection>
        </div>
    }
}
