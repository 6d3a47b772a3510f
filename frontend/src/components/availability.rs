use yew::prelude::*;

use crate::analytics::use_telemetry;
use crate::config::{CONTACT_EMAIL, WHATSAPP_URL};
use crate::content::{AVAILABILITY_POINTS, COMPETENCES};
use crate::reveal::{reveal_class, use_reveal, RevealOptions};

/// Inline style of a competence bar. Bars start empty and fill one after the
/// other once the section has been revealed.
fn bar_style(level: u8, visible: bool, index: usize) -> String {
    let width = if visible { level } else { 0 };
    format!("width: {}%; transition-delay: {}ms;", width, 500 + index * 200)
}

#[function_component(AvailabilitySection)]
pub fn availability_section() -> Html {
    let (node, visible) = use_reveal(RevealOptions::default());
    let telemetry = use_telemetry();
    let on_whatsapp = {
        let telemetry = telemetry.clone();
        Callback::from(move |_: MouseEvent| telemetry.whatsapp_click())
    };
    let on_email = Callback::from(move |_: MouseEvent| telemetry.email_click());

    html! {
        <section ref={node} class={classes!("site-section", "availability", reveal_class(visible))}>
            <div class="section-inner">
                <h2 class="section-title">
                    {"Mes "}<span class="accent">{"compétences"}</span>{" pour votre autonomie"}
                </h2>
                <p class="section-subtitle">
                    {"Expertise technique + pédagogie personnalisée = votre autonomie digitale garantie"}
                </p>

                <div class="availability-grid">
                    <div class="competences">
                        { for COMPETENCES.iter().enumerate().map(|(index, competence)| html! {
                            <div class="competence">
                                <div class="competence-heading">
                                    <span class="card-icon">{competence.icon}</span>
                                    <div>
                                        <h4>{competence.name}</h4>
                                        <p>{competence.description}</p>
                                    </div>
                                    <span class="competence-level">{format!("{}%", competence.level)}</span>
                                </div>
                                <div class="competence-track">
                                    <div class="competence-bar" style={bar_style(competence.level, visible, index)}></div>
                                </div>
                            </div>
                        }) }
                        <p class="competence-note">{"5 ans d'expérience · Formation personnalisée incluse"}</p>
                    </div>

                    <div class="availability-points">
                        { for AVAILABILITY_POINTS.iter().map(|point| html! {
                            <article class="card">
                                <div class="card-icon">{point.icon}</div>
                                <h3>{point.title}</h3>
                                <p>{point.body}</p>
                            </article>
                        }) }
                        <div class="contact-methods">
                            <a class="contact-method" href={WHATSAPP_URL} target="_blank" rel="noopener" onclick={on_whatsapp}>
                                {"💬 WhatsApp"}
                            </a>
                            <a class="contact-method" href={format!("mailto:{}", CONTACT_EMAIL)} onclick={on_email}>
                                {"✉️ Email"}
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_stay_empty_until_revealed() {
        assert_eq!(bar_style(95, false, 0), "width: 0%; transition-delay: 500ms;");
    }

    #[test]
    fn bars_fill_to_their_level_in_sequence() {
        assert_eq!(bar_style(95, true, 0), "width: 95%; transition-delay: 500ms;");
        assert_eq!(bar_style(100, true, 2), "width: 100%; transition-delay: 900ms;");
    }
}
