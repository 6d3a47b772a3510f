use yew::prelude::*;

use crate::analytics::use_telemetry;
use crate::components::contact_form::ContactForm;
use crate::components::faq::FaqList;
use crate::components::section::RevealSection;
use crate::config::{CONTACT_EMAIL, WHATSAPP_URL};
use crate::content::{Theme, CONTACT_FAQS};

#[function_component(Contact)]
pub fn contact() -> Html {
    let telemetry = use_telemetry();
    let on_whatsapp = {
        let telemetry = telemetry.clone();
        Callback::from(move |_: MouseEvent| telemetry.whatsapp_click())
    };
    let on_email = Callback::from(move |_: MouseEvent| telemetry.email_click());

    html! {
        <div class="contact-page">
            <section class="page-hero">
                <h1>{"Démarrons votre "}<span class="accent">{"projet autonome"}</span></h1>
                <p>{"Devis personnalisé sous 48h. Dites-moi où vous en êtes, je m'adapte à votre niveau."}</p>
            </section>

            <RevealSection id="contact-methods" title="Me contacter directement">
                <div class="contact-methods">
                    <a class="contact-method" href={WHATSAPP_URL} target="_blank" rel="noopener" onclick={on_whatsapp}>
                        <span class="card-icon">{"💬"}</span>
                        <strong>{"WhatsApp"}</strong>
                        <span>{"Réponse rapide en journée"}</span>
                    </a>
                    <a class="contact-method" href={format!("mailto:{}", CONTACT_EMAIL)} onclick={on_email}>
                        <span class="card-icon">{"✉️"}</span>
                        <strong>{"Email"}</strong>
                        <span>{CONTACT_EMAIL}</span>
                    </a>
                </div>
            </RevealSection>

            <RevealSection
                id="contact-form"
                title="Parlez-moi de votre projet"
                subtitle="Tous les champs marqués * sont obligatoires."
                theme={Theme::Sand}
            >
                <ContactForm />
            </RevealSection>

            <RevealSection title="Questions fréquentes">
                <FaqList items={CONTACT_FAQS} />
            </RevealSection>
        </div>
    }
}
