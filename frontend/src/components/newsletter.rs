use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::forms::hook::{edit_callback, submit_callback, use_form};
use crate::forms::machine::{FormAction, FormStatus};
use crate::forms::schema::FormKind;

#[function_component(NewsletterSignup)]
pub fn newsletter_signup() -> Html {
    let machine = use_form(FormKind::Newsletter);

    let on_email = edit_callback(&machine, "email");
    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_email.emit(input.value());
    });
    let dismiss = {
        let machine = machine.clone();
        Callback::from(move |_: MouseEvent| machine.dispatch(FormAction::DismissError))
    };
    let submitting = machine.is_submitting();
    let succeeded = machine.status() == FormStatus::Success;
    let failed = machine.status() == FormStatus::Error;

    html! {
        <div class="newsletter-card">
            <div class="newsletter-header">
                <div class="newsletter-icon">{"✉️"}</div>
                <h3>{"Newsletter "}<span class="accent">{"Autonomie"}</span></h3>
                <p>
                    {"Recevez mes conseils exclusifs pour votre autonomie digitale. 1 email par semaine, désabonnement en 1 clic."}
                </p>
            </div>

            if succeeded {
                <div class="form-banner success">
                    <p>{"Inscription réussie ! Vérifiez votre email."}</p>
                </div>
            }
            if failed {
                <div class="form-banner error" role="alert">
                    <button class="banner-close" aria-label="Fermer" onclick={dismiss}>{"✕"}</button>
                    <p>{"Erreur lors de l'inscription. Réessayez plus tard."}</p>
                </div>
            }

            <form class="newsletter-form" onsubmit={submit_callback(&machine)} novalidate={true}>
                <input
                    type="email"
                    class={classes!("form-control", machine.error("email").map(|_| "has-error"))}
                    placeholder="votre@email.com"
                    value={machine.value("email").to_string()}
                    disabled={submitting}
                    {oninput}
                />
                <button type="submit" class="submit-button" disabled={submitting}>
                    { if submitting { "Inscription..." } else { "S'abonner" } }
                </button>
            </form>
            if let Some(message) = machine.error("email") {
                <p class="field-error">{message}</p>
            }

            <p class="form-footnote">{"Pas de spam • Conseils pratiques • Désabonnement facile"}</p>
        </div>
    }
}
