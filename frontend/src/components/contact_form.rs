use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::{CONTACT_EMAIL, WHATSAPP_URL};
use crate::forms::hook::{edit_callback, submit_callback, use_form};
use crate::forms::machine::{FormAction, FormMachine, FormStatus};
use crate::forms::schema::FormKind;

fn field_class(machine: &FormMachine, field: &str) -> Classes {
    classes!("form-control", machine.error(field).map(|_| "has-error"))
}

fn field_label(field: &'static str, label: &'static str) -> Html {
    let required = FormKind::Contact
        .field(field)
        .map_or(false, |spec| spec.is_required());
    html! {
        <label for={field}>
            {label}
            if required {
                <span class="required">{" *"}</span>
            }
        </label>
    }
}

fn field_error(machine: &FormMachine, field: &str) -> Html {
    match machine.error(field) {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    }
}

fn text_field(
    machine: &UseReducerHandle<FormMachine>,
    field: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> Html {
    let on_edit = edit_callback(machine, field);
    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_edit.emit(input.value());
    });

    html! {
        <div class="form-field">
            { field_label(field, label) }
            <input
                id={field}
                type={input_type}
                class={field_class(machine, field)}
                placeholder={placeholder}
                value={machine.value(field).to_string()}
                {oninput}
            />
            { field_error(machine, field) }
        </div>
    }
}

fn select_field(
    machine: &UseReducerHandle<FormMachine>,
    field: &'static str,
    label: &'static str,
    placeholder: &'static str,
) -> Html {
    let choices = FormKind::Contact
        .field(field)
        .map(|spec| spec.choices())
        .unwrap_or(&[]);
    let on_edit = edit_callback(machine, field);
    let onchange = Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        on_edit.emit(select.value());
    });
    let current = machine.value(field);

    html! {
        <div class="form-field">
            { field_label(field, label) }
            <select id={field} class={field_class(machine, field)} {onchange}>
                <option value="" selected={current.is_empty()}>{placeholder}</option>
                { for choices.iter().map(|choice| html! {
                    <option value={choice.value} selected={current == choice.value}>
                        {choice.label}
                    </option>
                }) }
            </select>
            { field_error(machine, field) }
        </div>
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let machine = use_form(FormKind::Contact);

    let on_message = edit_callback(&machine, "message");
    let on_message = Callback::from(move |e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        on_message.emit(area.value());
    });
    let dismiss = {
        let machine = machine.clone();
        Callback::from(move |_: MouseEvent| machine.dispatch(FormAction::DismissError))
    };
    let submitting = machine.is_submitting();
    let succeeded = machine.status() == FormStatus::Success;
    let failed = machine.status() == FormStatus::Error;

    html! {
        <div class="contact-form-card">
            <h3>{"Parlons de votre projet"}</h3>

            if succeeded {
                <div class="form-banner success">
                    <p class="banner-title">{"Message envoyé avec succès !"}</p>
                    <p>{"Je vous réponds sous 48h max."}</p>
                </div>
            }

            if failed {
                <div class="form-banner error" role="alert">
                    <button class="banner-close" aria-label="Fermer" onclick={dismiss}>{"✕"}</button>
                    <p class="banner-title">{"Erreur lors de l'envoi"}</p>
                    <p>
                        {"Contactez-moi directement par "}
                        <a href={WHATSAPP_URL} target="_blank" rel="noopener">{"WhatsApp"}</a>
                        {" ou par "}
                        <a href={format!("mailto:{}", CONTACT_EMAIL)}>{"email"}</a>
                        {"."}
                    </p>
                </div>
            }

            <form onsubmit={submit_callback(&machine)} novalidate={true}>
                { text_field(&machine, "name", "Nom complet", "text", "Votre nom") }
                { text_field(&machine, "email", "Email professionnel", "email", "votre@email.com") }
                { select_field(&machine, "project", "Type de projet", "Choisir un type") }
                { select_field(&machine, "autonomyLevel", "Niveau technique actuel", "Évaluer mon niveau") }
                { select_field(&machine, "timeline", "Délai souhaité", "Choisir un délai") }

                <div class="form-field">
                    { field_label("message", "Détails du projet (optionnel)") }
                    <textarea
                        id="message"
                        rows="4"
                        class={field_class(&machine, "message")}
                        placeholder="Décrivez votre projet, vos besoins spécifiques..."
                        value={machine.value("message").to_string()}
                        oninput={on_message}
                    />
                    { field_error(&machine, "message") }
                </div>

                <button type="submit" class="submit-button" disabled={submitting}>
                    if submitting {
                        <>
                            <span class="spinner"></span>
                            {"Envoi en cours..."}
                        </>
                    } else {
                        {"Démarrer mon projet autonome"}
                    }
                </button>
            </form>

            <p class="form-footnote">
                {"Formation incluse • Support illimité • Garantie autonomie • Réponse sous 48h max"}
            </p>
        </div>
    }
}
