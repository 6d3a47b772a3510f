use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::analytics::use_telemetry;
use crate::config::CONSENT_BANNER_DELAY_MS;
use crate::consent::{needs_prompt, ConsentChoice, ConsentStore, LocalStorageConsent};

#[function_component(CookieConsent)]
pub fn cookie_consent() -> Html {
    let is_visible = use_state(|| false);
    let telemetry = use_telemetry();

    // Read once; offer the banner a little after load if no choice exists yet.
    {
        let is_visible = is_visible.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = needs_prompt(LocalStorageConsent.load()).then(|| {
                    Timeout::new(CONSENT_BANNER_DELAY_MS, move || is_visible.set(true))
                });
                move || drop(timeout)
            },
            (),
        );
    }

    let choose = |choice: ConsentChoice| {
        let is_visible = is_visible.clone();
        let telemetry = telemetry.clone();
        Callback::from(move |_: MouseEvent| {
            LocalStorageConsent.save(choice);
            if choice == ConsentChoice::Accepted {
                telemetry.grant_consent();
            }
            log::info!("Cookie consent recorded: {:?}", choice);
            is_visible.set(false);
        })
    };

    if !*is_visible {
        return html! {};
    }

    html! {
        <div class="cookie-banner" role="dialog" aria-live="polite">
            <div class="cookie-text">
                <h4>{"Cookies et Confidentialité"}</h4>
                <p>
                    {"Ce site utilise des cookies pour améliorer votre expérience et analyser le trafic. Vos données restent privées et ne sont jamais vendues."}
                </p>
            </div>
            <div class="cookie-actions">
                <button class="cookie-decline" onclick={choose(ConsentChoice::Declined)}>{"Refuser"}</button>
                <button class="cookie-accept" onclick={choose(ConsentChoice::Accepted)}>{"Accepter"}</button>
            </div>
            <style>
                {r#"
                .cookie-banner {
                    position: fixed;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem 2rem;
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(6px);
                    box-shadow: 0 -8px 24px rgba(0, 0, 0, 0.12);
                }
                .cookie-actions {
                    display: flex;
                    gap: 0.75rem;
                }
                .cookie-decline {
                    border: 1px solid rgba(45, 59, 47, 0.2);
                    background: none;
                    border-radius: 8px;
                    padding: 0.5rem 1rem;
                    cursor: pointer;
                }
                .cookie-accept {
                    background: var(--accent-green);
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    padding: 0.5rem 1rem;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}
