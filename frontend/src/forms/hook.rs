use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::machine::{FormAction, FormMachine};
use super::schema::FormKind;
use super::transport::{deliver, transport_for};
use crate::analytics::use_telemetry;

/// Binds a form machine to the component: sends accepted submissions and
/// clears the success acknowledgment after its delay.
#[hook]
pub fn use_form(kind: FormKind) -> UseReducerHandle<FormMachine> {
    let machine = use_reducer(move || FormMachine::new(kind));
    let telemetry = use_telemetry();

    // A new ticket means exactly one accepted submit, so exactly one request.
    {
        let handle = machine.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(submission) = handle.in_flight().cloned() {
                    let transport = transport_for(submission.kind);
                    spawn_local(async move {
                        let outcome = deliver(&submission, transport.as_ref(), &telemetry).await;
                        handle.dispatch(FormAction::Settle {
                            ticket: submission.ticket,
                            outcome,
                        });
                    });
                }
                || ()
            },
            machine.ticket(),
        );
    }

    {
        let handle = machine.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = expiry_timer(&handle).map(|(delay, action)| {
                    Timeout::new(delay, move || handle.dispatch(action))
                });
                move || drop(timeout)
            },
            (machine.status(), machine.ticket()),
        );
    }

    machine
}

/// Delay and action of the timer that hides a success acknowledgment, bound
/// to the submission it acknowledges.
pub fn expiry_timer(machine: &FormMachine) -> Option<(u32, FormAction)> {
    machine
        .success_reset_delay()
        .map(|delay| (delay, FormAction::ExpireSuccess { ticket: machine.ticket() }))
}

/// Dispatches an edit for `field` from any input, select or textarea event.
pub fn edit_callback(machine: &UseReducerHandle<FormMachine>, field: &'static str) -> Callback<String> {
    let machine = machine.clone();
    Callback::from(move |value: String| {
        machine.dispatch(FormAction::Edit {
            field: field.to_string(),
            value,
        });
    })
}

pub fn submit_callback(machine: &UseReducerHandle<FormMachine>) -> Callback<SubmitEvent> {
    let machine = machine.clone();
    Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        machine.dispatch(FormAction::Submit);
    })
}
