use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::machine::Submission;
use super::schema::FormKind;
use crate::analytics::Telemetry;
use crate::config::{self, NewsletterMode};

/// Failure of the request itself, as opposed to a field that failed validation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("endpoint answered with status {0}")]
    Rejected(u16),
    #[error("endpoint refused the submission: {0}")]
    Declined(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("could not encode submission: {0}")]
    Encode(String),
}

pub trait FormTransport {
    fn send(&self, payload: Value) -> LocalBoxFuture<'static, Result<(), SubmissionError>>;
}

/// POSTs the payload as JSON and treats any 2xx as accepted.
pub struct JsonPostTransport {
    url: String,
}

impl JsonPostTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl FormTransport for JsonPostTransport {
    fn send(&self, payload: Value) -> LocalBoxFuture<'static, Result<(), SubmissionError>> {
        let url = self.url.clone();
        async move {
            let response = Request::post(&url)
                .header("Accept", "application/json")
                .json(&payload)
                .map_err(|e| SubmissionError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| SubmissionError::Transport(e.to_string()))?;

            if response.ok() {
                Ok(())
            } else {
                Err(SubmissionError::Rejected(response.status()))
            }
        }
        .boxed_local()
    }
}

#[derive(Deserialize)]
struct SubscribeResponse {
    success: bool,
    #[serde(default)]
    message: String,
}

/// Subscription API answering `{ success, message }`.
pub struct NewsletterApiTransport {
    url: String,
}

impl NewsletterApiTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl FormTransport for NewsletterApiTransport {
    fn send(&self, payload: Value) -> LocalBoxFuture<'static, Result<(), SubmissionError>> {
        let url = self.url.clone();
        async move {
            let response = Request::post(&url)
                .json(&payload)
                .map_err(|e| SubmissionError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| SubmissionError::Transport(e.to_string()))?;

            if !response.ok() {
                return Err(SubmissionError::Rejected(response.status()));
            }
            let body: SubscribeResponse = response
                .json()
                .await
                .map_err(|e| SubmissionError::Transport(e.to_string()))?;
            if body.success {
                Ok(())
            } else {
                Err(SubmissionError::Declined(body.message))
            }
        }
        .boxed_local()
    }
}

/// Stand-in used until the subscription API is deployed. Waits, then accepts.
pub struct StubNewsletterTransport {
    delay_ms: u32,
}

impl StubNewsletterTransport {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

impl FormTransport for StubNewsletterTransport {
    fn send(&self, _payload: Value) -> LocalBoxFuture<'static, Result<(), SubmissionError>> {
        let delay_ms = self.delay_ms;
        async move {
            TimeoutFuture::new(delay_ms).await;
            Ok(())
        }
        .boxed_local()
    }
}

pub fn transport_for(kind: FormKind) -> Rc<dyn FormTransport> {
    match kind {
        FormKind::Contact => Rc::new(JsonPostTransport::new(config::contact_form_endpoint())),
        FormKind::Newsletter => match config::newsletter_mode() {
            NewsletterMode::Stub { delay_ms } => Rc::new(StubNewsletterTransport::new(delay_ms)),
            NewsletterMode::Backend { url } => Rc::new(NewsletterApiTransport::new(url)),
        },
    }
}

/// JSON body for a submission. Empty optional fields are left out; the
/// contact form also carries the subject and reply-to used by the mail relay.
pub fn build_payload(submission: &Submission) -> Value {
    let mut body: Map<String, Value> = submission
        .values
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(field, value)| (field.clone(), Value::String(value.clone())))
        .collect();

    if submission.kind == FormKind::Contact {
        let field = |name: &str| submission.values.get(name).cloned().unwrap_or_default();
        body.insert(
            "_subject".to_string(),
            Value::String(format!("Nouveau projet autonome - {}", field("name"))),
        );
        body.insert("_replyto".to_string(), Value::String(field("email")));
    }

    Value::Object(body)
}

/// Sends one submission and reports the outcome to analytics.
pub async fn deliver(
    submission: &Submission,
    transport: &dyn FormTransport,
    telemetry: &Telemetry,
) -> Result<(), SubmissionError> {
    let form_type = submission.kind.analytics_name();
    let outcome = transport.send(build_payload(submission)).await;

    match &outcome {
        Ok(()) => log::info!("{} form #{} delivered", form_type, submission.ticket),
        Err(e) => log::error!("{} form #{} failed: {}", form_type, submission.ticket, e),
    }

    telemetry.form_submission(form_type, outcome.is_ok());
    if outcome.is_ok() && submission.kind == FormKind::Newsletter {
        telemetry.newsletter_signup();
    }
    outcome
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use serde_json::json;

    use super::*;
    use crate::analytics::testing::RecordingAnalytics;
    use crate::forms::machine::{FormAction, FormMachine, FormStatus};

    struct MockTransport {
        calls: RefCell<Vec<Value>>,
        reply: Result<(), SubmissionError>,
    }

    impl MockTransport {
        fn replying(reply: Result<(), SubmissionError>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                reply,
            }
        }
    }

    impl FormTransport for MockTransport {
        fn send(&self, payload: Value) -> LocalBoxFuture<'static, Result<(), SubmissionError>> {
            self.calls.borrow_mut().push(payload);
            futures::future::ready(self.reply.clone()).boxed_local()
        }
    }

    /// Holds every request open until the test releases it.
    struct GatedTransport {
        calls: RefCell<u32>,
        gate: RefCell<Option<oneshot::Receiver<Result<(), SubmissionError>>>>,
    }

    impl FormTransport for GatedTransport {
        fn send(&self, _payload: Value) -> LocalBoxFuture<'static, Result<(), SubmissionError>> {
            *self.calls.borrow_mut() += 1;
            let gate = self.gate.borrow_mut().take();
            async move {
                match gate {
                    Some(rx) => rx
                        .await
                        .unwrap_or_else(|_| Err(SubmissionError::Transport("dropped".into()))),
                    None => Err(SubmissionError::Transport("no gate".into())),
                }
            }
            .boxed_local()
        }
    }

    fn jo_contact() -> FormMachine {
        let mut machine = FormMachine::new(FormKind::Contact);
        for (field, value) in [
            ("name", "Jo"),
            ("email", "jo@example.com"),
            ("project", "vitrine"),
            ("autonomyLevel", "debutant"),
            ("timeline", "standard"),
        ] {
            machine.apply(FormAction::Edit {
                field: field.to_string(),
                value: value.to_string(),
            });
        }
        machine
    }

    fn run(
        machine: &mut FormMachine,
        transport: &dyn FormTransport,
        telemetry: &Telemetry,
    ) {
        assert!(machine.apply(FormAction::Submit));
        let submission = machine.in_flight().cloned().expect("accepted submission");
        let outcome = block_on(deliver(&submission, transport, telemetry));
        machine.apply(FormAction::Settle {
            ticket: submission.ticket,
            outcome,
        });
    }

    #[test]
    fn contact_success_sends_one_request_and_clears_fields() {
        let transport = MockTransport::replying(Ok(()));
        let sink = Rc::new(RecordingAnalytics::default());
        let telemetry = Telemetry::from_rc(sink.clone());
        let mut machine = jo_contact();

        run(&mut machine, &transport, &telemetry);

        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            json!({
                "name": "Jo",
                "email": "jo@example.com",
                "project": "vitrine",
                "autonomyLevel": "debutant",
                "timeline": "standard",
                "_subject": "Nouveau projet autonome - Jo",
                "_replyto": "jo@example.com",
            })
        );
        assert_eq!(machine.status(), FormStatus::Success);
        assert!(machine.values().values().all(String::is_empty));

        let events = sink.events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].1["form_type"], "contact");
        assert_eq!(events[0].1["success"], true);
    }

    #[test]
    fn contact_failure_keeps_what_the_user_typed() {
        let transport = MockTransport::replying(Err(SubmissionError::Rejected(422)));
        let sink = Rc::new(RecordingAnalytics::default());
        let telemetry = Telemetry::from_rc(sink.clone());
        let mut machine = jo_contact();

        run(&mut machine, &transport, &telemetry);

        assert_eq!(transport.calls.borrow().len(), 1);
        assert_eq!(machine.status(), FormStatus::Error);
        assert_eq!(machine.failure(), Some(&SubmissionError::Rejected(422)));
        assert_eq!(machine.value("name"), "Jo");
        assert_eq!(machine.value("email"), "jo@example.com");
        assert_eq!(machine.value("project"), "vitrine");
        assert_eq!(machine.value("autonomyLevel"), "debutant");
        assert_eq!(machine.value("timeline"), "standard");
        assert_eq!(sink.events.borrow()[0].1["success"], false);
    }

    #[test]
    fn retry_after_failure_succeeds() {
        let mut machine = jo_contact();
        let telemetry = Telemetry::default();

        run(
            &mut machine,
            &MockTransport::replying(Err(SubmissionError::Transport("offline".into()))),
            &telemetry,
        );
        assert_eq!(machine.status(), FormStatus::Error);

        let transport = MockTransport::replying(Ok(()));
        run(&mut machine, &transport, &telemetry);
        assert_eq!(transport.calls.borrow().len(), 1);
        assert_eq!(machine.status(), FormStatus::Success);
        assert_eq!(machine.value("name"), "");
    }

    #[test]
    fn invalid_form_never_reaches_the_network() {
        let mut machine = FormMachine::new(FormKind::Contact);
        machine.apply(FormAction::Submit);
        assert!(machine.in_flight().is_none());
        assert_eq!(machine.errors().len(), 5);
    }

    #[test]
    fn second_submit_while_request_is_open_issues_nothing() {
        let (tx, rx) = oneshot::channel();
        let transport = Rc::new(GatedTransport {
            calls: RefCell::new(0),
            gate: RefCell::new(Some(rx)),
        });
        let machine = Rc::new(RefCell::new(jo_contact()));

        assert!(machine.borrow_mut().apply(FormAction::Submit));
        let submission = machine.borrow().in_flight().cloned().expect("accepted");

        let mut pool = LocalPool::new();
        {
            let machine = machine.clone();
            let transport = transport.clone();
            pool.spawner()
                .spawn_local(async move {
                    let outcome =
                        deliver(&submission, transport.as_ref(), &Telemetry::default()).await;
                    machine.borrow_mut().apply(FormAction::Settle {
                        ticket: submission.ticket,
                        outcome,
                    });
                })
                .expect("spawn");
        }
        pool.run_until_stalled();

        assert!(machine.borrow().is_submitting());
        assert!(!machine.borrow_mut().apply(FormAction::Submit));
        assert_eq!(*transport.calls.borrow(), 1);

        tx.send(Ok(())).expect("request still open");
        pool.run_until_stalled();

        assert_eq!(machine.borrow().status(), FormStatus::Success);
        assert_eq!(*transport.calls.borrow(), 1);
    }

    #[test]
    fn newsletter_payload_is_just_the_email() {
        let mut machine = FormMachine::new(FormKind::Newsletter);
        machine.apply(FormAction::Edit {
            field: "email".into(),
            value: "<jo@example.com>".into(),
        });
        machine.apply(FormAction::Submit);
        let submission = machine.in_flight().expect("accepted");
        assert_eq!(build_payload(submission), json!({ "email": "jo@example.com" }));
    }

    #[test]
    fn newsletter_success_also_records_signup() {
        let transport = MockTransport::replying(Ok(()));
        let sink = Rc::new(RecordingAnalytics::default());
        let telemetry = Telemetry::from_rc(sink.clone());
        let mut machine = FormMachine::new(FormKind::Newsletter);
        machine.apply(FormAction::Edit {
            field: "email".into(),
            value: "jo@example.com".into(),
        });

        run(&mut machine, &transport, &telemetry);

        assert_eq!(sink.names(), vec!["form_submission", "newsletter_signup"]);
        let props = &sink.events.borrow()[1].1;
        assert!(props.get("email").is_none());
    }

    #[test]
    fn optional_message_is_sent_when_filled() {
        let mut machine = jo_contact();
        machine.apply(FormAction::Edit {
            field: "message".into(),
            value: "Un site pour ma boulangerie".into(),
        });
        machine.apply(FormAction::Submit);
        let payload = build_payload(machine.in_flight().expect("accepted"));
        assert_eq!(payload["message"], "Un site pour ma boulangerie");
    }

    #[test]
    fn error_messages_read_well() {
        assert_eq!(
            SubmissionError::Rejected(503).to_string(),
            "endpoint answered with status 503"
        );
        assert_eq!(
            SubmissionError::Declined("déjà inscrit".into()).to_string(),
            "endpoint refused the submission: déjà inscrit"
        );
    }
}
