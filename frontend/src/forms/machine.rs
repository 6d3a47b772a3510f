use std::collections::BTreeMap;
use std::rc::Rc;

use yew::prelude::*;

use super::schema::FormKind;
use super::transport::SubmissionError;
use super::validation::{sanitize_input, validate_fields};
use crate::config::SUCCESS_RESET_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

/// Snapshot of the values sent by one accepted submit.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub ticket: u32,
    pub kind: FormKind,
    pub values: BTreeMap<String, String>,
}

#[derive(Debug)]
pub enum FormAction {
    Edit { field: String, value: String },
    Submit,
    Settle {
        ticket: u32,
        outcome: Result<(), SubmissionError>,
    },
    ExpireSuccess { ticket: u32 },
    DismissError,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormMachine {
    kind: FormKind,
    values: BTreeMap<String, String>,
    errors: BTreeMap<String, String>,
    status: FormStatus,
    ticket: u32,
    in_flight: Option<Submission>,
    failure: Option<SubmissionError>,
}

impl FormMachine {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            values: empty_values(kind),
            errors: BTreeMap::new(),
            status: FormStatus::Idle,
            ticket: 0,
            in_flight: None,
            failure: None,
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Ticket of the latest accepted submission, 0 before the first one.
    pub fn ticket(&self) -> u32 {
        self.ticket
    }

    pub fn in_flight(&self) -> Option<&Submission> {
        self.in_flight.as_ref()
    }

    pub fn failure(&self) -> Option<&SubmissionError> {
        self.failure.as_ref()
    }

    /// Milliseconds until a success acknowledgment should be cleared.
    pub fn success_reset_delay(&self) -> Option<u32> {
        (self.status == FormStatus::Success).then_some(SUCCESS_RESET_MS)
    }

    /// Applies one action in place. Returns false when nothing changed.
    pub fn apply(&mut self, action: FormAction) -> bool {
        match action {
            FormAction::Edit { field, value } => {
                let cleared = self.errors.remove(&field).is_some();
                let previous = self.values.insert(field, value.clone());
                cleared || previous.as_deref() != Some(value.as_str())
            }
            FormAction::Submit => self.submit(),
            FormAction::Settle { ticket, outcome } => self.settle(ticket, outcome),
            FormAction::ExpireSuccess { ticket } => {
                if self.status != FormStatus::Success || ticket != self.ticket {
                    return false;
                }
                self.status = FormStatus::Idle;
                true
            }
            FormAction::DismissError => {
                if self.status != FormStatus::Error {
                    return false;
                }
                self.status = FormStatus::Idle;
                self.failure = None;
                true
            }
        }
    }

    fn submit(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }

        // Validate what will actually be sent.
        let values: BTreeMap<String, String> = self
            .values
            .iter()
            .map(|(field, value)| (field.clone(), sanitize_input(value)))
            .collect();
        if let Err(errors) = validate_fields(self.kind.fields(), &values) {
            log::debug!("{} form blocked: {}", self.kind.analytics_name(), errors);
            self.errors = errors.0;
            return true;
        }

        self.errors.clear();
        self.failure = None;
        self.ticket = self.ticket.wrapping_add(1);
        self.in_flight = Some(Submission {
            ticket: self.ticket,
            kind: self.kind,
            values,
        });
        self.status = FormStatus::Submitting;
        true
    }

    fn settle(&mut self, ticket: u32, outcome: Result<(), SubmissionError>) -> bool {
        match &self.in_flight {
            Some(submission) if submission.ticket == ticket => {}
            _ => return false,
        }
        self.in_flight = None;

        match outcome {
            Ok(()) => {
                self.status = FormStatus::Success;
                self.values = empty_values(self.kind);
            }
            Err(e) => {
                self.status = FormStatus::Error;
                self.failure = Some(e);
            }
        }
        true
    }
}

fn empty_values(kind: FormKind) -> BTreeMap<String, String> {
    kind.fields()
        .iter()
        .map(|field| (field.name.to_string(), String::new()))
        .collect()
}

impl Reducible for FormMachine {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(field: &str, value: &str) -> FormAction {
        FormAction::Edit {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    fn filled_contact() -> FormMachine {
        let mut machine = FormMachine::new(FormKind::Contact);
        for (field, value) in [
            ("name", "Jo"),
            ("email", "jo@example.com"),
            ("project", "vitrine"),
            ("autonomyLevel", "debutant"),
            ("timeline", "standard"),
        ] {
            machine.apply(edit(field, value));
        }
        machine
    }

    #[test]
    fn starts_idle_with_empty_values() {
        let machine = FormMachine::new(FormKind::Contact);
        assert_eq!(machine.status(), FormStatus::Idle);
        assert_eq!(machine.values().len(), 6);
        assert!(machine.values().values().all(String::is_empty));
        assert!(machine.in_flight().is_none());
    }

    #[test]
    fn edit_updates_value_without_touching_status() {
        let mut machine = FormMachine::new(FormKind::Newsletter);
        assert!(machine.apply(edit("email", "a@b.fr")));
        assert_eq!(machine.value("email"), "a@b.fr");
        assert_eq!(machine.status(), FormStatus::Idle);
        assert!(!machine.apply(edit("email", "a@b.fr")));
    }

    #[test]
    fn empty_required_fields_block_submission() {
        let mut machine = FormMachine::new(FormKind::Contact);
        assert!(machine.apply(FormAction::Submit));

        assert_eq!(machine.status(), FormStatus::Idle);
        assert!(machine.in_flight().is_none());
        assert_eq!(machine.ticket(), 0);
        for field in ["name", "email", "project", "autonomyLevel", "timeline"] {
            assert!(machine.error(field).is_some(), "missing error for {}", field);
        }
        assert!(machine.error("message").is_none());
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut machine = FormMachine::new(FormKind::Contact);
        machine.apply(FormAction::Submit);
        machine.apply(edit("name", "J"));
        assert!(machine.error("name").is_none());
        assert!(machine.error("email").is_some());
    }

    #[test]
    fn invalid_email_blocks_an_otherwise_valid_form() {
        let mut machine = filled_contact();
        machine.apply(edit("email", "jo.example.com"));
        machine.apply(FormAction::Submit);

        assert_eq!(machine.status(), FormStatus::Idle);
        assert_eq!(machine.error("email"), Some("Email invalide"));
        assert_eq!(machine.errors().len(), 1);
        assert!(machine.in_flight().is_none());
    }

    #[test]
    fn valid_submit_snapshots_sanitized_values() {
        let mut machine = filled_contact();
        machine.apply(edit("message", "  <hello>  "));
        assert!(machine.apply(FormAction::Submit));

        assert!(machine.is_submitting());
        let submission = machine.in_flight().expect("in flight");
        assert_eq!(submission.ticket, 1);
        assert_eq!(submission.values["message"], "hello");
        assert_eq!(submission.values["name"], "Jo");
    }

    #[test]
    fn names_that_sanitize_below_the_minimum_are_rejected() {
        for name in ["<>", " J", "<J", "J>"] {
            let mut machine = filled_contact();
            machine.apply(edit("name", name));
            assert!(machine.apply(FormAction::Submit));

            assert_eq!(machine.status(), FormStatus::Idle, "accepted {:?}", name);
            assert!(machine.in_flight().is_none());
            assert!(machine.error("name").is_some());
            assert_eq!(machine.ticket(), 0);
        }
    }

    #[test]
    fn whitespace_padded_email_is_sent_trimmed() {
        let mut machine = filled_contact();
        machine.apply(edit("email", "  jo@example.com "));
        machine.apply(FormAction::Submit);

        let submission = machine.in_flight().expect("in flight");
        assert_eq!(submission.values["email"], "jo@example.com");
    }

    #[test]
    fn submit_while_submitting_is_a_no_op() {
        let machine = Rc::new(filled_contact());
        let submitting = machine.reduce(FormAction::Submit);
        assert!(submitting.is_submitting());

        let again = submitting.clone().reduce(FormAction::Submit);
        assert!(Rc::ptr_eq(&submitting, &again));
        assert_eq!(again.ticket(), 1);
    }

    #[test]
    fn success_clears_values_then_expires_to_idle() {
        let mut machine = filled_contact();
        machine.apply(FormAction::Submit);
        let ticket = machine.ticket();

        assert!(machine.apply(FormAction::Settle { ticket, outcome: Ok(()) }));
        assert_eq!(machine.status(), FormStatus::Success);
        assert!(machine.values().values().all(String::is_empty));
        assert_eq!(machine.success_reset_delay(), Some(5_000));

        assert!(machine.apply(FormAction::ExpireSuccess { ticket }));
        assert_eq!(machine.status(), FormStatus::Idle);
        assert_eq!(machine.success_reset_delay(), None);
    }

    #[test]
    fn failure_keeps_values_and_retry_succeeds() {
        let mut machine = filled_contact();
        machine.apply(FormAction::Submit);
        machine.apply(FormAction::Settle {
            ticket: 1,
            outcome: Err(SubmissionError::Rejected(500)),
        });

        assert_eq!(machine.status(), FormStatus::Error);
        assert_eq!(machine.value("name"), "Jo");
        assert_eq!(machine.value("timeline"), "standard");
        assert_eq!(machine.failure(), Some(&SubmissionError::Rejected(500)));

        assert!(machine.apply(FormAction::Submit));
        assert!(machine.is_submitting());
        assert!(machine.failure().is_none());
        assert_eq!(machine.ticket(), 2);

        machine.apply(FormAction::Settle { ticket: 2, outcome: Ok(()) });
        assert_eq!(machine.status(), FormStatus::Success);
        assert_eq!(machine.value("name"), "");
    }

    #[test]
    fn stale_settlements_and_timers_are_ignored() {
        let mut machine = filled_contact();
        machine.apply(FormAction::Submit);
        assert!(!machine.apply(FormAction::Settle { ticket: 7, outcome: Ok(()) }));
        assert!(machine.is_submitting());

        machine.apply(FormAction::Settle { ticket: 1, outcome: Ok(()) });
        assert!(!machine.apply(FormAction::Settle { ticket: 1, outcome: Ok(()) }));

        // a timer from an older success must not hide a newer one
        machine.apply(edit("email", "x@y.fr"));
        assert!(!machine.apply(FormAction::ExpireSuccess { ticket: 0 }));
        assert_eq!(machine.status(), FormStatus::Success);
    }

    #[test]
    fn error_banner_can_be_dismissed() {
        let mut machine = FormMachine::new(FormKind::Newsletter);
        machine.apply(edit("email", "jo@example.com"));
        machine.apply(FormAction::Submit);
        machine.apply(FormAction::Settle {
            ticket: 1,
            outcome: Err(SubmissionError::Transport("offline".into())),
        });

        assert!(machine.apply(FormAction::DismissError));
        assert_eq!(machine.status(), FormStatus::Idle);
        assert!(machine.failure().is_none());
        assert_eq!(machine.value("email"), "jo@example.com");
        assert!(!machine.apply(FormAction::DismissError));
    }
}
