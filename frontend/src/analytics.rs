use std::rc::Rc;

use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};
use yew::prelude::*;

/// Best-effort event sink. Implementations must never panic or block.
pub trait Analytics {
    fn track(&self, event: &str, properties: Value);

    /// Called once the visitor accepts analytics cookies.
    fn grant_consent(&self) {}
}

pub struct NoopAnalytics;

impl Analytics for NoopAnalytics {
    fn track(&self, _event: &str, _properties: Value) {}
}

/// Forwards events to `window.gtag` when the tag has been loaded on the page.
pub struct GtagAnalytics;

impl GtagAnalytics {
    fn gtag() -> Option<Function> {
        let window = web_sys::window()?;
        Reflect::get(&window, &JsValue::from_str("gtag"))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    }

    fn to_js(value: &Value) -> Option<JsValue> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        match value.serialize(&serializer) {
            Ok(js) => Some(js),
            Err(e) => {
                log::warn!("Could not convert analytics payload: {}", e);
                None
            }
        }
    }

    fn call(command: &str, target: &str, params: &Value) {
        let Some(gtag) = Self::gtag() else {
            return;
        };
        let Some(params) = Self::to_js(params) else {
            return;
        };
        if let Err(e) = gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str(command),
            &JsValue::from_str(target),
            &params,
        ) {
            log::warn!("gtag call failed: {:?}", e);
        }
    }
}

impl Analytics for GtagAnalytics {
    fn track(&self, event: &str, properties: Value) {
        log::debug!("Event tracked: {} {}", event, properties);
        Self::call("event", event, &json!({ "custom_parameter": properties }));
    }

    fn grant_consent(&self) {
        Self::call("consent", "update", &json!({ "analytics_storage": "granted" }));
    }
}

/// Shared handle to the active sink, provided through a Yew context.
#[derive(Clone)]
pub struct Telemetry(Rc<dyn Analytics>);

impl Telemetry {
    pub fn new(sink: impl Analytics + 'static) -> Self {
        Self(Rc::new(sink))
    }

    pub fn from_rc(sink: Rc<dyn Analytics>) -> Self {
        Self(sink)
    }

    pub fn track(&self, event: &str, properties: Value) {
        self.0.track(event, properties);
    }

    pub fn grant_consent(&self) {
        self.0.grant_consent();
    }

    pub fn form_submission(&self, form_type: &str, success: bool) {
        self.track(
            "form_submission",
            json!({
                "form_type": form_type,
                "success": success,
                "timestamp": timestamp(),
            }),
        );
    }

    pub fn page_view(&self, page_name: &str) {
        self.track(
            "page_view",
            json!({ "page_name": page_name, "timestamp": timestamp() }),
        );
    }

    pub fn newsletter_signup(&self) {
        self.track(
            "newsletter_signup",
            json!({ "source": "website", "timestamp": timestamp() }),
        );
    }

    pub fn whatsapp_click(&self) {
        self.track(
            "whatsapp_click",
            json!({ "source": "website", "timestamp": timestamp() }),
        );
    }

    pub fn email_click(&self) {
        self.track(
            "email_click",
            json!({ "source": "website", "timestamp": timestamp() }),
        );
    }
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new(NoopAnalytics)
    }
}

impl PartialEq for Telemetry {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[hook]
pub fn use_telemetry() -> Telemetry {
    use_context::<Telemetry>().unwrap_or_default()
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use serde_json::Value;

    use super::Analytics;

    #[derive(Default)]
    pub struct RecordingAnalytics {
        pub events: RefCell<Vec<(String, Value)>>,
        pub consent_granted: RefCell<bool>,
    }

    impl RecordingAnalytics {
        pub fn names(&self) -> Vec<String> {
            self.events.borrow().iter().map(|(name, _)| name.clone()).collect()
        }
    }

    impl Analytics for RecordingAnalytics {
        fn track(&self, event: &str, properties: Value) {
            self.events.borrow_mut().push((event.to_string(), properties));
        }

        fn grant_consent(&self) {
            *self.consent_granted.borrow_mut() = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::testing::RecordingAnalytics;
    use super::*;

    #[test]
    fn form_submission_event_carries_type_and_outcome() {
        let sink = Rc::new(RecordingAnalytics::default());
        let telemetry = Telemetry::from_rc(sink.clone());

        telemetry.form_submission("contact", false);

        let events = sink.events.borrow();
        assert_eq!(events.len(), 1);
        let (name, props) = &events[0];
        assert_eq!(name, "form_submission");
        assert_eq!(props["form_type"], "contact");
        assert_eq!(props["success"], false);
        assert!(props["timestamp"].is_string());
    }

    #[test]
    fn default_telemetry_swallows_events() {
        let telemetry = Telemetry::default();
        telemetry.page_view("home");
        telemetry.grant_consent();
    }

    #[test]
    fn clones_compare_equal_but_distinct_sinks_do_not() {
        let a = Telemetry::default();
        let b = a.clone();
        assert!(a == b);
        assert!(a != Telemetry::default());
    }
}
