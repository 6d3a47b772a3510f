use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: None,
        }
    }
}

/// One-shot visibility flag. Once visible it stays visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    visible: bool,
}

impl RevealLatch {
    /// Starting state for the current environment. Content stays visible when
    /// it cannot be observed, instead of waiting for an animation that never runs.
    pub fn for_environment(observer_supported: bool, element_attached: bool) -> Self {
        Self {
            visible: !(observer_supported && element_attached),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds one intersection sample. Returns true only on the transition.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
        if self.visible || !is_intersecting || ratio < threshold {
            return false;
        }
        self.visible = true;
        true
    }
}

pub fn reveal_class(visible: bool) -> &'static str {
    if visible {
        "reveal is-visible"
    } else {
        "reveal"
    }
}

fn observer_supported() -> bool {
    web_sys::window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

struct RevealWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealWatcher {
    fn attach(node: &NodeRef, options: &RevealOptions, on_reveal: Rc<dyn Fn()>) -> Option<Self> {
        let element = node.cast::<Element>();
        let supported = observer_supported();
        if RevealLatch::for_environment(supported, element.is_some()).is_visible() {
            log::debug!("Reveal falling back to visible (observer supported: {})", supported);
            on_reveal();
            return None;
        }
        let element = element?;

        let threshold = options.threshold;
        let latch = Rc::new(Cell::new(RevealLatch::default()));
        let notify = on_reveal.clone();
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let mut state = latch.get();
                if state.observe(entry.is_intersecting(), entry.intersection_ratio(), threshold) {
                    latch.set(state);
                    observer.disconnect();
                    notify();
                    break;
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let mut init = IntersectionObserverInit::new();
        #[allow(deprecated)]
        {
            init.threshold(&JsValue::from_f64(threshold));
            if let Some(margin) = options.root_margin {
                init.root_margin(margin);
            }
        }

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(&element);
                Some(Self {
                    observer,
                    _callback: callback,
                })
            }
            Err(e) => {
                log::warn!("IntersectionObserver rejected options: {:?}", e);
                on_reveal();
                None
            }
        }
    }
}

impl Drop for RevealWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Returns a ref for the observed element and whether it has been revealed.
#[hook]
pub fn use_reveal(options: RevealOptions) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let on_reveal: Rc<dyn Fn()> = Rc::new(move || visible.set(true));
                let watcher = RevealWatcher::attach(&node, &options, on_reveal);
                move || drop(watcher)
            },
            (),
        );
    }

    (node, *visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_environment_fails_open() {
        assert!(RevealLatch::for_environment(false, true).is_visible());
        assert!(RevealLatch::for_environment(true, false).is_visible());
        assert!(!RevealLatch::for_environment(true, true).is_visible());
    }

    #[test]
    fn flips_once_when_threshold_is_crossed() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(true, 0.05, 0.1));
        assert!(!latch.observe(false, 0.5, 0.1));
        assert!(!latch.is_visible());

        assert!(latch.observe(true, 0.1, 0.1));
        assert!(latch.is_visible());
    }

    #[test]
    fn never_reverts_after_leaving_and_reentering() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(true, 0.8, 0.1));

        // element scrolls out, then back in
        assert!(!latch.observe(false, 0.0, 0.1));
        assert!(latch.is_visible());
        assert!(!latch.observe(true, 1.0, 0.1));
        assert!(latch.is_visible());
    }

    #[test]
    fn zero_threshold_accepts_any_intersection() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(true, 0.0, 0.0));
    }

    #[test]
    fn default_options() {
        let options = RevealOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, None);
        assert_eq!(reveal_class(false), "reveal");
        assert_eq!(reveal_class(true), "reveal is-visible");
    }
}
