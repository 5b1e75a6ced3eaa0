use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use js_sys::Array;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use portfolio::visibility::{Intersection, ObserveCapability, Threshold, Watch};

// a live IntersectionObserver together with the js closure it calls into
//
// both have to outlive the registration, and the observer must be disconnected before the
// closure is freed
pub struct IntersectionWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub struct BrowserObserver;

impl ObserveCapability for BrowserObserver {
    type Handle = IntersectionWatch;

    fn observe(
        &self,
        region: &str,
        threshold: Threshold,
        mut on_event: Box<dyn FnMut(Intersection)>,
    ) -> Option<IntersectionWatch> {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(region))
        else {
            debug!(region, "region not in document");
            return None;
        };

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_event(Intersection {
                            is_intersecting: entry.is_intersecting(),
                            ratio: entry.intersection_ratio(),
                        });
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold.value()));

        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            {
                Ok(observer) => observer,
                Err(err) => {
                    warn!("IntersectionObserver unavailable: {err:?}");
                    return None;
                }
            };

        observer.observe(&element);

        Some(IntersectionWatch {
            observer,
            _callback: callback,
        })
    }
}

// one-shot "has this section been seen" signal for the element with id `region`
//
// the observation starts after the first render, once the element exists, and is released
// when the component unmounts
pub fn use_visibility(region: &'static str, threshold: Threshold) -> ReadOnlySignal<bool> {
    let mut visible = use_signal(|| false);
    let slot = use_hook(|| Rc::new(RefCell::new(None::<Watch<IntersectionWatch>>)));

    let effect_slot = slot.clone();
    use_effect(move || {
        let mut current = effect_slot.borrow_mut();
        if current.is_none() {
            *current = Some(Watch::start(&BrowserObserver, region, threshold, move || {
                visible.set(true)
            }));
        }
    });

    use_drop(move || {
        slot.borrow_mut().take();
    });

    visible.into()
}
