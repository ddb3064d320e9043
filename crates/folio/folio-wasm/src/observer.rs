//! IntersectionObserver binding for one-shot section reveals.

use std::cell::Cell;
use std::rc::Rc;

use folio_core::{HandleId, ResourceKind, SectionId};
use js_sys::{Array, Function};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::{js_error, release_handle, SharedLedger, SharedSite};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Observes one section until it is revealed, then disconnects itself.
pub struct SectionObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
    handle: Rc<Cell<Option<HandleId>>>,
    ledger: SharedLedger,
}

impl SectionObserver {
    pub fn mount(
        site: &SharedSite,
        ledger: &SharedLedger,
        section: SectionId,
        element: &Element,
        on_reveal: Option<Function>,
    ) -> Result<Self, JsError> {
        let threshold = site.borrow().visibility_threshold(section);
        let handle: Rc<Cell<Option<HandleId>>> = Rc::new(Cell::new(None));

        let cb_site = site.clone();
        let cb_ledger = ledger.clone();
        let cb_handle = handle.clone();
        let callback = ObserverCallback::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let revealed = cb_site.borrow_mut().observe_section(
                    section,
                    entry.intersection_ratio() as f32,
                    entry.is_intersecting(),
                );
                if !revealed {
                    continue;
                }
                observer.unobserve(&entry.target());
                observer.disconnect();
                if let Some(id) = cb_handle.take() {
                    release_handle(&cb_ledger, id);
                }
                if let Some(f) = &on_reveal {
                    let arg = JsValue::from_str(section.as_str());
                    if let Err(e) = f.call1(&JsValue::UNDEFINED, &arg) {
                        log::warn!("on_reveal callback for `{section}` threw: {e:?}");
                    }
                }
                break;
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(f64::from(threshold)));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| js_error("IntersectionObserver", e))?;
        observer.observe(element);
        handle.set(Some(
            ledger
                .borrow_mut()
                .register(ResourceKind::Observer, section.as_str()),
        ));
        log::debug!("observing `{section}` at threshold {threshold}");

        Ok(Self {
            observer,
            _callback: callback,
            handle,
            ledger: ledger.clone(),
        })
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
        if let Some(id) = self.handle.take() {
            release_handle(&self.ledger, id);
        }
    }
}
