//! Small helpers shared by the browser drivers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_core::{HandleId, ResourceKind, ResourceLedger, Site};
use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, EventTarget, Window};

pub type SharedSite = Rc<RefCell<Site>>;
pub type SharedLedger = Rc<RefCell<ResourceLedger>>;

pub(crate) fn window() -> Result<Window, JsError> {
    web_sys::window().ok_or_else(|| JsError::new("no global `window`"))
}

pub(crate) fn document(window: &Window) -> Result<Document, JsError> {
    window
        .document()
        .ok_or_else(|| JsError::new("window has no document"))
}

pub(crate) fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

pub(crate) fn js_error(context: &str, err: JsValue) -> JsError {
    JsError::new(&format!("{context}: {err:?}"))
}

/// `'ontouchstart' in window || navigator.maxTouchPoints > 0`
pub(crate) fn is_touch_device(window: &Window) -> bool {
    let touch_events =
        js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    touch_events || window.navigator().max_touch_points() > 0
}

/// Release a ledger entry without panicking if the ledger is mid-borrow.
pub(crate) fn release_handle(ledger: &SharedLedger, id: HandleId) {
    match ledger.try_borrow_mut() {
        Ok(mut l) => {
            if let Err(e) = l.release(id) {
                log::warn!("ledger: {e}");
            }
        }
        Err(_) => log::error!("ledger busy; handle {id:?} not released"),
    }
}

/// A browser resource paired with its ledger entry. The `gloo` types cancel
/// themselves on drop; the ledger entry goes with them.
pub(crate) struct Tracked<T> {
    _resource: T,
    handle: Cell<Option<HandleId>>,
    ledger: SharedLedger,
}

impl<T> Tracked<T> {
    pub(crate) fn new(resource: T, kind: ResourceKind, owner: &str, ledger: &SharedLedger) -> Self {
        let id = ledger.borrow_mut().register(kind, owner);
        Self {
            _resource: resource,
            handle: Cell::new(Some(id)),
            ledger: ledger.clone(),
        }
    }

    /// Release the ledger entry while keeping the resource, e.g. once a timeout fired.
    pub(crate) fn release(&self) {
        if let Some(id) = self.handle.take() {
            release_handle(&self.ledger, id);
        }
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Passive event listener, removed on drop.
pub(crate) type Listener = Tracked<EventListener>;

pub(crate) fn listen(
    target: &EventTarget,
    event: &'static str,
    owner: &str,
    ledger: &SharedLedger,
    f: impl FnMut(&Event) + 'static,
) -> Listener {
    Tracked::new(
        EventListener::new(target, event, f),
        ResourceKind::Listener,
        owner,
        ledger,
    )
}
