//! One-shot splash timeout with ledger bookkeeping.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::ResourceKind;
use gloo::timers::callback::Timeout as GlooTimeout;
use js_sys::Function;
use wasm_bindgen::JsValue;

use crate::dom::{SharedLedger, Tracked};

pub struct Timeout {
    _inner: Rc<RefCell<Option<Tracked<GlooTimeout>>>>,
}

impl Timeout {
    /// Call `callback` once after `delay_ms`. Dropping the timeout before it fires
    /// cancels it; once fired its ledger entry is released.
    pub fn schedule(
        ledger: &SharedLedger,
        owner: &str,
        delay_ms: u32,
        callback: Function,
    ) -> Self {
        let slot: Rc<RefCell<Option<Tracked<GlooTimeout>>>> = Rc::new(RefCell::new(None));
        let fired = Rc::downgrade(&slot);
        let timeout = GlooTimeout::new(delay_ms, move || {
            if let Some(slot) = fired.upgrade() {
                if let Some(t) = slot.borrow().as_ref() {
                    t.release();
                }
            }
            if let Err(e) = callback.call0(&JsValue::UNDEFINED) {
                log::warn!("timeout callback threw: {e:?}");
            }
        });
        *slot.borrow_mut() = Some(Tracked::new(timeout, ResourceKind::Timeout, owner, ledger));
        Self { _inner: slot }
    }
}
