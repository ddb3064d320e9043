//! Interval driver for the hero typing effect.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_core::{ResourceKind, TypingPhase, TypingStep};
use gloo::timers::callback::Interval;
use web_sys::Element;

use crate::dom::{SharedLedger, SharedSite, Tracked};

const OWNER: &str = "typing";

type IntervalSlot = Rc<RefCell<Option<Tracked<Interval>>>>;

pub struct TypingDriver {
    interval: IntervalSlot,
}

impl TypingDriver {
    /// Type into `element`, one character per configured interval. A fresh
    /// simulator is started; one already typing resumes where it stopped; a
    /// finished one just shows its text. The interval cancels itself after the
    /// last character.
    pub fn mount(site: &SharedSite, ledger: &SharedLedger, element: Element) -> Self {
        let slot: IntervalSlot = Rc::new(RefCell::new(None));
        if site.borrow().typing().phase() == TypingPhase::Idle {
            site.borrow_mut().start_typing();
        }
        element.set_text_content(Some(site.borrow().typed_text()));
        if site.borrow().typing().phase() != TypingPhase::Typing {
            log::debug!("typing already finished");
            return Self { interval: slot };
        }

        let interval_ms = site.borrow().config().typing.interval_ms;
        let tick_site = site.clone();
        let tick_slot: Weak<RefCell<Option<Tracked<Interval>>>> = Rc::downgrade(&slot);
        let interval = Interval::new(interval_ms, move || {
            let step = tick_site.borrow_mut().typing_tick();
            match step {
                TypingStep::Advanced { .. } => {
                    element.set_text_content(Some(tick_site.borrow().typed_text()));
                }
                TypingStep::Finished => {
                    element.set_text_content(Some(tick_site.borrow().typed_text()));
                    if let Some(slot) = tick_slot.upgrade() {
                        slot.borrow_mut().take();
                    }
                }
                TypingStep::Ignored => {}
            }
        });
        *slot.borrow_mut() = Some(Tracked::new(
            interval,
            ResourceKind::Interval,
            OWNER,
            ledger,
        ));
        Self { interval: slot }
    }

    pub fn is_running(&self) -> bool {
        self.interval.borrow().is_some()
    }
}
