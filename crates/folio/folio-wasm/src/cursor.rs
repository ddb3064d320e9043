//! Custom cursor: pointer sampling, the per-frame follower loop and hover bindings.
//!
//! Hover state is bound per element by the host when it mounts an interactive
//! element; nothing rescans the document.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use folio_core::{CursorFrame, HoverKey, PointerMode, ResourceKind};
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, MouseEvent, Window};

use crate::dom::{is_touch_device, listen, Listener, SharedLedger, SharedSite, Tracked};

const OWNER: &str = "cursor";
const HOVER_OWNER: &str = "hover";

/// The frame loop. Each frame callback holds only a weak reference, so dropping
/// the loop drops the pending frame, which cancels it.
struct FrameLoop {
    site: SharedSite,
    ledger: SharedLedger,
    halo: HtmlElement,
    dot: HtmlElement,
    frame: RefCell<Option<Tracked<AnimationFrame>>>,
}

impl FrameLoop {
    fn schedule(this: &Rc<Self>) {
        let next: Weak<Self> = Rc::downgrade(this);
        let frame = request_animation_frame(move |_| {
            let Some(view) = next.upgrade() else {
                return;
            };
            view.frame.borrow_mut().take();
            let Some(frame) = view.site.borrow_mut().pointer_tick() else {
                log::debug!("cursor loop stopped");
                return;
            };
            apply_frame(&view.halo, &view.dot, &frame);
            FrameLoop::schedule(&view);
        });
        *this.frame.borrow_mut() = Some(Tracked::new(
            frame,
            ResourceKind::AnimationFrame,
            OWNER,
            &this.ledger,
        ));
    }

    fn is_running(&self) -> bool {
        self.frame.borrow().is_some()
    }
}

pub struct CursorDriver {
    site: SharedSite,
    ledger: SharedLedger,
    frame_loop: Option<Rc<FrameLoop>>,
    listeners: Vec<Listener>,
    hover: BTreeMap<HoverKey, [Listener; 2]>,
    next_key: u32,
}

impl CursorDriver {
    /// Start the cursor. On touch devices the elements are hidden, the tracker is
    /// switched off and no listener or frame loop is registered.
    pub fn mount(
        site: &SharedSite,
        ledger: &SharedLedger,
        window: &Window,
        halo: HtmlElement,
        dot: HtmlElement,
    ) -> Self {
        let mut driver = Self {
            site: site.clone(),
            ledger: ledger.clone(),
            frame_loop: None,
            listeners: Vec::new(),
            hover: BTreeMap::new(),
            next_key: 0,
        };

        if is_touch_device(window) {
            site.borrow_mut().set_pointer_mode(PointerMode::Touch);
            hide(&halo);
            hide(&dot);
            return driver;
        }

        let move_site = site.clone();
        driver.listeners.push(listen(
            window,
            "mousemove",
            OWNER,
            ledger,
            move |event: &Event| {
                if let Some(e) = event.dyn_ref::<MouseEvent>() {
                    move_site
                        .borrow_mut()
                        .pointer_sample(e.client_x() as f32, e.client_y() as f32);
                }
            },
        ));

        // A touch after mount means the device has no fine pointer after all.
        let touch_site = site.clone();
        let touch_halo = halo.clone();
        let touch_dot = dot.clone();
        driver.listeners.push(listen(window, "touchstart", OWNER, ledger, move |_| {
            touch_site.borrow_mut().set_pointer_mode(PointerMode::Touch);
            hide(&touch_halo);
            hide(&touch_dot);
        }));

        let frame_loop = Rc::new(FrameLoop {
            site: site.clone(),
            ledger: ledger.clone(),
            halo,
            dot,
            frame: RefCell::new(None),
        });
        FrameLoop::schedule(&frame_loop);
        driver.frame_loop = Some(frame_loop);
        driver
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.as_ref().is_some_and(|l| l.is_running())
    }

    /// Bind hover tracking to one interactive element. Returns the key to unbind it.
    pub fn bind_hoverable(&mut self, element: &Element) -> u32 {
        let key = HoverKey(self.next_key);
        self.next_key = self.next_key.wrapping_add(1);

        let enter_site = self.site.clone();
        let enter = listen(element, "mouseenter", HOVER_OWNER, &self.ledger, move |_| {
            enter_site.borrow_mut().hover_enter(key);
        });
        let leave_site = self.site.clone();
        let leave = listen(element, "mouseleave", HOVER_OWNER, &self.ledger, move |_| {
            leave_site.borrow_mut().hover_leave(key);
        });
        self.hover.insert(key, [enter, leave]);
        key.0
    }

    /// Remove an element's hover binding. Clears its hover state so the halo never
    /// stays enlarged after the element is gone.
    pub fn unbind_hoverable(&mut self, key: u32) -> bool {
        let key = HoverKey(key);
        let removed = self.hover.remove(&key).is_some();
        if removed {
            self.site.borrow_mut().hover_leave(key);
        }
        removed
    }
}

impl Drop for CursorDriver {
    fn drop(&mut self) {
        let keys: Vec<HoverKey> = self.hover.keys().copied().collect();
        for key in keys {
            self.unbind_hoverable(key.0);
        }
    }
}

fn hide(el: &HtmlElement) {
    if let Err(e) = el.style().set_property("display", "none") {
        log::warn!("could not hide cursor element: {e:?}");
    }
}

fn apply_frame(halo: &HtmlElement, dot: &HtmlElement, frame: &CursorFrame) {
    let size = format!("{}px", frame.halo_size_px);
    let halo_style = halo.style();
    let results = [
        halo_style.set_property("transform", &frame.halo_transform()),
        halo_style.set_property("width", &size),
        halo_style.set_property("height", &size),
        dot.style().set_property("transform", &frame.dot_transform()),
    ];
    if let Some(Err(e)) = results.into_iter().find(Result::is_err) {
        log::warn!("cursor style update failed: {e:?}");
    }
}
