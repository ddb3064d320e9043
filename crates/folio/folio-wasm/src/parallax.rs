//! Mouse-driven tilt of the hero code card.

use folio_core::{Rect, Vec2};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, MouseEvent};

use crate::dom::{listen, Listener, SharedLedger, SharedSite};

const OWNER: &str = "parallax";

pub struct ParallaxDriver {
    _listener: Listener,
}

impl ParallaxDriver {
    /// Tilt `card` while the pointer moves over `hero`. The tilt is recomputed from
    /// the hero's current bounding box on every event.
    pub fn mount(
        site: &SharedSite,
        ledger: &SharedLedger,
        hero: &Element,
        card: HtmlElement,
    ) -> Self {
        let cb_site = site.clone();
        let bounds = hero.clone();
        let listener = listen(hero, "mousemove", OWNER, ledger, move |event: &Event| {
            let Some(e) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let r = bounds.get_bounding_client_rect();
            let rect = Rect {
                left: r.left() as f32,
                top: r.top() as f32,
                width: r.width() as f32,
                height: r.height() as f32,
            };
            let pointer = Vec2::new(e.client_x() as f32, e.client_y() as f32);
            let tilt = cb_site.borrow().parallax(pointer, rect);
            if let Err(e) = card.style().set_property("transform", &tilt.transform()) {
                log::warn!("parallax transform failed: {e:?}");
            }
        });
        Self {
            _listener: listener,
        }
    }
}
