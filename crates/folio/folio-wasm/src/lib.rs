//! Browser bindings for the Folio site.
//!
//! [`FolioSite`] owns a [`folio_core::Site`] and the browser resources (observers,
//! listeners, timers, frame requests) that feed it. Every resource is recorded in a
//! ledger so `teardown()` can be checked with `live_handles()`.

mod cursor;
mod dom;
mod email;
pub mod logger;
mod observer;
mod parallax;
mod storage;
mod timers;
mod typing;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use js_sys::{Function, Promise};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};

use folio_core::{
    reveal_style, site_content, Config, ContactField, EmailTransport, ProjectFilter,
    ResourceLedger, RevealOffset, SectionId, Site, SubscriptionId,
};

use crate::cursor::CursorDriver;
use crate::dom::{
    document, jsvalue_is_undefined_or_null, listen, Listener, SharedLedger, SharedSite,
};
use crate::email::FetchTransport;
use crate::observer::SectionObserver;
use crate::parallax::ParallaxDriver;
use crate::storage::{system_prefers_dark, LocalStorage};
use crate::timers::Timeout;
use crate::typing::TypingDriver;

#[wasm_bindgen(start)]
pub fn on_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
}

fn parse_section(section: &str) -> Result<SectionId, JsError> {
    section.parse().map_err(|e: String| JsError::new(&e))
}

#[wasm_bindgen]
pub struct FolioSite {
    site: SharedSite,
    ledger: SharedLedger,
    window: Window,
    sections: BTreeMap<SectionId, SectionObserver>,
    cursor: Option<CursorDriver>,
    typing: Option<TypingDriver>,
    parallax: Option<ParallaxDriver>,
    scroll: Option<Listener>,
    splash: Option<Timeout>,
    theme_subscription: Option<SubscriptionId>,
}

#[wasm_bindgen]
impl FolioSite {
    /// Create the site. Pass a JSON config object or undefined/null for defaults.
    /// Example:
    ///   new FolioSite({ typing: { interval_ms: 80 } })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<FolioSite, JsError> {
        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        cfg.validate()
            .map_err(|e| JsError::new(&format!("config error: {e}")))?;

        let window = dom::window()?;
        let dark_class = cfg.theme.dark_class.clone();
        let mut site = Site::new(cfg, Box::new(LocalStorage::new(&window)));

        // The root element carries the dark class whenever the theme changes.
        let root = document(&window)?.document_element();
        let theme_subscription = root.map(|root| {
            site.theme_store_mut().subscribe(move |theme| {
                if let Err(e) = root
                    .class_list()
                    .toggle_with_force(&dark_class, theme.is_dark())
                {
                    log::warn!("could not update root class: {e:?}");
                }
            })
        });

        Ok(FolioSite {
            site: Rc::new(RefCell::new(site)),
            ledger: Rc::new(RefCell::new(ResourceLedger::new())),
            window,
            sections: BTreeMap::new(),
            cursor: None,
            typing: None,
            parallax: None,
            scroll: None,
            splash: None,
            theme_subscription,
        })
    }

    /// Static page content: projects, skills, education, interests, nav and social links.
    #[wasm_bindgen]
    pub fn content(&self) -> Result<JsValue, JsError> {
        swb::to_value(&site_content()).map_err(|e| JsError::new(&format!("content error: {e}")))
    }

    // --- theme ---

    /// Resolve the initial theme from storage or the system preference. Returns
    /// `"dark"` or `"light"`.
    #[wasm_bindgen(js_name = load_theme)]
    pub fn load_theme(&mut self) -> String {
        let prefers_dark = system_prefers_dark(&self.window);
        let theme = self.site.borrow_mut().load_theme(prefers_dark);
        theme.as_str().to_string()
    }

    #[wasm_bindgen(js_name = toggle_theme)]
    pub fn toggle_theme(&mut self) -> String {
        let theme = self.site.borrow_mut().toggle_theme();
        theme.as_str().to_string()
    }

    #[wasm_bindgen]
    pub fn theme(&self) -> String {
        self.site.borrow().theme().as_str().to_string()
    }

    // --- sections ---

    /// Watch a section until it first becomes visible. `element` defaults to the
    /// element whose id is the section name. `on_reveal(section)` is called once.
    /// Returns false when the section has already been revealed.
    #[wasm_bindgen(js_name = mount_section)]
    pub fn mount_section(
        &mut self,
        section: &str,
        element: Option<Element>,
        on_reveal: Option<Function>,
    ) -> Result<bool, JsError> {
        let section = parse_section(section)?;
        if self.site.borrow().is_visible(section) {
            return Ok(false);
        }
        let element = match element {
            Some(el) => el,
            None => document(&self.window)?
                .get_element_by_id(section.as_str())
                .ok_or_else(|| JsError::new(&format!("no element with id `{section}`")))?,
        };
        // Remounting replaces the previous observer; its drop releases the handle.
        self.sections.remove(&section);
        let observer =
            SectionObserver::mount(&self.site, &self.ledger, section, &element, on_reveal)?;
        self.sections.insert(section, observer);
        Ok(true)
    }

    #[wasm_bindgen(js_name = is_visible)]
    pub fn is_visible(&self, section: &str) -> Result<bool, JsError> {
        Ok(self.site.borrow().is_visible(parse_section(section)?))
    }

    /// Inline CSS for the `ordinal`-th staggered child of a section in its current state.
    #[wasm_bindgen(js_name = reveal_style)]
    pub fn reveal_style(&self, section: &str, ordinal: u32) -> Result<String, JsError> {
        let section = parse_section(section)?;
        Ok(self
            .site
            .borrow()
            .reveal_style(section, ordinal as usize)
            .to_css())
    }

    // --- hero ---

    /// Start the custom cursor. Touch devices get no cursor and no frame loop.
    #[wasm_bindgen(js_name = mount_cursor)]
    pub fn mount_cursor(&mut self, halo: HtmlElement, dot: HtmlElement) {
        self.cursor = None;
        self.cursor = Some(CursorDriver::mount(
            &self.site,
            &self.ledger,
            &self.window,
            halo,
            dot,
        ));
    }

    /// Enlarge the cursor halo while the pointer is over `element`. Returns a key
    /// for `unbind_hoverable`.
    #[wasm_bindgen(js_name = bind_hoverable)]
    pub fn bind_hoverable(&mut self, element: &Element) -> Result<u32, JsError> {
        let cursor = self
            .cursor
            .as_mut()
            .ok_or_else(|| JsError::new("bind_hoverable: cursor not mounted"))?;
        Ok(cursor.bind_hoverable(element))
    }

    #[wasm_bindgen(js_name = unbind_hoverable)]
    pub fn unbind_hoverable(&mut self, key: u32) -> bool {
        match self.cursor.as_mut() {
            Some(cursor) => cursor.unbind_hoverable(key),
            None => false,
        }
    }

    #[wasm_bindgen(js_name = cursor_running)]
    pub fn cursor_running(&self) -> bool {
        self.cursor.as_ref().is_some_and(CursorDriver::is_running)
    }

    /// Type the configured subtitle into `element`. Mounting again never restarts
    /// it; after a teardown it resumes from the last shown character.
    #[wasm_bindgen(js_name = mount_typing)]
    pub fn mount_typing(&mut self, element: Element) {
        if self.typing.is_some() {
            return;
        }
        self.typing = Some(TypingDriver::mount(&self.site, &self.ledger, element));
    }

    #[wasm_bindgen(js_name = typed_text)]
    pub fn typed_text(&self) -> String {
        self.site.borrow().typed_text().to_string()
    }

    #[wasm_bindgen(js_name = typing_running)]
    pub fn typing_running(&self) -> bool {
        self.typing.as_ref().is_some_and(TypingDriver::is_running)
    }

    #[wasm_bindgen(js_name = mount_parallax)]
    pub fn mount_parallax(&mut self, hero: &Element, card: HtmlElement) {
        self.parallax = None;
        self.parallax = Some(ParallaxDriver::mount(&self.site, &self.ledger, hero, card));
    }

    // --- nav ---

    /// Track window scroll. `on_change(state)` receives `{ scrolled, menu_open }`
    /// whenever the scrolled flag flips, and once at mount when the page is
    /// already scrolled.
    #[wasm_bindgen(js_name = mount_nav)]
    pub fn mount_nav(&mut self, on_change: Option<Function>) {
        self.scroll = None;
        let site = self.site.clone();
        let window = self.window.clone();
        let notify = on_change.clone();
        let listener = listen(&self.window, "scroll", "nav", &self.ledger, move |_| {
            let y = window.scroll_y().unwrap_or(0.0);
            let changed = site.borrow_mut().nav_scroll(y);
            if changed {
                notify_nav(&site, notify.as_ref());
            }
        });
        self.scroll = Some(listener);

        let y = self.window.scroll_y().unwrap_or(0.0);
        self.site.borrow_mut().nav_scroll(y);
        if self.site.borrow().nav_state().scrolled {
            notify_nav(&self.site, on_change.as_ref());
        }
    }

    #[wasm_bindgen(js_name = nav_state)]
    pub fn nav_state(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.site.borrow().nav_state())
            .map_err(|e| JsError::new(&format!("nav state error: {e}")))
    }

    /// Returns whether the mobile menu is now open.
    #[wasm_bindgen(js_name = toggle_menu)]
    pub fn toggle_menu(&mut self) -> bool {
        self.site.borrow_mut().toggle_menu()
    }

    /// Close the mobile menu and smooth-scroll to a section. Returns its anchor.
    #[wasm_bindgen]
    pub fn navigate(&mut self, section: &str) -> Result<String, JsError> {
        let section = parse_section(section)?;
        let anchor = self.site.borrow_mut().navigate(section);
        match document(&self.window)?.get_element_by_id(section.as_str()) {
            Some(el) => {
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                el.scroll_into_view_with_scroll_into_view_options(&opts);
            }
            None => log::warn!("navigate: no element for `{anchor}`"),
        }
        Ok(anchor)
    }

    // --- projects ---

    /// `filter` is `"all"`, `"academic"`, `"personal"` or `"hackathon"`.
    #[wasm_bindgen(js_name = set_project_filter)]
    pub fn set_project_filter(&mut self, filter: &str) -> Result<(), JsError> {
        let filter: ProjectFilter = filter.parse().map_err(|e: String| JsError::new(&e))?;
        self.site.borrow_mut().set_project_filter(filter);
        Ok(())
    }

    #[wasm_bindgen(js_name = visible_projects)]
    pub fn visible_projects(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.site.borrow().visible_projects())
            .map_err(|e| JsError::new(&format!("projects error: {e}")))
    }

    // --- contact ---

    #[wasm_bindgen(js_name = set_field)]
    pub fn set_field(&mut self, field: &str, value: String) -> Result<(), JsError> {
        let field: ContactField = field.parse().map_err(|e: String| JsError::new(&e))?;
        self.site.borrow_mut().contact_set(field, value);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn draft(&self) -> Result<JsValue, JsError> {
        swb::to_value(self.site.borrow().contact_draft())
            .map_err(|e| JsError::new(&format!("draft error: {e}")))
    }

    #[wasm_bindgen(js_name = is_submitting)]
    pub fn is_submitting(&self) -> bool {
        self.site.borrow().is_submitting()
    }

    /// Send the draft through EmailJS. Resolves to the notification to show
    /// (`{ level, title, description }`); delivery failures resolve with an error
    /// notification. Rejects only when the draft is incomplete or a submission is
    /// already in flight.
    #[wasm_bindgen(js_name = submit_contact)]
    pub fn submit_contact(&self) -> Promise {
        let site = self.site.clone();
        let transport = FetchTransport::new(&self.window);
        future_to_promise(async move {
            let request = site
                .borrow_mut()
                .begin_submit()
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            let outcome = transport.send(&request).await;
            let notification = site
                .borrow_mut()
                .finish_submit(outcome)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            swb::to_value(&notification).map_err(JsValue::from)
        })
    }

    // --- lifecycle ---

    /// Call `callback` once the splash delay has elapsed.
    #[wasm_bindgen(js_name = after_loading)]
    pub fn after_loading(&mut self, callback: Function) {
        let delay = self.site.borrow().config().loading_ms;
        self.splash = None;
        self.splash = Some(Timeout::schedule(&self.ledger, "splash", delay, callback));
    }

    /// Events since the last drain, e.g. `{ type: "section_revealed", section: "about" }`.
    #[wasm_bindgen(js_name = drain_events)]
    pub fn drain_events(&mut self) -> Result<JsValue, JsError> {
        let events = self.site.borrow_mut().drain_events();
        swb::to_value(&events).map_err(|e| JsError::new(&format!("events error: {e}")))
    }

    /// Browser resources currently held (observers, listeners, timers, frame requests).
    #[wasm_bindgen(js_name = live_handles)]
    pub fn live_handles(&self) -> u32 {
        u32::try_from(self.ledger.borrow().live_count()).unwrap_or(u32::MAX)
    }

    /// Release every browser resource. The site state itself is kept.
    #[wasm_bindgen]
    pub fn teardown(&mut self) {
        self.sections.clear();
        self.cursor = None;
        self.typing = None;
        self.parallax = None;
        self.scroll = None;
        self.splash = None;
        if let Some(id) = self.theme_subscription.take() {
            self.site.borrow_mut().theme_store_mut().unsubscribe(id);
        }
        let leaked: Vec<String> = self
            .ledger
            .borrow()
            .live_records()
            .map(|r| format!("{:?}:{}", r.kind, r.owner))
            .collect();
        if leaked.is_empty() {
            log::debug!("teardown complete");
        } else {
            log::warn!("teardown left live handles: {}", leaked.join(", "));
        }
    }
}

fn notify_nav(site: &SharedSite, on_change: Option<&Function>) {
    let Some(f) = on_change else { return };
    let state = site.borrow().nav_state();
    match swb::to_value(&state) {
        Ok(v) => {
            if let Err(e) = f.call1(&JsValue::UNDEFINED, &v) {
                log::warn!("nav on_change threw: {e:?}");
            }
        }
        Err(e) => log::error!("nav state: {e}"),
    }
}

/// Stagger CSS for an arbitrary element, outside any configured section.
#[wasm_bindgen]
pub fn reveal_css(
    visible: bool,
    ordinal: u32,
    base_ms: u32,
    step_ms: u32,
    offset_px: f32,
) -> String {
    reveal_style(
        visible,
        ordinal as usize,
        base_ms,
        step_ms,
        RevealOffset::y(offset_px),
    )
    .to_css()
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
