//! Site: owns every piece of page state and routes host input to it.
//!
//! Methods:
//! - theme: load_theme, toggle_theme
//! - visibility: observe_section, is_visible, reveal_style
//! - hero: start_typing, typing_tick, parallax
//! - cursor: set_pointer_mode, pointer_sample, pointer_tick, hover_enter/leave
//! - nav: nav_scroll, toggle_menu, navigate
//! - projects: set_project_filter, visible_projects
//! - contact: contact_set, begin_submit, finish_submit, submit_contact
//!
//! State changes the host has to react to are queued as [`SiteEvent`]s.

use crate::config::Config;
use crate::contact::{
    ContactDraft, ContactField, ContactForm, EmailRequest, EmailTransport, Notification,
};
use crate::content::{filter_projects, ProjectFilter, ProjectRecord};
use crate::error::ContactError;
use crate::events::{EventQueue, SiteEvent};
use crate::ids::SectionId;
use crate::nav::{Nav, NavState};
use crate::pointer::{
    CursorFrame, HoverKey, ParallaxTilt, PointerMode, PointerTracker, Rect, Vec2,
};
use crate::reveal::RevealStyle;
use crate::theme::{Theme, ThemeStorage, ThemeStore};
use crate::typing::{TypingSimulator, TypingStep};
use crate::visibility::VisibilityBoard;

#[derive(Debug)]
pub struct Site {
    cfg: Config,
    visibility: VisibilityBoard,
    theme: ThemeStore,
    nav: Nav,
    contact: ContactForm,
    typing: TypingSimulator,
    pointer: PointerTracker,
    project_filter: ProjectFilter,
    events: EventQueue,
}

impl Site {
    pub fn new(cfg: Config, storage: Box<dyn ThemeStorage>) -> Self {
        Self {
            visibility: VisibilityBoard::new(&cfg.visibility),
            theme: ThemeStore::new(&cfg.theme, storage),
            nav: Nav::new(&cfg.nav),
            contact: ContactForm::new(cfg.email.clone()),
            typing: TypingSimulator::new(cfg.typing.text.clone()),
            pointer: PointerTracker::new(&cfg.pointer),
            project_filter: ProjectFilter::All,
            events: EventQueue::with_capacity(cfg.max_queued_events),
            cfg,
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn drain_events(&mut self) -> Vec<SiteEvent> {
        self.events.drain()
    }

    // --- theme ---

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    /// Direct access for subscribing views.
    pub fn theme_store_mut(&mut self) -> &mut ThemeStore {
        &mut self.theme
    }

    pub fn load_theme(&mut self, system_prefers_dark: bool) -> Theme {
        let theme = self.theme.load(system_prefers_dark);
        self.events.push(SiteEvent::ThemeChanged { theme });
        theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.theme.toggle();
        self.events.push(SiteEvent::ThemeChanged { theme });
        theme
    }

    // --- visibility ---

    /// Returns true only for the observation that revealed the section.
    pub fn observe_section(&mut self, section: SectionId, ratio: f32, intersecting: bool) -> bool {
        let revealed = self.visibility.observe(section, ratio, intersecting).is_some();
        if revealed {
            self.events.push(SiteEvent::SectionRevealed { section });
        }
        revealed
    }

    pub fn is_visible(&self, section: SectionId) -> bool {
        self.visibility.is_visible(section)
    }

    pub fn visibility_threshold(&self, section: SectionId) -> f32 {
        self.visibility.threshold(section)
    }

    /// Style of the `ordinal`-th card in `section`, using the section's stagger preset.
    pub fn reveal_style(&self, section: SectionId, ordinal: usize) -> RevealStyle {
        self.cfg
            .reveal
            .stagger_for(section)
            .style(self.is_visible(section), ordinal)
    }

    // --- hero ---

    pub fn start_typing(&mut self) -> bool {
        self.typing.start()
    }

    pub fn typing_tick(&mut self) -> TypingStep {
        let step = self.typing.tick();
        if step == TypingStep::Finished {
            self.events.push(SiteEvent::TypingFinished);
        }
        step
    }

    pub fn typed_text(&self) -> &str {
        self.typing.displayed()
    }

    pub fn typing(&self) -> &TypingSimulator {
        &self.typing
    }

    pub fn parallax(&self, pointer: Vec2, rect: Rect) -> ParallaxTilt {
        ParallaxTilt::from_pointer(pointer, rect, self.cfg.pointer.parallax_scale)
    }

    // --- cursor ---

    pub fn set_pointer_mode(&mut self, mode: PointerMode) {
        if self.pointer.set_mode(mode) {
            self.events.push(SiteEvent::PointerModeChanged { mode });
        }
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn pointer_sample(&mut self, x: f32, y: f32) {
        self.pointer.sample(x, y);
    }

    pub fn pointer_tick(&mut self) -> Option<CursorFrame> {
        self.pointer.tick()
    }

    pub fn hover_enter(&mut self, key: HoverKey) {
        self.pointer.enter(key);
    }

    pub fn hover_leave(&mut self, key: HoverKey) {
        self.pointer.leave(key);
    }

    // --- nav ---

    pub fn nav_state(&self) -> NavState {
        self.nav.state()
    }

    pub fn nav_scroll(&mut self, scroll_y: f64) -> bool {
        let changed = self.nav.on_scroll(scroll_y);
        if changed {
            self.events.push(SiteEvent::NavChanged {
                state: self.nav.state(),
            });
        }
        changed
    }

    pub fn toggle_menu(&mut self) -> bool {
        let open = self.nav.toggle_menu();
        self.events.push(SiteEvent::NavChanged {
            state: self.nav.state(),
        });
        open
    }

    pub fn navigate(&mut self, section: SectionId) -> String {
        let was_open = self.nav.state().menu_open;
        let anchor = self.nav.navigate(section);
        if was_open {
            self.events.push(SiteEvent::NavChanged {
                state: self.nav.state(),
            });
        }
        anchor
    }

    // --- projects ---

    pub fn project_filter(&self) -> ProjectFilter {
        self.project_filter
    }

    pub fn set_project_filter(&mut self, filter: ProjectFilter) {
        self.project_filter = filter;
    }

    pub fn visible_projects(&self) -> Vec<&'static ProjectRecord> {
        filter_projects(self.project_filter)
    }

    // --- contact ---

    pub fn contact_draft(&self) -> &ContactDraft {
        self.contact.draft()
    }

    pub fn contact_set(&mut self, field: ContactField, value: impl Into<String>) {
        self.contact.set(field, value);
    }

    pub fn is_submitting(&self) -> bool {
        self.contact.is_submitting()
    }

    pub fn begin_submit(&mut self) -> Result<EmailRequest, ContactError> {
        self.contact.begin_submit()
    }

    pub fn finish_submit(
        &mut self,
        outcome: Result<(), ContactError>,
    ) -> Result<Notification, ContactError> {
        let notification = self.contact.finish(outcome)?;
        self.events.push(SiteEvent::Notified {
            notification: notification.clone(),
        });
        Ok(notification)
    }

    pub async fn submit_contact<T: EmailTransport>(
        &mut self,
        transport: &T,
    ) -> Result<Notification, ContactError> {
        let request = self.begin_submit()?;
        let outcome = transport.send(&request).await;
        self.finish_submit(outcome)
    }
}
