//! Navigation bar state: solid-on-scroll and the mobile menu.

use serde::{Deserialize, Serialize};

use crate::config::NavCfg;
use crate::ids::SectionId;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

#[derive(Clone, Debug)]
pub struct Nav {
    threshold_px: f64,
    state: NavState,
}

impl Nav {
    pub fn new(cfg: &NavCfg) -> Self {
        Self {
            threshold_px: cfg.scroll_threshold_px,
            state: NavState::default(),
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    /// Returns true when the scrolled flag flipped.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > self.threshold_px;
        let changed = scrolled != self.state.scrolled;
        self.state.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.state.menu_open = !self.state.menu_open;
        self.state.menu_open
    }

    pub fn close_menu(&mut self) {
        self.state.menu_open = false;
    }

    /// Link click: closes the mobile menu and returns the anchor to scroll to.
    pub fn navigate(&mut self, section: SectionId) -> String {
        self.close_menu();
        section.anchor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_flips_past_threshold_only() {
        let mut nav = Nav::new(&NavCfg::default());
        assert!(!nav.on_scroll(100.0));
        assert!(!nav.state().scrolled);
        assert!(nav.on_scroll(100.5));
        assert!(nav.state().scrolled);
        assert!(!nav.on_scroll(400.0));
        assert!(nav.on_scroll(0.0));
    }

    #[test]
    fn navigate_closes_menu() {
        let mut nav = Nav::new(&NavCfg::default());
        assert!(nav.toggle_menu());
        assert_eq!(nav.navigate(SectionId::Contact), "#contact");
        assert!(!nav.state().menu_open);
    }
}
