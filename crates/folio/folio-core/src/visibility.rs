//! One-shot visibility triggers.
//!
//! A trigger starts `Armed`, fires on the first observation whose intersection
//! ratio reaches its threshold, and is `Fired` forever after. Hosts stop observing
//! the region as soon as `observe` returns `Some`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::VisibilityCfg;
use crate::ids::SectionId;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityState {
    Armed,
    Fired,
}

/// Returned exactly once per trigger.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Revealed {
    /// Ratio that crossed the threshold.
    pub ratio: f32,
}

#[derive(Clone, Debug)]
pub struct VisibilityTrigger {
    threshold: f32,
    state: VisibilityState,
}

impl VisibilityTrigger {
    pub fn new(threshold: f32) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            state: VisibilityState::Armed,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn state(&self) -> VisibilityState {
        self.state
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.state == VisibilityState::Fired
    }

    /// Feed one intersection observation. Fires at most once; observations after
    /// firing are ignored.
    pub fn observe(&mut self, ratio: f32, intersecting: bool) -> Option<Revealed> {
        if self.state == VisibilityState::Fired {
            return None;
        }
        if intersecting && ratio >= self.threshold {
            self.state = VisibilityState::Fired;
            Some(Revealed { ratio })
        } else {
            None
        }
    }
}

/// One trigger per page section.
#[derive(Clone, Debug)]
pub struct VisibilityBoard {
    triggers: BTreeMap<SectionId, VisibilityTrigger>,
}

impl VisibilityBoard {
    pub fn new(cfg: &VisibilityCfg) -> Self {
        let triggers = SectionId::ALL
            .into_iter()
            .map(|id| (id, VisibilityTrigger::new(cfg.threshold_for(id))))
            .collect();
        Self { triggers }
    }

    pub fn observe(
        &mut self,
        section: SectionId,
        ratio: f32,
        intersecting: bool,
    ) -> Option<Revealed> {
        let revealed = self
            .triggers
            .get_mut(&section)
            .and_then(|t| t.observe(ratio, intersecting));
        if revealed.is_some() {
            log::debug!("section `{section}` revealed at ratio {ratio:.2}");
        }
        revealed
    }

    pub fn is_visible(&self, section: SectionId) -> bool {
        self.triggers
            .get(&section)
            .map(VisibilityTrigger::is_visible)
            .unwrap_or(false)
    }

    pub fn threshold(&self, section: SectionId) -> f32 {
        self.triggers
            .get(&section)
            .map(VisibilityTrigger::threshold)
            .unwrap_or(0.0)
    }
}
