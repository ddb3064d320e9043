//! Reveal animator: maps (visible, ordinal) to a resting or offset style.
//!
//! Everything here is a pure function of its inputs so the staggered entrance of a
//! section can be checked without timers or a DOM.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// Where a hidden element sits before it is revealed.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealOffset {
    pub axis: Axis,
    /// Signed distance; positive moves down (Y) or right (X).
    pub distance_px: f32,
}

impl RevealOffset {
    pub const SMALL_Y: RevealOffset = RevealOffset::y(16.0);
    pub const MEDIUM_Y: RevealOffset = RevealOffset::y(32.0);
    pub const LARGE_Y: RevealOffset = RevealOffset::y(64.0);

    pub const fn x(distance_px: f32) -> Self {
        Self {
            axis: Axis::X,
            distance_px,
        }
    }

    pub const fn y(distance_px: f32) -> Self {
        Self {
            axis: Axis::Y,
            distance_px,
        }
    }
}

/// Delay schedule for a run of sibling elements.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stagger {
    pub base_delay_ms: u32,
    pub step_delay_ms: u32,
    pub offset: RevealOffset,
}

impl Stagger {
    pub const fn new(base_delay_ms: u32, step_delay_ms: u32, offset: RevealOffset) -> Self {
        Self {
            base_delay_ms,
            step_delay_ms,
            offset,
        }
    }

    #[inline]
    pub fn style(&self, visible: bool, ordinal: usize) -> RevealStyle {
        reveal_style(
            visible,
            ordinal,
            self.base_delay_ms,
            self.step_delay_ms,
            self.offset,
        )
    }
}

/// Output of the animator; hosts turn this into inline styles.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealStyle {
    pub opacity: f32,
    pub axis: Axis,
    pub translate_px: f32,
    pub delay_ms: u32,
}

impl RevealStyle {
    pub fn transform(&self) -> String {
        match self.axis {
            Axis::X => format!("translateX({}px)", self.translate_px),
            Axis::Y => format!("translateY({}px)", self.translate_px),
        }
    }

    /// Inline CSS declarations: `opacity`, `transform` and `transition-delay`.
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: {}; transition-delay: {}ms",
            self.opacity,
            self.transform(),
            self.delay_ms
        )
    }
}

/// The delay is `base + ordinal * step` in both states so an element never jumps
/// ahead of its predecessors. Saturates instead of overflowing on absurd ordinals.
pub fn reveal_style(
    visible: bool,
    ordinal: usize,
    base_delay_ms: u32,
    step_delay_ms: u32,
    offset: RevealOffset,
) -> RevealStyle {
    let ordinal = u32::try_from(ordinal).unwrap_or(u32::MAX);
    let delay_ms = base_delay_ms.saturating_add(ordinal.saturating_mul(step_delay_ms));
    if visible {
        RevealStyle {
            opacity: 1.0,
            axis: offset.axis,
            translate_px: 0.0,
            delay_ms,
        }
    } else {
        RevealStyle {
            opacity: 0.0,
            axis: offset.axis,
            translate_px: offset.distance_px,
            delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_for_hidden_and_visible() {
        let s = Stagger::new(400, 100, RevealOffset::LARGE_Y);
        assert_eq!(
            s.style(false, 0).to_css(),
            "opacity: 0; transform: translateY(64px); transition-delay: 400ms"
        );
        assert_eq!(
            s.style(true, 2).to_css(),
            "opacity: 1; transform: translateY(0px); transition-delay: 600ms"
        );
    }

    #[test]
    fn huge_ordinal_saturates() {
        let s = reveal_style(true, usize::MAX, 10, 10, RevealOffset::x(-20.0));
        assert_eq!(s.delay_ms, u32::MAX);
        assert_eq!(s.axis, Axis::X);
    }
}
