//! Pointer tracking for the decorative cursor and the hero parallax card.
//!
//! Two exponential followers chase the same raw pointer stream; the host calls
//! [`PointerTracker::tick`] once per animation frame and applies the returned
//! [`CursorFrame`]. Touch devices switch the tracker off entirely.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::PointerCfg;

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Vec2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Exponential moving average: `pos += alpha * (target - pos)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Follower {
    alpha: f32,
    pos: Vec2,
}

impl Follower {
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(f32::EPSILON, 1.0),
            pos: Vec2::ZERO,
        }
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn step(&mut self, target: Vec2) -> Vec2 {
        self.pos.x += (target.x - self.pos.x) * self.alpha;
        self.pos.y += (target.y - self.pos.y) * self.alpha;
        self.pos
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerMode {
    /// Mouse or pen; the custom cursor runs.
    Fine,
    /// Touch-only input; the custom cursor is hidden and the loop stops.
    Touch,
}

/// Identity of an interactive element with its own hover binding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HoverKey(pub u32);

/// Positions to apply this frame.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CursorFrame {
    pub halo: Vec2,
    pub dot: Vec2,
    pub halo_size_px: f32,
    pub hovering: bool,
}

impl CursorFrame {
    pub fn halo_transform(&self) -> String {
        centered_translate(self.halo)
    }

    pub fn dot_transform(&self) -> String {
        centered_translate(self.dot)
    }
}

fn centered_translate(p: Vec2) -> String {
    format!("translate({}px, {}px) translate(-50%, -50%)", p.x, p.y)
}

#[derive(Clone, Debug)]
pub struct PointerTracker {
    raw: Vec2,
    halo: Follower,
    dot: Follower,
    mode: PointerMode,
    hovered: BTreeSet<HoverKey>,
    halo_size_px: f32,
    halo_hover_size_px: f32,
}

impl PointerTracker {
    pub fn new(cfg: &PointerCfg) -> Self {
        Self {
            raw: Vec2::ZERO,
            halo: Follower::new(cfg.halo_alpha),
            dot: Follower::new(cfg.dot_alpha),
            mode: PointerMode::Fine,
            hovered: BTreeSet::new(),
            halo_size_px: cfg.halo_size_px,
            halo_hover_size_px: cfg.halo_hover_size_px,
        }
    }

    pub fn mode(&self) -> PointerMode {
        self.mode
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.mode == PointerMode::Fine
    }

    /// Returns true when the mode actually changed.
    pub fn set_mode(&mut self, mode: PointerMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        if mode == PointerMode::Touch {
            self.hovered.clear();
            log::warn!("touch-only input detected; custom cursor disabled");
        }
        true
    }

    /// Overwrite the raw sample. No history is kept.
    #[inline]
    pub fn sample(&mut self, x: f32, y: f32) {
        self.raw = Vec2::new(x, y);
    }

    pub fn raw(&self) -> Vec2 {
        self.raw
    }

    pub fn halo(&self) -> Vec2 {
        self.halo.pos()
    }

    pub fn dot(&self) -> Vec2 {
        self.dot.pos()
    }

    /// Advance both followers by one frame. `None` on touch devices.
    pub fn tick(&mut self) -> Option<CursorFrame> {
        if !self.is_active() {
            return None;
        }
        let halo = self.halo.step(self.raw);
        let dot = self.dot.step(self.raw);
        let hovering = self.is_hovering();
        Some(CursorFrame {
            halo,
            dot,
            halo_size_px: if hovering {
                self.halo_hover_size_px
            } else {
                self.halo_size_px
            },
            hovering,
        })
    }

    /// Pointer entered a bound element. Ignored on touch devices.
    pub fn enter(&mut self, key: HoverKey) {
        if self.is_active() {
            self.hovered.insert(key);
        }
    }

    pub fn leave(&mut self, key: HoverKey) {
        self.hovered.remove(&key);
    }

    #[inline]
    pub fn is_hovering(&self) -> bool {
        !self.hovered.is_empty()
    }
}

/// Client-space bounding box of an element.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Small-angle tilt, in degrees, of the hero code card.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParallaxTilt {
    pub x: f32,
    pub y: f32,
}

impl ParallaxTilt {
    /// Linear mapping of the pointer's offset from the element center, normalized by
    /// the element size, times `scale`. Offsets are clamped to the element bounds so
    /// the tilt stays within `±scale / 2`. Degenerate rects yield no tilt.
    pub fn from_pointer(pointer: Vec2, rect: Rect, scale: f32) -> Self {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return Self::default();
        }
        let nx = ((pointer.x - rect.left - rect.width / 2.0) / rect.width).clamp(-0.5, 0.5);
        let ny = ((pointer.y - rect.top - rect.height / 2.0) / rect.height).clamp(-0.5, 0.5);
        Self {
            x: nx * scale,
            y: ny * scale,
        }
    }

    pub fn transform(&self) -> String {
        let rotate_y = 0.0 - self.x;
        format!(
            "perspective(1000px) rotateY({}deg) rotateX({}deg)",
            rotate_y, self.y
        )
    }
}
