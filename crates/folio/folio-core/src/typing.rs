//! Typing effect for the hero subtitle: `Idle -> Typing -> Done`, one character per tick.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypingPhase {
    Idle,
    Typing,
    Done,
}

/// Result of a single tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TypingStep {
    /// One more character is visible.
    Advanced { shown: usize },
    /// The last character became visible on this tick; the host should cancel its timer.
    Finished,
    /// Tick arrived outside `Typing`.
    Ignored,
}

#[derive(Clone, Debug)]
pub struct TypingSimulator {
    text: String,
    /// Byte offset after each character, so prefixes stay on char boundaries.
    boundaries: Vec<usize>,
    shown: usize,
    phase: TypingPhase,
}

impl TypingSimulator {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let boundaries = text
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .collect();
        Self {
            text,
            boundaries,
            shown: 0,
            phase: TypingPhase::Idle,
        }
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn full_text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the full text.
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Characters currently visible.
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// `Idle -> Typing`. Empty text finishes immediately. Returns false when the
    /// simulator had already started; there is no restart.
    pub fn start(&mut self) -> bool {
        if self.phase != TypingPhase::Idle {
            return false;
        }
        self.phase = if self.is_empty() {
            TypingPhase::Done
        } else {
            TypingPhase::Typing
        };
        true
    }

    pub fn tick(&mut self) -> TypingStep {
        if self.phase != TypingPhase::Typing {
            return TypingStep::Ignored;
        }
        self.shown += 1;
        if self.shown >= self.len() {
            self.shown = self.len();
            self.phase = TypingPhase::Done;
            log::debug!("typing finished after {} ticks", self.shown);
            TypingStep::Finished
        } else {
            TypingStep::Advanced { shown: self.shown }
        }
    }

    /// Prefix of the full text made of the first `shown()` characters.
    pub fn displayed(&self) -> &str {
        match self.shown {
            0 => "",
            n => &self.text[..self.boundaries[n - 1]],
        }
    }
}
