//! Semantic events emitted by [`crate::Site`] for the host to act on.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::contact::Notification;
use crate::ids::SectionId;
use crate::nav::NavState;
use crate::pointer::PointerMode;
use crate::theme::Theme;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum SiteEvent {
    SectionRevealed { section: SectionId },
    ThemeChanged { theme: Theme },
    TypingFinished,
    PointerModeChanged { mode: PointerMode },
    NavChanged { state: NavState },
    Notified { notification: Notification },
}

/// Default number of undrained events kept before the oldest are dropped.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Events accumulated since the last drain. Hosts that never drain lose the
/// oldest events once `capacity` is reached.
#[derive(Clone, Debug)]
pub struct EventQueue {
    events: VecDeque<SiteEvent>,
    capacity: usize,
    dropped: u64,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }
}

impl EventQueue {
    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: VecDeque::new(),
            capacity: capacity.max(1),
            dropped: 0,
        }
    }

    pub fn push(&mut self, event: SiteEvent) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
            self.dropped += 1;
            if self.dropped == 1 {
                log::debug!("event queue full ({}); dropping oldest", self.capacity);
            }
        }
        self.events.push_back(event);
    }

    pub fn drain(&mut self) -> Vec<SiteEvent> {
        self.events.drain(..).collect()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Events discarded because the queue was full.
    #[inline]
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_queue_keeps_newest() {
        let mut q = EventQueue::with_capacity(2);
        q.push(SiteEvent::TypingFinished);
        q.push(SiteEvent::ThemeChanged { theme: Theme::Dark });
        q.push(SiteEvent::ThemeChanged { theme: Theme::Light });
        assert_eq!(q.len(), 2);
        assert_eq!(q.dropped(), 1);
        assert_eq!(
            q.drain(),
            vec![
                SiteEvent::ThemeChanged { theme: Theme::Dark },
                SiteEvent::ThemeChanged { theme: Theme::Light },
            ]
        );
        assert!(q.is_empty());
    }

    #[test]
    fn zero_capacity_still_holds_latest() {
        let mut q = EventQueue::with_capacity(0);
        q.push(SiteEvent::TypingFinished);
        assert_eq!(q.capacity(), 1);
        assert_eq!(q.drain(), vec![SiteEvent::TypingFinished]);
    }
}
