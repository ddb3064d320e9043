//! Identifiers and simple allocators for site entities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Page sections, in document order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Services,
    Education,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Services,
        SectionId::Education,
        SectionId::Contact,
    ];

    /// DOM id of the section element.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Services => "services",
            SectionId::Education => "education",
            SectionId::Contact => "contact",
        }
    }

    /// In-page anchor, e.g. `#projects`.
    pub fn anchor(self) -> String {
        format!("#{}", self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().trim_start_matches('#');
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| format!("unknown section `{s}`"))
    }
}

/// Opaque id for a host resource (timer, observer, listener, frame request).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandleId(pub u32);

/// Opaque id for a theme subscription.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u32);

/// Monotonic allocator for HandleId and SubscriptionId.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_handle: u32,
    next_subscription: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_handle(&mut self) -> HandleId {
        let id = HandleId(self.next_handle);
        self.next_handle = self.next_handle.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_subscription(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription = self.next_subscription.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.alloc_handle(), HandleId(0));
        assert_eq!(alloc.alloc_handle(), HandleId(1));
        assert_eq!(alloc.alloc_subscription(), SubscriptionId(0));
        assert_eq!(alloc.alloc_subscription(), SubscriptionId(1));
    }

    #[test]
    fn section_parses_anchor_and_name() {
        assert_eq!("#projects".parse::<SectionId>(), Ok(SectionId::Projects));
        assert_eq!("Contact".parse::<SectionId>(), Ok(SectionId::Contact));
        assert!("footer".parse::<SectionId>().is_err());
        assert_eq!(SectionId::Home.anchor(), "#home");
    }
}
