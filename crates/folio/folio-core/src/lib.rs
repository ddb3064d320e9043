//! Folio Core (host-agnostic)
//!
//! State machines and pure functions behind the portfolio page: one-shot section
//! reveals, staggered reveal styles, the smoothed custom cursor, the hero typing
//! effect, the persisted theme flag and the contact form. Browser bindings live in
//! `folio-wasm`; everything here runs and tests natively.

pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod events;
pub mod ids;
pub mod lifecycle;
pub mod nav;
pub mod pointer;
pub mod reveal;
pub mod site;
pub mod theme;
pub mod typing;
pub mod visibility;

// Re-exports for consumers (adapters)
pub use config::Config;
pub use contact::{
    ContactDraft, ContactField, ContactForm, EmailRequest, EmailTransport, Notification,
    NotificationLevel,
};
pub use content::{filter_projects, site_content, ProjectFilter, ProjectKind, ProjectRecord};
pub use error::{ConfigError, ContactError, LifecycleError, StorageError};
pub use events::{EventQueue, SiteEvent};
pub use ids::{HandleId, SectionId, SubscriptionId};
pub use lifecycle::{HandleRecord, ResourceKind, ResourceLedger};
pub use nav::NavState;
pub use pointer::{CursorFrame, HoverKey, ParallaxTilt, PointerMode, PointerTracker, Rect, Vec2};
pub use reveal::{reveal_style, RevealOffset, RevealStyle, Stagger};
pub use site::Site;
pub use theme::{MemoryStorage, Theme, ThemeStorage, ThemeStore};
pub use typing::{TypingPhase, TypingSimulator, TypingStep};
pub use visibility::{VisibilityBoard, VisibilityTrigger};
