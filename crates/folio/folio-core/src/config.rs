//! Site configuration.
//!
//! Every field has a default matching the shipped site, and every section is
//! `#[serde(default)]` so hosts can pass partial JSON objects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::events::DEFAULT_EVENT_CAPACITY;
use crate::ids::SectionId;
use crate::reveal::{RevealOffset, Stagger};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub visibility: VisibilityCfg,
    pub reveal: RevealCfg,
    pub pointer: PointerCfg,
    pub typing: TypingCfg,
    pub nav: NavCfg,
    pub theme: ThemeCfg,
    pub email: EmailCfg,
    /// How long the splash screen stays up before sections mount.
    pub loading_ms: u32,
    /// Undrained events kept before the oldest are dropped.
    pub max_queued_events: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            visibility: VisibilityCfg::default(),
            reveal: RevealCfg::default(),
            pointer: PointerCfg::default(),
            typing: TypingCfg::default(),
            nav: NavCfg::default(),
            theme: ThemeCfg::default(),
            email: EmailCfg::default(),
            loading_ms: 500,
            max_queued_events: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl Config {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Config = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit = |field: &'static str, v: f32| {
            if (0.0..=1.0).contains(&v) {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: format!("{v} is outside [0, 1]"),
                })
            }
        };
        unit("visibility.default_threshold", self.visibility.default_threshold)?;
        for v in self.visibility.overrides.values() {
            unit("visibility.overrides", *v)?;
        }
        for (field, alpha) in [
            ("pointer.halo_alpha", self.pointer.halo_alpha),
            ("pointer.dot_alpha", self.pointer.dot_alpha),
        ] {
            if !(alpha > 0.0 && alpha <= 1.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{alpha} is outside (0, 1]"),
                });
            }
        }
        if self.typing.interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "typing.interval_ms",
                reason: "must be positive".into(),
            });
        }
        if self.max_queued_events == 0 {
            return Err(ConfigError::Invalid {
                field: "max_queued_events",
                reason: "must be positive".into(),
            });
        }
        if self.theme.storage_key.is_empty() {
            return Err(ConfigError::Invalid {
                field: "theme.storage_key",
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

/// Visibility thresholds (fraction of the section area on screen).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VisibilityCfg {
    pub default_threshold: f32,
    pub overrides: BTreeMap<SectionId, f32>,
}

impl Default for VisibilityCfg {
    fn default() -> Self {
        let mut overrides = BTreeMap::new();
        overrides.insert(SectionId::About, 0.2);
        Self {
            default_threshold: 0.1,
            overrides,
        }
    }
}

impl VisibilityCfg {
    pub fn threshold_for(&self, section: SectionId) -> f32 {
        self.overrides
            .get(&section)
            .copied()
            .unwrap_or(self.default_threshold)
    }
}

/// Stagger presets for the repeated cards of each section.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RevealCfg {
    pub staggers: BTreeMap<SectionId, Stagger>,
    /// Used for sections without an explicit preset.
    pub fallback: Stagger,
}

impl Default for RevealCfg {
    fn default() -> Self {
        let mut staggers = BTreeMap::new();
        staggers.insert(SectionId::Skills, Stagger::new(300, 100, RevealOffset::MEDIUM_Y));
        staggers.insert(SectionId::Projects, Stagger::new(400, 100, RevealOffset::LARGE_Y));
        staggers.insert(SectionId::Services, Stagger::new(300, 100, RevealOffset::MEDIUM_Y));
        staggers.insert(SectionId::Education, Stagger::new(200, 150, RevealOffset::MEDIUM_Y));
        staggers.insert(SectionId::About, Stagger::new(0, 100, RevealOffset::MEDIUM_Y));
        Self {
            staggers,
            fallback: Stagger::new(0, 100, RevealOffset::MEDIUM_Y),
        }
    }
}

impl RevealCfg {
    pub fn stagger_for(&self, section: SectionId) -> Stagger {
        self.staggers
            .get(&section)
            .copied()
            .unwrap_or(self.fallback)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PointerCfg {
    /// Smoothing factor of the large, lagging halo.
    pub halo_alpha: f32,
    /// Smoothing factor of the small dot.
    pub dot_alpha: f32,
    pub halo_size_px: f32,
    pub halo_hover_size_px: f32,
    /// Degrees of tilt per unit of normalized offset for the hero card.
    pub parallax_scale: f32,
}

impl Default for PointerCfg {
    fn default() -> Self {
        Self {
            halo_alpha: 0.15,
            dot_alpha: 0.5,
            halo_size_px: 32.0,
            halo_hover_size_px: 64.0,
            parallax_scale: 3.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TypingCfg {
    pub text: String,
    pub interval_ms: u32,
}

impl Default for TypingCfg {
    fn default() -> Self {
        Self {
            text: "IT Undergraduate | GATE Aspirant".to_string(),
            interval_ms: 100,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavCfg {
    /// Scroll offset past which the navigation bar switches to its solid style.
    pub scroll_threshold_px: f64,
}

impl Default for NavCfg {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 100.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeCfg {
    pub storage_key: String,
    /// Class toggled on the document root while the dark theme is active.
    pub dark_class: String,
}

impl Default for ThemeCfg {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            dark_class: "dark".to_string(),
        }
    }
}

/// EmailJS identifiers. All three are public, client-side values.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EmailCfg {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Address suggested to the visitor when delivery fails.
    pub fallback_address: String,
}

impl Default for EmailCfg {
    fn default() -> Self {
        Self {
            endpoint: "https://api.emailjs.com/api/v1.0/email/send".to_string(),
            service_id: "service_rk3g38d".to_string(),
            template_id: "template_kfbvl6f".to_string(),
            public_key: "SFgr9n13NZzwhhPGn".to_string(),
            fallback_address: "jayvmachhi2005@gmail.com".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = Config::from_json(r#"{ "typing": { "interval_ms": 40 } }"#).unwrap();
        assert_eq!(cfg.typing.interval_ms, 40);
        assert_eq!(cfg.typing.text, TypingCfg::default().text);
        assert_eq!(cfg.loading_ms, 500);
        assert_eq!(cfg.visibility.threshold_for(SectionId::About), 0.2);
        assert_eq!(cfg.visibility.threshold_for(SectionId::Projects), 0.1);
    }

    #[test]
    fn rejects_out_of_range_alpha() {
        let err = Config::from_json(r#"{ "pointer": { "halo_alpha": 0.0 } }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "pointer.halo_alpha",
                ..
            }
        ));
    }

    #[test]
    fn threshold_overrides_parse_by_section_name() {
        let cfg =
            Config::from_json(r#"{ "visibility": { "overrides": { "contact": 0.5 } } }"#).unwrap();
        assert_eq!(cfg.visibility.threshold_for(SectionId::Contact), 0.5);
        // Overrides replace the whole map.
        assert_eq!(cfg.visibility.threshold_for(SectionId::About), 0.1);
    }
}
