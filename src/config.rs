// Start-up configuration for the card grid. The host page may embed
// `<script type="application/json" id="cards-config">{ "gap": 8 }</script>`;
// every field is optional.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{DensityLevel, Gap, GestureThresholds, DEFAULT_SETTLE_TRANSITION};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cards config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("gap must not be negative, got {0}px")]
    NegativeGap(f64),
    #[error("settle transition must not be empty")]
    EmptyTransition,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardsConfig {
    pub default_level: DensityLevel,
    pub gap: Gap,
    pub enable_gesture: bool,
    pub gesture_thresholds: GestureThresholds,
    /// CSS transition used when items glide back into place.
    pub settle_transition: String,
    /// Number of demo cards to render.
    pub item_count: usize,
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self {
            default_level: DensityLevel::default(),
            gap: Gap::default(),
            enable_gesture: true,
            gesture_thresholds: GestureThresholds::default(),
            settle_transition: DEFAULT_SETTLE_TRANSITION.to_string(),
            item_count: 12,
        }
    }
}

impl CardsConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: CardsConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Gap::Px(px) = self.gap {
            if px < 0.0 {
                return Err(ConfigError::NegativeGap(px));
            }
        }
        if self.settle_transition.trim().is_empty() {
            return Err(ConfigError::EmptyTransition);
        }
        Ok(())
    }

    /// Read the JSON block with the given element id. Falls back to
    /// defaults when it is absent or rejected.
    pub fn from_document(id: &str) -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(cfg) => {
                log::debug!("loaded cards config from #{id}");
                cfg
            }
            Err(err) => {
                log::warn!("ignoring #{id}: {err}");
                Self::default()
            }
        }
    }
}
