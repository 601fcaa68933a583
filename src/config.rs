//! Page configuration
//!
//! Defaults reproduce the shipped page. A host page may override any field
//! with an inline JSON block:
//!
//! ```html
//! <script id="page-config" type="application/json">{"scatter_count": 60}</script>
//! ```

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::proposal::effects::CelebrationParams;
use crate::proposal::phrases::NO_PHRASES;

/// Tunables for layout, evade behavior and assets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    // === Viewport ===
    /// Widths at or below this are compact
    pub compact_threshold: f64,

    // === Decoration ===
    /// Scatter hearts on regular viewports
    pub scatter_count: u32,
    /// Scatter hearts on compact viewports
    pub compact_scatter_count: u32,
    /// Page-level rising hearts
    pub rising_count: u32,

    // === Evade ===
    /// Max distance the No button jumps from its resting place
    pub evade_range: f32,
    /// No button footprint, used to keep it inside the card
    pub no_button_width: f32,
    pub no_button_height: f32,
    /// No button labels, escalating
    pub no_phrases: Vec<String>,

    // === Celebration ===
    pub celebration: CelebrationParams,

    // === Assets ===
    pub asking_image: String,
    pub accepted_image: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            compact_threshold: COMPACT_THRESHOLD,

            scatter_count: SCATTER_COUNT,
            compact_scatter_count: COMPACT_SCATTER_COUNT,
            rising_count: RISING_COUNT,

            evade_range: EVADE_RANGE,
            no_button_width: NO_BUTTON_WIDTH,
            no_button_height: NO_BUTTON_HEIGHT,
            no_phrases: NO_PHRASES.iter().map(|p| p.to_string()).collect(),

            celebration: CelebrationParams::default(),

            asking_image: ASKING_IMAGE.to_string(),
            accepted_image: ACCEPTED_IMAGE.to_string(),
        }
    }
}

impl PageConfig {
    /// Element id of the inline override block
    pub const ELEMENT_ID: &'static str = "page-config";

    /// Scatter heart count for the viewport class
    pub fn scatter_count_for(&self, compact: bool) -> u32 {
        if compact {
            self.compact_scatter_count
        } else {
            self.scatter_count
        }
    }

    /// Parse an override block; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load overrides from the host page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = text {
            match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded page config overrides");
                    return config;
                }
                Err(e) => log::warn!("Ignoring malformed page config: {}", e),
            }
        }

        log::info!("Using default page config");
        Self::default()
    }

    /// Native stub: no embedded config block outside the browser
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        log::debug!("Using default page config");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page() {
        let config = PageConfig::default();
        assert_eq!(config.compact_threshold, 640.0);
        assert_eq!(config.scatter_count_for(false), 120);
        assert_eq!(config.scatter_count_for(true), 8);
        assert_eq!(config.rising_count, 120);
        assert_eq!(config.evade_range, 150.0);
        assert_eq!(config.no_phrases.len(), 16);
        assert_eq!(config.no_phrases[0], "No");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = PageConfig::from_json(r#"{"scatter_count": 60, "evade_range": 90.0}"#).unwrap();
        assert_eq!(config.scatter_count, 60);
        assert_eq!(config.evade_range, 90.0);
        assert_eq!(config.compact_scatter_count, 8);
        assert_eq!(config.celebration, CelebrationParams::default());
    }

    #[test]
    fn test_malformed_override_is_error() {
        assert!(PageConfig::from_json("{not json").is_err());
        assert!(PageConfig::from_json(r#"{"scatter_count": "many"}"#).is_err());
    }

    #[test]
    fn test_round_trip_through_json() {
        let config = PageConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(PageConfig::from_json(&json).unwrap(), config);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_native_load_is_default() {
        assert_eq!(PageConfig::load(), PageConfig::default());
    }
}
