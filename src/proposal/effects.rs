//! Celebration burst shown when the proposal is accepted
//!
//! The burst is decoration. Implementations report failure through
//! `EffectError` and the controller logs it and moves on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Primary red, blush pink, white
pub const CELEBRATION_COLORS: [&str; 3] = ["#ee2b4b", "#ffccd5", "#ffffff"];

/// Where the burst starts, as fractions of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurstOrigin {
    pub x: f32,
    pub y: f32,
}

/// Arguments for one particle burst
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelebrationParams {
    pub particle_count: u32,
    /// Cone width in degrees
    pub spread: f32,
    pub origin: BurstOrigin,
    pub colors: Vec<String>,
}

impl Default for CelebrationParams {
    fn default() -> Self {
        Self {
            particle_count: 150,
            spread: 70.0,
            origin: BurstOrigin { x: 0.5, y: 0.6 },
            colors: CELEBRATION_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[derive(Debug, Error)]
pub enum EffectError {
    #[error("celebration effect unavailable: {0}")]
    Unavailable(String),
    #[error("celebration effect failed: {0}")]
    Failed(String),
}

/// Fire-and-forget visual effect
pub trait Celebrate {
    fn burst(&mut self, params: &CelebrationParams) -> Result<(), EffectError>;
}

/// Logs the burst instead of drawing it (native builds, static export)
#[derive(Debug, Default)]
pub struct LogCelebration;

impl Celebrate for LogCelebration {
    fn burst(&mut self, params: &CelebrationParams) -> Result<(), EffectError> {
        log::info!(
            "Celebration burst: {} particles, spread {}",
            params.particle_count,
            params.spread
        );
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
mod confetti {
    use wasm_bindgen::prelude::*;

    use super::{Celebrate, CelebrationParams, EffectError};

    // canvas-confetti is loaded by the host page as a global
    #[wasm_bindgen(inline_js = "
        export function confetti_available() {
            return typeof window.confetti === 'function';
        }

        export function fire_confetti(json) {
            window.confetti(JSON.parse(json));
        }
    ")]
    extern "C" {
        fn confetti_available() -> bool;
        #[wasm_bindgen(catch)]
        fn fire_confetti(json: &str) -> Result<(), JsValue>;
    }

    /// Burst drawn by canvas-confetti
    #[derive(Debug, Default)]
    pub struct ConfettiCelebration;

    impl Celebrate for ConfettiCelebration {
        fn burst(&mut self, params: &CelebrationParams) -> Result<(), EffectError> {
            if !confetti_available() {
                return Err(EffectError::Unavailable("window.confetti is not loaded".into()));
            }
            let json =
                serde_json::to_string(params).map_err(|e| EffectError::Failed(e.to_string()))?;
            fire_confetti(&json).map_err(|e| EffectError::Failed(format!("{:?}", e)))
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use confetti::ConfettiCelebration;
