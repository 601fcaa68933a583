//! Proposal interaction controller
//!
//! Owns `InteractionState` and is the only thing that mutates it. Every
//! handler runs to completion inside the DOM event that triggered it.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::effects::Celebrate;
use super::phrases::label_for;
use super::state::{ContainerBounds, InteractionState, ProposalPhase};
use crate::config::PageConfig;
use crate::viewport::ViewportQuery;

/// Discrete inputs from the host page
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProposalEvent {
    /// Yes button clicked
    Accept,
    /// Pointer entered the No button; bounds of the card if measurable
    EvadeTrigger(Option<ContainerBounds>),
    /// Window resized to this width
    ViewportChange(f64),
}

pub struct ProposalController<C: Celebrate> {
    state: InteractionState,
    config: PageConfig,
    celebration: C,
}

impl<C: Celebrate> ProposalController<C> {
    /// Mount the controller, reading the viewport once so the first paint
    /// already has the right density
    pub fn new(config: PageConfig, celebration: C, viewport: &dyn ViewportQuery) -> Self {
        let mut controller = Self {
            state: InteractionState::new(),
            config,
            celebration,
        };
        controller.refresh_viewport(viewport);
        controller
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn celebration(&self) -> &C {
        &self.celebration
    }

    pub fn phase(&self) -> ProposalPhase {
        self.state.phase()
    }

    /// Current No button label
    pub fn label(&self) -> &str {
        label_for(&self.config.no_phrases, self.state.evade_count)
    }

    /// Dispatch one host event
    pub fn handle<R: Rng>(&mut self, event: ProposalEvent, rng: &mut R) {
        match event {
            ProposalEvent::Accept => self.on_accept(),
            ProposalEvent::EvadeTrigger(bounds) => self.on_evade_trigger(bounds, rng),
            ProposalEvent::ViewportChange(width) => self.on_viewport_change(width),
        }
    }

    /// Yes clicked: switch to `Accepted` and fire the celebration once
    pub fn on_accept(&mut self) {
        if self.state.accepted {
            return;
        }
        self.state.accepted = true;
        log::info!("Proposal accepted after {} evades", self.state.evade_count);

        if let Err(e) = self.celebration.burst(&self.config.celebration) {
            log::warn!("Skipping celebration: {}", e);
        }
    }

    /// Pointer entered the No button: jump somewhere else inside the card
    pub fn on_evade_trigger<R: Rng>(
        &mut self,
        bounds: Option<ContainerBounds>,
        rng: &mut R,
    ) {
        if self.state.accepted {
            return;
        }
        let Some(bounds) = bounds.filter(ContainerBounds::is_measurable) else {
            log::debug!("Evade ignored: container bounds unavailable");
            return;
        };

        // Uniform over the disc, then kept inside the card
        let angle = rng.random::<f32>() * TAU;
        let dist = self.config.evade_range.max(0.0) * rng.random::<f32>().sqrt();
        let jump = Vec2::new(angle.cos(), angle.sin()) * dist;
        let (min, max) =
            bounds.offset_range(self.config.no_button_width, self.config.no_button_height);

        self.state.evade_position = jump.clamp(min, max);
        self.state.evade_count = self.state.evade_count.saturating_add(1);
        log::debug!(
            "No button evaded to ({:.1}, {:.1}), count {}",
            self.state.evade_position.x,
            self.state.evade_position.y,
            self.state.evade_count
        );
    }

    /// Window resized
    pub fn on_viewport_change(&mut self, width: f64) {
        let compact = width <= self.config.compact_threshold;
        if compact != self.state.is_compact_viewport {
            log::debug!("Viewport {} -> compact={}", width, compact);
        }
        self.state.is_compact_viewport = compact;
    }

    /// Re-read the injected viewport; no reading leaves the flag as is
    pub fn refresh_viewport(&mut self, viewport: &dyn ViewportQuery) {
        if let Some(width) = viewport.width() {
            self.on_viewport_change(width);
        }
    }
}
