//! Interaction state for the proposal card

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which subtree the page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalPhase {
    /// Card with Yes/No, waiting for an answer
    Asking,
    /// Answer given; terminal
    Accepted,
}

/// Rectangle relative to the container's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    fn is_finite(&self) -> bool {
        self.left.is_finite() && self.top.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// Measured size of the container the No button moves inside
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerBounds {
    pub width: f32,
    pub height: f32,
    /// Where the No button sits with no offset applied; centred when unknown
    pub rest: Option<Rect>,
}

impl ContainerBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            rest: None,
        }
    }

    /// Bounds with the No button's resting rect inside the container
    pub fn with_rest(mut self, rest: Rect) -> Self {
        self.rest = Some(rest);
        self
    }

    /// Bounds that can actually hold something (a detached or hidden element
    /// reports a zero rect)
    pub fn is_measurable(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
            && self.rest.is_none_or(|r| r.is_finite())
    }

    /// Resting rect of a `button_w` x `button_h` button, centred if not measured
    pub fn rest_or_centred(&self, button_w: f32, button_h: f32) -> Rect {
        self.rest.unwrap_or_else(|| {
            Rect::new(
                (self.width - button_w) / 2.0,
                (self.height - button_h) / 2.0,
                button_w,
                button_h,
            )
        })
    }

    /// Offset range `(min, max)` that keeps the rest rect inside the container.
    ///
    /// Always contains zero, so a button that already overflows can stay put.
    pub fn offset_range(&self, button_w: f32, button_h: f32) -> (Vec2, Vec2) {
        let rest = self.rest_or_centred(button_w, button_h);
        let min = Vec2::new(-rest.left, -rest.top).min(Vec2::ZERO);
        let max = Vec2::new(
            self.width - (rest.left + rest.width),
            self.height - (rest.top + rest.height),
        )
        .max(Vec2::ZERO);
        (min, max)
    }
}

/// Everything the controller mutates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
    /// Once true, never reverts
    pub accepted: bool,
    /// No button offset from its resting place
    pub evade_position: Vec2,
    /// Times the No button has run away
    pub evade_count: u32,
    pub is_compact_viewport: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            accepted: false,
            evade_position: Vec2::ZERO,
            evade_count: 0,
            is_compact_viewport: false,
        }
    }
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ProposalPhase {
        if self.accepted {
            ProposalPhase::Accepted
        } else {
            ProposalPhase::Asking
        }
    }
}
