//! Proposal interaction
//!
//! Two phases, `Asking` then `Accepted`, and nothing leads back. While
//! asking, the No button runs from the pointer and its label escalates.

pub mod controller;
pub mod effects;
pub mod phrases;
pub mod state;

pub use controller::{ProposalController, ProposalEvent};
pub use effects::{
    BurstOrigin, CELEBRATION_COLORS, Celebrate, CelebrationParams, EffectError, LogCelebration,
};
#[cfg(target_arch = "wasm32")]
pub use effects::ConfettiCelebration;
pub use phrases::{NO_PHRASES, label_for};
pub use state::{ContainerBounds, InteractionState, ProposalPhase, Rect};
