//! What the page should show for a given state
//!
//! Pure projection: the same state and config always give the same model.

use glam::Vec2;
use serde::Serialize;

use crate::config::PageConfig;
use crate::layout::{DecorationDescriptor, rising_hearts, scatter_hearts};
use crate::proposal::{InteractionState, ProposalPhase, label_for};

/// Card with the question and both buttons
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AskingView {
    pub label: String,
    /// No button offset from its resting place
    pub no_offset: Vec2,
    pub compact: bool,
    pub hearts: Vec<DecorationDescriptor>,
    pub illustration: String,
}

/// Celebration message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcceptedView {
    pub illustration: String,
}

/// Exactly one of these is mounted at a time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Subtree {
    Asking(AskingView),
    Accepted(AcceptedView),
}

impl Subtree {
    pub fn phase(&self) -> ProposalPhase {
        match self {
            Subtree::Asking(_) => ProposalPhase::Asking,
            Subtree::Accepted(_) => ProposalPhase::Accepted,
        }
    }
}

/// How mounting should treat markup already under the app root.
///
/// The static export is rendered from a fresh, non-compact state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountPlan {
    /// Existing markup already matches; only attach listeners
    Keep,
    /// Only the scatter layer differs (the viewport turned out compact)
    RefreshScatter,
    /// Replace everything
    Remount,
}

/// Decide how much of the exported page must be redrawn for `state`.
pub fn mount_plan(state: &InteractionState) -> MountPlan {
    let exported = InteractionState::default();
    if *state == exported {
        MountPlan::Keep
    } else if (InteractionState {
        is_compact_viewport: exported.is_compact_viewport,
        ..state.clone()
    }) == exported
    {
        MountPlan::RefreshScatter
    } else {
        MountPlan::Remount
    }
}

/// Whole page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub subtree: Subtree,
    /// Page-level layer, independent of state
    pub rising: Vec<DecorationDescriptor>,
}

impl ViewModel {
    pub fn build(state: &InteractionState, config: &PageConfig) -> Self {
        Self {
            subtree: Self::subtree(state, config),
            rising: rising_hearts(config.rising_count),
        }
    }

    /// The stateful part only; used when swapping subtrees
    pub fn subtree(state: &InteractionState, config: &PageConfig) -> Subtree {
        match state.phase() {
            ProposalPhase::Asking => {
                let compact = state.is_compact_viewport;
                Subtree::Asking(AskingView {
                    label: label_for(&config.no_phrases, state.evade_count).to_string(),
                    no_offset: state.evade_position,
                    compact,
                    hearts: scatter_hearts(config.scatter_count_for(compact), compact),
                    illustration: config.asking_image.clone(),
                })
            }
            ProposalPhase::Accepted => Subtree::Accepted(AcceptedView {
                illustration: config.accepted_image.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{HeartSize, SizeClass};

    #[test]
    fn test_asking_view_on_mount() {
        let model = ViewModel::build(&InteractionState::new(), &PageConfig::default());
        let Subtree::Asking(ask) = &model.subtree else {
            panic!("fresh state shows the question");
        };
        assert_eq!(ask.label, "No");
        assert_eq!(ask.no_offset, Vec2::ZERO);
        assert_eq!(ask.hearts.len(), 120);
        assert_eq!(model.rising.len(), 120);
    }

    #[test]
    fn test_compact_view_narrows() {
        let state = InteractionState {
            is_compact_viewport: true,
            ..Default::default()
        };
        let Subtree::Asking(ask) = ViewModel::subtree(&state, &PageConfig::default()) else {
            panic!("not accepted yet");
        };
        assert_eq!(ask.hearts.len(), 8);
        assert!(ask.hearts.iter().all(|h| match h.size {
            HeartSize::Class(c) => SizeClass::COMPACT.contains(&c),
            HeartSize::Px(_) => false,
        }));
    }

    #[test]
    fn test_accepted_view() {
        let state = InteractionState {
            accepted: true,
            evade_count: 3,
            ..Default::default()
        };
        let config = PageConfig::default();
        let subtree = ViewModel::subtree(&state, &config);
        assert_eq!(subtree.phase(), ProposalPhase::Accepted);
        assert_eq!(
            subtree,
            Subtree::Accepted(AcceptedView {
                illustration: config.accepted_image.clone()
            })
        );
    }

    #[test]
    fn test_mount_keeps_exported_markup() {
        assert_eq!(mount_plan(&InteractionState::new()), MountPlan::Keep);
    }

    #[test]
    fn test_mount_compact_refreshes_scatter_only() {
        let state = InteractionState {
            is_compact_viewport: true,
            ..Default::default()
        };
        assert_eq!(mount_plan(&state), MountPlan::RefreshScatter);
    }

    #[test]
    fn test_mount_other_state_remounts() {
        let moved = InteractionState {
            evade_count: 1,
            evade_position: Vec2::new(30.0, 0.0),
            is_compact_viewport: true,
            ..Default::default()
        };
        assert_eq!(mount_plan(&moved), MountPlan::Remount);
        let accepted = InteractionState {
            accepted: true,
            ..Default::default()
        };
        assert_eq!(mount_plan(&accepted), MountPlan::Remount);
    }

    #[test]
    fn test_build_is_repeatable() {
        let state = InteractionState {
            evade_count: 2,
            evade_position: Vec2::new(12.5, -40.0),
            ..Default::default()
        };
        let config = PageConfig::default();
        assert_eq!(ViewModel::build(&state, &config), ViewModel::build(&state, &config));
    }
}
