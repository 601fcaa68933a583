//! Valentine Proposal - an animated "will you be my Valentine?" page
//!
//! Core modules:
//! - `layout`: Deterministic placement of the decorative hearts
//! - `proposal`: Interaction state machine (evasive No, one-way Yes)
//! - `view`: View model and HTML markup
//! - `viewport`: Injected viewport width source
//! - `config`: Page tunables with serde-backed overrides

pub mod config;
pub mod layout;
pub mod proposal;
pub mod view;
pub mod viewport;

pub use config::PageConfig;
pub use proposal::{InteractionState, ProposalController, ProposalEvent, ProposalPhase};
pub use view::ViewModel;

/// Page constants
pub mod consts {
    /// Widths at or below this (layout px) get the compact layout
    pub const COMPACT_THRESHOLD: f64 = 640.0;

    /// Scatter hearts on regular and compact viewports
    pub const SCATTER_COUNT: u32 = 120;
    pub const COMPACT_SCATTER_COUNT: u32 = 8;
    /// Page-level rising hearts
    pub const RISING_COUNT: u32 = 120;

    /// Max No button jump from its resting place (px)
    pub const EVADE_RANGE: f32 = 150.0;
    /// No button footprint (px)
    pub const NO_BUTTON_WIDTH: f32 = 100.0;
    pub const NO_BUTTON_HEIGHT: f32 = 40.0;

    /// Primary red, used for every heart
    pub const HEART_COLOR: &str = "#ee2b4b";

    /// Illustrations
    pub const ASKING_IMAGE: &str = "/assets/il_1588xN.7566311702_kx8d (1).avif";
    pub const ACCEPTED_IMAGE: &str = "/assets/il_1588xN.7637972537_n050.avif";
}
