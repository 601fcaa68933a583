//! Floating heart placement
//!
//! Two layers of decorative hearts:
//! - `Scatter`: spread over the proposal container, each heart pulsing upward
//!   from its own top/left anchor
//! - `Rising`: the page-level layer, hearts drift up from the bottom edge with
//!   per-heart size, duration and opacity
//!
//! Every quantity reads the generator at its own index offset and seed, so
//! no quantity sits on a fixed value at index 0.

use serde::{Deserialize, Serialize};

use super::det::{det, pick, round_to};

/// Per-quantity seeds
pub const SEED_LEFT: f64 = 11.0;
pub const SEED_SECOND: f64 = 22.0;
pub const SEED_THIRD: f64 = 33.0;
pub const SEED_FOURTH: f64 = 44.0;
pub const SEED_FIFTH: f64 = 55.0;

/// Scatter hearts pulse on a fixed loop (seconds)
pub const SCATTER_LOOP_SECS: f64 = 1.2;
/// Scatter start delays spread over this many seconds
pub const SCATTER_DELAY_SPAN: f64 = 1.5;

/// Rising hearts wait this long before the first one starts (seconds)
pub const RISING_BASE_DELAY: f64 = 5.0;
/// Rising start delays spread over this many seconds past the base
pub const RISING_DELAY_SPAN: f64 = 2.0;
/// Rising glyph sizes in px
pub const RISING_MIN_PX: f64 = 10.0;
pub const RISING_PX_SPAN: f64 = 28.0;
/// Rising traversal duration bounds in seconds
pub const RISING_MIN_SECS: f64 = 1.0;
pub const RISING_SECS_SPAN: f64 = 3.0;
/// Rising opacity bounds
pub const RISING_MIN_OPACITY: f64 = 0.7;
pub const RISING_OPACITY_SPAN: f64 = 0.3;

/// Discrete glyph sizes, smallest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SizeClass {
    Sm,
    Base,
    Lg,
    Xl2,
    Xl3,
    Xl4,
    Xl5,
}

impl SizeClass {
    /// Sizes used on compact viewports (fewer, smaller)
    pub const COMPACT: [SizeClass; 3] = [SizeClass::Sm, SizeClass::Base, SizeClass::Lg];
    /// Sizes used everywhere else
    pub const REGULAR: [SizeClass; 4] = [
        SizeClass::Xl2,
        SizeClass::Xl3,
        SizeClass::Xl4,
        SizeClass::Xl5,
    ];

    /// Size set for the viewport class
    pub fn set_for(compact: bool) -> &'static [SizeClass] {
        if compact { &Self::COMPACT } else { &Self::REGULAR }
    }

    /// Stylesheet class name
    pub fn css_class(&self) -> &'static str {
        match self {
            SizeClass::Sm => "text-sm",
            SizeClass::Base => "text-base",
            SizeClass::Lg => "text-lg",
            SizeClass::Xl2 => "text-2xl",
            SizeClass::Xl3 => "text-3xl",
            SizeClass::Xl4 => "text-4xl",
            SizeClass::Xl5 => "text-5xl",
        }
    }
}

/// Glyph size of one heart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HeartSize {
    Class(SizeClass),
    Px(u32),
}

/// Which decoration layer a heart belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeartLayer {
    Scatter,
    Rising,
}

/// Placement and timing of one decorative heart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecorationDescriptor {
    pub index: u32,
    pub layer: HeartLayer,
    /// Horizontal position, percent of container width
    pub position_x: f64,
    /// Vertical position, percent of container height (scatter only)
    pub position_y: Option<f64>,
    pub size: HeartSize,
    /// Seconds before the animation starts
    pub animation_delay: f64,
    /// Seconds per animation cycle
    pub duration: f64,
    pub opacity: f64,
}

/// Scatter heart `index`, sized for the viewport class
pub fn scatter_heart(index: u32, compact: bool) -> DecorationDescriptor {
    let sizes = SizeClass::set_for(compact);
    // Offsets run past u32::MAX at the top of the range
    let i = u64::from(index);
    DecorationDescriptor {
        index,
        layer: HeartLayer::Scatter,
        position_x: det(i, SEED_LEFT) * 100.0,
        position_y: Some(det(i + 1, SEED_SECOND) * 100.0),
        size: HeartSize::Class(sizes[pick(i + 2, SEED_THIRD, sizes.len())]),
        animation_delay: round_to(det(i + 3, SEED_FOURTH) * SCATTER_DELAY_SPAN, 2),
        duration: SCATTER_LOOP_SECS,
        opacity: 1.0,
    }
}

/// First `count` scatter hearts
pub fn scatter_hearts(count: u32, compact: bool) -> Vec<DecorationDescriptor> {
    (0..count).map(|i| scatter_heart(i, compact)).collect()
}

/// Rising heart `index`
pub fn rising_heart(index: u32) -> DecorationDescriptor {
    let i = u64::from(index);
    let px = libm::round(RISING_MIN_PX + det(i + 1, SEED_SECOND) * RISING_PX_SPAN) as u32;
    let delay = det(i + 2, SEED_THIRD) * RISING_DELAY_SPAN + RISING_BASE_DELAY;
    let duration = libm::round(RISING_MIN_SECS + det(i + 3, SEED_FOURTH) * RISING_SECS_SPAN);
    let opacity = RISING_MIN_OPACITY + det(i + 4, SEED_FIFTH) * RISING_OPACITY_SPAN;

    DecorationDescriptor {
        index,
        layer: HeartLayer::Rising,
        position_x: det(i, SEED_LEFT) * 100.0,
        position_y: None,
        size: HeartSize::Px(px),
        animation_delay: round_to(delay, 2),
        duration,
        opacity: round_to(opacity, 2),
    }
}

/// First `count` rising hearts
pub fn rising_hearts(count: u32) -> Vec<DecorationDescriptor> {
    (0..count).map(rising_heart).collect()
}
