//! Deterministic decoration layout
//!
//! Everything here is a pure function of `(index, seed)`. The static export
//! and the live wasm page run the same code, so the hearts land in the same
//! place in both and the page does not jump when the module takes over.

pub mod det;
pub mod hearts;

pub use det::{det, pick, round_to};
pub use hearts::{
    DecorationDescriptor, HeartLayer, HeartSize, SizeClass, rising_heart, rising_hearts,
    scatter_heart, scatter_hearts,
};
