//! Viewport width source
//!
//! The controller asks this instead of reaching for `window` itself, so it
//! runs the same under tests and the static export.

/// Reports the current layout width, if there is a display to measure
pub trait ViewportQuery {
    fn width(&self) -> Option<f64>;
}

/// A viewport of known width (tests, static export)
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedViewport(pub Option<f64>);

impl FixedViewport {
    pub fn new(width: f64) -> Self {
        Self(Some(width))
    }

    /// No display at all; the controller keeps its defaults
    pub fn headless() -> Self {
        Self(None)
    }
}

impl ViewportQuery for FixedViewport {
    fn width(&self) -> Option<f64> {
        self.0
    }
}

/// `window.innerWidth`
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowViewport;

#[cfg(target_arch = "wasm32")]
impl ViewportQuery for WindowViewport {
    fn width(&self) -> Option<f64> {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
}
