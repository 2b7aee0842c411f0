//! Target-independent effect logic.
//!
//! Each submodule owns the geometry, state and style strings of one
//! behavior; the browser wiring in `frontend` only measures the DOM and
//! writes back what these functions return.

pub mod anchor;
pub mod certificate;
pub mod glow;
pub mod menu;
pub mod nav;
pub mod parallax;
pub mod rain;
pub mod reveal;
pub mod tilt;
pub mod transition;
pub mod typing;

pub const ACCENT_RGB: &str = "100, 255, 218";

/// Viewport-relative box, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Pointer position relative to the box's top-left corner.
    pub fn local_point(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (client_x - self.left, client_y - self.top)
    }

    pub fn half_extent(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// Formats a number for a CSS value: at most three decimals, no trailing
/// zeros, and never `-0`.
pub fn css_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = (value * 1000.0).round() / 1000.0 + 0.0;
    let formatted = format!("{rounded:.3}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
