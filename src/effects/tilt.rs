//! Pointer-driven 3D tilt and the shine overlay drawn under the cursor.

use super::{css_number, Rect, ACCENT_RGB};

pub const TILT_CARD_SELECTOR: &str = ".card, .timeline-content, .contact-card";
pub const SHINE_CLASS: &str = "card-shine";
pub const MAX_ROTATION_DEG: f64 = 10.0;
pub const NEUTRAL_TRANSFORM: &str =
    "perspective(1000px) rotateX(0) rotateY(0) translateZ(0) scale3d(1, 1, 1)";
pub const RESET_TRANSITION: &str = "transform 0.3s cubic-bezier(0.23, 1, 0.32, 1)";

/// Inline styles the overlay is created with.
pub const SHINE_BASE_STYLES: [(&str, &str); 8] = [
    ("position", "absolute"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("pointer-events", "none"),
    ("transition", "opacity 0.3s ease"),
    ("border-radius", "inherit"),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    /// Pointer position inside the card.
    pub local_x: f64,
    pub local_y: f64,
}

impl Tilt {
    /// Rotation toward the pointer, proportional to its offset from the card
    /// center. Not clamped: a pointer outside the card tilts past the maximum.
    pub fn from_pointer(rect: Rect, client_x: f64, client_y: f64) -> Self {
        let (x, y) = rect.local_point(client_x, client_y);
        let (center_x, center_y) = rect.half_extent();

        Self {
            rotate_x: ((y - center_y) / center_y) * -MAX_ROTATION_DEG,
            rotate_y: ((x - center_x) / center_x) * MAX_ROTATION_DEG,
            local_x: x,
            local_y: y,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateZ(10px) scale3d(1.02, 1.02, 1.02)",
            css_number(self.rotate_x),
            css_number(self.rotate_y)
        )
    }

    pub fn shine_background(&self) -> String {
        format!(
            "radial-gradient(circle at {}px {}px, rgba({ACCENT_RGB}, 0.2), transparent 50%)",
            css_number(self.local_x),
            css_number(self.local_y)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_at_center_yields_no_rotation() {
        let rect = Rect::new(40.0, 120.0, 300.0, 200.0);
        let tilt = Tilt::from_pointer(rect, 190.0, 220.0);

        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
        assert_eq!(
            tilt.transform(),
            "perspective(1000px) rotateX(0deg) rotateY(0deg) translateZ(10px) scale3d(1.02, 1.02, 1.02)"
        );
    }

    #[test]
    fn corners_reach_the_maximum_rotation() {
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);

        let top_left = Tilt::from_pointer(rect, 0.0, 0.0);
        assert_eq!(top_left.rotate_x, 10.0);
        assert_eq!(top_left.rotate_y, -10.0);

        let bottom_right = Tilt::from_pointer(rect, 200.0, 100.0);
        assert_eq!(bottom_right.rotate_x, -10.0);
        assert_eq!(bottom_right.rotate_y, 10.0);
    }

    #[test]
    fn rotation_is_not_clamped_outside_the_card() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let tilt = Tilt::from_pointer(rect, 150.0, 50.0);

        assert_eq!(tilt.rotate_y, 20.0);
    }

    #[test]
    fn shine_is_centered_on_the_pointer() {
        let rect = Rect::new(10.0, 20.0, 100.0, 100.0);
        let tilt = Tilt::from_pointer(rect, 35.5, 45.0);

        assert_eq!(
            tilt.shine_background(),
            "radial-gradient(circle at 25.5px 25px, rgba(100, 255, 218, 0.2), transparent 50%)"
        );
    }

    #[test]
    fn zero_sized_card_does_not_panic() {
        let rect = Rect::new(0.0, 0.0, 0.0, 0.0);
        let tilt = Tilt::from_pointer(rect, 5.0, 5.0);

        assert!(!tilt.rotate_y.is_finite());
        assert!(tilt.transform().contains("rotateY(inf"));
    }

    #[test]
    fn neutral_transform_is_exact() {
        assert_eq!(
            NEUTRAL_TRANSFORM,
            "perspective(1000px) rotateX(0) rotateY(0) translateZ(0) scale3d(1, 1, 1)"
        );
    }
}
