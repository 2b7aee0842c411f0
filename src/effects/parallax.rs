use super::css_number;

pub const PARALLAX_SELECTOR: &str = ".hero, .section";
pub const PARALLAX_SPEED: f64 = 0.5;
pub const PARALLAX_DAMPING: f64 = 0.1;

pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_SPEED * PARALLAX_DAMPING
}

pub fn parallax_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", css_number(parallax_offset(scroll_y)))
}
