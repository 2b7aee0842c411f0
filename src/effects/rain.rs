//! Falling-glyph canvas backdrop.

pub const RAIN_GLYPHS: &str = "01アイウエオカキクケコサシスセソタチツテト";
pub const RAIN_FONT_SIZE: u32 = 14;
pub const RAIN_FRAME_MS: u32 = 33;
pub const RAIN_FADE_FILL: &str = "rgba(2, 12, 27, 0.05)";
pub const RAIN_GLYPH_FILL: &str = "#64ffda";
pub const RAIN_RESET_CHANCE: f64 = 0.975;

pub const RAIN_CANVAS_STYLES: [(&str, &str); 8] = [
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("pointer-events", "none"),
    ("z-index", "-1"),
    ("opacity", "0.1"),
];

#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug)]
pub struct RainField {
    glyphs: Vec<char>,
    drops: Vec<u32>,
    height: f64,
}

impl RainField {
    pub fn new(width: f64, height: f64) -> Self {
        let columns = (width / f64::from(RAIN_FONT_SIZE)).floor().max(0.0) as usize;

        Self {
            glyphs: RAIN_GLYPHS.chars().collect(),
            drops: vec![1; columns],
            height,
        }
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    pub fn font(&self) -> String {
        format!("{RAIN_FONT_SIZE}px monospace")
    }

    /// Advances every drop by one row and returns the glyphs to draw this
    /// frame. `random` yields values in `[0, 1)`.
    pub fn step(&mut self, mut random: impl FnMut() -> f64) -> Vec<Glyph> {
        let font_size = f64::from(RAIN_FONT_SIZE);
        let mut frame = Vec::with_capacity(self.drops.len());

        for (column, drop) in self.drops.iter_mut().enumerate() {
            let pick = (random() * self.glyphs.len() as f64) as usize;
            let ch = self.glyphs[pick.min(self.glyphs.len() - 1)];
            let y = f64::from(*drop) * font_size;

            frame.push(Glyph {
                ch,
                x: column as f64 * font_size,
                y,
            });

            if y > self.height && random() > RAIN_RESET_CHANCE {
                *drop = 0;
            }
            *drop += 1;
        }

        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_canvas_width() {
        assert_eq!(RainField::new(140.0, 100.0).columns(), 10);
        assert_eq!(RainField::new(150.0, 100.0).columns(), 10);
        assert_eq!(RainField::new(10.0, 100.0).columns(), 0);
    }

    #[test]
    fn drops_fall_one_row_per_frame() {
        let mut rain = RainField::new(42.0, 1_000.0);

        let frame = rain.step(|| 0.0);
        assert_eq!(frame.len(), 3);
        assert_eq!(frame[1], Glyph { ch: '0', x: 14.0, y: 14.0 });
        assert_eq!(rain.drops(), &[2, 2, 2]);
    }

    #[test]
    fn drop_below_canvas_resets_only_on_lucky_draw() {
        let mut rain = RainField::new(14.0, 20.0);
        rain.step(|| 0.5);
        assert_eq!(rain.drops(), &[2]);

        rain.step(|| 0.5);
        assert_eq!(rain.drops(), &[3], "28px is below the canvas but 0.5 keeps falling");

        rain.step(|| 0.99);
        assert_eq!(rain.drops(), &[1]);
    }

    #[test]
    fn random_of_one_still_picks_a_glyph() {
        let mut rain = RainField::new(14.0, 1_000.0);
        let frame = rain.step(|| 1.0);

        assert_eq!(frame[0].ch, 'ト');
    }
}
