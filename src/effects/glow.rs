use super::{css_number, Rect, ACCENT_RGB};

pub const GLOW_SELECTOR: &str = ".card";
pub const GLOW_RADIUS_PX: f64 = 300.0;

/// Distance from the pointer to the center of the box.
pub fn distance_to_center(rect: Rect, client_x: f64, client_y: f64) -> f64 {
    let (x, y) = rect.local_point(client_x, client_y);
    let (center_x, center_y) = rect.half_extent();

    (x - center_x).hypot(y - center_y)
}

/// Box shadow for a card near the pointer; `None` leaves the card untouched.
pub fn glow_shadow(rect: Rect, client_x: f64, client_y: f64) -> Option<String> {
    let distance = distance_to_center(rect, client_x, client_y);

    if distance >= GLOW_RADIUS_PX {
        return None;
    }

    Some(format!(
        "0 0 {}px rgba({ACCENT_RGB}, {})",
        css_number(40.0 - distance / 10.0),
        css_number(0.3 - distance / 1_000.0)
    ))
}

/// Card boxes kept for the pointer handler. Layout changes only mark the
/// cache stale; the next pointer move measures every card again.
pub struct GlowCards<T> {
    cards: Vec<(T, Rect)>,
    stale: bool,
}

impl<T> GlowCards<T> {
    pub fn measure(cards: Vec<T>, measure: impl Fn(&T) -> Rect) -> Self {
        let cards = cards
            .into_iter()
            .map(|card| {
                let rect = measure(&card);
                (card, rect)
            })
            .collect();

        Self {
            cards,
            stale: false,
        }
    }

    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Shadows for the cards within reach of the pointer.
    pub fn shadows(
        &mut self,
        client_x: f64,
        client_y: f64,
        measure: impl Fn(&T) -> Rect,
    ) -> Vec<(&T, String)> {
        if self.stale {
            for (card, rect) in &mut self.cards {
                *rect = measure(card);
            }
            self.stale = false;
        }

        self.cards
            .iter()
            .filter_map(|(card, rect)| {
                glow_shadow(*rect, client_x, client_y).map(|shadow| (card, shadow))
            })
            .collect()
    }
}
