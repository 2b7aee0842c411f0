//! One-way scroll reveal.

use super::{css_number, Rect};

pub const REVEAL_SELECTOR: &str = ".section, .card, .timeline-item";
pub const OBSERVER_THRESHOLD: f64 = 0.1;
pub const OBSERVER_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const HIDDEN_OFFSET_PX: u32 = 30;
pub const STAGGER_STEP_MS: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: String,
}

impl RevealStyle {
    pub fn for_state(state: RevealState) -> Self {
        match state {
            RevealState::Hidden => Self {
                opacity: "0",
                transform: format!("translateY({HIDDEN_OFFSET_PX}px)"),
            },
            RevealState::Revealed => Self {
                opacity: "1",
                transform: "translateY(0)".to_string(),
            },
        }
    }
}

/// Whether any part of the box is inside a viewport of the given height.
pub fn is_in_viewport(rect: Rect, viewport_height: f64) -> bool {
    rect.top < viewport_height && rect.bottom() > 0.0
}

/// Transition with a delay growing by 50ms per element index.
pub fn stagger_transition(index: usize) -> String {
    let delay_s = (index * STAGGER_STEP_MS) as f64 / 1_000.0;
    format!("all 0.35s ease {}s", css_number(delay_s))
}

/// Tracks one observed element. Only the first intersection produces styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealTracker {
    state: RevealState,
}

impl RevealTracker {
    /// Elements already on screen at setup start revealed.
    pub fn at_setup(rect: Rect, viewport_height: f64) -> Self {
        let state = if is_in_viewport(rect, viewport_height) {
            RevealState::Revealed
        } else {
            RevealState::Hidden
        };

        Self { state }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn initial_style(&self) -> RevealStyle {
        RevealStyle::for_state(self.state)
    }

    /// Styles to apply for an observer report, if any. Leaving the viewport
    /// never hides an element again.
    pub fn on_intersection(&mut self, is_intersecting: bool) -> Option<RevealStyle> {
        if !is_intersecting || self.state == RevealState::Revealed {
            return None;
        }

        self.state = RevealState::Revealed;
        Some(RevealStyle::for_state(RevealState::Revealed))
    }
}
