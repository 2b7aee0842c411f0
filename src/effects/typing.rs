//! Typewriter state machine.
//!
//! The machine is stepped by a cooperative timer loop: every call to
//! [`TypingMachine::step`] returns the text to render and how long to wait
//! before the next step.

pub const TYPING_SELECTOR: &str = ".typing-text";

/// Whether a `pagehide` ends the loop. Pages kept in the back/forward cache
/// get their timers back when shown again.
pub fn stops_on_pagehide(persisted: bool) -> bool {
    !persisted
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingDelays {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub pause_at_end_ms: u32,
    pub pause_at_empty_ms: u32,
}

impl Default for TypingDelays {
    fn default() -> Self {
        Self {
            type_ms: 100,
            delete_ms: 50,
            pause_at_end_ms: 2_000,
            pause_at_empty_ms: 500,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    PauseAtEnd,
    Deleting,
    PauseAtEmpty,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingStep {
    pub visible: String,
    pub delay_ms: u32,
    pub phase: TypingPhase,
}

#[derive(Clone, Debug)]
pub struct TypingMachine {
    texts: Vec<Vec<char>>,
    delays: TypingDelays,
    text_index: usize,
    char_index: usize,
    phase: TypingPhase,
}

impl TypingMachine {
    /// Returns `None` for an empty text list.
    pub fn new<S: AsRef<str>>(texts: &[S], delays: TypingDelays) -> Option<Self> {
        if texts.is_empty() {
            return None;
        }

        Some(Self {
            texts: texts
                .iter()
                .map(|text| text.as_ref().chars().collect())
                .collect(),
            delays,
            text_index: 0,
            char_index: 0,
            phase: TypingPhase::Typing,
        })
    }

    pub fn text_index(&self) -> usize {
        self.text_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn current_len(&self) -> usize {
        self.texts[self.text_index].len()
    }

    pub fn step(&mut self) -> TypingStep {
        let len = self.current_len();

        let delay_ms = match self.phase {
            TypingPhase::Typing | TypingPhase::PauseAtEmpty => {
                self.char_index = (self.char_index + 1).min(len);
                if self.char_index == len {
                    self.phase = TypingPhase::PauseAtEnd;
                    self.delays.pause_at_end_ms
                } else {
                    self.phase = TypingPhase::Typing;
                    self.delays.type_ms
                }
            }
            TypingPhase::Deleting | TypingPhase::PauseAtEnd => {
                self.char_index = self.char_index.saturating_sub(1);
                if self.char_index == 0 {
                    self.phase = TypingPhase::PauseAtEmpty;
                    self.delays.pause_at_empty_ms
                } else {
                    self.phase = TypingPhase::Deleting;
                    self.delays.delete_ms
                }
            }
        };

        let visible = self.texts[self.text_index][..self.char_index]
            .iter()
            .collect();

        if self.phase == TypingPhase::PauseAtEmpty {
            self.text_index = (self.text_index + 1) % self.texts.len();
        }

        TypingStep {
            visible,
            delay_ms,
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(texts: &[&str]) -> TypingMachine {
        TypingMachine::new(texts, TypingDelays::default()).expect("non-empty texts")
    }

    #[test]
    fn empty_list_is_rejected() {
        let texts: [&str; 0] = [];
        assert!(TypingMachine::new(&texts, TypingDelays::default()).is_none());
    }

    #[test]
    fn types_then_pauses_then_deletes() {
        let mut typing = machine(&["abc", "de"]);

        let steps: Vec<TypingStep> = (0..7).map(|_| typing.step()).collect();
        let rendered: Vec<&str> = steps.iter().map(|step| step.visible.as_str()).collect();
        let delays: Vec<u32> = steps.iter().map(|step| step.delay_ms).collect();

        assert_eq!(rendered, vec!["a", "ab", "abc", "ab", "a", "", "d"]);
        assert_eq!(delays, vec![100, 100, 2_000, 50, 50, 500, 100]);
        assert_eq!(steps[2].phase, TypingPhase::PauseAtEnd);
        assert_eq!(steps[5].phase, TypingPhase::PauseAtEmpty);
        assert_eq!(typing.text_index(), 1);
    }

    #[test]
    fn full_cycle_returns_to_first_text() {
        let texts = ["one", "three", "x", "longer text"];
        let mut typing = machine(&texts);
        let mut completed = 0;

        while completed < texts.len() {
            if typing.step().phase == TypingPhase::PauseAtEmpty {
                completed += 1;
            }
        }

        assert_eq!(typing.text_index(), 0);
        assert_eq!(typing.char_index(), 0);
    }

    #[test]
    fn char_index_stays_within_bounds() {
        let mut typing = machine(&["Driven to grow.", "", "é→ü", "z"]);

        for _ in 0..500 {
            let before_text = typing.text_index();
            let len = typing.current_len();
            let step = typing.step();

            assert!(typing.char_index() <= len);
            assert_eq!(step.visible.chars().count(), typing.char_index());
            if step.phase != TypingPhase::PauseAtEmpty {
                assert_eq!(typing.text_index(), before_text);
            }
        }
    }

    #[test]
    fn empty_entry_is_skipped_through_pauses() {
        let mut typing = machine(&["", "a"]);

        let first = typing.step();
        assert_eq!(first.phase, TypingPhase::PauseAtEnd);
        assert_eq!(first.visible, "");

        let second = typing.step();
        assert_eq!(second.phase, TypingPhase::PauseAtEmpty);
        assert_eq!(typing.text_index(), 1);
    }

    #[test]
    fn multibyte_text_is_split_on_characters() {
        let mut typing = machine(&["アイ"]);

        assert_eq!(typing.step().visible, "ア");
        assert_eq!(typing.step().visible, "アイ");
    }

    #[test]
    fn only_unloading_pages_stop_the_loop() {
        assert!(stops_on_pagehide(false));
        assert!(!stops_on_pagehide(true));
    }
}
