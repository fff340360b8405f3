use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Default transcript capacity in turns.
pub const DEFAULT_CAPACITY: usize = 12;

/// Who said a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Scammer,
    Victim,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Speaker::Scammer => "Scammer",
            Speaker::Victim => "Victim",
        };
        write!(f, "{s}")
    }
}

/// Fixed-capacity conversation transcript with FIFO eviction.
#[derive(Debug, Clone)]
pub struct Transcript {
    capacity: usize,
    turns: VecDeque<(Speaker, String)>,
}

impl Transcript {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            turns: VecDeque::new(),
        }
    }

    /// Append a turn, evicting the oldest entry once at capacity.
    pub fn push(&mut self, speaker: Speaker, text: impl Into<String>) {
        if self.turns.len() == self.capacity {
            self.turns.pop_front();
        }
        self.turns.push_back((speaker, text.into()));
    }

    /// Render the last `last_n` turns as "Speaker: text" lines, oldest first.
    pub fn render(&self, last_n: usize) -> String {
        let skip = self.turns.len().saturating_sub(last_n);
        self.turns
            .iter()
            .skip(skip)
            .map(|(speaker, text)| format!("{speaker}: {text}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_in_chronological_order() {
        let mut transcript = Transcript::new(4);
        transcript.push(Speaker::Scammer, "your account is blocked");
        transcript.push(Speaker::Victim, "oh no, what do I do?");
        assert_eq!(
            transcript.render(4),
            "Scammer: your account is blocked\nVictim: oh no, what do I do?"
        );
    }

    #[test]
    fn evicts_oldest_beyond_capacity() {
        let mut transcript = Transcript::new(2);
        transcript.push(Speaker::Scammer, "one");
        transcript.push(Speaker::Victim, "two");
        transcript.push(Speaker::Scammer, "three");
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.render(8), "Victim: two\nScammer: three");
    }

    #[test]
    fn render_window_takes_most_recent() {
        let mut transcript = Transcript::new(8);
        for i in 0..5 {
            transcript.push(Speaker::Scammer, format!("msg {i}"));
        }
        let window = transcript.render(2);
        assert_eq!(window, "Scammer: msg 3\nScammer: msg 4");
    }

    #[test]
    fn empty_transcript_renders_empty() {
        assert_eq!(Transcript::default().render(6), "");
    }
}
