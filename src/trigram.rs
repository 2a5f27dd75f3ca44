//! Trigram Pitch-Set Builder
//!
//! A trigram's three lines choose the intervals of a four-note run: each
//! solid (yang) line steps up a major third, each broken (yin) line a minor
//! third.

use serde::{Deserialize, Serialize};

/// One line of a trigram.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Line {
    /// Broken line: steps up 3 semitones.
    Yin,
    /// Solid line: steps up 4 semitones.
    Yang,
}

impl Line {
    /// The interval this line contributes, in semitones.
    pub const fn step(self) -> i32 {
        match self {
            Line::Yin => 3,
            Line::Yang => 4,
        }
    }
}

/// A named trigram and its three lines, read bottom to top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrigramDef {
    /// Romanized identifier referenced by hexagram records (e.g. `Qian`).
    pub id: String,
    /// English name (e.g. `Heaven`).
    pub name_en: String,
    /// Line pattern, bottom line first.
    pub lines: [Line; 3],
}

impl TrigramDef {
    /// Construct a trigram definition.
    pub fn new(id: &str, name_en: &str, lines: [Line; 3]) -> Self {
        TrigramDef {
            id: id.to_string(),
            name_en: name_en.to_string(),
            lines,
        }
    }

    /// Spell the four-note absolute pitch run this trigram describes,
    /// starting at `start` and walking one step per line.
    ///
    /// The run always begins at `start` and is strictly increasing, since
    /// every step is +3 or +4.
    pub fn pitch_set(&self, start: i32) -> [i32; 4] {
        let mut run = [start; 4];
        let mut current = start;
        for (slot, line) in run[1..].iter_mut().zip(self.lines) {
            current += line.step();
            *slot = current;
        }
        run
    }
}
