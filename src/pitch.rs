//! Pitch Arithmetic
//!
//! Integer semitone to note-name conversion and single-octave reduction.
//! Accidentals use sharp spelling only (C#, never Db).

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dictionaries::HarmonyError;

const SEMITONES: i32 = 12;

/// Twelve chromatic pitch classes, sharp spelling only.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteName {
    /// C
    C,
    /// C sharp
    #[serde(rename = "C#")]
    Cs,
    /// D
    D,
    /// D sharp
    #[serde(rename = "D#")]
    Ds,
    /// E
    E,
    /// F
    F,
    /// F sharp
    #[serde(rename = "F#")]
    Fs,
    /// G
    G,
    /// G sharp
    #[serde(rename = "G#")]
    Gs,
    /// A
    A,
    /// A sharp
    #[serde(rename = "A#")]
    As,
    /// B
    B,
}

impl NoteName {
    /// All twelve names in semitone order, C first.
    pub const ALL: [NoteName; SEMITONES as usize] = [
        NoteName::C,
        NoteName::Cs,
        NoteName::D,
        NoteName::Ds,
        NoteName::E,
        NoteName::F,
        NoteName::Fs,
        NoteName::G,
        NoteName::Gs,
        NoteName::A,
        NoteName::As,
        NoteName::B,
    ];

    /// Name an absolute semitone. Total over all integers: the value is
    /// reduced into 0..12 first, so negative input is fine.
    pub const fn from_semitone(s: i32) -> NoteName {
        match ((s % SEMITONES) + SEMITONES) % SEMITONES {
            0 => NoteName::C,
            1 => NoteName::Cs,
            2 => NoteName::D,
            3 => NoteName::Ds,
            4 => NoteName::E,
            5 => NoteName::F,
            6 => NoteName::Fs,
            7 => NoteName::G,
            8 => NoteName::Gs,
            9 => NoteName::A,
            10 => NoteName::As,
            _ => NoteName::B,
        }
    }

    /// Semitone index of this pitch class, 0 (C) through 11 (B).
    pub const fn semitone(self) -> i32 {
        match self {
            NoteName::C => 0,
            NoteName::Cs => 1,
            NoteName::D => 2,
            NoteName::Ds => 3,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::Fs => 6,
            NoteName::G => 7,
            NoteName::Gs => 8,
            NoteName::A => 9,
            NoteName::As => 10,
            NoteName::B => 11,
        }
    }

    /// The fixed spelling of this pitch class.
    pub const fn as_str(self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::Cs => "C#",
            NoteName::D => "D",
            NoteName::Ds => "D#",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::Fs => "F#",
            NoteName::G => "G",
            NoteName::Gs => "G#",
            NoteName::A => "A",
            NoteName::As => "A#",
            NoteName::B => "B",
        }
    }
}

impl Display for NoteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteName {
    type Err = HarmonyError;

    /// Parse one of the twelve sharp-spelled names. No enharmonic aliases:
    /// `Db` is rejected even though it sounds like `C#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoteName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| HarmonyError::UnknownNoteName(s.to_string()))
    }
}

/// Fold a run of absolute semitones into a single octave anchored at the
/// first pitch's class, dropping duplicate pitch classes.
///
/// The result is strictly ascending, at most 12 long, and starts on the
/// input's first pitch class. It can come out shorter than the input's
/// nominal step count: a run whose steps wrap back onto an earlier pitch
/// class collapses, which is why a seven-step hexagram walk is not
/// guaranteed to yield seven scale degrees.
pub fn reduce_to_single_octave(semitones: &[i32]) -> Vec<i32> {
    debug_assert!(!semitones.is_empty(), "pitch run cannot be empty");
    let root = semitones[0].rem_euclid(SEMITONES);
    let mut relative: Vec<i32> = semitones
        .iter()
        .map(|s| (s - root).rem_euclid(SEMITONES))
        .collect();
    relative.sort_unstable();
    relative.dedup();
    for pitch in &mut relative {
        *pitch += root;
    }
    relative
}
