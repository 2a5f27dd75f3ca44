//! Interval-Pattern Classifier
//!
//! Names 4-note chords and 7-note scales by matching root-relative interval
//! sets against ordered dictionaries. Both classifiers sort intervals before
//! comparing, so they are blind to voicing and generation order.

use serde::{Deserialize, Serialize};

use crate::pitch::NoteName;

const SEMITONES: i32 = 12;

/// Label returned by [`name_scale`] when the input does not hold exactly
/// seven pitches.
pub const NOT_SEVEN_NOTES: &str = "Not a 7-note collection";

/// Label returned by [`name_scale`] when no dictionary entry matches.
pub const UNRECOGNIZED_SCALE: &str = "Unrecognized 7-note scale";

/// Suffix appended to the root by [`name_chord`] when nothing matches.
pub const UNCLASSIFIED_SUFFIX: &str = "???";

/// One chord dictionary entry: a label and four interval offsets from an
/// implicit root of 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordPattern {
    /// Suffix appended to the root note name on a match (e.g. `maj7`).
    pub label: String,
    /// Ascending pitch-class offsets from the root.
    pub intervals: [i32; 4],
}

impl ChordPattern {
    /// Construct a chord pattern.
    pub fn new(label: &str, intervals: [i32; 4]) -> Self {
        ChordPattern {
            label: label.to_string(),
            intervals,
        }
    }
}

/// One scale dictionary entry: a label and seven interval offsets from an
/// implicit root of 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalePattern {
    /// Name reported after the root on a match (e.g. `Dorian`).
    pub label: String,
    /// Ascending pitch-class offsets from the root.
    pub intervals: [i32; 7],
}

impl ScalePattern {
    /// Construct a scale pattern.
    pub fn new(label: &str, intervals: [i32; 7]) -> Self {
        ScalePattern {
            label: label.to_string(),
            intervals,
        }
    }
}

/// Name a four-note chord from its bottom note.
///
/// Intervals are taken mod 12 from the first note, so octave information is
/// discarded and repeated pitch classes are kept. The first dictionary entry
/// whose interval set matches wins; dictionary order is significant because
/// entries may share an interval set under different labels. Unmatched
/// chords fall back to a triad check on the gaps between consecutive sorted
/// intervals, and finally to the [`UNCLASSIFIED_SUFFIX`] sentinel.
pub fn name_chord(notes: &[NoteName; 4], chords: &[ChordPattern]) -> String {
    let root = notes[0];
    let root_semitone = root.semitone();

    let mut intervals = [0; 4];
    for (interval, note) in intervals.iter_mut().zip(notes) {
        *interval = (note.semitone() - root_semitone).rem_euclid(SEMITONES);
    }
    intervals.sort_unstable();

    for pattern in chords {
        if intervals == pattern.intervals {
            return format!("{root}{}", pattern.label);
        }
    }

    // Triad fallback on the consecutive interval gaps.
    let gaps: Vec<String> = intervals
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).rem_euclid(SEMITONES).to_string())
        .collect();
    let suffix = match gaps.join("-").as_str() {
        "4-4-0" => "+",
        "3-3-0" => "dim",
        "4-3-4" => "maj7",
        _ => UNCLASSIFIED_SUFFIX,
    };
    format!("{root}{suffix}")
}

/// Name a seven-note pitch collection from its first pitch's class.
///
/// Inputs of any other length get the [`NOT_SEVEN_NOTES`] sentinel (the
/// octave reducer can legitimately hand over fewer than seven classes).
/// Otherwise intervals from the root are sorted and compared against the
/// dictionary in order; no match yields [`UNRECOGNIZED_SCALE`].
pub fn name_scale(semitones: &[i32], scales: &[ScalePattern]) -> String {
    if semitones.len() != 7 {
        return NOT_SEVEN_NOTES.to_string();
    }

    let root = semitones[0].rem_euclid(SEMITONES);
    let mut intervals: Vec<i32> = semitones
        .iter()
        .map(|s| (s - root).rem_euclid(SEMITONES))
        .collect();
    intervals.sort_unstable();

    for pattern in scales {
        if intervals == pattern.intervals {
            return format!("{} {}", NoteName::from_semitone(root), pattern.label);
        }
    }
    UNRECOGNIZED_SCALE.to_string()
}
