//! Structure Realization Pipeline
//!
//! Walks the hexagram table: each hexagram's two trigrams are spelled as
//! chained four-note pitch runs, both runs are named as chords, the combined
//! seven-step walk is folded into a single octave, and the folded set is
//! named as a scale.

use std::fmt::{self, Display};

use serde::Serialize;
use tracing::{debug, trace};

use crate::classify::{name_chord, name_scale};
use crate::dictionaries::{Dictionaries, HarmonyError, HexagramDef};
use crate::pitch::{reduce_to_single_octave, NoteName};
use crate::trigram::TrigramDef;

/// The musical realization of one hexagram.
///
/// Produced by [`realize`] and never mutated afterwards. `Display` renders
/// the record as one report block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Realization {
    /// Classical index of the source hexagram.
    pub index: u8,
    /// Romanized name of the hexagram.
    pub name_zh: String,
    /// English name of the hexagram.
    pub name_en: String,
    /// Id of the lower trigram.
    pub bottom_trigram: String,
    /// Absolute semitones of the lower run, spelled from 0.
    pub bottom_semitones: [i32; 4],
    /// Note names of the lower run.
    pub bottom_notes: [NoteName; 4],
    /// Chord label of the lower run.
    pub bottom_chord: String,
    /// Id of the upper trigram.
    pub top_trigram: String,
    /// Absolute semitones of the upper run, spelled from the lower run's
    /// last pitch.
    pub top_semitones: [i32; 4],
    /// Note names of the upper run.
    pub top_notes: [NoteName; 4],
    /// Chord label of the upper run.
    pub top_chord: String,
    /// Combined walk folded into one octave. Holds at most 12 pitches and
    /// can hold fewer than 7 when the walk wraps onto repeated pitch
    /// classes.
    pub scale_semitones: Vec<i32>,
    /// Note names of the folded set.
    pub scale_notes: Vec<NoteName>,
    /// Scale label, or a sentinel when the folded set is not a recognized
    /// 7-note scale.
    pub scale: String,
}

impl Display for Realization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#{}  {} ({})", self.index, self.name_zh, self.name_en)?;
        writeln!(
            f,
            "   Bottom: {} [{}] => {}",
            self.bottom_trigram,
            join_notes(&self.bottom_notes),
            self.bottom_chord
        )?;
        writeln!(
            f,
            "   Top:    {} [{}] => {}",
            self.top_trigram,
            join_notes(&self.top_notes),
            self.top_chord
        )?;
        write!(
            f,
            "   7-note set: [{}] => {}",
            join_notes(&self.scale_notes),
            self.scale
        )
    }
}

fn join_notes(notes: &[NoteName]) -> String {
    notes
        .iter()
        .map(|note| note.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Realize one hexagram against the given dictionaries.
///
/// The lower trigram is spelled from semitone 0 and the upper trigram from
/// the lower run's final pitch, so the two runs share one boundary pitch and
/// the combined walk rises through seven steps. The only error is a
/// hexagram referencing a trigram id missing from the table, which cannot
/// happen with builder-validated dictionaries.
pub fn realize(hexagram: &HexagramDef, dicts: &Dictionaries) -> Result<Realization, HarmonyError> {
    let bottom = resolve(dicts, &hexagram.bottom, hexagram.index)?;
    let top = resolve(dicts, &hexagram.top, hexagram.index)?;

    let bottom_semitones = bottom.pitch_set(0);
    let bottom_notes = bottom_semitones.map(NoteName::from_semitone);
    let bottom_chord = name_chord(&bottom_notes, dicts.chords());

    let top_semitones = top.pitch_set(bottom_semitones[3]);
    let top_notes = top_semitones.map(NoteName::from_semitone);
    let top_chord = name_chord(&top_notes, dicts.chords());

    // Drop the shared boundary pitch: seven distinct steps.
    let mut combined = Vec::with_capacity(7);
    combined.extend_from_slice(&bottom_semitones);
    combined.extend_from_slice(&top_semitones[1..]);

    let scale_semitones = reduce_to_single_octave(&combined);
    let scale_notes: Vec<NoteName> = scale_semitones
        .iter()
        .map(|&s| NoteName::from_semitone(s))
        .collect();
    let scale = name_scale(&scale_semitones, dicts.scales());

    trace!(
        index = hexagram.index,
        %bottom_chord,
        %top_chord,
        %scale,
        "realized hexagram"
    );

    Ok(Realization {
        index: hexagram.index,
        name_zh: hexagram.name_zh.clone(),
        name_en: hexagram.name_en.clone(),
        bottom_trigram: hexagram.bottom.clone(),
        bottom_semitones,
        bottom_notes,
        bottom_chord,
        top_trigram: hexagram.top.clone(),
        top_semitones,
        top_notes,
        top_chord,
        scale_semitones,
        scale_notes,
        scale,
    })
}

/// Realize every hexagram in the table, in table order.
///
/// With builder-validated dictionaries the table runs 1..=N ascending, so
/// the output does too.
pub fn realize_all(dicts: &Dictionaries) -> Result<Vec<Realization>, HarmonyError> {
    debug!(hexagrams = dicts.hexagrams().len(), "realizing hexagram table");
    dicts
        .hexagrams()
        .iter()
        .map(|hexagram| realize(hexagram, dicts))
        .collect()
}

/// Render the full report: one block per realization, blocks separated by a
/// blank line.
pub fn report(realizations: &[Realization]) -> String {
    realizations
        .iter()
        .map(|realization| realization.to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn resolve<'d>(
    dicts: &'d Dictionaries,
    id: &str,
    index: u8,
) -> Result<&'d TrigramDef, HarmonyError> {
    dicts.trigram(id).ok_or_else(|| HarmonyError::UnknownTrigram {
        id: id.to_string(),
        index,
    })
}
