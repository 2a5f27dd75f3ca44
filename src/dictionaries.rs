//! Dictionary tables
//!
//! The read-only tables the realization pipeline consumes: trigrams, chord
//! patterns, scale patterns, and the hexagram list. Tables are injected at
//! construction instead of baked in as globals so tests can substitute their
//! own; [`Dictionaries::builtin`] supplies the classical data.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classify::{ChordPattern, ScalePattern};
use crate::tables;
use crate::trigram::TrigramDef;

/// Errors for malformed injected tables or unresolvable references.
///
/// These cover the precondition-violation class only. Classification
/// outcomes ("no such chord", "not a 7-note scale") are reported as sentinel
/// label values, never as errors.
#[derive(Debug, Error)]
pub enum HarmonyError {
    /// A hexagram referenced a trigram id absent from the trigram table.
    #[error("hexagram #{index} references unknown trigram `{id}`")]
    UnknownTrigram {
        /// The unresolvable trigram id.
        id: String,
        /// Index of the referencing hexagram.
        index: u8,
    },

    /// A note name string was not one of the twelve sharp-spelled names.
    #[error("unknown note name `{0}`")]
    UnknownNoteName(String),

    /// Hexagram indices must run 1..=N in table order with no gaps.
    #[error("hexagram at position {position} has index {found}, expected {expected}")]
    NonContiguousIndex {
        /// Zero-based position in the table.
        position: usize,
        /// The index found at that position.
        found: u8,
        /// The index contiguity requires there.
        expected: u8,
    },

    /// A chord or scale pattern's intervals were not strictly ascending.
    #[error("pattern `{label}` has non-ascending intervals")]
    UnsortedPattern {
        /// Label of the offending pattern.
        label: String,
    },
}

/// One hexagram record: classical index, names, and its two trigrams by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramDef {
    /// Classical King Wen index, 1 through 64.
    pub index: u8,
    /// Romanized Chinese name.
    pub name_zh: String,
    /// English name.
    pub name_en: String,
    /// Id of the lower trigram.
    pub bottom: String,
    /// Id of the upper trigram.
    pub top: String,
}

impl HexagramDef {
    /// Construct a hexagram record.
    pub fn new(index: u8, name_zh: &str, name_en: &str, bottom: &str, top: &str) -> Self {
        HexagramDef {
            index,
            name_zh: name_zh.to_string(),
            name_en: name_en.to_string(),
            bottom: bottom.to_string(),
            top: top.to_string(),
        }
    }
}

/// The four read-only tables driving realization.
///
/// Immutable once built. Chord and scale tables are ordered sequences, not
/// keyed maps: duplicate interval sets under different labels are legal and
/// the first entry in table order wins, so list order is part of the
/// observable contract.
#[derive(Debug, Clone)]
pub struct Dictionaries {
    trigrams: Vec<TrigramDef>,
    chords: Vec<ChordPattern>,
    scales: Vec<ScalePattern>,
    hexagrams: Vec<HexagramDef>,
}

impl Dictionaries {
    /// The classical tables: 8 trigrams, 9 seventh chords, 14 scales, and
    /// the 64 hexagrams in King Wen order.
    pub fn builtin() -> Self {
        Dictionaries {
            trigrams: tables::trigrams(),
            chords: tables::seventh_chords(),
            scales: tables::known_scales(),
            hexagrams: tables::hexagrams(),
        }
    }

    /// Start customizing with a builder seeded from the built-in tables.
    pub fn builder() -> DictionariesBuilder {
        DictionariesBuilder::new()
    }

    /// The trigram table.
    pub fn trigrams(&self) -> &[TrigramDef] {
        &self.trigrams
    }

    /// The chord dictionary, in match order.
    pub fn chords(&self) -> &[ChordPattern] {
        &self.chords
    }

    /// The scale dictionary, in match order.
    pub fn scales(&self) -> &[ScalePattern] {
        &self.scales
    }

    /// The hexagram table, in report order.
    pub fn hexagrams(&self) -> &[HexagramDef] {
        &self.hexagrams
    }

    /// Look up a trigram by id.
    pub fn trigram(&self, id: &str) -> Option<&TrigramDef> {
        self.trigrams.iter().find(|t| t.id == id)
    }
}

/// Builder for [`Dictionaries`], seeded with the built-in tables so tests
/// can replace just the table under study.
pub struct DictionariesBuilder {
    trigrams: Vec<TrigramDef>,
    chords: Vec<ChordPattern>,
    scales: Vec<ScalePattern>,
    hexagrams: Vec<HexagramDef>,
}

impl DictionariesBuilder {
    /// Start from the built-in tables.
    pub fn new() -> Self {
        DictionariesBuilder {
            trigrams: tables::trigrams(),
            chords: tables::seventh_chords(),
            scales: tables::known_scales(),
            hexagrams: tables::hexagrams(),
        }
    }

    /// Replace the trigram table.
    pub fn trigrams(mut self, trigrams: Vec<TrigramDef>) -> Self {
        self.trigrams = trigrams;
        self
    }

    /// Replace the chord dictionary.
    pub fn chords(mut self, chords: Vec<ChordPattern>) -> Self {
        self.chords = chords;
        self
    }

    /// Replace the scale dictionary.
    pub fn scales(mut self, scales: Vec<ScalePattern>) -> Self {
        self.scales = scales;
        self
    }

    /// Replace the hexagram table.
    pub fn hexagrams(mut self, hexagrams: Vec<HexagramDef>) -> Self {
        self.hexagrams = hexagrams;
        self
    }

    /// Validate and finalize.
    ///
    /// Checks that hexagram indices run 1..=N contiguously in table order,
    /// that every referenced trigram id resolves, and that chord and scale
    /// interval sets are strictly ascending.
    pub fn build(self) -> Result<Dictionaries, HarmonyError> {
        for (position, hexagram) in self.hexagrams.iter().enumerate() {
            let expected = (position + 1) as u8;
            if hexagram.index != expected {
                return Err(HarmonyError::NonContiguousIndex {
                    position,
                    found: hexagram.index,
                    expected,
                });
            }
        }

        let dicts = Dictionaries {
            trigrams: self.trigrams,
            chords: self.chords,
            scales: self.scales,
            hexagrams: self.hexagrams,
        };

        for hexagram in &dicts.hexagrams {
            for id in [&hexagram.bottom, &hexagram.top] {
                if dicts.trigram(id).is_none() {
                    return Err(HarmonyError::UnknownTrigram {
                        id: id.clone(),
                        index: hexagram.index,
                    });
                }
            }
        }

        for pattern in &dicts.chords {
            ensure_ascending(&pattern.intervals, &pattern.label)?;
        }
        for pattern in &dicts.scales {
            ensure_ascending(&pattern.intervals, &pattern.label)?;
        }

        Ok(dicts)
    }
}

impl Default for DictionariesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_ascending(intervals: &[i32], label: &str) -> Result<(), HarmonyError> {
    if intervals.windows(2).all(|pair| pair[0] < pair[1]) {
        Ok(())
    } else {
        Err(HarmonyError::UnsortedPattern {
            label: label.to_string(),
        })
    }
}
