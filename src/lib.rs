//! # hexagram_harmony
//!
//! Deterministic musical realization of the 64 I Ching hexagrams: each
//! hexagram's two trigrams are spelled as chained four-note pitch runs
//! (solid lines step a major third, broken lines a minor third), both runs
//! are named as chords, and the combined walk is folded into a single
//! octave and named as a scale.
//!
//! ## Example
//! ```rust
//! use hexagram_harmony::{realize_all, report, Dictionaries};
//!
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1) The classical tables, or substitute your own via the builder
//!     let dicts = Dictionaries::builtin();
//!
//!     // 2) Realize all 64 hexagrams, in King Wen order
//!     let realizations = realize_all(&dicts)?;
//!     assert_eq!(realizations.len(), 64);
//!
//!     // 3) Render the textual report
//!     println!("{}", report(&realizations));
//!
//!     Ok(())
//! }
//! ```
//!
//! Classification never fails: chords and scales that match no dictionary
//! entry are reported with sentinel labels, not errors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Interval-pattern classification for chords and scales.
pub use classify::{
    name_chord, name_scale, ChordPattern, ScalePattern, NOT_SEVEN_NOTES, UNCLASSIFIED_SUFFIX,
    UNRECOGNIZED_SCALE,
};

/// Injected dictionary tables and their validation errors.
pub use dictionaries::{Dictionaries, DictionariesBuilder, HarmonyError, HexagramDef};

/// Pitch-class arithmetic and octave reduction.
pub use pitch::{reduce_to_single_octave, NoteName};

/// The per-hexagram realization pipeline and report rendering.
pub use realize::{realize, realize_all, report, Realization};

/// Trigram lines and pitch-set building.
pub use trigram::{Line, TrigramDef};

/// Interval-pattern classification module.
pub mod classify;

/// Dictionary table module.
pub mod dictionaries;

/// Pitch arithmetic module.
pub mod pitch;

/// Realization pipeline module.
pub mod realize;

/// Trigram pitch-set module.
pub mod trigram;

mod tables;
