//! End-to-end realization tests over the built-in tables.

use hexagram_harmony::{realize, realize_all, report, Dictionaries, NoteName};
use lazy_static::lazy_static;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

lazy_static! {
    static ref DICTS: Dictionaries = Dictionaries::builtin();
}

fn names(notes: &[NoteName]) -> Vec<String> {
    notes.iter().map(|note| note.to_string()).collect()
}

#[test]
fn hexagram_one_collapses_to_three_pitch_classes() {
    // Qian over Qian: three major thirds sum to exactly one octave, so the
    // walk wraps back onto the starting pitch class and no 7-note scale
    // survives the fold.
    let realization = realize(&DICTS.hexagrams()[0], &DICTS).unwrap();
    assert_eq!(realization.index, 1);
    assert_eq!(realization.bottom_semitones, [0, 4, 8, 12]);
    assert_eq!(names(&realization.bottom_notes), ["C", "E", "G#", "C"]);
    assert_eq!(realization.bottom_chord, "C???");
    assert_eq!(realization.top_semitones, [12, 16, 20, 24]);
    assert_eq!(names(&realization.top_notes), ["C", "E", "G#", "C"]);
    assert_eq!(realization.top_chord, "C???");
    assert_eq!(realization.scale_semitones, vec![0, 4, 8]);
    assert_eq!(realization.scale, "Not a 7-note collection");
}

#[test]
fn hexagram_twenty_two_is_c_ionian() {
    let realization = realize(&DICTS.hexagrams()[21], &DICTS).unwrap();
    assert_eq!(realization.index, 22);
    assert_eq!(realization.name_zh, "Bi");
    assert_eq!(realization.bottom_trigram, "Li");
    assert_eq!(realization.top_trigram, "Gen");
    assert_eq!(realization.bottom_semitones, [0, 4, 7, 11]);
    assert_eq!(names(&realization.bottom_notes), ["C", "E", "G", "B"]);
    assert_eq!(realization.bottom_chord, "Cmaj7");
    assert_eq!(realization.top_semitones, [11, 14, 17, 21]);
    assert_eq!(names(&realization.top_notes), ["B", "D", "F", "A"]);
    assert_eq!(realization.top_chord, "Bm7b5");
    assert_eq!(realization.scale_semitones, vec![0, 2, 4, 5, 7, 9, 11]);
    assert_eq!(
        names(&realization.scale_notes),
        ["C", "D", "E", "F", "G", "A", "B"]
    );
    assert_eq!(realization.scale, "C Ionian (Major)");
}

#[test]
fn all_hexagrams_realize_in_king_wen_order() {
    let realizations = realize_all(&DICTS).unwrap();
    assert_eq!(realizations.len(), 64);
    for (position, realization) in realizations.iter().enumerate() {
        assert_eq!(realization.index as usize, position + 1);
    }
}

#[test]
fn per_hexagram_invariants_hold_everywhere() {
    // Realizations are independent, so sweep the table in parallel.
    DICTS.hexagrams().par_iter().for_each(|hexagram| {
        let r = realize(hexagram, &DICTS).unwrap();

        // Runs chain through a shared boundary pitch and always rise.
        assert_eq!(r.bottom_semitones[0], 0);
        assert_eq!(r.top_semitones[0], r.bottom_semitones[3]);
        assert!(r.bottom_semitones.windows(2).all(|p| p[0] < p[1]));
        assert!(r.top_semitones.windows(2).all(|p| p[0] < p[1]));

        // The folded set is ascending, class-unique, and anchored at C.
        assert!(!r.scale_semitones.is_empty());
        assert!(r.scale_semitones.len() <= 12);
        assert!(r.scale_semitones.windows(2).all(|p| p[0] < p[1]));
        assert_eq!(r.scale_semitones[0].rem_euclid(12), 0);

        // Chord labels always begin with the run's root note name.
        assert!(r.bottom_chord.starts_with(r.bottom_notes[0].as_str()));
        assert!(r.top_chord.starts_with(r.top_notes[0].as_str()));
    });
}

#[test]
fn report_renders_one_block_per_hexagram() {
    let realizations = realize_all(&DICTS).unwrap();
    let text = report(&realizations);
    let blocks: Vec<&str> = text.split("\n\n").collect();
    assert_eq!(blocks.len(), 64);

    assert!(blocks[0].starts_with("#1  Qian (The Creative)\n"));
    assert!(blocks[21].starts_with("#22  Bi (Grace)\n"));
    assert!(blocks[21].contains("Bottom: Li [C, E, G, B] => Cmaj7"));
    assert!(blocks[21].contains("Top:    Gen [B, D, F, A] => Bm7b5"));
    assert!(blocks[21].contains("7-note set: [C, D, E, F, G, A, B] => C Ionian (Major)"));
}

#[test]
fn realizations_serialize_for_external_reporters() {
    let realization = realize(&DICTS.hexagrams()[21], &DICTS).unwrap();
    let json = serde_json::to_value(&realization).unwrap();
    assert_eq!(json["index"], 22);
    assert_eq!(json["bottom_chord"], "Cmaj7");
    assert_eq!(json["scale"], "C Ionian (Major)");
    assert_eq!(json["bottom_notes"][2], "G");
    assert_eq!(json["top_notes"][0], "B");
}
