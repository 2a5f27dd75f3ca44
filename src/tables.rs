//! Built-in tables behind [`crate::Dictionaries::builtin`].
//!
//! List order is load-bearing: the classifiers scan the chord and scale
//! dictionaries in order and the first match wins, and the hexagram table's
//! order is the report order.

use crate::classify::{ChordPattern, ScalePattern};
use crate::dictionaries::HexagramDef;
use crate::trigram::Line::{Yang, Yin};
use crate::trigram::TrigramDef;

pub(crate) fn trigrams() -> Vec<TrigramDef> {
    vec![
        TrigramDef::new("Qian", "Heaven", [Yang, Yang, Yang]),
        TrigramDef::new("Kun", "Earth", [Yin, Yin, Yin]),
        TrigramDef::new("Zhen", "Thunder", [Yang, Yin, Yin]),
        TrigramDef::new("Xun", "Wind", [Yin, Yang, Yang]),
        TrigramDef::new("Kan", "Water", [Yin, Yang, Yin]),
        TrigramDef::new("Li", "Fire", [Yang, Yin, Yang]),
        TrigramDef::new("Gen", "Mountain", [Yin, Yin, Yang]),
        TrigramDef::new("Dui", "Lake", [Yang, Yang, Yin]),
    ]
}

pub(crate) fn seventh_chords() -> Vec<ChordPattern> {
    vec![
        ChordPattern::new("maj7", [0, 4, 7, 11]),
        ChordPattern::new("dom7", [0, 4, 7, 10]),
        ChordPattern::new("min7", [0, 3, 7, 10]),
        ChordPattern::new("m7b5", [0, 3, 6, 10]),
        ChordPattern::new("dim7", [0, 3, 6, 9]),
        ChordPattern::new("min(maj7)", [0, 3, 7, 11]),
        ChordPattern::new("augmaj7", [0, 4, 8, 11]),
        ChordPattern::new("7#5", [0, 4, 8, 10]),
        // Same intervals as 7#5; kept so the label exists, but 7#5 always
        // wins by list order.
        ChordPattern::new("aug7", [0, 4, 8, 10]),
    ]
}

pub(crate) fn known_scales() -> Vec<ScalePattern> {
    vec![
        // Seven modes of the major scale.
        ScalePattern::new("Ionian (Major)", [0, 2, 4, 5, 7, 9, 11]),
        ScalePattern::new("Dorian", [0, 2, 3, 5, 7, 9, 10]),
        ScalePattern::new("Phrygian", [0, 1, 3, 5, 7, 8, 10]),
        ScalePattern::new("Lydian", [0, 2, 4, 6, 7, 9, 11]),
        ScalePattern::new("Mixolydian", [0, 2, 4, 5, 7, 9, 10]),
        ScalePattern::new("Aeolian (Nat. Minor)", [0, 2, 3, 5, 7, 8, 10]),
        ScalePattern::new("Locrian", [0, 1, 3, 5, 6, 8, 10]),
        // Harmonic and melodic minor.
        ScalePattern::new("Harmonic Minor", [0, 2, 3, 5, 7, 8, 11]),
        ScalePattern::new("Melodic Minor", [0, 2, 3, 5, 7, 9, 11]),
        // Others.
        ScalePattern::new("Double Harmonic", [0, 1, 4, 5, 7, 8, 11]),
        ScalePattern::new("Neapolitan Minor", [0, 1, 3, 5, 7, 8, 10]),
        ScalePattern::new("Neapolitan Major", [0, 1, 3, 5, 7, 9, 11]),
        ScalePattern::new("Phrygian Dominant", [0, 1, 4, 5, 7, 8, 10]),
        ScalePattern::new("Hungarian Minor", [0, 2, 3, 6, 7, 8, 11]),
    ]
}

pub(crate) fn hexagrams() -> Vec<HexagramDef> {
    vec![
        HexagramDef::new(1, "Qian", "The Creative", "Qian", "Qian"),
        HexagramDef::new(2, "Kun", "The Receptive", "Kun", "Kun"),
        HexagramDef::new(3, "Zhun", "Difficulty at the Beginning", "Zhen", "Kan"),
        HexagramDef::new(4, "Meng", "Youthful Folly", "Kan", "Gen"),
        HexagramDef::new(5, "Xu", "Waiting", "Qian", "Kan"),
        HexagramDef::new(6, "Song", "Conflict", "Kan", "Qian"),
        HexagramDef::new(7, "Shi", "The Army", "Kan", "Kun"),
        HexagramDef::new(8, "Bi", "Holding Together", "Kun", "Kan"),
        HexagramDef::new(9, "Xiao Chu", "The Taming Power of the Small", "Qian", "Xun"),
        HexagramDef::new(10, "Lu", "Treading", "Dui", "Qian"),
        HexagramDef::new(11, "Tai", "Peace", "Qian", "Kun"),
        HexagramDef::new(12, "Pi", "Standstill", "Kun", "Qian"),
        HexagramDef::new(13, "Tong Ren", "Fellowship with Men", "Li", "Qian"),
        HexagramDef::new(14, "Da You", "Great Possession", "Qian", "Li"),
        HexagramDef::new(15, "Qian", "Modesty", "Gen", "Kun"),
        HexagramDef::new(16, "Yu", "Enthusiasm", "Kun", "Zhen"),
        HexagramDef::new(17, "Sui", "Following", "Zhen", "Dui"),
        HexagramDef::new(18, "Gu", "Work on the Decayed", "Xun", "Gen"),
        HexagramDef::new(19, "Lin", "Approach", "Dui", "Kun"),
        HexagramDef::new(20, "Guan", "Contemplation", "Kun", "Xun"),
        HexagramDef::new(21, "Shi He", "Biting Through", "Zhen", "Li"),
        HexagramDef::new(22, "Bi", "Grace", "Li", "Gen"),
        HexagramDef::new(23, "Bo", "Splitting Apart", "Kun", "Gen"),
        HexagramDef::new(24, "Fu", "Return", "Zhen", "Kun"),
        HexagramDef::new(25, "Wu Wang", "Innocence", "Zhen", "Qian"),
        HexagramDef::new(26, "Da Chu", "Taming Power of the Great", "Qian", "Gen"),
        HexagramDef::new(27, "Yi", "Nourishing", "Zhen", "Gen"),
        HexagramDef::new(28, "Da Guo", "Preponderance of the Great", "Xun", "Dui"),
        HexagramDef::new(29, "Kan", "The Abysmal (Water)", "Kan", "Kan"),
        HexagramDef::new(30, "Li", "The Clinging (Fire)", "Li", "Li"),
        HexagramDef::new(31, "Xian", "Influence", "Gen", "Dui"),
        HexagramDef::new(32, "Heng", "Duration", "Xun", "Zhen"),
        HexagramDef::new(33, "Dun", "Retreat", "Gen", "Qian"),
        HexagramDef::new(34, "Da Zhuang", "Great Power", "Qian", "Zhen"),
        HexagramDef::new(35, "Jin", "Progress", "Kun", "Li"),
        HexagramDef::new(36, "Ming Yi", "Darkening of the Light", "Li", "Kun"),
        HexagramDef::new(37, "Jia Ren", "The Family", "Xun", "Li"),
        HexagramDef::new(38, "Kui", "Opposition", "Li", "Dui"),
        HexagramDef::new(39, "Jian", "Obstruction", "Gen", "Kan"),
        HexagramDef::new(40, "Xie", "Deliverance", "Kan", "Zhen"),
        HexagramDef::new(41, "Sun", "Decrease", "Dui", "Gen"),
        HexagramDef::new(42, "Yi", "Increase", "Dui", "Xun"),
        HexagramDef::new(43, "Guai", "Break-through", "Qian", "Dui"),
        HexagramDef::new(44, "Gou", "Coming to Meet", "Dui", "Qian"),
        HexagramDef::new(45, "Cui", "Gathering Together", "Kun", "Dui"),
        HexagramDef::new(46, "Sheng", "Pushing Upward", "Xun", "Kun"),
        HexagramDef::new(47, "Kun", "Oppression (Exhaustion)", "Dui", "Kan"),
        HexagramDef::new(48, "Jing", "The Well", "Kan", "Xun"),
        HexagramDef::new(49, "Ge", "Revolution (Molting)", "Li", "Dui"),
        HexagramDef::new(50, "Ding", "The Cauldron", "Xun", "Li"),
        HexagramDef::new(51, "Zhen", "The Arousing (Shock)", "Zhen", "Zhen"),
        HexagramDef::new(52, "Gen", "Keeping Still (Mountain)", "Gen", "Gen"),
        HexagramDef::new(53, "Jian", "Development (Gradual Progress)", "Gen", "Xun"),
        HexagramDef::new(54, "Gui Mei", "The Marrying Maiden", "Dui", "Zhen"),
        HexagramDef::new(55, "Feng", "Abundance (Fullness)", "Li", "Zhen"),
        HexagramDef::new(56, "Lu", "The Wanderer", "Gen", "Li"),
        HexagramDef::new(57, "Xun", "The Gentle (Wind)", "Xun", "Xun"),
        HexagramDef::new(58, "Dui", "The Joyous (Lake)", "Dui", "Dui"),
        HexagramDef::new(59, "Huan", "Dispersion", "Kan", "Xun"),
        HexagramDef::new(60, "Jie", "Limitation", "Dui", "Kan"),
        HexagramDef::new(61, "Zhong Fu", "Inner Truth", "Dui", "Xun"),
        HexagramDef::new(62, "Xiao Guo", "Preponderance of the Small", "Gen", "Zhen"),
        HexagramDef::new(63, "Ji Ji", "After Completion", "Li", "Kan"),
        HexagramDef::new(64, "Wei Ji", "Before Completion", "Kan", "Li"),
    ]
}
