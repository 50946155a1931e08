//! Static Braille tables
//!
//! All tables are plain `const` slices. A [`RuleSet`] picks the literary
//! tables for one [`Notation`] and is never modified afterwards, so it can be
//! shared freely between translations.

use std::collections::HashMap;

pub mod nemeth;

pub use nemeth::NemethTables;

/// Phonetic initials in their declared order. The order matters: the
/// syllable encoder consumes the first initial that prefixes a spelling.
pub const INITIALS: &[(char, &str)] = &[
    ('ㄅ', "⠕"),
    ('ㄆ', "⠏"),
    ('ㄇ', "⠍"),
    ('ㄈ', "⠟"),
    ('ㄉ', "⠙"),
    ('ㄊ', "⠋"),
    ('ㄋ', "⠝"),
    ('ㄌ', "⠉"),
    ('ㄍ', "⠅"),
    ('ㄎ', "⠇"),
    ('ㄏ', "⠗"),
    ('ㄐ', "⠅"),
    ('ㄑ', "⠚"),
    ('ㄒ', "⠑"),
    ('ㄓ', "⠁"),
    ('ㄔ', "⠃"),
    ('ㄕ', "⠊"),
    ('ㄖ', "⠛"),
    ('ㄗ', "⠓"),
    ('ㄘ', "⠚"),
    ('ㄙ', "⠑"),
];

/// Retroflex and dental sibilant initials. These can form a syllable on
/// their own, in which case they take the empty rhyme.
pub const EMPTY_RHYME_INITIALS: &[char] = &['ㄓ', 'ㄔ', 'ㄕ', 'ㄖ', 'ㄗ', 'ㄘ', 'ㄙ'];

pub const FINALS: &[(char, &str)] = &[
    ('ㄚ', "⠜"),
    ('ㄛ', "⠣"),
    ('ㄜ', "⠮"),
    ('ㄝ', "⠢"),
    ('ㄞ', "⠺"),
    ('ㄟ', "⠴"),
    ('ㄠ', "⠩"),
    ('ㄡ', "⠷"),
    ('ㄢ', "⠧"),
    ('ㄣ', "⠥"),
    ('ㄤ', "⠭"),
    ('ㄥ', "⠵"),
    ('ㄦ', "⠱"),
    ('ㄧ', "⠡"),
    ('ㄨ', "⠌"),
    ('ㄩ', "⠳"),
];

/// The cell used for the empty rhyme (same as ㄦ)
pub const EMPTY_RHYME: &str = "⠱";

pub const COMBINED_FINALS: &[(&str, &str)] = &[
    ("ㄧㄚ", "⠾"),
    ("ㄨㄚ", "⠔"),
    ("ㄧㄛ", "⠴"),
    ("ㄨㄛ", "⠒"),
    ("ㄧㄝ", "⠬"),
    ("ㄩㄝ", "⠦"),
    ("ㄧㄞ", "⠢"),
    ("ㄨㄞ", "⠶"),
    ("ㄨㄟ", "⠫"),
    ("ㄧㄠ", "⠪"),
    ("ㄧㄡ", "⠎"),
    ("ㄧㄢ", "⠞"),
    ("ㄨㄢ", "⠻"),
    ("ㄩㄢ", "⠘"),
    ("ㄧㄣ", "⠹"),
    ("ㄨㄣ", "⠿"),
    ("ㄩㄣ", "⠲"),
    ("ㄧㄤ", "⠨"),
    ("ㄨㄤ", "⠸"),
    ("ㄧㄥ", "⠽"),
    ("ㄨㄥ", "⠯"),
    ("ㄩㄥ", "⠖"),
];

/// Tone marks and their cells. The first tone is unmarked in Bopomofo.
pub const TONES: &[(char, &str)] = &[('ˊ', "⠂"), ('ˇ', "⠈"), ('ˋ', "⠐"), ('˙', "⠁")];

pub const NEUTRAL_TONE_MARK: char = '˙';
pub const FIRST_TONE: &str = "⠄";
pub const NEUTRAL_TONE: &str = "⠁";

/// Punctuation shared by both literary notations
const PUNCTUATION_BASE: &[(char, &str)] = &[
    ('，', "⠆"),
    (',', "⠆"),
    ('、', "⠠"),
    ('；', "⠰"),
    (';', "⠰"),
    ('：', "⠒⠒"),
    (':', "⠒⠒"),
    ('。', "⠤"),
    ('.', "⠤"),
    ('？', "⠕"),
    ('?', "⠕"),
    ('！', "⠇"),
    ('!', "⠇"),
    ('「', "⠰⠤"),
    ('」', "⠤⠆"),
    ('【', "⠯"),
    ('】', "⠽"),
    ('『', "⠰⠤"),
    ('』', "⠤⠆"),
    ('—', "⠒⠒"),
    ('-', "⠒"),
    ('（', "⠪"),
    ('）', "⠕"),
];

const PUNCTUATION_TRADITIONAL: &[(char, &str)] =
    &[('(', "⠪"), (')', "⠕"), ('[', "⠯"), (']', "⠽")];

const PUNCTUATION_UEB: &[(char, &str)] =
    &[('(', "⠐⠣"), (')', "⠐⠜"), ('[', "⠨⠣"), (']', "⠨⠜")];

pub const LETTERS: &[(char, &str)] = &[
    ('a', "⠁"),
    ('b', "⠃"),
    ('c', "⠉"),
    ('d', "⠙"),
    ('e', "⠑"),
    ('f', "⠋"),
    ('g', "⠛"),
    ('h', "⠓"),
    ('i', "⠊"),
    ('j', "⠚"),
    ('k', "⠅"),
    ('l', "⠇"),
    ('m', "⠍"),
    ('n', "⠝"),
    ('o', "⠕"),
    ('p', "⠏"),
    ('q', "⠟"),
    ('r', "⠗"),
    ('s', "⠎"),
    ('t', "⠞"),
    ('u', "⠥"),
    ('v', "⠧"),
    ('w', "⠺"),
    ('x', "⠭"),
    ('y', "⠽"),
    ('z', "⠵"),
];

/// Digits as used in literary text (after the number prefix)
pub const DIGITS: &[(char, &str)] = &[
    ('1', "⠂"),
    ('2', "⠆"),
    ('3', "⠒"),
    ('4', "⠲"),
    ('5', "⠢"),
    ('6', "⠖"),
    ('7', "⠶"),
    ('8', "⠦"),
    ('9', "⠔"),
    ('0', "⠴"),
];

/// The supported Braille notations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    Traditional,
    #[default]
    Ueb,
    Nemeth,
}

/// Indicator cells of a literary notation
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialSymbols {
    pub number_prefix: &'static str,
    pub capital: &'static str,
    pub word_capital: &'static str,
}

const SPECIAL_TRADITIONAL: SpecialSymbols = SpecialSymbols {
    number_prefix: "⠼",
    capital: "⠠",
    word_capital: "⠠⠠",
};

const SPECIAL_UEB: SpecialSymbols = SpecialSymbols {
    number_prefix: "⠼",
    capital: "⠠",
    word_capital: "⠠⠠",
};

/// Look up `key` in one of the `const` tables
pub fn find<K: PartialEq + ?Sized, V: Copy>(table: &[(&K, V)], key: &K) -> Option<V> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Same as [`find`] for tables keyed by `char`
pub fn find_char<V: Copy>(table: &[(char, V)], key: char) -> Option<V> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// The tables for one notation
#[derive(Debug)]
pub struct RuleSet {
    notation: Notation,
    punctuation: HashMap<char, &'static str>,
    special: SpecialSymbols,
    nemeth: NemethTables,
}

impl RuleSet {
    pub fn new(notation: Notation) -> Self {
        let (overrides, special) = match notation {
            Notation::Traditional => (PUNCTUATION_TRADITIONAL, SPECIAL_TRADITIONAL),
            Notation::Ueb | Notation::Nemeth => (PUNCTUATION_UEB, SPECIAL_UEB),
        };
        // later entries replace earlier ones, so the notation specific
        // entries win over the shared base
        let punctuation = PUNCTUATION_BASE
            .iter()
            .chain(overrides.iter())
            .copied()
            .collect();
        Self {
            notation,
            punctuation,
            special,
            nemeth: NemethTables::new(),
        }
    }

    pub fn notation(&self) -> Notation {
        self.notation
    }

    pub fn punctuation(&self, c: char) -> Option<&'static str> {
        self.punctuation.get(&c).copied()
    }

    pub fn special(&self) -> &SpecialSymbols {
        &self.special
    }

    pub fn letter(&self, c: char) -> Option<&'static str> {
        find_char(LETTERS, c.to_ascii_lowercase())
    }

    pub fn digit(&self, c: char) -> Option<&'static str> {
        find_char(DIGITS, c)
    }

    pub fn nemeth(&self) -> &NemethTables {
        &self.nemeth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_per_notation() {
        let traditional = RuleSet::new(Notation::Traditional);
        let ueb = RuleSet::new(Notation::Ueb);
        assert_eq!(traditional.punctuation('('), Some("⠪"));
        assert_eq!(ueb.punctuation('('), Some("⠐⠣"));
        assert_eq!(traditional.punctuation(']'), Some("⠽"));
        assert_eq!(ueb.punctuation(']'), Some("⠨⠜"));
        // shared entries are the same in both
        assert_eq!(traditional.punctuation('，'), Some("⠆"));
        assert_eq!(ueb.punctuation('，'), Some("⠆"));
        assert_eq!(ueb.punctuation('x'), None);
    }

    #[test]
    fn nemeth_uses_ueb_punctuation() {
        let nemeth = RuleSet::new(Notation::Nemeth);
        assert_eq!(nemeth.punctuation('['), Some("⠨⠣"));
    }

    #[test]
    fn letters_ignore_case() {
        let rules = RuleSet::new(Notation::Ueb);
        assert_eq!(rules.letter('a'), Some("⠁"));
        assert_eq!(rules.letter('A'), Some("⠁"));
        assert_eq!(rules.letter('é'), None);
    }

    #[test]
    fn find_in_tables() {
        assert_eq!(find(COMBINED_FINALS, "ㄨㄢ"), Some("⠻"));
        assert_eq!(find(COMBINED_FINALS, "ㄚ"), None);
        assert_eq!(find_char(FINALS, 'ㄚ'), Some("⠜"));
        assert_eq!(find_char(TONES, 'ˋ'), Some("⠐"));
    }
}
