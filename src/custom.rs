//! User supplied transcription rules
//!
//! A rule maps a trigger word to either literal Braille or to one Bopomofo
//! syllable per character of the trigger:
//!
//! ```text
//! Boyan=⠠⠃⠕⠽⠁⠝
//! 冠軍=ㄍㄨㄢˋ ㄐㄩㄣ
//! ```

use log::warn;

/// Bopomofo letters and tone marks. A replacement containing any of these is
/// a phonetic override.
const PHONETIC_SYMBOLS: &str =
    "ㄅㄆㄇㄈㄉㄊㄋㄌㄍㄎㄏㄐㄑㄒㄓㄔㄕㄖㄗㄘㄙㄧㄨㄩㄚㄛㄜㄝㄞㄟㄠㄡㄢㄣㄤㄥㄦˊˇˋ˙";

fn is_phonetic(replacement: &str) -> bool {
    replacement.chars().any(|c| PHONETIC_SYMBOLS.contains(c))
}

/// Split rule text into `(trigger, replacement)` pairs.
///
/// Lines are split on the first `=`, both sides are trimmed and lines without
/// a `=` are ignored.
pub fn parse_pairs(text: &str) -> Vec<(String, String)> {
    text.lines()
        .filter_map(|line| line.split_once('='))
        .map(|(trigger, replacement)| (trigger.trim().to_string(), replacement.trim().to_string()))
        .collect()
}

/// Rules that map a trigger directly to Braille or to phonetic spellings
///
/// Both mappings keep the order in which the triggers were first declared.
/// A trigger that is declared again replaces the earlier replacement but
/// keeps its position.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CustomRuleSet {
    braille: Vec<(String, String)>,
    phonetic: Vec<(String, Vec<String>)>,
}

impl CustomRuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse rules in the `trigger=replacement` text format
    pub fn parse(text: &str) -> Self {
        Self::from_pairs(parse_pairs(text))
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        // resolve duplicates first, so that a trigger ends up in exactly one
        // of the two mappings
        let mut rules: Vec<(String, String)> = Vec::new();
        for (trigger, replacement) in pairs {
            let trigger = trigger.into();
            let replacement = replacement.into();
            if trigger.is_empty() {
                warn!("Ignoring rule with empty trigger for {:?}", replacement);
                continue;
            }
            match rules.iter_mut().find(|(t, _)| *t == trigger) {
                Some(rule) => rule.1 = replacement,
                None => rules.push((trigger, replacement)),
            }
        }

        let mut rule_set = Self::default();
        for (trigger, replacement) in rules {
            if is_phonetic(&replacement) {
                let syllables = replacement.split_whitespace().map(String::from).collect();
                rule_set.phonetic.push((trigger, syllables));
            } else {
                rule_set.braille.push((trigger, replacement));
            }
        }
        rule_set
    }

    pub fn is_empty(&self) -> bool {
        self.braille.is_empty() && self.phonetic.is_empty()
    }

    /// Triggers with their literal Braille, in declaration order
    pub fn braille(&self) -> &[(String, String)] {
        &self.braille
    }

    /// Triggers with their syllables, in declaration order
    pub fn phonetic(&self) -> &[(String, Vec<String>)] {
        &self.phonetic
    }
}
