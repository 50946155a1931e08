//! Encode one Bopomofo syllable into Braille
//!
//! A Mandarin syllable in Braille is written as up to three cells: the
//! initial, the final and the tone. The tone cell is always present, the
//! first tone (which Bopomofo leaves unmarked) included.

use log::debug;

use crate::rules::{
    COMBINED_FINALS, EMPTY_RHYME, EMPTY_RHYME_INITIALS, FIRST_TONE, FINALS, INITIALS,
    NEUTRAL_TONE, NEUTRAL_TONE_MARK, TONES, find, find_char,
};

/// The Braille for one syllable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    pub cells: String,
    /// No final could be determined for the spelling
    pub is_error: bool,
}

fn split_tone(spelling: &str) -> (&'static str, String) {
    if let Some(last) = spelling.chars().last() {
        if let Some(tone) = find_char(TONES, last) {
            let rest = &spelling[..spelling.len() - last.len_utf8()];
            return (tone, rest.to_string());
        }
    }
    if spelling.contains(NEUTRAL_TONE_MARK) {
        (NEUTRAL_TONE, spelling.replace(NEUTRAL_TONE_MARK, ""))
    } else {
        (FIRST_TONE, spelling.to_string())
    }
}

fn split_initial(spelling: &str) -> (&'static str, &str) {
    for (initial, cells) in INITIALS {
        if let Some(rest) = spelling.strip_prefix(*initial) {
            return (*cells, rest);
        }
    }
    ("", spelling)
}

fn final_cells(rest: &str) -> &'static str {
    if let Some(cells) = find(COMBINED_FINALS, rest) {
        return cells;
    }
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => find_char(FINALS, c).unwrap_or(""),
        _ => "",
    }
}

/// Encode the phonetic `spelling` of `character`.
///
/// `character` is only used for diagnostics, the result depends on the
/// spelling alone. An empty or malformed spelling still yields cells (at
/// least the tone) but is flagged with [`Syllable::is_error`].
pub fn encode(character: char, spelling: &str) -> Syllable {
    let (tone, toneless) = split_tone(spelling);
    let (initial, rest) = split_initial(&toneless);
    let mut final_ = final_cells(rest);

    // ㄓ, ㄔ, ㄕ, ㄖ, ㄗ, ㄘ and ㄙ can stand alone and take the empty rhyme
    if !initial.is_empty()
        && final_.is_empty()
        && rest.is_empty()
        && spelling
            .chars()
            .next()
            .is_some_and(|c| EMPTY_RHYME_INITIALS.contains(&c))
    {
        final_ = EMPTY_RHYME;
    }

    let is_error = final_.is_empty();
    if is_error {
        debug!("no final for {:?} spelled {:?}", character, spelling);
    }
    Syllable {
        cells: format!("{}{}{}", initial, final_, tone),
        is_error,
    }
}
