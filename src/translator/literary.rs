//! Literary text: Latin words, numbers, punctuation and Chinese characters

use crate::{
    lookup::PhoneticLookup,
    rules::{Notation, RuleSet},
    syllable,
    translator::{state::ScanState, transcript::Transcript},
};

/// A literary token at the scan position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteraryToken<'i> {
    /// A maximal run of ASCII letters
    Latin(&'i str),
    Digit(char),
    Punctuation(char, &'static str),
    Space,
    /// `\n` or `\r\n`
    LineBreak(&'i str),
    /// Anything else is taken to be a Chinese character
    Ideograph(char),
}

impl<'i> LiteraryToken<'i> {
    /// Number of input bytes covered by the token
    pub fn len(&self) -> usize {
        match self {
            LiteraryToken::Latin(s) | LiteraryToken::LineBreak(s) => s.len(),
            LiteraryToken::Digit(c)
            | LiteraryToken::Punctuation(c, _)
            | LiteraryToken::Ideograph(c) => c.len_utf8(),
            LiteraryToken::Space => 1,
        }
    }
}

pub struct Encoder<'r> {
    rules: &'r RuleSet,
    lookup: &'r dyn PhoneticLookup,
}

impl<'r> Encoder<'r> {
    pub fn new(rules: &'r RuleSet, lookup: &'r dyn PhoneticLookup) -> Self {
        Self { rules, lookup }
    }

    /// Classify the start of `rest`. Only an empty `rest` yields `None`.
    pub fn classify<'i>(&self, rest: &'i str) -> Option<LiteraryToken<'i>> {
        let c = rest.chars().next()?;
        let token = if c.is_ascii_alphabetic() {
            let end = rest
                .find(|c: char| !c.is_ascii_alphabetic())
                .unwrap_or(rest.len());
            LiteraryToken::Latin(&rest[..end])
        } else if c.is_ascii_digit() {
            LiteraryToken::Digit(c)
        } else if let Some(cells) = self.rules.punctuation(c) {
            LiteraryToken::Punctuation(c, cells)
        } else if c == ' ' {
            LiteraryToken::Space
        } else if rest.starts_with("\r\n") {
            LiteraryToken::LineBreak(&rest[..2])
        } else if c == '\n' {
            LiteraryToken::LineBreak(&rest[..1])
        } else {
            LiteraryToken::Ideograph(c)
        };
        Some(token)
    }

    /// Write `token`. `input` is the whole text, the token starts at
    /// `state.cursor`.
    pub fn emit(
        &self,
        token: &LiteraryToken,
        input: &str,
        state: &mut ScanState,
        out: &mut Transcript,
    ) {
        match *token {
            LiteraryToken::Latin(word) => self.latin(word, out),
            LiteraryToken::Digit(c) => {
                let mut cells = String::new();
                if !state.numeric_run_open {
                    cells.push_str(self.rules.special().number_prefix);
                    state.numeric_run_open = true;
                }
                if let Some(digit) = self.rules.digit(c) {
                    cells.push_str(digit);
                }
                out.push(&c.to_string(), &cells, false);
                // the only token that keeps the digit run open
                return;
            }
            LiteraryToken::Punctuation(c, cells) => out.push(&c.to_string(), cells, false),
            LiteraryToken::Space => out.push(" ", " ", false),
            LiteraryToken::LineBreak(_) => out.push("\n", "\n", false),
            LiteraryToken::Ideograph(c) => {
                let spelling = self.lookup.lookup(input, state.cursor).unwrap_or_default();
                let syllable = syllable::encode(c, &spelling);
                out.push(&c.to_string(), &syllable.cells, syllable.is_error);
            }
        }
        state.numeric_run_open = false;
    }

    fn latin(&self, word: &str, out: &mut Transcript) {
        let special = self.rules.special();
        let all_caps = self.rules.notation() == Notation::Ueb
            && word.len() > 1
            && word.chars().all(|c| c.is_ascii_uppercase());
        for (i, c) in word.chars().enumerate() {
            let mut cells = String::new();
            if all_caps {
                if i == 0 {
                    cells.push_str(special.word_capital);
                }
            } else if c.is_ascii_uppercase() {
                cells.push_str(special.capital);
            }
            if let Some(letter) = self.rules.letter(c) {
                cells.push_str(letter);
            }
            out.push(&c.to_string(), &cells, false);
        }
    }
}
