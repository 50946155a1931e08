//! The transcription engine
//!
//! [`Translator::translate`] scans the input once from left to right. At
//! every position exactly one [`Token`] is recognized, in this order of
//! precedence:
//!
//! 1. a custom rule whose trigger starts here,
//! 2. a space (Nemeth only, spaces never change the math context),
//! 3. a math token (Nemeth only),
//! 4. literary text.
//!
//! The token is handed to the component that knows how to write it and the
//! cursor moves past it. Every token covers at least one character, so the
//! scan always terminates.

use log::trace;

use crate::{
    custom::CustomRuleSet,
    lookup::PhoneticLookup,
    rules::{Notation, RuleSet},
};

mod literary;
mod nemeth;
mod overrides;
mod state;
mod transcript;

pub use literary::LiteraryToken;
pub use nemeth::{MathKind, MathToken};
pub use overrides::Override;
pub use state::{Context, ScanState, TokenKind};
pub use transcript::{Transcript, TranscriptRecord};

use literary::Encoder;
use nemeth::Controller;

/// The notation to transcribe into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Traditional,
    #[default]
    Ueb,
    /// UEB for literary text and Nemeth for math. With `indicators` every
    /// stretch of math is enclosed in the opening and closing Nemeth
    /// indicators.
    Nemeth { indicators: bool },
}

impl Mode {
    pub fn notation(&self) -> Notation {
        match self {
            Mode::Traditional => Notation::Traditional,
            Mode::Ueb => Notation::Ueb,
            Mode::Nemeth { .. } => Notation::Nemeth,
        }
    }
}

/// What was recognized at the scan position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'i, 'c> {
    Override(Override<'c>),
    Space,
    Math(MathToken<'i>),
    Literary(LiteraryToken<'i>),
}

impl Token<'_, '_> {
    /// Number of input bytes covered by the token
    pub fn len(&self) -> usize {
        match self {
            Token::Override(rule) => rule.trigger().len(),
            Token::Space => 1,
            Token::Math(token) => token.source.len(),
            Token::Literary(token) => token.len(),
        }
    }
}

pub struct Translator<'a> {
    mode: Mode,
    rules: RuleSet,
    lookup: &'a dyn PhoneticLookup,
}

impl<'a> Translator<'a> {
    pub fn new(mode: Mode, lookup: &'a dyn PhoneticLookup) -> Self {
        Self {
            mode,
            rules: RuleSet::new(mode.notation()),
            lookup,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    fn controller(&self) -> Option<Controller<'_>> {
        match self.mode {
            Mode::Nemeth { indicators } => Some(Controller::new(self.rules.nemeth(), indicators)),
            Mode::Traditional | Mode::Ueb => None,
        }
    }

    /// Recognize the token at the start of `rest`. Returns `None` at the end
    /// of the input.
    pub fn classify<'i, 'c>(
        &self,
        rest: &'i str,
        custom: &'c CustomRuleSet,
    ) -> Option<Token<'i, 'c>> {
        if rest.is_empty() {
            return None;
        }
        if let Some(rule) = Override::find(custom, rest) {
            return Some(Token::Override(rule));
        }
        if let Mode::Nemeth { .. } = self.mode {
            if rest.starts_with(' ') {
                return Some(Token::Space);
            }
            if let Some(token) = nemeth::classify(self.rules.nemeth(), rest) {
                return Some(Token::Math(token));
            }
        }
        Encoder::new(&self.rules, self.lookup)
            .classify(rest)
            .map(Token::Literary)
    }

    /// Transcribe `input`, applying the `custom` rules before anything else
    pub fn translate(&self, input: &str, custom: &CustomRuleSet) -> Transcript {
        let encoder = Encoder::new(&self.rules, self.lookup);
        let controller = self.controller();
        let mut state = ScanState::new();
        let mut out = Transcript::new();

        while let Some(token) = self.classify(&input[state.cursor..], custom) {
            trace!("{:?} at {}", token, state.cursor);
            match &token {
                Token::Override(rule) => {
                    if let Some(controller) = &controller {
                        controller.leave(&mut state, &mut out);
                    }
                    rule.emit(&mut state, &mut out);
                }
                Token::Space => match &controller {
                    Some(controller) => controller.space(&mut state, &mut out),
                    None => out.push(" ", " ", false),
                },
                Token::Math(math) => {
                    if let Some(controller) = &controller {
                        controller.emit(math, &mut state, &mut out);
                    }
                }
                Token::Literary(literary) => {
                    if let Some(controller) = &controller {
                        controller.leave(&mut state, &mut out);
                    }
                    encoder.emit(literary, input, &mut state, &mut out);
                }
            }
            state.cursor += token.len();
        }

        if let Some(controller) = &controller {
            controller.finish(&mut state, &mut out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::lookup::{Dictionary, PhraseCorrections};

    fn dictionary() -> Dictionary {
        let readings = [
            ('冠', "ㄍㄨㄢ"),
            ('軍', "ㄐㄩㄣ"),
            ('答', "ㄉㄚˊ"),
            ('的', "˙ㄉㄜ"),
            ('是', "ㄕˋ"),
            ('媽', "ㄇㄚ"),
        ];
        Dictionary::new(
            readings
                .iter()
                .map(|(c, r)| (*c, r.to_string()))
                .collect::<HashMap<_, _>>(),
            PhraseCorrections::new(),
        )
    }

    fn translate(mode: Mode, input: &str, rules: &str) -> Transcript {
        let dictionary = dictionary();
        let translator = Translator::new(mode, &dictionary);
        translator.translate(input, &CustomRuleSet::parse(rules))
    }

    fn assert_consistent(transcript: &Transcript) {
        let joined: String = transcript
            .records()
            .iter()
            .map(|r| r.cells.as_str())
            .collect();
        assert_eq!(joined, transcript.braille());
    }

    const NEMETH: Mode = Mode::Nemeth { indicators: true };

    #[test]
    fn single_syllable() {
        let transcript = translate(Mode::Ueb, "媽", "");
        assert_eq!(transcript.braille(), "⠍⠜⠄");
        assert!(!transcript.has_errors());
    }

    #[test]
    fn nemeth_equation() {
        let transcript = translate(NEMETH, "1+2=3", "");
        assert_eq!(transcript.braille(), "⠸⠩⠀⠼⠂⠬⠆⠀⠨⠅⠀⠼⠒⠀⠸⠱");
        assert_consistent(&transcript);
        let records = transcript.records();
        assert_eq!(records.first().unwrap().source, "");
        assert_eq!(records.last().unwrap().source, "");
    }

    #[test]
    fn braille_rule_replaces_whole_word() {
        let transcript = translate(Mode::Ueb, "Boyan", "Boyan=⠠⠃⠕⠽⠁⠝");
        assert_eq!(transcript.braille(), "⠠⠃⠕⠽⠁⠝");
        assert_eq!(transcript.records().len(), 1);
        assert_eq!(transcript.records()[0].source, "Boyan");
    }

    #[test]
    fn phonetic_rule_fixes_reading() {
        let transcript = translate(Mode::Ueb, "冠軍", "冠軍=ㄍㄨㄢˋ ㄐㄩㄣ");
        assert_eq!(transcript.braille(), "⠅⠻⠐⠅⠲⠄");
        // without the rule the dictionary reading is used
        let transcript = translate(Mode::Ueb, "冠軍", "");
        assert_eq!(transcript.braille(), "⠅⠻⠄⠅⠲⠄");
    }

    #[test]
    fn word_capitals_in_ueb_only() {
        assert_eq!(translate(Mode::Ueb, "NASA", "").braille(), "⠠⠠⠝⠁⠎⠁");
        assert_eq!(
            translate(Mode::Traditional, "NASA", "").braille(),
            "⠠⠝⠠⠁⠠⠎⠠⠁"
        );
    }

    #[test]
    fn unknown_character_is_flagged() {
        let transcript = translate(Mode::Ueb, "媽字", "");
        assert_consistent(&transcript);
        assert!(transcript.has_errors());
        let record = &transcript.records()[1];
        assert_eq!(record.source, "字");
        assert!(record.is_error);
    }

    #[test]
    fn math_inside_text() {
        let transcript = translate(NEMETH, "答1+1=2。", "");
        assert_eq!(
            transcript.braille(),
            "⠙⠜⠂⠸⠩⠀⠼⠂⠬⠂⠀⠨⠅⠀⠼⠆⠀⠸⠱⠤"
        );
        assert_consistent(&transcript);
    }

    #[test]
    fn math_without_indicators() {
        let transcript = translate(Mode::Nemeth { indicators: false }, "答1+1=2。", "");
        assert_eq!(transcript.braille(), "⠙⠜⠂⠼⠂⠬⠂⠀⠨⠅⠀⠼⠆⠤");
    }

    #[test]
    fn spaces_keep_math_open() {
        let transcript = translate(NEMETH, "1 + 2", "");
        assert_eq!(transcript.braille(), "⠸⠩⠀⠼⠂ ⠬ ⠼⠆⠀⠸⠱");
    }

    #[test]
    fn rule_closes_math() {
        let transcript = translate(NEMETH, "1冠軍", "冠軍=ㄍㄨㄢˋ ㄐㄩㄣ");
        assert_eq!(transcript.braille(), "⠸⠩⠀⠼⠂⠀⠸⠱⠅⠻⠐⠅⠲⠄");
        assert_consistent(&transcript);
    }

    #[test]
    fn rules_take_precedence_over_keywords() {
        let transcript = translate(NEMETH, "加", "加=⠿");
        assert_eq!(transcript.braille(), "⠿");
        let transcript = translate(NEMETH, "加", "");
        assert_eq!(transcript.braille(), "⠸⠩⠀⠬⠀⠸⠱");
    }

    #[test]
    fn digits_outside_nemeth() {
        assert_eq!(translate(Mode::Ueb, "12的3", "").braille(), "⠼⠂⠆⠙⠮⠁⠼⠒");
        // outside Nemeth a plus sign is not known and gets flagged
        let transcript = translate(Mode::Ueb, "1+2", "");
        assert_eq!(transcript.braille(), "⠼⠂⠄⠼⠆");
        assert!(transcript.records()[1].is_error);
    }

    #[test]
    fn line_breaks_close_math() {
        let transcript = translate(NEMETH, "1\n2", "");
        assert_eq!(transcript.braille(), "⠸⠩⠀⠼⠂⠀⠸⠱\n⠸⠩⠀⠼⠆⠀⠸⠱");
    }

    #[test]
    fn classify_in_order() {
        let dictionary = dictionary();
        let custom = CustomRuleSet::parse("1+=⠿");
        let nemeth = Translator::new(NEMETH, &dictionary);
        assert!(matches!(
            nemeth.classify("1+2", &custom),
            Some(Token::Override(_))
        ));
        assert_eq!(nemeth.classify(" 1", &custom), Some(Token::Space));
        assert!(matches!(nemeth.classify("2", &custom), Some(Token::Math(_))));
        assert_eq!(nemeth.classify("", &custom), None);

        let ueb = Translator::new(Mode::Ueb, &dictionary);
        assert_eq!(
            ueb.classify(" 1", &custom),
            Some(Token::Literary(LiteraryToken::Space))
        );
        assert_eq!(
            ueb.classify("2", &custom),
            Some(Token::Literary(LiteraryToken::Digit('2')))
        );
    }

    #[test]
    fn same_input_same_output() {
        let first = translate(NEMETH, "答2^2=4", "");
        let second = translate(NEMETH, "答2^2=4", "");
        assert_eq!(first, second);
    }
}
