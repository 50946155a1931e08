//! Transcription of Chinese, English and math text into Braille
//!
//! Chinese characters are written phonetically: every character is looked
//! up in a Bopomofo dictionary and its syllable is encoded as initial, final
//! and tone cells. Latin letters, digits and punctuation follow either the
//! traditional literary code or UEB. In [`Mode::Nemeth`] arithmetic is
//! written in the Nemeth code and switched into and out of automatically.
//!
//! ```no_run
//! use std::path::Path;
//! use zhuyin_braille::{CustomRuleSet, Dictionary, Mode, Translator};
//!
//! let dictionary = Dictionary::find(Path::new("zhuyin.txt")).unwrap();
//! let translator = Translator::new(Mode::Nemeth { indicators: true }, &dictionary);
//! let transcript = translator.translate("1+2=3", &CustomRuleSet::new());
//! assert_eq!(transcript.braille(), "⠸⠩⠀⠼⠂⠬⠆⠀⠨⠅⠀⠼⠒⠀⠸⠱");
//! ```

pub mod check;
pub mod custom;
pub mod lookup;
pub mod render;
pub mod rules;
pub mod syllable;
pub mod translator;
pub mod yaml;

pub use custom::CustomRuleSet;
pub use lookup::{Dictionary, DictionaryError, PhoneticLookup, PhraseCorrections};
pub use translator::{Mode, Transcript, TranscriptRecord, Translator};

/// Transcribe `input` with the given rule text in one go
pub fn translate(
    mode: Mode,
    lookup: &dyn PhoneticLookup,
    input: &str,
    rules: &str,
) -> Transcript {
    Translator::new(mode, lookup).translate(input, &CustomRuleSet::parse(rules))
}
