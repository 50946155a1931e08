//! Phonetic readings of Chinese characters
//!
//! The transcription engine does not know how to pronounce a character. It
//! asks a [`PhoneticLookup`] for the Bopomofo spelling instead. [`Dictionary`]
//! is the implementation that ships with this crate: a plain text table of
//! character readings plus a set of [`PhraseCorrections`] for characters whose
//! reading depends on the surrounding phrase.
//!
//! Phrase corrections are configuration. They are handed to the dictionary
//! when it is built and never change afterwards, so a dictionary can be
//! shared between threads (e.g. behind an `Arc`) once it has been set up.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use search_path::SearchPath;

/// Environment variable that lists the directories to search for dictionaries
pub const TABLE_PATH_VARIABLE: &str = "ZHUYIN_TABLE_PATH";

#[derive(thiserror::Error, Debug)]
pub enum DictionaryError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("Line {line}: no reading given for {key:?}")]
    MissingReading { line: usize, key: String },
    #[error("Line {line}: phrase {phrase:?} has {chars} characters but {readings} readings")]
    ReadingCountMismatch {
        line: usize,
        phrase: String,
        chars: usize,
        readings: usize,
    },
    #[error("Dictionary {0:?} not found in search path")]
    NotFound(PathBuf),
}

/// Source of phonetic spellings
pub trait PhoneticLookup {
    /// The most likely reading of `c` on its own
    fn reading(&self, c: char) -> Option<String>;

    /// The reading of the character at byte offset `at` of `text`.
    ///
    /// Implementations that know about phrases can look at the surrounding
    /// text. The default simply returns the [reading](Self::reading) of the
    /// character.
    fn lookup(&self, text: &str, at: usize) -> Option<String> {
        text.get(at..)?.chars().next().and_then(|c| self.reading(c))
    }
}

/// Multi-character phrases with the reading of each of their characters
#[derive(Debug, Default, Clone)]
pub struct PhraseCorrections {
    /// longest phrase first
    phrases: Vec<(String, Vec<String>)>,
}

/// Phrases that are frequently mispronounced by a per character lookup
const BUILTIN_CORRECTIONS: &[(&str, &[&str])] = &[
    ("冠軍", &["ㄍㄨㄢˋ", "ㄐㄩㄣ"]),
    ("皇冠", &["ㄏㄨㄤˊ", "ㄍㄨㄢ"]),
    ("校對", &["ㄐㄧㄠˋ", "ㄉㄨㄟˋ"]),
    ("重創", &["ㄓㄨㄥˋ", "ㄔㄨㄤ"]),
    ("創傷", &["ㄔㄨㄤ", "ㄕㄤ"]),
    ("了解", &["ㄌㄧㄠˇ", "ㄐㄧㄝˇ"]),
    ("艾璞樂", &["ㄞˋ", "ㄆㄨˊ", "ㄌㄜˋ"]),
    ("錡銳", &["ㄑㄧˊ", "ㄖㄨㄟˋ"]),
];

impl PhraseCorrections {
    pub fn new() -> Self {
        Self::default()
    }

    /// The corrections that are registered by default
    pub fn builtin() -> Self {
        let mut corrections = Self::new();
        for (phrase, readings) in BUILTIN_CORRECTIONS {
            corrections.insert(phrase, readings.iter().map(|r| r.to_string()).collect());
        }
        corrections
    }

    /// Register `readings` for `phrase`. A phrase registered again replaces
    /// the earlier readings.
    pub fn insert(&mut self, phrase: &str, readings: Vec<String>) {
        match self.phrases.iter_mut().find(|(p, _)| p == phrase) {
            Some(entry) => entry.1 = readings,
            None => {
                self.phrases.push((phrase.to_string(), readings));
                self.phrases
                    .sort_by_key(|(p, _)| std::cmp::Reverse(p.chars().count()));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Find the reading of the character at byte offset `at` of `text` if it
    /// is part of a registered phrase
    pub fn reading(&self, text: &str, at: usize) -> Option<&str> {
        let c = text.get(at..)?.chars().next()?;
        for (phrase, readings) in &self.phrases {
            for (index, (offset, p)) in phrase.char_indices().enumerate() {
                if p != c || offset > at {
                    continue;
                }
                let matches = text
                    .get(at - offset..)
                    .is_some_and(|rest| rest.starts_with(phrase.as_str()));
                if matches {
                    return readings.get(index).map(String::as_str);
                }
            }
        }
        None
    }
}

/// A table of character readings
#[derive(Debug, Default)]
pub struct Dictionary {
    readings: HashMap<char, String>,
    corrections: PhraseCorrections,
}

impl Dictionary {
    pub fn new(readings: HashMap<char, String>, corrections: PhraseCorrections) -> Self {
        Self {
            readings,
            corrections,
        }
    }

    /// Parse a dictionary table.
    ///
    /// Every line holds a key followed by whitespace separated readings. A
    /// single character key defines the reading of that character, if the
    /// same character is listed again the first reading is kept. A key of
    /// several characters is a phrase correction and needs exactly one reading
    /// per character. Everything after a `#` is a comment.
    ///
    /// The phrases of the table are added to `corrections`, replacing
    /// corrections for the same phrase.
    pub fn parse(source: &str, corrections: PhraseCorrections) -> Result<Self, DictionaryError> {
        let mut readings: HashMap<char, String> = HashMap::new();
        let mut corrections = corrections;
        for (number, line) in source.lines().enumerate() {
            let line_number = number + 1;
            let line = match line.split_once('#') {
                Some((content, _comment)) => content,
                None => line,
            };
            let mut fields = line.split_whitespace();
            let Some(key) = fields.next() else {
                continue;
            };
            let values: Vec<String> = fields.map(String::from).collect();
            if values.is_empty() {
                return Err(DictionaryError::MissingReading {
                    line: line_number,
                    key: key.to_string(),
                });
            }
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    if values.len() > 1 {
                        warn!(
                            "Line {}: {:?} has several readings, using {:?}",
                            line_number, key, values[0]
                        );
                    }
                    if let Some(existing) = readings.get(&c) {
                        debug!(
                            "Line {}: keeping reading {:?} for {:?}",
                            line_number, existing, c
                        );
                    } else {
                        readings.insert(c, values[0].clone());
                    }
                }
                _ => {
                    let count = key.chars().count();
                    if values.len() != count {
                        return Err(DictionaryError::ReadingCountMismatch {
                            line: line_number,
                            phrase: key.to_string(),
                            chars: count,
                            readings: values.len(),
                        });
                    }
                    corrections.insert(key, values);
                }
            }
        }
        Ok(Self::new(readings, corrections))
    }

    /// Load a dictionary table from `path` with the given phrase corrections
    pub fn load(path: &Path, corrections: PhraseCorrections) -> Result<Self, DictionaryError> {
        let source = fs::read_to_string(path)?;
        let dictionary = Self::parse(&source, corrections)?;
        debug!(
            "Loaded {} readings and {} phrases from {:?}",
            dictionary.readings.len(),
            dictionary.corrections.len(),
            path
        );
        Ok(dictionary)
    }

    /// Load the dictionary `name` from the directories listed in
    /// [`TABLE_PATH_VARIABLE`] (or the current directory), together with the
    /// builtin phrase corrections
    pub fn find(name: &Path) -> Result<Self, DictionaryError> {
        let path = find_table(name).ok_or_else(|| DictionaryError::NotFound(name.into()))?;
        Self::load(&path, PhraseCorrections::builtin())
    }

    pub fn corrections(&self) -> &PhraseCorrections {
        &self.corrections
    }
}

impl PhoneticLookup for Dictionary {
    fn reading(&self, c: char) -> Option<String> {
        self.readings.get(&c).cloned()
    }

    fn lookup(&self, text: &str, at: usize) -> Option<String> {
        if let Some(reading) = self.corrections.reading(text, at) {
            return Some(reading.to_string());
        }
        text.get(at..)?.chars().next().and_then(|c| self.reading(c))
    }
}

/// Resolve `name` against the dictionary search path. Absolute paths and
/// paths to existing files are returned as they are.
pub fn find_table(name: &Path) -> Option<PathBuf> {
    if name.is_absolute() || name.is_file() {
        return Some(name.to_path_buf());
    }
    let search_path = SearchPath::new_or(TABLE_PATH_VARIABLE, ".");
    search_path
        .iter()
        .map(|dir| dir.join(name))
        .find(|path| path.is_file())
}
