//! Output of a transcription
//!
//! A [`Transcript`] keeps the flat Braille text and, in parallel, a list of
//! [`TranscriptRecord`]s that relate each piece of Braille to the input it came
//! from. Both are only ever extended together, so the concatenated cells of
//! the records always equal the flat text.

/// One unit of output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptRecord {
    /// The input that produced `cells`. Empty for inserted indicators.
    pub source: String,
    pub cells: String,
    /// The input could not be transcribed properly and should be checked
    pub is_error: bool,
}

impl TranscriptRecord {
    pub fn new(source: &str, cells: &str, is_error: bool) -> Self {
        Self {
            source: source.to_string(),
            cells: cells.to_string(),
            is_error,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Transcript {
    braille: String,
    records: Vec<TranscriptRecord>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, source: &str, cells: &str, is_error: bool) {
        self.braille.push_str(cells);
        self.records
            .push(TranscriptRecord::new(source, cells, is_error));
    }

    /// Append an indicator that has no counterpart in the input
    pub fn push_indicator(&mut self, cells: &str) {
        self.push("", cells, false);
    }

    pub fn braille(&self) -> &str {
        &self.braille
    }

    pub fn records(&self) -> &[TranscriptRecord] {
        &self.records
    }

    pub fn has_errors(&self) -> bool {
        self.records.iter().any(|r| r.is_error)
    }

    pub fn into_parts(self) -> (String, Vec<TranscriptRecord>) {
        (self.braille, self.records)
    }
}
