//! Mutable state of one transcription

use enumset::{EnumSet, EnumSetType, enum_set};

/// Whether the scan is currently inside a stretch of Nemeth math
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Context {
    #[default]
    Literary,
    Math,
}

/// The kind of the last thing emitted in math context
#[derive(EnumSetType, Debug)]
pub enum TokenKind {
    Space,
    Number,
    Operation,
    Comparison,
    Punctuation,
    Indicator,
    Char,
}

/// After these a digit needs the numeric indicator. Digits directly after
/// another digit, an operation or a superscript indicator do not.
pub const NUMERIC_INDICATOR_AFTER: EnumSet<TokenKind> = enum_set!(
    TokenKind::Space | TokenKind::Comparison | TokenKind::Punctuation | TokenKind::Char
);

#[derive(Debug, Clone, PartialEq)]
pub struct ScanState {
    /// Byte offset of the next unread character
    pub cursor: usize,
    /// Inside an unbroken run of digits in literary text
    pub numeric_run_open: bool,
    pub context: Context,
    pub last_math_token: TokenKind,
    /// Number of exponent indicators that have not been closed
    pub superscript_level: usize,
}

impl ScanState {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            numeric_run_open: false,
            context: Context::Literary,
            last_math_token: TokenKind::Space,
            superscript_level: 0,
        }
    }

    pub fn needs_numeric_indicator(&self) -> bool {
        NUMERIC_INDICATOR_AFTER.contains(self.last_math_token)
    }
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new()
    }
}
