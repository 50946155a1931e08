//! Switching between literary text and Nemeth math
//!
//! [`Controller`] is a small state machine on top of [`ScanState`]. It starts
//! in [`Context::Literary`]. The first math token switches to
//! [`Context::Math`], optionally announced with the opening Nemeth indicator.
//! Any character that is neither a math token, a space nor a custom rule
//! switches back, optionally with the closing indicator. Inside math the
//! controller tracks
//!
//! * the kind of the last token, to leave out the numeric indicator where
//!   Nemeth does not need it (`1+2` is `⠼⠂⠬⠆`, not `⠼⠂⠬⠼⠆`), and
//! * the number of open exponents, to return to the baseline before the
//!   next operation or comparison sign.

use log::debug;

use crate::{
    rules::nemeth::{self, Keyword, NemethTables, Sign},
    translator::{
        state::{Context, ScanState, TokenKind},
        transcript::Transcript,
    },
};

/// What a math token renders to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MathKind {
    Sign(Sign),
    /// A keyword with a fixed rendering
    Literal(&'static str),
}

/// A math token at the scan position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MathToken<'i> {
    /// The consumed input, a single sign or a whole keyword
    pub source: &'i str,
    pub kind: MathKind,
}

/// Classify the start of `rest` as a math token, if it is one
pub fn classify<'i>(tables: &NemethTables, rest: &'i str) -> Option<MathToken<'i>> {
    if let Some((keyword, meaning)) = tables.keyword(rest) {
        let source = &rest[..keyword.len()];
        match meaning {
            Keyword::Literal(cells) => {
                return Some(MathToken {
                    source,
                    kind: MathKind::Literal(cells),
                });
            }
            Keyword::Sign(c) => {
                if let Some(sign) = tables.sign(c) {
                    return Some(MathToken {
                        source,
                        kind: MathKind::Sign(sign),
                    });
                }
            }
        }
    }
    let c = rest.chars().next()?;
    tables.sign(c).map(|sign| MathToken {
        source: &rest[..c.len_utf8()],
        kind: MathKind::Sign(sign),
    })
}

#[derive(Debug)]
pub struct Controller<'r> {
    tables: &'r NemethTables,
    /// Insert the opening and closing Nemeth indicators
    indicators: bool,
}

impl<'r> Controller<'r> {
    pub fn new(tables: &'r NemethTables, indicators: bool) -> Self {
        Self { tables, indicators }
    }

    fn enter(&self, state: &mut ScanState, out: &mut Transcript) {
        debug!("entering math at {}", state.cursor);
        if self.indicators {
            out.push_indicator(nemeth::START);
        }
        state.context = Context::Math;
        state.last_math_token = TokenKind::Space;
        state.superscript_level = 0;
    }

    /// Switch back to literary context if in math
    pub fn leave(&self, state: &mut ScanState, out: &mut Transcript) {
        if state.context != Context::Math {
            return;
        }
        debug!("leaving math at {}", state.cursor);
        if self.indicators {
            out.push_indicator(nemeth::END);
        }
        state.context = Context::Literary;
        state.superscript_level = 0;
    }

    /// Close an open math context at the end of the input
    pub fn finish(&self, state: &mut ScanState, out: &mut Transcript) {
        self.leave(state, out);
    }

    fn baseline(&self, state: &mut ScanState, out: &mut Transcript) {
        if state.superscript_level > 0 {
            out.push_indicator(nemeth::BASELINE);
            state.superscript_level = 0;
        }
    }

    /// A space does not change the context but counts as a token boundary
    pub fn space(&self, state: &mut ScanState, out: &mut Transcript) {
        out.push(" ", " ", false);
        state.last_math_token = TokenKind::Space;
    }

    pub fn emit(&self, token: &MathToken, state: &mut ScanState, out: &mut Transcript) {
        if state.context == Context::Literary {
            self.enter(state, out);
        }
        match token.kind {
            MathKind::Sign(Sign::Exponent) => {
                out.push(token.source, nemeth::SUPERSCRIPT, false);
                state.superscript_level += 1;
                state.last_math_token = TokenKind::Indicator;
            }
            MathKind::Sign(Sign::Operation(cells)) => {
                self.baseline(state, out);
                out.push(token.source, cells, false);
                state.last_math_token = TokenKind::Operation;
            }
            MathKind::Sign(Sign::Comparison(cells)) => {
                self.baseline(state, out);
                out.push(token.source, cells, false);
                state.last_math_token = TokenKind::Comparison;
            }
            MathKind::Sign(Sign::Digit(cells)) => {
                let braille = if state.needs_numeric_indicator() {
                    format!("{}{}", nemeth::NUMERIC_INDICATOR, cells)
                } else {
                    cells.to_string()
                };
                out.push(token.source, &braille, false);
                state.last_math_token = TokenKind::Number;
            }
            MathKind::Sign(Sign::Bracket(cells)) => {
                out.push(token.source, cells, false);
                state.last_math_token = TokenKind::Punctuation;
            }
            MathKind::Literal(cells) => {
                out.push(token.source, cells, false);
                state.last_math_token = if cells.starts_with(nemeth::SUPERSCRIPT) {
                    TokenKind::Indicator
                } else if self.tables.is_comparison(cells) {
                    TokenKind::Comparison
                } else {
                    TokenKind::Char
                };
            }
        }
    }
}
