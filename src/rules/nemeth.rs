//! Nemeth mathematics tables

use crate::rules::find_char;

/// Dropped digits
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

pub const OPERATION_SIGNS: &[(char, &str)] = &[
    ('+', "⠬"),
    ('-', "⠤"),
    ('×', "⠈⠡"),
    ('*', "⠈⠡"),
    ('÷', "⠨⠌"),
    ('/', "⠨⠌"),
];

/// Comparison signs carry their surrounding spaces
pub const COMPARISON_SIGNS: &[(char, &str)] =
    &[('=', "⠀⠨⠅⠀"), ('>', "⠀⠨⠂⠀"), ('<', "⠀⠐⠅⠀")];

pub const BRACKETS: &[(char, &str)] = &[
    ('(', "⠷"),
    (')', "⠾"),
    ('[', "⠨⠷"),
    (']', "⠨⠾"),
    ('{', "⠸⠷"),
    ('}', "⠸⠾"),
    ('（', "⠷"),
    ('）', "⠾"),
];

pub const EXPONENT_MARKER: char = '^';

pub const NUMERIC_INDICATOR: &str = "⠼";
pub const SUPERSCRIPT: &str = "⠘";
pub const BASELINE: &str = "⠐";

/// Opening and closing Nemeth code indicators
pub const START: &str = "⠸⠩⠀";
pub const END: &str = "⠀⠸⠱";

/// Comparisons that are only reachable through keywords
const LITERAL_COMPARISONS: &[&str] = &["⠀⠌⠨⠅⠀", "⠀⠨⠂⠱⠨⠅⠀", "⠀⠐⠅⠱⠨⠅⠀"];

/// What a math keyword stands for
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Keyword {
    /// The keyword is a synonym of an ASCII math sign
    Sign(char),
    /// The keyword renders to a fixed Braille sequence
    Literal(&'static str),
}

const KEYWORDS: &[(&str, Keyword)] = &[
    ("加", Keyword::Sign('+')),
    ("＋", Keyword::Sign('+')),
    ("減", Keyword::Sign('-')),
    ("－", Keyword::Sign('-')),
    ("負", Keyword::Sign('-')),
    ("乘以", Keyword::Sign('×')),
    ("乘", Keyword::Sign('×')),
    ("除以", Keyword::Sign('÷')),
    ("除", Keyword::Sign('÷')),
    ("等於", Keyword::Sign('=')),
    ("＝", Keyword::Sign('=')),
    ("大於", Keyword::Sign('>')),
    ("＞", Keyword::Sign('>')),
    ("小於", Keyword::Sign('<')),
    ("＜", Keyword::Sign('<')),
    ("不等於", Keyword::Literal("⠀⠌⠨⠅⠀")),
    ("≠", Keyword::Literal("⠀⠌⠨⠅⠀")),
    ("大於等於", Keyword::Literal("⠀⠨⠂⠱⠨⠅⠀")),
    ("≥", Keyword::Literal("⠀⠨⠂⠱⠨⠅⠀")),
    ("小於等於", Keyword::Literal("⠀⠐⠅⠱⠨⠅⠀")),
    ("≤", Keyword::Literal("⠀⠐⠅⠱⠨⠅⠀")),
    ("平方", Keyword::Literal("⠘⠆⠐")),
    ("立方", Keyword::Literal("⠘⠒⠐")),
    ("π", Keyword::Literal("⠨⠏")),
];

/// The kind of a single math sign
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sign {
    Exponent,
    Operation(&'static str),
    Comparison(&'static str),
    Digit(&'static str),
    Bracket(&'static str),
}

#[derive(Debug)]
pub struct NemethTables {
    /// Keywords, longest first
    keywords: Vec<(&'static str, Keyword)>,
}

impl NemethTables {
    pub fn new() -> Self {
        let mut keywords = KEYWORDS.to_vec();
        // stable sort, so keywords of equal length keep their declared order
        keywords.sort_by_key(|(k, _)| std::cmp::Reverse(k.chars().count()));
        Self { keywords }
    }

    /// Find the longest keyword at the start of `input`
    pub fn keyword(&self, input: &str) -> Option<(&'static str, Keyword)> {
        self.keywords
            .iter()
            .find(|(k, _)| input.starts_with(k))
            .copied()
    }

    pub fn sign(&self, c: char) -> Option<Sign> {
        if c == EXPONENT_MARKER {
            Some(Sign::Exponent)
        } else if let Some(cells) = find_char(DIGITS, c) {
            Some(Sign::Digit(cells))
        } else if let Some(cells) = find_char(OPERATION_SIGNS, c) {
            Some(Sign::Operation(cells))
        } else if let Some(cells) = find_char(COMPARISON_SIGNS, c) {
            Some(Sign::Comparison(cells))
        } else {
            find_char(BRACKETS, c).map(Sign::Bracket)
        }
    }

    /// Is `cells` the rendering of a comparison?
    pub fn is_comparison(&self, cells: &str) -> bool {
        COMPARISON_SIGNS.iter().any(|(_, c)| *c == cells)
            || LITERAL_COMPARISONS.iter().any(|c| *c == cells)
    }
}

impl Default for NemethTables {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_keyword_wins() {
        let tables = NemethTables::new();
        assert_eq!(tables.keyword("乘以三"), Some(("乘以", Keyword::Sign('×'))));
        assert_eq!(tables.keyword("乘三"), Some(("乘", Keyword::Sign('×'))));
        assert_eq!(
            tables.keyword("大於等於5"),
            Some(("大於等於", Keyword::Literal("⠀⠨⠂⠱⠨⠅⠀")))
        );
        assert_eq!(tables.keyword("大於5"), Some(("大於", Keyword::Sign('>'))));
        assert_eq!(tables.keyword("abc"), None);
    }

    #[test]
    fn signs() {
        let tables = NemethTables::new();
        assert_eq!(tables.sign('^'), Some(Sign::Exponent));
        assert_eq!(tables.sign('7'), Some(Sign::Digit("⠶")));
        assert_eq!(tables.sign('×'), Some(Sign::Operation("⠈⠡")));
        assert_eq!(tables.sign('<'), Some(Sign::Comparison("⠀⠐⠅⠀")));
        assert_eq!(tables.sign('（'), Some(Sign::Bracket("⠷")));
        assert_eq!(tables.sign('a'), None);
        assert_eq!(tables.sign(' '), None);
    }

    #[test]
    fn comparison_renderings() {
        let tables = NemethTables::new();
        assert!(tables.is_comparison("⠀⠨⠅⠀"));
        assert!(tables.is_comparison("⠀⠌⠨⠅⠀"));
        assert!(!tables.is_comparison("⠘⠆⠐"));
    }
}
