//! Parser for YAML test suites
//!
//! A suite names the dictionary and the mode to use, optional custom rules
//! and a list of tests:
//!
//! ```yaml
//! dictionary: tables/zhuyin.txt
//! mode: nemeth
//! indicators: true
//! rules: |
//!   Boyan=⠠⠃⠕⠽⠁⠝
//! tests:
//!   - [媽, ⠍⠜⠄]
//!   - [an equation, 1+2=3, ⠸⠩⠀⠼⠂⠬⠆⠀⠨⠅⠀⠼⠒⠀⠸⠱]
//!   - [冠軍, ⠅⠻⠄⠅⠲⠄, {xfail: reads 冠 in the wrong tone}]
//! ```
//!
//! A file can hold several suites as separate YAML documents.

use std::{fs::File, iter::Peekable, path::PathBuf};

use libyaml::{Encoding, Event, Parser, ParserIter};

use crate::{
    check::{ExpectedFailure, Test, TestSuite},
    translator::Mode,
};

type YAMLEventError = Option<Result<Event, libyaml::ParserError>>;

#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("Scalar expected, got {0:?}")]
    ScalarExpected(YAMLEventError),
    #[error("YAML parse error")]
    YAMLError(#[from] libyaml::ParserError),
    #[error("Stream start expected")]
    StreamStartExpected,
    #[error("Stream end expected")]
    StreamEndExpected,
    #[error("Document start expected")]
    DocumentStartExpected,
    #[error("Document end expected")]
    DocumentEndExpected,
    #[error("Sequence start expected")]
    SequenceStartExpected,
    #[error("Sequence end expected, got {0:?}")]
    SequenceEndExpected(YAMLEventError),
    #[error("Mapping start expected, got {0:?}")]
    MappingStartExpected(YAMLEventError),
    #[error("Mapping end expected")]
    MappingEndExpected,
    #[error("Encoding {0:?} not supported")]
    InvalidEncoding(Encoding),
    #[error("Invalid mode {0:?}")]
    InvalidMode(String),
    #[error("Invalid boolean {0:?}")]
    InvalidBool(String),
    #[error("Invalid token {0:?}")]
    InvalidToken(String),
    #[error("Test suite without tests")]
    NoTests,
}

/// The notation named in a suite, before the indicator setting is applied
#[derive(Debug, Clone, Copy, Default)]
enum Notation {
    Traditional,
    #[default]
    Ueb,
    Nemeth,
}

pub struct YAMLParser<'a> {
    events: Peekable<ParserIter<'a>>,
}

impl<'a> YAMLParser<'a> {
    pub fn new(reader: File) -> Result<Self, ParseError> {
        let parser = Parser::new(reader)?;
        Ok(Self {
            events: parser.into_iter().peekable(),
        })
    }

    fn scalar(&mut self) -> Result<String, ParseError> {
        match self.events.next() {
            Some(Ok(Event::Scalar { value, .. })) => Ok(value),
            e => Err(ParseError::ScalarExpected(e)),
        }
    }

    fn mapping_start(&mut self) -> Result<(), ParseError> {
        match self.events.next() {
            Some(Ok(Event::MappingStart { .. })) => Ok(()),
            e => Err(ParseError::MappingStartExpected(e)),
        }
    }

    fn mapping_end(&mut self) -> Result<(), ParseError> {
        match self.events.next() {
            Some(Ok(Event::MappingEnd)) => Ok(()),
            _ => Err(ParseError::MappingEndExpected),
        }
    }

    fn sequence_start(&mut self) -> Result<(), ParseError> {
        match self.events.next() {
            Some(Ok(Event::SequenceStart { .. })) => Ok(()),
            _ => Err(ParseError::SequenceStartExpected),
        }
    }

    fn sequence_end(&mut self) -> Result<(), ParseError> {
        match self.events.next() {
            Some(Ok(Event::SequenceEnd)) => Ok(()),
            e => Err(ParseError::SequenceEndExpected(e)),
        }
    }

    fn bool_value(&mut self) -> Result<bool, ParseError> {
        let value = self.scalar()?;
        match &*value {
            "true" | "yes" | "on" => Ok(true),
            "false" | "no" | "off" => Ok(false),
            _ => Err(ParseError::InvalidBool(value)),
        }
    }

    fn notation(&mut self) -> Result<Notation, ParseError> {
        let value = self.scalar()?;
        match &*value {
            "traditional" => Ok(Notation::Traditional),
            "ueb" => Ok(Notation::Ueb),
            "nemeth" => Ok(Notation::Nemeth),
            _ => Err(ParseError::InvalidMode(value)),
        }
    }

    fn xfail(&mut self) -> Result<ExpectedFailure, ParseError> {
        let value = self.scalar()?;
        let xfail = match &*value {
            "true" | "yes" | "on" => ExpectedFailure::Simple(true),
            "false" | "no" | "off" => ExpectedFailure::Simple(false),
            _ => ExpectedFailure::Reason(value),
        };
        Ok(xfail)
    }

    fn test(&mut self) -> Result<Test, ParseError> {
        self.sequence_start()?;
        let mut description = None;
        let mut input = self.scalar()?;
        let mut expected = self.scalar()?;
        // two scalars are input and expected, three are preceded by a
        // description
        if let Some(Ok(Event::Scalar { .. })) = self.events.peek() {
            description = Some(input);
            input = expected;
            expected = self.scalar()?;
        }
        let mut xfail = ExpectedFailure::Simple(false);
        if let Some(Ok(Event::MappingStart { .. })) = self.events.peek() {
            self.mapping_start()?;
            while let Some(Ok(Event::Scalar { .. })) = self.events.peek() {
                let value = self.scalar()?;
                match &*value {
                    "xfail" => {
                        xfail = self.xfail()?;
                    }
                    _ => {
                        return Err(ParseError::InvalidToken(value));
                    }
                }
            }
            self.mapping_end()?;
        };
        self.sequence_end()?;
        Ok(Test::new(description, input, expected, xfail))
    }

    fn tests(&mut self) -> Result<Vec<Test>, ParseError> {
        let mut tests: Vec<Test> = Vec::new();
        self.sequence_start()?;
        while let Some(Ok(Event::SequenceStart { .. })) = self.events.peek() {
            tests.push(self.test()?);
        }
        self.sequence_end()?;
        Ok(tests)
    }

    fn stream_start(&mut self) -> Result<(), ParseError> {
        if let Some(Ok(Event::StreamStart {
            encoding: Some(encoding),
        })) = self.events.next()
        {
            if encoding == Encoding::Utf8 {
                Ok(())
            } else {
                Err(ParseError::InvalidEncoding(encoding))
            }
        } else {
            Err(ParseError::StreamStartExpected)
        }
    }

    fn stream_end(&mut self) -> Result<(), ParseError> {
        match self.events.next() {
            Some(Ok(Event::StreamEnd)) => Ok(()),
            _ => Err(ParseError::StreamEndExpected),
        }
    }

    fn document_start(&mut self) -> Result<(), ParseError> {
        match self.events.next() {
            Some(Ok(Event::DocumentStart { .. })) => Ok(()),
            _ => Err(ParseError::DocumentStartExpected),
        }
    }

    fn document_end(&mut self) -> Result<(), ParseError> {
        match self.events.next() {
            Some(Ok(Event::DocumentEnd { .. })) => Ok(()),
            _ => Err(ParseError::DocumentEndExpected),
        }
    }

    fn suite(&mut self) -> Result<TestSuite, ParseError> {
        let mut dictionary: Option<PathBuf> = None;
        let mut notation = Notation::default();
        let mut indicators = true;
        let mut rules = String::new();
        let mut tests: Option<Vec<Test>> = None;

        self.document_start()?;
        self.mapping_start()?;
        while let Some(Ok(Event::Scalar { .. })) = self.events.peek() {
            let value = self.scalar()?;
            match &*value {
                "dictionary" => {
                    dictionary = Some(self.scalar()?.into());
                }
                "mode" => {
                    notation = self.notation()?;
                }
                "indicators" => {
                    indicators = self.bool_value()?;
                }
                "rules" => {
                    rules = self.scalar()?;
                }
                "tests" => {
                    tests = Some(self.tests()?);
                }
                _ => {
                    return Err(ParseError::InvalidToken(value));
                }
            }
        }
        self.mapping_end()?;
        self.document_end()?;

        let mode = match notation {
            Notation::Traditional => Mode::Traditional,
            Notation::Ueb => Mode::Ueb,
            Notation::Nemeth => Mode::Nemeth { indicators },
        };
        let tests = tests.ok_or(ParseError::NoTests)?;
        Ok(TestSuite::new(dictionary, mode, rules, tests))
    }

    /// Parse all suites of the file
    pub fn yaml(&mut self) -> Result<Vec<TestSuite>, ParseError> {
        let mut test_suites: Vec<TestSuite> = Vec::new();
        self.stream_start()?;
        while let Some(Ok(Event::DocumentStart { .. })) = self.events.peek() {
            test_suites.push(self.suite()?);
        }
        self.stream_end()?;
        Ok(test_suites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(path: &str) -> Result<Vec<TestSuite>, ParseError> {
        let file = File::open(path).unwrap();
        YAMLParser::new(file)?.yaml()
    }

    #[test]
    fn literary_suite() {
        let suites = parse("tests/yaml/literary.yaml").unwrap();
        assert_eq!(suites.len(), 1);
        let suite = &suites[0];
        assert_eq!(suite.mode(), Mode::Ueb);
        assert_eq!(suite.dictionary(), Some(PathBuf::from("tables/zhuyin.txt").as_path()));
        assert!(!suite.tests().is_empty());
    }

    #[test]
    fn several_documents() {
        let suites = parse("tests/yaml/notations.yaml").unwrap();
        assert_eq!(suites.len(), 2);
        assert_eq!(suites[0].mode(), Mode::Traditional);
        assert_eq!(suites[1].mode(), Mode::Ueb);
    }

    #[test]
    fn nemeth_without_indicators() {
        let suites = parse("tests/yaml/nemeth.yaml").unwrap();
        assert_eq!(suites[0].mode(), Mode::Nemeth { indicators: true });
        assert_eq!(suites[1].mode(), Mode::Nemeth { indicators: false });
    }

    #[test]
    fn descriptions_and_rules() {
        let suites = parse("tests/yaml/rules.yaml").unwrap();
        let suite = &suites[0];
        assert!(suite.rules().contains("Boyan=⠠⠃⠕⠽⠁⠝"));
        assert_eq!(
            suite.tests()[0].description(),
            Some("a name spelled in Braille")
        );
    }

    #[test]
    fn unknown_key() {
        assert!(matches!(
            parse("tests/yaml/invalid/unknown_key.yaml"),
            Err(ParseError::InvalidToken(key)) if key == "table"
        ));
    }
}
