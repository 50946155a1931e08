//! A test runner for transcription tests defined in YAML files

use std::{
    collections::HashMap,
    fs::File,
    path::{Path, PathBuf},
};

use log::info;

use crate::{
    custom::CustomRuleSet,
    lookup::{Dictionary, DictionaryError, PhraseCorrections},
    translator::{Mode, Translator},
    yaml::{ParseError, YAMLParser},
};

#[derive(thiserror::Error, Debug)]
pub enum TestError {
    #[error("Cannot open test file")]
    IoError(#[from] std::io::Error),
    #[error("Invalid test file")]
    ParseError(#[from] ParseError),
    #[error("Cannot load dictionary")]
    DictionaryError(#[from] DictionaryError),
}

#[derive(PartialEq, Debug)]
pub enum TestResult {
    Success,
    Failure {
        input: String,
        expected: String,
        actual: String,
    },
    ExpectedFailure {
        input: String,
        expected: String,
        actual: String,
    },
    UnexpectedSuccess {
        input: String,
    },
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        matches!(self, TestResult::Success)
    }
    pub fn is_failure(&self) -> bool {
        matches!(self, TestResult::Failure { .. })
    }
    pub fn is_expected_failure(&self) -> bool {
        matches!(self, TestResult::ExpectedFailure { .. })
    }
    pub fn is_unexpected_success(&self) -> bool {
        matches!(self, TestResult::UnexpectedSuccess { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpectedFailure {
    Simple(bool),
    Reason(String),
}

impl ExpectedFailure {
    fn is_failure(&self) -> bool {
        match self {
            Self::Simple(v) => *v,
            Self::Reason(_) => true,
        }
    }
}

/// A single expected transcription
#[derive(Debug, Clone)]
pub struct Test {
    description: Option<String>,
    input: String,
    expected: String,
    xfail: ExpectedFailure,
}

impl Test {
    pub fn new(
        description: Option<String>,
        input: String,
        expected: String,
        xfail: ExpectedFailure,
    ) -> Self {
        Test {
            description,
            input,
            expected,
            xfail,
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn check(&self, translator: &Translator, rules: &CustomRuleSet) -> TestResult {
        let actual = translator.translate(&self.input, rules).into_parts().0;
        if actual == self.expected {
            if !self.xfail.is_failure() {
                TestResult::Success
            } else {
                TestResult::UnexpectedSuccess {
                    input: self.input.to_string(),
                }
            }
        } else if self.xfail.is_failure() {
            TestResult::ExpectedFailure {
                input: self.input.to_string(),
                expected: self.expected.to_string(),
                actual,
            }
        } else {
            TestResult::Failure {
                input: self.input.to_string(),
                expected: self.expected.to_string(),
                actual,
            }
        }
    }
}

/// [`Tests`](Test) that share a dictionary, a mode and custom rules
#[derive(Debug)]
pub struct TestSuite {
    /// Without a dictionary only the builtin phrase corrections are known
    dictionary: Option<PathBuf>,
    mode: Mode,
    rules: String,
    tests: Vec<Test>,
}

impl TestSuite {
    pub fn new(dictionary: Option<PathBuf>, mode: Mode, rules: String, tests: Vec<Test>) -> Self {
        Self {
            dictionary,
            mode,
            rules,
            tests,
        }
    }

    pub fn dictionary(&self) -> Option<&Path> {
        self.dictionary.as_deref()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn rules(&self) -> &str {
        &self.rules
    }

    pub fn tests(&self) -> &[Test] {
        &self.tests
    }

    fn load_dictionary(&self) -> Result<Dictionary, DictionaryError> {
        match &self.dictionary {
            Some(path) => Dictionary::find(path),
            None => Ok(Dictionary::new(HashMap::new(), PhraseCorrections::builtin())),
        }
    }

    pub fn check(&self) -> Result<Vec<TestResult>, TestError> {
        let dictionary = self.load_dictionary()?;
        let translator = Translator::new(self.mode, &dictionary);
        let rules = CustomRuleSet::parse(&self.rules);
        Ok(self
            .tests
            .iter()
            .map(|test| test.check(&translator, &rules))
            .collect())
    }
}

/// Run all suites in the YAML file at `path`
pub fn check_yaml(path: &Path) -> Result<Vec<TestResult>, TestError> {
    let file = File::open(path)?;
    let suites = YAMLParser::new(file)?.yaml()?;
    let mut results = Vec::new();
    for suite in suites {
        info!("Checking {} tests in {:?} mode", suite.tests.len(), suite.mode);
        results.extend(suite.check()?);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suite(mode: Mode, rules: &str, tests: Vec<Test>) -> TestSuite {
        TestSuite::new(None, mode, rules.to_string(), tests)
    }

    fn test(input: &str, expected: &str, xfail: bool) -> Test {
        Test::new(
            None,
            input.to_string(),
            expected.to_string(),
            ExpectedFailure::Simple(xfail),
        )
    }

    #[test]
    fn check_results() {
        let suite = suite(
            Mode::Nemeth { indicators: false },
            "",
            vec![
                test("1+2", "⠼⠂⠬⠆", false),
                test("1+2", "⠼⠂⠬⠼⠆", false),
                test("1+2", "⠼⠂⠬⠼⠆", true),
                test("1+2", "⠼⠂⠬⠆", true),
            ],
        );
        assert_eq!(
            suite.check().unwrap(),
            vec![
                TestResult::Success,
                TestResult::Failure {
                    input: "1+2".to_string(),
                    expected: "⠼⠂⠬⠼⠆".to_string(),
                    actual: "⠼⠂⠬⠆".to_string(),
                },
                TestResult::ExpectedFailure {
                    input: "1+2".to_string(),
                    expected: "⠼⠂⠬⠼⠆".to_string(),
                    actual: "⠼⠂⠬⠆".to_string(),
                },
                TestResult::UnexpectedSuccess {
                    input: "1+2".to_string(),
                },
            ]
        );
    }

    #[test]
    fn builtin_corrections_without_dictionary() {
        let suite = suite(Mode::Ueb, "", vec![test("冠軍", "⠅⠻⠐⠅⠲⠄", false)]);
        assert_eq!(suite.check().unwrap(), vec![TestResult::Success]);
    }

    #[test]
    fn rules_apply_to_all_tests() {
        let suite = suite(
            Mode::Ueb,
            "Boyan=⠠⠃⠕⠽⠁⠝\n快樂=ㄎㄨㄞˋ ㄌㄜˋ",
            vec![
                test("Boyan", "⠠⠃⠕⠽⠁⠝", false),
                test("快樂", "⠇⠶⠐⠉⠮⠐", false),
            ],
        );
        assert!(suite.check().unwrap().iter().all(TestResult::is_success));
    }

    #[test]
    fn missing_dictionary() {
        let suite = TestSuite::new(
            Some(PathBuf::from("no-such-dictionary.txt")),
            Mode::Ueb,
            String::new(),
            vec![],
        );
        assert!(matches!(
            suite.check(),
            Err(TestError::DictionaryError(DictionaryError::NotFound(_)))
        ));
    }

    #[test]
    fn reason_is_expected_failure() {
        assert!(ExpectedFailure::Reason("tone sandhi".to_string()).is_failure());
        assert!(!ExpectedFailure::Simple(false).is_failure());
    }
}
