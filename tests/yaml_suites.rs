use std::{fs, path::Path};

use zhuyin_braille::check::{TestError, TestResult, check_yaml};

#[test]
fn yaml_suites() {
    let mut checked = 0;
    for entry in fs::read_dir("tests/yaml").unwrap() {
        let path = entry.unwrap().path();
        if path.extension().is_none_or(|e| e != "yaml") {
            continue;
        }
        let results = check_yaml(&path).unwrap();
        assert!(!results.is_empty(), "{:?} has no tests", path);
        let unexpected: Vec<&TestResult> = results
            .iter()
            .filter(|r| r.is_failure() || r.is_unexpected_success())
            .collect();
        assert!(unexpected.is_empty(), "{:?}: {:?}", path, unexpected);
        checked += 1;
    }
    assert_eq!(checked, 4);
}

#[test]
fn invalid_suite() {
    let result = check_yaml(Path::new("tests/yaml/invalid/unknown_key.yaml"));
    assert!(matches!(result, Err(TestError::ParseError(_))));
}

#[test]
fn missing_suite() {
    let result = check_yaml(Path::new("tests/yaml/no-such-suite.yaml"));
    assert!(matches!(result, Err(TestError::IoError(_))));
}
