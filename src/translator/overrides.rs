//! Matching of user supplied rules at the scan position

use crate::{
    custom::CustomRuleSet,
    syllable,
    translator::{state::ScanState, transcript::Transcript},
};

/// A custom rule whose trigger starts at the scan position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Override<'c> {
    Braille { trigger: &'c str, cells: &'c str },
    Phonetic { trigger: &'c str, syllables: &'c [String] },
}

impl<'c> Override<'c> {
    /// Find the rule matching at the start of `rest`.
    ///
    /// Braille rules are tried before phonetic rules, and within each group
    /// the first declared trigger that matches is taken, even if a later one
    /// would match more of the input.
    pub fn find(rules: &'c CustomRuleSet, rest: &str) -> Option<Self> {
        if let Some((trigger, cells)) = rules
            .braille()
            .iter()
            .find(|(t, _)| rest.starts_with(t.as_str()))
        {
            return Some(Override::Braille { trigger, cells });
        }
        rules
            .phonetic()
            .iter()
            .find(|(t, _)| rest.starts_with(t.as_str()))
            .map(|(trigger, syllables)| Override::Phonetic { trigger, syllables })
    }

    pub fn trigger(&self) -> &'c str {
        match *self {
            Override::Braille { trigger, .. } | Override::Phonetic { trigger, .. } => trigger,
        }
    }

    /// Write the replacement of the matched trigger
    pub fn emit(&self, state: &mut ScanState, out: &mut Transcript) {
        match self {
            Override::Braille { trigger, cells } => out.push(trigger, cells, false),
            Override::Phonetic { trigger, syllables } => {
                // a missing syllable is an empty spelling and shows up as an error
                for (i, c) in trigger.chars().enumerate() {
                    let spelling = syllables.get(i).map(String::as_str).unwrap_or("");
                    let syllable = syllable::encode(c, spelling);
                    out.push(&c.to_string(), &syllable.cells, syllable.is_error);
                }
            }
        }
        state.numeric_run_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn braille_before_phonetic() {
        let rules = CustomRuleSet::parse("冠軍=ㄍㄨㄢˋ ㄐㄩㄣ\n冠=⠿");
        let found = Override::find(&rules, "冠軍賽").unwrap();
        assert_eq!(found, Override::Braille { trigger: "冠", cells: "⠿" });
    }

    #[test]
    fn first_declared_wins() {
        let rules = CustomRuleSet::parse("Bo=⠃\nBoyan=⠠⠃⠕⠽⠁⠝");
        assert_eq!(Override::find(&rules, "Boyan").unwrap().trigger(), "Bo");
        let rules = CustomRuleSet::parse("Boyan=⠠⠃⠕⠽⠁⠝\nBo=⠃");
        assert_eq!(Override::find(&rules, "Boyan").unwrap().trigger(), "Boyan");
        assert_eq!(Override::find(&rules, "Bob").unwrap().trigger(), "Bo");
        assert_eq!(Override::find(&rules, "bo"), None);
    }

    #[test]
    fn phonetic_emits_one_record_per_character() {
        let rules = CustomRuleSet::parse("冠軍=ㄍㄨㄢˋ ㄐㄩㄣ");
        let found = Override::find(&rules, "冠軍").unwrap();
        let mut state = ScanState::new();
        state.numeric_run_open = true;
        let mut out = Transcript::new();
        found.emit(&mut state, &mut out);
        assert_eq!(out.braille(), "⠅⠻⠐⠅⠲⠄");
        assert_eq!(out.records().len(), 2);
        assert_eq!(out.records()[1].source, "軍");
        assert!(!state.numeric_run_open);
    }

    #[test]
    fn missing_syllables_are_errors() {
        let rules = CustomRuleSet::parse("冠軍=ㄍㄨㄢˋ");
        let found = Override::find(&rules, "冠軍").unwrap();
        let mut out = Transcript::new();
        found.emit(&mut ScanState::new(), &mut out);
        assert!(!out.records()[0].is_error);
        assert!(out.records()[1].is_error);
        assert_eq!(out.records()[1].cells, "⠄");
    }
}
