//! Donor health screening.
//!
//! Intake forms answer each screening question with `"Yes"` or `"No"`.
//! Eligibility is derived from the answers at intake time: any
//! disqualifying answer makes the donor ineligible. Allergies and prior
//! donations are recorded but do not disqualify.

use serde::Serialize;

use crate::error::CoreError;

pub const ANSWER_YES: &str = "Yes";
pub const ANSWER_NO: &str = "No";

/// Parse a Yes/No form answer. Case-insensitive, surrounding whitespace ignored.
///
/// Returns the canonical spelling (`"Yes"` / `"No"`).
pub fn normalize_answer(field: &str, raw: &str) -> Result<&'static str, CoreError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" => Ok(ANSWER_YES),
        "no" => Ok(ANSWER_NO),
        _ => Err(CoreError::Validation(format!(
            "{field} must be \"Yes\" or \"No\", got \"{}\"",
            raw.trim()
        ))),
    }
}

/// Canonical screening answers for one intake form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreeningAnswers {
    pub donated_before: &'static str,
    pub diseases: &'static str,
    pub allergies: &'static str,
    pub positive_test: &'static str,
    pub cardiac: &'static str,
    pub bleeding: &'static str,
    pub medication: &'static str,
}

impl ScreeningAnswers {
    /// Names of the answered-"Yes" questions that rule a donor out.
    pub fn disqualifiers(&self) -> Vec<&'static str> {
        [
            ("diseases", self.diseases),
            ("positive_test", self.positive_test),
            ("cardiac", self.cardiac),
            ("bleeding", self.bleeding),
            ("medication", self.medication),
        ]
        .into_iter()
        .filter(|(_, answer)| *answer == ANSWER_YES)
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_eligible(&self) -> bool {
        self.disqualifiers().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn all_no() -> ScreeningAnswers {
        ScreeningAnswers {
            donated_before: ANSWER_NO,
            diseases: ANSWER_NO,
            allergies: ANSWER_NO,
            positive_test: ANSWER_NO,
            cardiac: ANSWER_NO,
            bleeding: ANSWER_NO,
            medication: ANSWER_NO,
        }
    }

    #[test]
    fn answers_are_case_insensitive() {
        assert_eq!(normalize_answer("cardiac", " YES ").unwrap(), ANSWER_YES);
        assert_eq!(normalize_answer("cardiac", "no").unwrap(), ANSWER_NO);
    }

    #[test]
    fn other_answers_rejected() {
        assert_matches!(
            normalize_answer("bleeding", "maybe"),
            Err(CoreError::Validation(ref msg)) if msg.starts_with("bleeding")
        );
    }

    #[test]
    fn clean_screening_is_eligible() {
        assert!(all_no().is_eligible());
    }

    #[test]
    fn allergies_and_prior_donation_do_not_disqualify() {
        let answers = ScreeningAnswers {
            donated_before: ANSWER_YES,
            allergies: ANSWER_YES,
            ..all_no()
        };
        assert!(answers.is_eligible());
    }

    #[test]
    fn each_disqualifier_is_reported() {
        let answers = ScreeningAnswers {
            cardiac: ANSWER_YES,
            medication: ANSWER_YES,
            ..all_no()
        };
        assert!(!answers.is_eligible());
        assert_eq!(answers.disqualifiers(), vec!["cardiac", "medication"]);
    }
}
