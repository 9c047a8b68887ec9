//! Answer set collected over the three questions and the parsing of raw replies

use std::num::IntErrorKind;

use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

/// Answer to question 1. Matched exactly against the keyboard labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, EnumIter)]
pub enum CycleRegularity {
    Regular,
    Irregular,
    /// No menstrual cycle at all
    #[strum(serialize = "None")]
    #[serde(rename = "None")]
    NoCycle,
}

impl CycleRegularity {
    /// Parses a raw reply; anything but an exact label yields `None`.
    pub fn from_answer(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

/// Answer to question 2, kept raw when it is not an integer.
///
/// Integers outside the `i64` range saturate to `i64::MAX` / `i64::MIN`,
/// which still fall on the correct side of the length thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CycleLength {
    Days(i64),
    Raw(String),
}

impl CycleLength {
    pub fn from_answer(text: &str) -> Self {
        match parse_days(text) {
            Some(days) => CycleLength::Days(days),
            None => CycleLength::Raw(text.to_string()),
        }
    }
}

/// Parses a whole number of days.
///
/// Accepts surrounding whitespace, an optional sign and single `_`
/// separators between digits (`"4_0"` is 40).
fn parse_days(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if body.is_empty() || body.starts_with('_') || body.ends_with('_') || body.contains("__") {
        return None;
    }
    let digits: String = body.chars().filter(|c| *c != '_').collect();
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let signed = if negative { format!("-{}", digits) } else { digits };
    match signed.parse::<i64>() {
        Ok(days) => Some(days),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Splits a comma-separated symptom reply.
///
/// Segments are trimmed and kept in order. Duplicates and empty segments
/// are preserved, so `"Acne, Acne,"` yields `["Acne", "Acne", ""]`.
pub fn parse_symptoms(text: &str) -> Vec<String> {
    text.split(',').map(|s| s.trim().to_string()).collect()
}

/// Answers gathered so far. A field left `None` scores with its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Answers {
    pub cycle_regularity: Option<CycleRegularity>,
    pub cycle_length: Option<CycleLength>,
    pub symptoms: Vec<String>,
}

impl Answers {
    /// Builds a complete answer set from the three raw replies.
    pub fn from_replies(regularity: &str, length: &str, symptoms: &str) -> Self {
        Self {
            cycle_regularity: CycleRegularity::from_answer(regularity),
            cycle_length: Some(CycleLength::from_answer(length)),
            symptoms: parse_symptoms(symptoms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_regularity_matches_keyboard_labels() {
        assert_eq!(CycleRegularity::from_answer("Regular"), Some(CycleRegularity::Regular));
        assert_eq!(CycleRegularity::from_answer("Irregular"), Some(CycleRegularity::Irregular));
        assert_eq!(CycleRegularity::from_answer("None"), Some(CycleRegularity::NoCycle));
    }

    #[test]
    fn test_regularity_is_exact_match() {
        assert_eq!(CycleRegularity::from_answer("regular"), None);
        assert_eq!(CycleRegularity::from_answer(" Regular"), None);
        assert_eq!(CycleRegularity::from_answer("sometimes"), None);
    }

    #[test]
    fn test_regularity_labels_round_trip() {
        let labels: Vec<String> = CycleRegularity::iter().map(|r| r.to_string()).collect();
        assert_eq!(labels, vec!["Regular", "Irregular", "None"]);
    }

    #[test]
    fn test_cycle_length_parsing() {
        assert_eq!(CycleLength::from_answer("28"), CycleLength::Days(28));
        assert_eq!(CycleLength::from_answer(" 40 \n"), CycleLength::Days(40));
        assert_eq!(CycleLength::from_answer("+30"), CycleLength::Days(30));
        assert_eq!(CycleLength::from_answer("-3"), CycleLength::Days(-3));
        assert_eq!(
            CycleLength::from_answer("about a month"),
            CycleLength::Raw("about a month".to_string())
        );
        assert_eq!(CycleLength::from_answer("28.5"), CycleLength::Raw("28.5".to_string()));
        assert_eq!(CycleLength::from_answer(""), CycleLength::Raw(String::new()));
        assert_eq!(CycleLength::from_answer("-"), CycleLength::Raw("-".to_string()));
    }

    #[test]
    fn test_cycle_length_digit_separators() {
        assert_eq!(CycleLength::from_answer("4_0"), CycleLength::Days(40));
        assert_eq!(CycleLength::from_answer("-1_5"), CycleLength::Days(-15));
        assert_eq!(CycleLength::from_answer("_40"), CycleLength::Raw("_40".to_string()));
        assert_eq!(CycleLength::from_answer("40_"), CycleLength::Raw("40_".to_string()));
        assert_eq!(CycleLength::from_answer("4__0"), CycleLength::Raw("4__0".to_string()));
        assert_eq!(CycleLength::from_answer("+_4"), CycleLength::Raw("+_4".to_string()));
    }

    #[test]
    fn test_cycle_length_out_of_range_saturates() {
        assert_eq!(CycleLength::from_answer("100000000000000000000"), CycleLength::Days(i64::MAX));
        assert_eq!(CycleLength::from_answer("-100000000000000000000"), CycleLength::Days(i64::MIN));
    }

    #[test]
    fn test_parse_symptoms_trims_segments() {
        assert_eq!(
            parse_symptoms("Acne,  Facial Hair ,Weight Gain"),
            vec!["Acne", "Facial Hair", "Weight Gain"]
        );
    }

    #[test]
    fn test_parse_symptoms_keeps_duplicates_and_empty_segments() {
        assert_eq!(parse_symptoms("Acne, Acne,"), vec!["Acne", "Acne", ""]);
        assert_eq!(parse_symptoms(""), vec![""]);
    }

    #[test]
    fn test_from_replies() {
        let answers = Answers::from_replies("Irregular", "15", "Acne, Facial Hair");
        assert_eq!(answers.cycle_regularity, Some(CycleRegularity::Irregular));
        assert_eq!(answers.cycle_length, Some(CycleLength::Days(15)));
        assert_eq!(answers.symptoms, vec!["Acne", "Facial Hair"]);
    }
}
