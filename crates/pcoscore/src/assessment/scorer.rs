//! Weighted risk score.
//!
//! [`score`] is total: unrecognised or unparseable answers contribute a
//! default weight and are listed in [`ScoreResult::defaulted`] instead of
//! failing.

use serde::Serialize;
use strum::Display;

use super::answers::{Answers, CycleLength, CycleRegularity};

/// Point weights per answer value
pub mod weights {
    pub const REGULAR: u32 = 0;
    pub const IRREGULAR: u32 = 35;
    pub const NO_CYCLE: u32 = 40;

    pub const LENGTH_NORMAL: u32 = 0;
    pub const LENGTH_SHORT: u32 = 15;
    pub const LENGTH_LONG: u32 = 25;
    /// Used instead of the length answer when there is no cycle
    pub const LENGTH_NONE: u32 = 30;

    /// Inclusive range of cycle lengths (days) considered normal
    pub const NORMAL_DAYS: std::ops::RangeInclusive<i64> = 21..=35;

    pub const SYMPTOMS: [(&str, u32); 4] = [
        ("Acne", 8),
        ("Facial Hair", 12),
        ("Weight Gain", 10),
        ("Hair Thinning", 10),
    ];

    pub const MAX_SCORE: u32 = 100;
}

/// Coarse bucket derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

impl RiskCategory {
    /// `< 30` Low, `30..=70` Medium, `> 70` High
    pub fn from_score(score: u32) -> Self {
        if score < 30 {
            RiskCategory::Low
        } else if score <= 70 {
            RiskCategory::Medium
        } else {
            RiskCategory::High
        }
    }
}

/// Points contributed by each question, before clamping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    pub regularity: u32,
    pub cycle_length: u32,
    pub symptoms: u32,
}

impl Breakdown {
    pub fn total(&self) -> u32 {
        self.regularity + self.cycle_length + self.symptoms
    }
}

/// An answer that was scored with a default weight rather than its own value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Defaulted {
    /// Missing or unrecognised regularity, scored as Regular
    Regularity,
    /// Non-integer cycle length, scored 0
    CycleLength(String),
    /// Symptom not in the weight table, scored 0
    Symptom(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    /// Always within `0..=100`
    pub score: u32,
    pub risk: RiskCategory,
    pub breakdown: Breakdown,
    pub defaulted: Vec<Defaulted>,
}

fn regularity_weight(regularity: CycleRegularity) -> u32 {
    match regularity {
        CycleRegularity::Regular => weights::REGULAR,
        CycleRegularity::Irregular => weights::IRREGULAR,
        CycleRegularity::NoCycle => weights::NO_CYCLE,
    }
}

fn length_weight_for_days(days: i64) -> u32 {
    if weights::NORMAL_DAYS.contains(&days) {
        weights::LENGTH_NORMAL
    } else if days < *weights::NORMAL_DAYS.start() {
        weights::LENGTH_SHORT
    } else {
        weights::LENGTH_LONG
    }
}

/// Weight of a single symptom, `None` when it is not in the table
pub fn symptom_weight(symptom: &str) -> Option<u32> {
    weights::SYMPTOMS
        .iter()
        .find(|(name, _)| *name == symptom)
        .map(|(_, weight)| *weight)
}

/// Scores an answer set.
///
/// # Example
///
/// ```
/// use pcoscore::assessment::{score, Answers, RiskCategory};
///
/// let result = score(&Answers::from_replies("Irregular", "40", "Facial Hair, Weight Gain, Hair Thinning"));
/// assert_eq!(result.score, 92);
/// assert_eq!(result.risk, RiskCategory::High);
/// ```
pub fn score(answers: &Answers) -> ScoreResult {
    let mut breakdown = Breakdown::default();
    let mut defaulted = Vec::new();

    let regularity = match answers.cycle_regularity {
        Some(r) => r,
        None => {
            defaulted.push(Defaulted::Regularity);
            CycleRegularity::Regular
        }
    };
    breakdown.regularity = regularity_weight(regularity);

    breakdown.cycle_length = if regularity == CycleRegularity::NoCycle {
        weights::LENGTH_NONE
    } else {
        match &answers.cycle_length {
            // Absent length scores as a typical 28-day cycle
            None => length_weight_for_days(28),
            Some(CycleLength::Days(days)) => length_weight_for_days(*days),
            Some(CycleLength::Raw(raw)) => {
                defaulted.push(Defaulted::CycleLength(raw.clone()));
                weights::LENGTH_NORMAL
            }
        }
    };

    for symptom in &answers.symptoms {
        match symptom_weight(symptom) {
            Some(weight) => breakdown.symptoms += weight,
            None => defaulted.push(Defaulted::Symptom(symptom.clone())),
        }
    }

    let score = breakdown.total().min(weights::MAX_SCORE);

    ScoreResult {
        score,
        risk: RiskCategory::from_score(score),
        breakdown,
        defaulted,
    }
}
