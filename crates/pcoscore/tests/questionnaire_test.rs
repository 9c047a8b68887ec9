//! End-to-end conversations through the questionnaire
//!
//! Run with: cargo test -p pcoscore --test questionnaire_test

use std::sync::Arc;

use pcoscore::assessment::Stage;
use pcoscore::replies::TextFormat;
use pcoscore::Questionnaire;
use pretty_assertions::assert_eq;

/// Runs a full conversation and returns the final report text
fn run(questionnaire: &Questionnaire, user: u64, answers: [&str; 3]) -> String {
    questionnaire.begin(user);
    for answer in &answers[..2] {
        let reply = questionnaire.answer(user, answer).expect("assessment should be active");
        assert_eq!(reply.format, TextFormat::Plain);
    }
    questionnaire
        .answer(user, answers[2])
        .expect("last answer should produce the report")
        .text
}

#[test]
fn test_regular_cycle_is_low_risk() {
    let questionnaire = Questionnaire::new();
    let report = run(&questionnaire, 1, ["Regular", "28", "Headache"]);
    assert!(report.contains("Score: 0%"));
    assert!(report.contains("Risk: Low"));
}

#[test]
fn test_no_cycle_is_medium_risk() {
    let questionnaire = Questionnaire::new();
    let report = run(&questionnaire, 1, ["None", "anything", ""]);
    assert!(report.contains("Score: 70%"));
    assert!(report.contains("Risk: Medium"));
}

#[test]
fn test_irregular_long_cycle_is_high_risk() {
    let questionnaire = Questionnaire::new();
    let report = run(
        &questionnaire,
        1,
        ["Irregular", "40", "Facial Hair, Weight Gain, Hair Thinning"],
    );
    assert!(report.contains("Score: 92%"));
    assert!(report.contains("Risk: High"));
}

#[test]
fn test_prompts_follow_stage_order() {
    let questionnaire = Questionnaire::new();

    let first = questionnaire.begin(9);
    assert!(first.text.contains("Question 1/3"));
    assert!(first.options.is_some());

    let second = questionnaire.answer(9, "Irregular").unwrap();
    assert_eq!(second.text, "Enter cycle length (days):");
    assert_eq!(questionnaire.store().get(9).unwrap().stage, Stage::Length);

    let third = questionnaire.answer(9, "30").unwrap();
    assert_eq!(third.text, "Enter symptoms (comma-separated):");
    assert_eq!(questionnaire.store().get(9).unwrap().stage, Stage::Symptoms);
}

#[test]
fn test_state_is_cleared_after_report() {
    let questionnaire = Questionnaire::new();
    run(&questionnaire, 3, ["Irregular", "15", "Acne"]);

    assert!(!questionnaire.is_active(3));
    assert_eq!(questionnaire.store().get(3), None);
    // Messages after the report are no longer part of an assessment
    assert_eq!(questionnaire.answer(3, "Acne"), None);
}

#[test]
fn test_restart_mid_assessment_starts_over() {
    let questionnaire = Questionnaire::new();
    questionnaire.begin(5);
    questionnaire.answer(5, "None");

    questionnaire.begin(5);
    assert_eq!(questionnaire.store().get(5).unwrap().stage, Stage::Cycle);

    let report = run(&questionnaire, 5, ["Regular", "28", ""]);
    assert!(report.contains("Score: 0%"));
}

#[test]
fn test_concurrent_users_do_not_interfere() {
    let questionnaire = Arc::new(Questionnaire::new());

    let handles: Vec<_> = (0..16u64)
        .map(|user| {
            let questionnaire = Arc::clone(&questionnaire);
            std::thread::spawn(move || {
                // Even users answer high-risk, odd users low-risk
                let answers = if user % 2 == 0 {
                    ["Irregular", "40", "Facial Hair, Weight Gain, Hair Thinning"]
                } else {
                    ["Regular", "28", ""]
                };
                (user, run(&questionnaire, user, answers))
            })
        })
        .collect();

    for handle in handles {
        let (user, report) = handle.join().unwrap();
        if user % 2 == 0 {
            assert!(report.contains("Risk: High"), "user {}: {}", user, report);
        } else {
            assert!(report.contains("Risk: Low"), "user {}: {}", user, report);
        }
    }

    assert!(questionnaire.store().is_empty());
}
