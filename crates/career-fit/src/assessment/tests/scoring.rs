use super::common::*;
use crate::assessment::answers::{Answer, AnswerValue};
use crate::assessment::catalog::QuestionCatalog;
use crate::assessment::recommendation::{generate_recommendation, Verdict};
use crate::assessment::scoring::rules::{
    correctness_score, free_choice_score, rating_score, skill_level_score,
};
use crate::assessment::scoring::{compute_scores, ScoreBreakdown};

fn score(answers: &[Answer]) -> ScoreBreakdown {
    compute_scores(&QuestionCatalog::standard(), answers)
}

#[test]
fn rating_scale_maps_endpoints_and_is_monotonic() {
    let question = question("psych_interest_1");
    let scores: Vec<f64> = (1..=5)
        .map(|value| rating_score(&question, &AnswerValue::Rating(value)))
        .collect();

    assert_eq!(scores, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
}

#[test]
fn rating_outside_scale_is_clamped() {
    let question = question("wiscar_will_1");
    assert_eq!(rating_score(&question, &AnswerValue::Rating(9)), 100.0);
    assert_eq!(rating_score(&question, &AnswerValue::Rating(0)), 0.0);
}

#[test]
fn rating_accepts_numeric_text() {
    let question = question("wiscar_will_1");
    assert_eq!(
        rating_score(&question, &AnswerValue::Choice("4".to_string())),
        75.0
    );
    assert_eq!(
        rating_score(&question, &AnswerValue::Choice("often".to_string())),
        0.0
    );
}

#[test]
fn correctness_is_binary() {
    let question = question("tech_logic_1");
    assert_eq!(
        correctness_score(&question, &AnswerValue::Choice("400".to_string())),
        100.0
    );
    for wrong in ["200", "300", "600", "400 "] {
        assert_eq!(
            correctness_score(&question, &AnswerValue::Choice(wrong.to_string())),
            0.0,
            "{wrong:?} should be wrong"
        );
    }
}

#[test]
fn correctness_without_designated_answer_scores_zero() {
    let question = question("psych_personality_1");
    let value = AnswerValue::Choice(question.options[0].clone());
    assert_eq!(correctness_score(&question, &value), 0.0);
}

#[test]
fn skill_level_follows_option_order() {
    let question = question("wiscar_skill_1");
    let scores: Vec<f64> = question
        .options
        .iter()
        .map(|option| skill_level_score(&question, &AnswerValue::Choice(option.clone())))
        .collect();

    assert_eq!(scores.first(), Some(&0.0));
    assert_eq!(scores.last(), Some(&100.0));
    assert!(scores.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(
        skill_level_score(&question, &AnswerValue::Choice("SQL wizard".to_string())),
        0.0
    );
}

#[test]
fn free_choice_uses_text_length() {
    assert_eq!(free_choice_score(&AnswerValue::Choice("abc".to_string())), 46.0);
    assert_eq!(
        free_choice_score(&AnswerValue::Choice("a".repeat(40))),
        100.0
    );
    assert_eq!(free_choice_score(&AnswerValue::Rating(3)), 0.0);
}

#[test]
fn empty_answers_score_zero_everywhere() {
    let scores = score(&[]);
    assert_eq!(scores, ScoreBreakdown::default());
}

#[test]
fn unanswered_questions_still_count_toward_divisor() {
    let scores = score(&[Answer::rating("psych_interest_1", 5)]);

    // 100 * 1.2 spread over the three expected interest questions.
    assert_eq!(scores.psychometric.interest, 40);
    assert_eq!(scores.psychometric.personality, 0);
    assert_eq!(scores.psychometric.motivation, 28);
    assert_eq!(scores.psychometric.total, 23);
}

#[test]
fn later_answers_replace_earlier_ones() {
    let overwritten = score(&[
        Answer::rating("psych_interest_1", 1),
        Answer::rating("psych_interest_1", 5),
    ]);
    let single = score(&[Answer::rating("psych_interest_1", 5)]);
    assert_eq!(overwritten, single);
}

#[test]
fn unknown_questions_are_ignored() {
    let scores = score(&[Answer::rating("not_in_catalog", 5)]);
    assert_eq!(scores, ScoreBreakdown::default());
}

#[test]
fn weighted_dimensions_are_capped_at_one_hundred() {
    let scores = score(&perfect_answers());

    assert_eq!(scores.psychometric.interest, 100);
    assert_eq!(scores.psychometric.personality, 100);
    assert_eq!(scores.psychometric.motivation, 100);
    assert_eq!(scores.technical.total, 100);
    assert_eq!(scores.wiscar.total, 100);
    assert_eq!(scores.overall, 100);
}

#[test]
fn capped_dimensions_feed_group_totals() {
    let scores = score(&mixed_answers());

    // Uncapped weighted sums would be 105, 120, 130 and 120 here, lifting overall to 75.
    assert_eq!(scores.psychometric.personality, 100);
    assert_eq!(scores.technical.aptitude, 100);
    assert_eq!(scores.technical.domain, 100);
    assert_eq!(scores.wiscar.real_world, 100);
    assert_eq!(scores.overall, 67);
    assert_eq!(
        generate_recommendation(&scores).verdict,
        Verdict::Conditional
    );
}

#[test]
fn mixed_answers_produce_expected_breakdown() {
    let scores = score(&mixed_answers());

    assert_eq!(scores.psychometric.interest, 60);
    assert_eq!(scores.psychometric.personality, 100);
    assert_eq!(scores.psychometric.motivation, 72);
    assert_eq!(scores.psychometric.total, 77);

    assert_eq!(scores.technical.aptitude, 100);
    assert_eq!(scores.technical.prerequisites, 0);
    assert_eq!(scores.technical.domain, 100);
    assert_eq!(scores.technical.total, 67);

    assert_eq!(scores.wiscar.will, 60);
    assert_eq!(scores.wiscar.interest, 65);
    assert_eq!(scores.wiscar.skill, 55);
    assert_eq!(scores.wiscar.cognitive, 0);
    assert_eq!(scores.wiscar.ability, 55);
    assert_eq!(scores.wiscar.real_world, 100);
    assert_eq!(scores.wiscar.total, 56);

    assert_eq!(scores.overall, 67);
}

#[test]
fn overall_is_weighted_blend_of_group_totals() {
    let sheets = [
        Vec::new(),
        perfect_answers(),
        mixed_answers(),
        weak_answers(),
        vec![Answer::rating("wiscar_will_1", 4)],
    ];

    for answers in sheets {
        let scores = score(&answers);
        let expected = (0.3 * f64::from(scores.psychometric.total)
            + 0.4 * f64::from(scores.technical.total)
            + 0.3 * f64::from(scores.wiscar.total))
        .round() as u8;

        assert_eq!(scores.overall, expected);
        assert!(scores.overall <= 100);
    }
}
