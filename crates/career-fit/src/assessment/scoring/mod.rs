mod breakdown;
pub(crate) mod rules;

pub use breakdown::{PsychometricScores, ScoreBreakdown, TechnicalScores, WiscarScores};

use std::collections::HashMap;

use super::answers::{Answer, AnswerValue};
use super::catalog::{QuestionCatalog, QuestionId};
use rules::{dimension_score, to_percent};

const PSYCHOMETRIC_WEIGHT: f64 = 0.3;
const TECHNICAL_WEIGHT: f64 = 0.4;
const WISCAR_WEIGHT: f64 = 0.3;

/// Score an answer set against the catalog. Later answers for a question replace earlier ones.
pub fn compute_scores(catalog: &QuestionCatalog, answers: &[Answer]) -> ScoreBreakdown {
    let answer_map: HashMap<&QuestionId, &AnswerValue> = answers
        .iter()
        .map(|answer| (&answer.question_id, &answer.value))
        .collect();

    let psychometric = psychometric_scores(catalog, &answer_map);
    let technical = technical_scores(catalog, &answer_map);
    let wiscar = wiscar_scores(catalog, &answer_map);

    let overall = to_percent(
        f64::from(psychometric.total) * PSYCHOMETRIC_WEIGHT
            + f64::from(technical.total) * TECHNICAL_WEIGHT
            + f64::from(wiscar.total) * WISCAR_WEIGHT,
    );

    ScoreBreakdown {
        psychometric,
        technical,
        wiscar,
        overall,
    }
}

fn psychometric_scores(
    catalog: &QuestionCatalog,
    answers: &HashMap<&QuestionId, &AnswerValue>,
) -> PsychometricScores {
    let interest = dimension_score(catalog, answers, &rules::PSYCH_INTEREST);
    let personality = dimension_score(catalog, answers, &rules::PSYCH_PERSONALITY);
    // Motivation has no questions of its own.
    let motivation = to_percent(f64::from(interest) * 0.7 + f64::from(personality) * 0.3);

    PsychometricScores {
        interest,
        personality,
        motivation,
        total: mean(&[interest, personality, motivation]),
    }
}

fn technical_scores(
    catalog: &QuestionCatalog,
    answers: &HashMap<&QuestionId, &AnswerValue>,
) -> TechnicalScores {
    let aptitude = dimension_score(catalog, answers, &rules::TECH_APTITUDE);
    let prerequisites = dimension_score(catalog, answers, &rules::TECH_PREREQUISITES);
    let domain = dimension_score(catalog, answers, &rules::TECH_DOMAIN);

    TechnicalScores {
        aptitude,
        prerequisites,
        domain,
        total: mean(&[aptitude, prerequisites, domain]),
    }
}

fn wiscar_scores(
    catalog: &QuestionCatalog,
    answers: &HashMap<&QuestionId, &AnswerValue>,
) -> WiscarScores {
    let will = dimension_score(catalog, answers, &rules::WISCAR_WILL);
    let interest = dimension_score(catalog, answers, &rules::WISCAR_INTEREST);
    let skill = dimension_score(catalog, answers, &rules::WISCAR_SKILL);
    let cognitive = dimension_score(catalog, answers, &rules::WISCAR_COGNITIVE);
    let ability = dimension_score(catalog, answers, &rules::WISCAR_ABILITY);
    let real_world = dimension_score(catalog, answers, &rules::WISCAR_REAL_WORLD);

    WiscarScores {
        will,
        interest,
        skill,
        cognitive,
        ability,
        real_world,
        total: mean(&[will, interest, skill, cognitive, ability, real_world]),
    }
}

fn mean(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    let sum: u32 = scores.iter().map(|&score| u32::from(score)).sum();
    to_percent(f64::from(sum) / scores.len() as f64)
}
