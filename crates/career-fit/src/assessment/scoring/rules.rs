use std::collections::HashMap;

use super::super::answers::AnswerValue;
use super::super::catalog::{Question, QuestionCatalog, QuestionId};

/// How a single answered question is turned into a 0..=100 contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScoringMethod {
    Rating,
    Correctness,
    FreeChoice,
    SkillLevel,
}

impl ScoringMethod {
    pub(crate) fn score(self, question: &Question, value: &AnswerValue) -> f64 {
        match self {
            ScoringMethod::Rating => rating_score(question, value),
            ScoringMethod::Correctness => correctness_score(question, value),
            ScoringMethod::FreeChoice => free_choice_score(value),
            ScoringMethod::SkillLevel => skill_level_score(question, value),
        }
    }
}

/// Fixed set of questions scored together as one dimension.
pub(crate) struct Dimension {
    pub question_ids: &'static [&'static str],
    pub method: ScoringMethod,
}

pub(crate) const PSYCH_INTEREST: Dimension = Dimension {
    question_ids: &["psych_interest_1", "psych_interest_2", "psych_interest_3"],
    method: ScoringMethod::Rating,
};
pub(crate) const PSYCH_PERSONALITY: Dimension = Dimension {
    question_ids: &["psych_personality_1", "psych_personality_2"],
    method: ScoringMethod::FreeChoice,
};
pub(crate) const TECH_APTITUDE: Dimension = Dimension {
    question_ids: &["tech_logic_1"],
    method: ScoringMethod::Correctness,
};
pub(crate) const TECH_PREREQUISITES: Dimension = Dimension {
    question_ids: &["tech_stats_1"],
    method: ScoringMethod::Correctness,
};
pub(crate) const TECH_DOMAIN: Dimension = Dimension {
    question_ids: &["tech_data_1"],
    method: ScoringMethod::Correctness,
};
pub(crate) const WISCAR_WILL: Dimension = Dimension {
    question_ids: &["wiscar_will_1"],
    method: ScoringMethod::Rating,
};
pub(crate) const WISCAR_INTEREST: Dimension = Dimension {
    question_ids: &["wiscar_interest_1"],
    method: ScoringMethod::Rating,
};
pub(crate) const WISCAR_SKILL: Dimension = Dimension {
    question_ids: &["wiscar_skill_1"],
    method: ScoringMethod::SkillLevel,
};
pub(crate) const WISCAR_COGNITIVE: Dimension = Dimension {
    question_ids: &["wiscar_cognitive_1"],
    method: ScoringMethod::Correctness,
};
pub(crate) const WISCAR_ABILITY: Dimension = Dimension {
    question_ids: &["wiscar_learning_1"],
    method: ScoringMethod::Rating,
};
pub(crate) const WISCAR_REAL_WORLD: Dimension = Dimension {
    question_ids: &["wiscar_realworld_1"],
    method: ScoringMethod::Correctness,
};

/// Weighted sum over answered questions divided by the number of questions the dimension
/// expects. Unanswered questions still count toward the divisor.
///
/// The result is capped at 100 before it feeds the group blends.
pub(crate) fn dimension_score(
    catalog: &QuestionCatalog,
    answers: &HashMap<&QuestionId, &AnswerValue>,
    dimension: &Dimension,
) -> u8 {
    let expected = dimension.question_ids.len();
    if expected == 0 {
        return 0;
    }

    let mut total = 0.0;
    for raw_id in dimension.question_ids {
        let id = QuestionId::from(*raw_id);
        let Some(value) = answers.get(&id) else {
            continue;
        };
        let Some(question) = catalog.get(&id) else {
            continue;
        };

        total += dimension.method.score(question, value) * question.weight();
    }

    to_percent(total / expected as f64)
}

pub(crate) fn to_percent(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

pub(crate) fn rating_score(question: &Question, value: &AnswerValue) -> f64 {
    let Some(rating) = value.as_rating() else {
        return 0.0;
    };
    let scale = question.scale();
    let (min, max) = (f64::from(scale.min), f64::from(scale.max));
    if max <= min {
        return 0.0;
    }

    (rating.clamp(min, max) - min) / (max - min) * 100.0
}

pub(crate) fn correctness_score(question: &Question, value: &AnswerValue) -> f64 {
    match &question.correct_answer {
        Some(correct) if correct == value => 100.0,
        _ => 0.0,
    }
}

/// Length of the chosen text stands in for answer quality.
pub(crate) fn free_choice_score(value: &AnswerValue) -> f64 {
    let Some(choice) = value.as_choice() else {
        return 0.0;
    };
    let length = choice.chars().count() as f64;
    ((length + 20.0) * 2.0).min(100.0)
}

pub(crate) fn skill_level_score(question: &Question, value: &AnswerValue) -> f64 {
    let levels = question.options.len();
    if levels < 2 {
        return 0.0;
    }

    value
        .as_choice()
        .and_then(|choice| question.option_index(choice))
        .map(|index| index as f64 / (levels - 1) as f64 * 100.0)
        .unwrap_or(0.0)
}
