use crate::assessment::answers::Answer;
use crate::assessment::catalog::{Question, QuestionCatalog, QuestionId};
use crate::assessment::scoring::{
    PsychometricScores, ScoreBreakdown, TechnicalScores, WiscarScores,
};

pub(super) fn question(id: &str) -> Question {
    QuestionCatalog::standard()
        .get(&QuestionId::from(id))
        .cloned()
        .unwrap_or_else(|| panic!("standard catalog has {id}"))
}

/// Every rating at the top of its scale, every graded question correct, top SQL level.
pub(super) fn perfect_answers() -> Vec<Answer> {
    vec![
        Answer::rating("psych_interest_1", 5),
        Answer::rating("psych_interest_2", 5),
        Answer::rating("psych_interest_3", 5),
        Answer::choice(
            "psych_personality_1",
            "Break it down systematically into smaller parts",
        ),
        Answer::choice(
            "psych_personality_2",
            "Working independently on detailed analysis",
        ),
        Answer::choice("tech_logic_1", "400"),
        Answer::choice(
            "tech_data_1",
            "Check if there were any product releases or changes",
        ),
        Answer::choice(
            "tech_stats_1",
            "There is a 3% chance the result is due to random chance",
        ),
        Answer::rating("wiscar_will_1", 5),
        Answer::rating("wiscar_interest_1", 5),
        Answer::choice(
            "wiscar_skill_1",
            "Expert level with optimization and advanced functions",
        ),
        Answer::choice(
            "wiscar_cognitive_1",
            "Compare retention rates between the two groups",
        ),
        Answer::rating("wiscar_learning_1", 5),
        Answer::choice(
            "wiscar_realworld_1",
            "Present multiple possible explanations with confidence levels",
        ),
    ]
}

/// Middle-of-the-scale ratings with a mix of right and wrong graded answers.
pub(super) fn mixed_answers() -> Vec<Answer> {
    vec![
        Answer::rating("psych_interest_1", 3),
        Answer::rating("psych_interest_2", 3),
        Answer::rating("psych_interest_3", 3),
        Answer::choice(
            "psych_personality_1",
            "Break it down systematically into smaller parts",
        ),
        Answer::choice("psych_personality_2", "Presenting insights to stakeholders"),
        Answer::choice("tech_logic_1", "400"),
        Answer::choice(
            "tech_data_1",
            "Check if there were any product releases or changes",
        ),
        Answer::choice("tech_stats_1", "The effect size is 3%"),
        Answer::rating("wiscar_will_1", 3),
        Answer::rating("wiscar_interest_1", 3),
        Answer::choice("wiscar_skill_1", "Comfortable with JOINs and GROUP BY"),
        Answer::choice(
            "wiscar_cognitive_1",
            "Survey users about their satisfaction with the feature",
        ),
        Answer::rating("wiscar_learning_1", 3),
        Answer::choice(
            "wiscar_realworld_1",
            "Present multiple possible explanations with confidence levels",
        ),
    ]
}

/// Lowest ratings, every graded answer wrong, no SQL experience.
pub(super) fn weak_answers() -> Vec<Answer> {
    vec![
        Answer::rating("psych_interest_1", 1),
        Answer::rating("psych_interest_2", 1),
        Answer::rating("psych_interest_3", 1),
        Answer::choice(
            "psych_personality_1",
            "Discuss it with team members before starting",
        ),
        Answer::choice(
            "psych_personality_2",
            "Collaborating with cross-functional teams",
        ),
        Answer::choice("tech_logic_1", "200"),
        Answer::choice("tech_data_1", "Compare with industry benchmarks"),
        Answer::choice("tech_stats_1", "The test has 97% statistical power"),
        Answer::rating("wiscar_will_1", 1),
        Answer::rating("wiscar_interest_1", 1),
        Answer::choice("wiscar_skill_1", "Never used SQL"),
        Answer::choice(
            "wiscar_cognitive_1",
            "Look at overall retention before and after the release",
        ),
        Answer::rating("wiscar_learning_1", 1),
        Answer::choice(
            "wiscar_realworld_1",
            "Recommend immediate changes to reverse the trend",
        ),
    ]
}

/// Breakdown with every dimension, group total and overall set to `score`.
pub(super) fn uniform(score: u8) -> ScoreBreakdown {
    ScoreBreakdown {
        psychometric: PsychometricScores {
            interest: score,
            personality: score,
            motivation: score,
            total: score,
        },
        technical: TechnicalScores {
            aptitude: score,
            prerequisites: score,
            domain: score,
            total: score,
        },
        wiscar: WiscarScores {
            will: score,
            interest: score,
            skill: score,
            cognitive: score,
            ability: score,
            real_world: score,
            total: score,
        },
        overall: score,
    }
}
