use super::{Question, QuestionCategory, QuestionId, QuestionKind, RatingScale, SectionInfo};
use crate::assessment::answers::AnswerValue;

const INTEREST_LABELS: [&str; 5] = ["Not at all", "Slightly", "Moderately", "Very", "Extremely"];

fn scale(labels: [&str; 5]) -> Option<RatingScale> {
    Some(RatingScale {
        min: 1,
        max: 5,
        labels: labels.iter().map(|label| label.to_string()).collect(),
    })
}

fn likert(
    id: &str,
    category: QuestionCategory,
    section: &str,
    prompt: &str,
    labels: [&str; 5],
    weight: f64,
) -> Question {
    Question {
        id: QuestionId::from(id),
        kind: QuestionKind::Likert,
        category,
        section: section.to_string(),
        prompt: prompt.to_string(),
        options: Vec::new(),
        rating_scale: scale(labels),
        correct_answer: None,
        weight: Some(weight),
    }
}

#[allow(clippy::too_many_arguments)]
fn choice(
    id: &str,
    kind: QuestionKind,
    category: QuestionCategory,
    section: &str,
    prompt: &str,
    options: &[&str],
    correct_answer: Option<&str>,
    weight: f64,
) -> Question {
    Question {
        id: QuestionId::from(id),
        kind,
        category,
        section: section.to_string(),
        prompt: prompt.to_string(),
        options: options.iter().map(|option| option.to_string()).collect(),
        rating_scale: None,
        correct_answer: correct_answer.map(|answer| AnswerValue::Choice(answer.to_string())),
        weight: Some(weight),
    }
}

pub(super) fn questions() -> Vec<Question> {
    use QuestionCategory::{Psychometric, Technical, Wiscar};
    use QuestionKind::{MultipleChoice, Scenario, SingleChoice};

    vec![
        likert(
            "psych_interest_1",
            Psychometric,
            "Interest & Motivation",
            "How excited are you about exploring large datasets to find hidden patterns?",
            INTEREST_LABELS,
            1.2,
        ),
        likert(
            "psych_interest_2",
            Psychometric,
            "Interest & Motivation",
            "How interested are you in understanding why users behave the way they do in digital products?",
            INTEREST_LABELS,
            1.3,
        ),
        likert(
            "psych_interest_3",
            Psychometric,
            "Interest & Motivation",
            "How much do you enjoy running experiments and A/B tests to validate hypotheses?",
            INTEREST_LABELS,
            1.1,
        ),
        choice(
            "psych_personality_1",
            MultipleChoice,
            Psychometric,
            "Work Style & Personality",
            "When approaching a new problem, you prefer to:",
            &[
                "Break it down systematically into smaller parts",
                "Dive in and experiment with different approaches",
                "Research what others have done first",
                "Discuss it with team members before starting",
            ],
            None,
            1.0,
        ),
        choice(
            "psych_personality_2",
            SingleChoice,
            Psychometric,
            "Work Style & Personality",
            "In a typical work week, you feel most energized when:",
            &[
                "Working independently on detailed analysis",
                "Collaborating with cross-functional teams",
                "Presenting insights to stakeholders",
                "Learning new tools and techniques",
            ],
            None,
            1.1,
        ),
        choice(
            "tech_logic_1",
            MultipleChoice,
            Technical,
            "Logical Reasoning",
            "If 40% of users who start a free trial convert to paid, and 1000 users start trials in a month, how many paid conversions do you expect?",
            &["200", "300", "400", "600"],
            Some("400"),
            1.2,
        ),
        choice(
            "tech_data_1",
            Scenario,
            Technical,
            "Data Interpretation",
            "You notice that user engagement dropped 20% last week. What would be your first step in investigating this?",
            &[
                "Check if there were any product releases or changes",
                "Segment the data by user demographics",
                "Compare with industry benchmarks",
                "Survey users about their experience",
            ],
            Some("Check if there were any product releases or changes"),
            1.3,
        ),
        choice(
            "tech_stats_1",
            MultipleChoice,
            Technical,
            "Statistics Knowledge",
            "What does a p-value of 0.03 in an A/B test result indicate?",
            &[
                "There is a 3% chance the result is due to random chance",
                "The test has 97% statistical power",
                "3% of users were affected by the change",
                "The effect size is 3%",
            ],
            Some("There is a 3% chance the result is due to random chance"),
            1.1,
        ),
        likert(
            "wiscar_will_1",
            Wiscar,
            "Will & Persistence",
            "How often do you follow through on learning new technical skills, even when they become challenging?",
            ["Rarely", "Sometimes", "Often", "Usually", "Always"],
            1.2,
        ),
        likert(
            "wiscar_interest_1",
            Wiscar,
            "Deep Interest",
            "Rate your excitement about discovering why users abandon a mobile app at specific steps.",
            [
                "Not excited",
                "Slightly excited",
                "Moderately excited",
                "Very excited",
                "Extremely excited",
            ],
            1.3,
        ),
        choice(
            "wiscar_skill_1",
            SingleChoice,
            Wiscar,
            "Current Skills",
            "How would you rate your current SQL skills?",
            &[
                "Never used SQL",
                "Can write basic SELECT statements",
                "Comfortable with JOINs and GROUP BY",
                "Can write complex queries with subqueries",
                "Expert level with optimization and advanced functions",
            ],
            None,
            1.1,
        ),
        choice(
            "wiscar_cognitive_1",
            Scenario,
            Wiscar,
            "Cognitive Readiness",
            "A product team asks you to determine if a new feature increased user retention. The feature was released to 50% of users randomly. How would you approach this?",
            &[
                "Compare retention rates between the two groups",
                "Look at overall retention before and after the release",
                "Survey users about their satisfaction with the feature",
                "Analyze retention patterns by user segments",
            ],
            Some("Compare retention rates between the two groups"),
            1.4,
        ),
        likert(
            "wiscar_learning_1",
            Wiscar,
            "Learning Agility",
            "How comfortable are you with receiving feedback that challenges your analysis approach?",
            [
                "Very uncomfortable",
                "Uncomfortable",
                "Neutral",
                "Comfortable",
                "Very comfortable",
            ],
            1.1,
        ),
        choice(
            "wiscar_realworld_1",
            Scenario,
            Wiscar,
            "Real-World Application",
            "You find that a key product metric is declining, but you're not sure why. The product manager needs an answer by tomorrow. What do you do?",
            &[
                "Provide your best hypothesis with available data",
                "Ask for more time to do thorough analysis",
                "Present multiple possible explanations with confidence levels",
                "Recommend immediate changes to reverse the trend",
            ],
            Some("Present multiple possible explanations with confidence levels"),
            1.2,
        ),
    ]
}

pub(super) fn sections() -> Vec<SectionInfo> {
    [
        (
            "Interest & Motivation",
            "Evaluating your intrinsic motivation and curiosity for product data work",
            3,
        ),
        (
            "Work Style & Personality",
            "Understanding your preferred working style and personality fit",
            2,
        ),
        (
            "Logical Reasoning",
            "Testing your analytical and mathematical reasoning abilities",
            4,
        ),
        (
            "Data Interpretation",
            "Assessing your ability to interpret and act on data insights",
            3,
        ),
        (
            "Statistics Knowledge",
            "Evaluating your understanding of statistical concepts",
            3,
        ),
        (
            "Will & Persistence",
            "Measuring your determination and follow-through",
            2,
        ),
        (
            "Deep Interest",
            "Assessing your genuine curiosity in product analytics",
            2,
        ),
        (
            "Current Skills",
            "Understanding your existing technical capabilities",
            2,
        ),
        (
            "Cognitive Readiness",
            "Testing your analytical thinking and problem-solving approach",
            4,
        ),
        (
            "Learning Agility",
            "Evaluating your openness to learning and growth",
            2,
        ),
        (
            "Real-World Application",
            "Testing how you handle real product analytics challenges",
            3,
        ),
    ]
    .into_iter()
    .map(|(name, description, estimated_minutes)| SectionInfo {
        name: name.to_string(),
        description: description.to_string(),
        estimated_minutes,
    })
    .collect()
}
