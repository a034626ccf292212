//! Product Data Analysis career-fit assessment: catalog, answer intake, scoring,
//! recommendation, and narrative insights.

pub mod answers;
pub mod catalog;
mod engine;
mod insights;
pub mod recommendation;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use answers::{Answer, AnswerError, AnswerSheet, AnswerValue};
pub use catalog::{
    CatalogError, Question, QuestionCatalog, QuestionCategory, QuestionId, QuestionKind,
    RatingScale, SectionInfo,
};
pub use engine::{AssessmentEngine, AssessmentResult};
pub use insights::generate_personalized_insights;
pub use recommendation::{generate_recommendation, LearningPath, Recommendation, Verdict};
pub use scoring::{
    compute_scores, PsychometricScores, ScoreBreakdown, TechnicalScores, WiscarScores,
};

use std::time::Duration;

/// Score, recommend, and narrate an answer set against the built-in catalog.
pub fn generate_result(answers: &[Answer], completion_time: Duration) -> AssessmentResult {
    AssessmentEngine::standard().generate_result(answers, completion_time)
}
