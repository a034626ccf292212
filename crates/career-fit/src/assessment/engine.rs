use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::answers::Answer;
use super::catalog::QuestionCatalog;
use super::insights::generate_personalized_insights;
use super::recommendation::{generate_recommendation, Recommendation};
use super::scoring::{compute_scores, ScoreBreakdown};

/// Stateless evaluator that applies the fixed rubric to a completed answer set.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    catalog: Arc<QuestionCatalog>,
}

impl AssessmentEngine {
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self { catalog }
    }

    /// Engine backed by the built-in questionnaire.
    pub fn standard() -> Self {
        Self::new(QuestionCatalog::standard())
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn compute_scores(&self, answers: &[Answer]) -> ScoreBreakdown {
        compute_scores(&self.catalog, answers)
    }

    pub fn generate_recommendation(&self, scores: &ScoreBreakdown) -> Recommendation {
        generate_recommendation(scores)
    }

    pub fn generate_personalized_insights(
        &self,
        scores: &ScoreBreakdown,
        recommendation: &Recommendation,
    ) -> String {
        generate_personalized_insights(scores, recommendation)
    }

    pub fn generate_result(&self, answers: &[Answer], completion_time: Duration) -> AssessmentResult {
        let scores = self.compute_scores(answers);
        let recommendation = self.generate_recommendation(&scores);
        let personalized_insights = self.generate_personalized_insights(&scores, &recommendation);

        debug!(
            answered = answers.len(),
            overall = scores.overall,
            verdict = recommendation.verdict.label(),
            confidence = recommendation.confidence,
            "assessment scored"
        );

        AssessmentResult {
            scores,
            recommendation,
            completion_time,
            personalized_insights,
        }
    }
}

/// Everything handed back to the caller once an assessment is scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub scores: ScoreBreakdown,
    pub recommendation: Recommendation,
    #[serde(rename = "completion_time_ms", with = "duration_millis")]
    pub completion_time: Duration,
    pub personalized_insights: String,
}

mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis = u64::try_from(value.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
