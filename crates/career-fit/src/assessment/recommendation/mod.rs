mod guidance;
mod policy;

pub use policy::Verdict;

use serde::{Deserialize, Serialize};

use super::scoring::ScoreBreakdown;
use policy::decide_verdict;

/// Topics to study, grouped by difficulty tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPath {
    pub beginner: Vec<String>,
    pub intermediate: Vec<String>,
    pub advanced: Vec<String>,
}

/// Career-fit verdict with the evidence and guidance behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub verdict: Verdict,
    pub confidence: u8,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub next_steps: Vec<String>,
    /// Only present for a negative verdict.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_careers: Option<Vec<String>>,
    /// Only present when the verdict is not negative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_path: Option<LearningPath>,
}

pub fn generate_recommendation(scores: &ScoreBreakdown) -> Recommendation {
    let (verdict, confidence) = decide_verdict(scores);

    let (alternative_careers, learning_path) = match verdict {
        Verdict::Negative => (Some(guidance::alternative_careers(scores)), None),
        Verdict::Positive | Verdict::Conditional => (None, Some(guidance::learning_path(scores))),
    };

    Recommendation {
        verdict,
        confidence,
        strengths: guidance::strengths(scores),
        gaps: guidance::gaps(scores),
        next_steps: guidance::next_steps(verdict, scores),
        alternative_careers,
        learning_path,
    }
}
