use serde::{Deserialize, Serialize};

use super::super::scoring::ScoreBreakdown;

/// Three-way outcome of the career-fit decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Positive,
    Conditional,
    Negative,
}

impl Verdict {
    pub const fn label(self) -> &'static str {
        match self {
            Verdict::Positive => "yes",
            Verdict::Conditional => "maybe",
            Verdict::Negative => "no",
        }
    }
}

/// Rows are checked in order and the first match wins.
pub(crate) fn decide_verdict(scores: &ScoreBreakdown) -> (Verdict, u8) {
    let overall = scores.overall;
    let psychometric = scores.psychometric.total;
    let technical = scores.technical.total;

    if overall >= 75 && psychometric >= 70 && technical >= 60 {
        (Verdict::Positive, overall.saturating_add(10).min(95))
    } else if overall >= 50 && (psychometric >= 60 || technical >= 60) {
        (Verdict::Conditional, overall.saturating_sub(10).max(50))
    } else {
        (Verdict::Negative, 100u8.saturating_sub(overall).max(20))
    }
}
