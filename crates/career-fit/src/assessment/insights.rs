use super::recommendation::{Recommendation, Verdict};
use super::scoring::ScoreBreakdown;

/// Narrative summary assembled from verdict-specific and score-specific sentences.
pub fn generate_personalized_insights(
    scores: &ScoreBreakdown,
    recommendation: &Recommendation,
) -> String {
    let mut insights = Vec::new();

    match recommendation.verdict {
        Verdict::Positive => {
            insights.push(format!(
                "You show strong potential for Product Data Analysis with an overall fit of {}%.",
                scores.overall
            ));

            if scores.psychometric.total > scores.technical.total {
                insights.push(
                    "Your mindset and interests are well-aligned, but focus on building technical skills."
                        .to_string(),
                );
            } else {
                insights.push(
                    "You have good technical aptitude - developing domain expertise will accelerate your growth."
                        .to_string(),
                );
            }
        }
        Verdict::Conditional => {
            insights.push(format!(
                "You have {}% alignment with Product Data Analysis. With focused effort, you could succeed in this field.",
                scores.overall
            ));

            if scores.wiscar.will >= 70 {
                insights.push(
                    "Your persistence and determination are strong assets for overcoming skill gaps."
                        .to_string(),
                );
            }
        }
        Verdict::Negative => {
            insights.push(
                "Based on your assessment, Product Data Analysis may not be the best fit for your current interests and skills."
                    .to_string(),
            );
            insights.push(
                "Consider exploring the alternative career paths that better match your strengths."
                    .to_string(),
            );
        }
    }

    if scores.wiscar.interest >= 80 {
        insights.push(
            "Your high interest level suggests you'd find genuine satisfaction in analytical work."
                .to_string(),
        );
    }

    if scores.technical.total >= 80 {
        insights.push(
            "Your strong technical foundation gives you a significant advantage in the field."
                .to_string(),
        );
    }

    insights.join(" ")
}
