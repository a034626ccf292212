use super::super::scoring::ScoreBreakdown;
use super::policy::Verdict;
use super::LearningPath;

pub(crate) fn strengths(scores: &ScoreBreakdown) -> Vec<String> {
    let checks = [
        (
            scores.psychometric.interest >= 70,
            "Strong intrinsic interest in data analysis",
        ),
        (
            scores.psychometric.motivation >= 70,
            "High motivation for analytical work",
        ),
        (
            scores.technical.aptitude >= 70,
            "Solid analytical and logical reasoning",
        ),
        (
            scores.wiscar.cognitive >= 70,
            "Strong problem-solving approach",
        ),
        (scores.wiscar.will >= 70, "Good persistence and follow-through"),
    ];

    collect_matching(checks)
}

pub(crate) fn gaps(scores: &ScoreBreakdown) -> Vec<String> {
    let checks = [
        (
            scores.technical.prerequisites < 60,
            "Statistics and SQL knowledge needs development",
        ),
        (
            scores.wiscar.skill < 50,
            "Technical skills require significant building",
        ),
        (
            scores.psychometric.personality < 60,
            "Work style alignment could be improved",
        ),
        (
            scores.wiscar.real_world < 60,
            "Practical application skills need practice",
        ),
    ];

    collect_matching(checks)
}

fn collect_matching<const N: usize>(checks: [(bool, &str); N]) -> Vec<String> {
    checks
        .into_iter()
        .filter(|(matched, _)| *matched)
        .map(|(_, text)| text.to_string())
        .collect()
}

pub(crate) fn next_steps(verdict: Verdict, scores: &ScoreBreakdown) -> Vec<String> {
    let mut steps: Vec<&str> = Vec::new();

    match verdict {
        Verdict::Positive => {
            steps.push("Enroll in a comprehensive Product Analytics course");
            steps.push("Start building a portfolio with real data projects");
            steps.push("Learn SQL through hands-on practice");
            if scores.technical.prerequisites < 80 {
                steps.push("Strengthen your statistics foundation");
            }
            steps.push("Join product analytics communities and forums");
        }
        Verdict::Conditional => {
            steps.push("Take a foundational course in data analysis");
            steps.push("Practice with free datasets and analytics tools");
            if scores.technical.total < 60 {
                steps.push("Focus on building technical skills first");
            }
            steps.push("Shadow a product analyst or take informational interviews");
            steps.push("Retake this assessment in 3-6 months");
        }
        Verdict::Negative => {
            steps.push("Explore alternative careers that better match your profile");
            steps.push(
                "Consider roles that use some analytical skills but require less technical depth",
            );
            steps.push("Develop foundational skills if you're still interested in analytics");
        }
    }

    steps.into_iter().map(str::to_string).collect()
}

pub(crate) fn alternative_careers(scores: &ScoreBreakdown) -> Vec<String> {
    let mut alternatives = Vec::new();

    if scores.psychometric.interest >= 60 {
        alternatives.push(
            "UX Researcher - Focus on user behavior without heavy technical requirements",
        );
    }

    if scores.psychometric.personality >= 60 {
        alternatives.push("Product Manager - Strategic thinking with some data analysis");
        alternatives.push("Business Analyst - Process improvement and requirements gathering");
    }

    if scores.wiscar.cognitive >= 60 {
        alternatives.push("Strategy Consultant - Problem-solving with business focus");
        alternatives
            .push("Market Research Analyst - Research and analysis in business context");
    }

    alternatives.push("Product Marketing Manager - Customer insights and go-to-market strategy");

    alternatives.into_iter().map(str::to_string).collect()
}

pub(crate) fn learning_path(scores: &ScoreBreakdown) -> LearningPath {
    let mut beginner = vec![
        "SQL Fundamentals",
        "Statistics for Beginners",
        "Introduction to Product Metrics",
    ];
    let intermediate = vec![
        "Advanced SQL",
        "A/B Testing Fundamentals",
        "Data Visualization with Tableau/Looker",
    ];
    let advanced = vec![
        "Advanced Statistics",
        "Machine Learning for Product Analytics",
        "Advanced A/B Testing and Experimentation",
    ];

    if scores.technical.prerequisites < 60 {
        beginner.insert(0, "Basic Statistics and Probability");
    }

    if scores.wiscar.skill < 50 {
        beginner.insert(0, "Excel/Google Sheets for Data Analysis");
    }

    LearningPath {
        beginner: beginner.into_iter().map(str::to_string).collect(),
        intermediate: intermediate.into_iter().map(str::to_string).collect(),
        advanced: advanced.into_iter().map(str::to_string).collect(),
    }
}
