//! Answers collected from the questionnaire and the sheet that deduplicates them.

pub mod import;

use serde::{Deserialize, Serialize};

use super::catalog::QuestionId;

/// Value supplied for a question: a point on a rating scale or a selected option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Rating(u8),
    Choice(String),
}

impl AnswerValue {
    /// Numeric reading of the value; choice text is parsed when it holds a number.
    pub fn as_rating(&self) -> Option<f64> {
        match self {
            AnswerValue::Rating(value) => Some(f64::from(*value)),
            AnswerValue::Choice(text) => text.trim().parse::<f64>().ok(),
        }
    }

    pub fn as_choice(&self) -> Option<&str> {
        match self {
            AnswerValue::Choice(text) => Some(text),
            AnswerValue::Rating(_) => None,
        }
    }
}

impl std::fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerValue::Rating(value) => write!(f, "{value}"),
            AnswerValue::Choice(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: QuestionId,
    pub value: AnswerValue,
}

impl Answer {
    pub fn rating(question_id: impl Into<String>, value: u8) -> Self {
        Self {
            question_id: QuestionId(question_id.into()),
            value: AnswerValue::Rating(value),
        }
    }

    pub fn choice(question_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            question_id: QuestionId(question_id.into()),
            value: AnswerValue::Choice(value.into()),
        }
    }
}

/// Ordered answers holding at most one entry per question.
///
/// Recording an answer for a question that already has one drops the earlier entry and
/// appends the new one, so the sheet order reflects the latest edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    answers: Vec<Answer>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, answer: Answer) {
        self.answers
            .retain(|existing| existing.question_id != answer.question_id);
        self.answers.push(answer);
    }

    pub fn get(&self, question_id: &QuestionId) -> Option<&AnswerValue> {
        self.answers
            .iter()
            .find(|answer| &answer.question_id == question_id)
            .map(|answer| &answer.value)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Answer> {
        self.answers.iter()
    }

    pub fn as_slice(&self) -> &[Answer] {
        &self.answers
    }

    pub fn into_answers(self) -> Vec<Answer> {
        self.answers
    }
}

impl FromIterator<Answer> for AnswerSheet {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        let mut sheet = AnswerSheet::new();
        for answer in iter {
            sheet.record(answer);
        }
        sheet
    }
}

impl<'a> IntoIterator for &'a AnswerSheet {
    type Item = &'a Answer;
    type IntoIter = std::slice::Iter<'a, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.answers.iter()
    }
}

/// Reasons an answer does not fit the question it references.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("unknown question '{0}'")]
    UnknownQuestion(QuestionId),
    #[error("rating {value} for '{question_id}' is outside {min}..={max}")]
    RatingOutOfRange {
        question_id: QuestionId,
        value: u8,
        min: u8,
        max: u8,
    },
    #[error("'{choice}' is not an option for '{question_id}'")]
    UnknownOption {
        question_id: QuestionId,
        choice: String,
    },
    #[error("question '{0}' expects a numeric rating")]
    ExpectedRating(QuestionId),
    #[error("question '{0}' expects one of its listed options")]
    ExpectedChoice(QuestionId),
}
