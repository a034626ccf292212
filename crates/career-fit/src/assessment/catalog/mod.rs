//! Immutable question catalog shared by the scoring engine and answer intake.

mod standard;

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use super::answers::{Answer, AnswerError, AnswerValue};

/// Identifier wrapper for catalog questions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// How a question is presented and answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Likert,
    MultipleChoice,
    SingleChoice,
    Scenario,
}

impl QuestionKind {
    pub const fn is_rating(self) -> bool {
        matches!(self, QuestionKind::Likert)
    }
}

/// Score group a question contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Psychometric,
    Technical,
    Wiscar,
}

impl QuestionCategory {
    pub const fn label(self) -> &'static str {
        match self {
            QuestionCategory::Psychometric => "Psychometric Fit",
            QuestionCategory::Technical => "Technical Readiness",
            QuestionCategory::Wiscar => "WISCAR Profile",
        }
    }
}

/// Bounds and ordered point labels of a rating question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingScale {
    pub min: u8,
    pub max: u8,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl RatingScale {
    pub fn contains(&self, value: u8) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for RatingScale {
    fn default() -> Self {
        Self {
            min: 1,
            max: 5,
            labels: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub kind: QuestionKind,
    pub category: QuestionCategory,
    pub section: String,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_scale: Option<RatingScale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<AnswerValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Question {
    pub fn weight(&self) -> f64 {
        self.weight.unwrap_or(1.0)
    }

    /// Scale used to normalize ratings, falling back to 1..5.
    pub fn scale(&self) -> RatingScale {
        self.rating_scale.clone().unwrap_or_default()
    }

    pub fn option_index(&self, choice: &str) -> Option<usize> {
        self.options.iter().position(|option| option == choice)
    }
}

/// Descriptive metadata for a catalog section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionInfo {
    pub name: String,
    pub description: String,
    pub estimated_minutes: u8,
}

/// Read-only lookup table of questions, keyed by identifier and kept in declaration order.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
    index: HashMap<QuestionId, usize>,
    sections: Vec<SectionInfo>,
}

/// On-disk catalog: a bare question array, or questions with section metadata.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Questions(Vec<Question>),
    Document {
        questions: Vec<Question>,
        #[serde(default)]
        sections: Vec<SectionInfo>,
    },
}

static STANDARD_CATALOG: OnceLock<Arc<QuestionCatalog>> = OnceLock::new();

impl QuestionCatalog {
    /// The built-in Product Data Analysis questionnaire.
    pub fn standard() -> Arc<QuestionCatalog> {
        STANDARD_CATALOG
            .get_or_init(|| {
                let questions = standard::questions();
                let index = questions
                    .iter()
                    .enumerate()
                    .map(|(position, question)| (question.id.clone(), position))
                    .collect();
                Arc::new(QuestionCatalog {
                    questions,
                    index,
                    sections: standard::sections(),
                })
            })
            .clone()
    }

    pub fn from_questions(questions: Vec<Question>) -> Result<Self, CatalogError> {
        Self::with_sections(questions, Vec::new())
    }

    pub fn with_sections(
        questions: Vec<Question>,
        sections: Vec<SectionInfo>,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(questions.len());

        for (position, question) in questions.iter().enumerate() {
            if !question.kind.is_rating() && question.options.is_empty() {
                return Err(CatalogError::MissingOptions(question.id.clone()));
            }
            if index.insert(question.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateQuestion(question.id.clone()));
            }
        }

        Ok(Self {
            questions,
            index,
            sections,
        })
    }

    /// Load a catalog from JSON: either an array of questions or an object with
    /// `questions` and optional `sections`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        match serde_json::from_reader(reader)? {
            CatalogFile::Questions(questions) => Self::from_questions(questions),
            CatalogFile::Document {
                questions,
                sections,
            } => Self::with_sections(questions, sections),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.index.get(id).map(|&position| &self.questions[position])
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Distinct section names in the order they first appear.
    pub fn sections(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for question in &self.questions {
            if !names.contains(&question.section.as_str()) {
                names.push(&question.section);
            }
        }
        names
    }

    pub fn section_questions<'a>(&'a self, section: &'a str) -> impl Iterator<Item = &'a Question> {
        self.questions
            .iter()
            .filter(move |question| question.section == section)
    }

    pub fn section_info(&self, section: &str) -> Option<&SectionInfo> {
        self.sections.iter().find(|info| info.name == section)
    }

    /// Check an answer against the question it references.
    pub fn validate_answer(&self, answer: &Answer) -> Result<(), AnswerError> {
        let question = self
            .get(&answer.question_id)
            .ok_or_else(|| AnswerError::UnknownQuestion(answer.question_id.clone()))?;

        match (&answer.value, question.kind.is_rating()) {
            (AnswerValue::Rating(value), true) => {
                let scale = question.scale();
                if scale.contains(*value) {
                    Ok(())
                } else {
                    Err(AnswerError::RatingOutOfRange {
                        question_id: question.id.clone(),
                        value: *value,
                        min: scale.min,
                        max: scale.max,
                    })
                }
            }
            (AnswerValue::Choice(choice), false) => {
                if question.option_index(choice).is_some() {
                    Ok(())
                } else {
                    Err(AnswerError::UnknownOption {
                        question_id: question.id.clone(),
                        choice: choice.clone(),
                    })
                }
            }
            (_, true) => Err(AnswerError::ExpectedRating(question.id.clone())),
            (_, false) => Err(AnswerError::ExpectedChoice(question.id.clone())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read question catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid question catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("question '{0}' is declared more than once")]
    DuplicateQuestion(QuestionId),
    #[error("choice question '{0}' declares no options")]
    MissingOptions(QuestionId),
}
