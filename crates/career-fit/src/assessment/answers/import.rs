//! Answer files produced outside the questionnaire (CSV exports or JSON dumps).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use super::{Answer, AnswerSheet, AnswerValue};
use crate::assessment::catalog::{QuestionCatalog, QuestionId};

#[derive(Debug, Deserialize)]
struct AnswerRow {
    question_id: String,
    value: String,
}

/// Read `question_id,value` rows, coercing each value by the question's kind.
pub fn from_csv_reader<R: Read>(
    reader: R,
    catalog: &QuestionCatalog,
) -> Result<AnswerSheet, AnswerImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut sheet = AnswerSheet::new();

    for row in csv_reader.deserialize::<AnswerRow>() {
        let row = row?;
        let answer = coerce(
            catalog,
            Answer {
                question_id: QuestionId(row.question_id),
                value: AnswerValue::Choice(row.value),
            },
        )?;
        sheet.record(answer);
    }

    Ok(sheet)
}

/// Read a JSON array of answers, coercing each value by the question's kind.
pub fn from_json_reader<R: Read>(
    reader: R,
    catalog: &QuestionCatalog,
) -> Result<AnswerSheet, AnswerImportError> {
    let answers: Vec<Answer> = serde_json::from_reader(reader)?;

    answers
        .into_iter()
        .map(|answer| coerce(catalog, answer))
        .collect()
}

/// Numeric text becomes a rating on rating questions; ratings become text on choice questions.
fn coerce(catalog: &QuestionCatalog, answer: Answer) -> Result<Answer, AnswerImportError> {
    let Answer { question_id, value } = answer;
    let question = catalog
        .get(&question_id)
        .ok_or_else(|| AnswerImportError::UnknownQuestion(question_id.clone()))?;

    let value = match (question.kind.is_rating(), value) {
        (true, AnswerValue::Choice(raw)) => {
            let rating = raw
                .trim()
                .parse::<u8>()
                .map_err(|_| AnswerImportError::InvalidRating {
                    question_id: question_id.clone(),
                    raw: raw.clone(),
                })?;
            AnswerValue::Rating(rating)
        }
        (false, AnswerValue::Rating(rating)) => AnswerValue::Choice(rating.to_string()),
        (_, value) => value,
    };

    Ok(Answer { question_id, value })
}

/// Load answers from disk, picking the format from the file extension (`.csv` or JSON).
pub fn from_path(
    path: impl AsRef<Path>,
    catalog: &QuestionCatalog,
) -> Result<AnswerSheet, AnswerImportError> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);

    let is_csv = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        from_csv_reader(reader, catalog)
    } else {
        from_json_reader(reader, catalog)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnswerImportError {
    #[error("failed to read answers: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid answer CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid answer JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("answer references unknown question '{0}'")]
    UnknownQuestion(QuestionId),
    #[error("'{raw}' is not a valid rating for '{question_id}'")]
    InvalidRating { question_id: QuestionId, raw: String },
}
