use crate::infra::{engine_for, CatalogView};
use career_fit::assessment::answers::import;
use career_fit::config::AppConfig;
use career_fit::error::AppError;
use career_fit::telemetry;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to the answers file (`.csv` with question_id,value columns, otherwise JSON)
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Time spent completing the questionnaire, in milliseconds
    #[arg(long, default_value_t = 0)]
    pub(crate) completion_ms: u64,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let catalog = config.assessment.catalog()?;
    let sheet = import::from_path(&args.answers, &catalog)?;
    for answer in sheet.iter() {
        catalog.validate_answer(answer)?;
    }

    let engine = engine_for(catalog);
    let result = engine.generate_result(
        sheet.as_slice(),
        Duration::from_millis(args.completion_ms),
    );
    info!(
        path = %args.answers.display(),
        answered = sheet.len(),
        overall = result.scores.overall,
        "scored answers file"
    );

    write_json(&result)
}

pub(crate) fn run_questions() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = config.assessment.catalog()?;
    write_json(&CatalogView::from_catalog(&catalog))
}

fn write_json<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
