mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use career_fit::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
