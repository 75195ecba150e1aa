mod cli;
mod infra;
mod report;
mod routes;
mod server;

use risk_checker::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
