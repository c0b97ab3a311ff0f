mod cli;
mod console;
mod infra;
mod routes;
mod server;

use scam_score::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
