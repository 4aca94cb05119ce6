mod cli;
mod infra;
mod quiz;
mod routes;
mod server;

use plan_advisor::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
