mod board;
mod cli;
mod infra;

use recruit_pipeline::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
