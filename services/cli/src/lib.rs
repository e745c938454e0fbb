mod cli;
mod demo;
mod infra;

use donor_drive::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
