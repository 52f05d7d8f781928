mod cli;
mod demo;
mod menu;

use maintdesk::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
