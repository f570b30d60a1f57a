use crate::board::{run_board, run_status, BoardArgs, StatusArgs};
use clap::{Parser, Subcommand};
use recruit_pipeline::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Recruitment Pipeline Board",
    about = "Bucket candidate applications into pipeline stages from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the pipeline board for an application export
    Board(BoardArgs),
    /// Show how upstream status labels are normalized and staged
    Status(StatusArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Board(args) => run_board(args),
        Command::Status(args) => run_status(args),
    }
}
