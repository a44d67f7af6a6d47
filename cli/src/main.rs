mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, DbCommands, show};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging();
    print::initialize();

    let result: anyhow::Result<()> = match commands.command {
        Commands::Db {
            command: DbCommands::Show(args),
        } => show::show(args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logging::report_fatal(&e);
            ExitCode::FAILURE
        }
    }
}
