use anyhow::Result;

use match_watcher::cli::Command;
use match_watcher::{
    handle_demo, handle_fixtures, handle_import, handle_import_text, handle_report, handle_reset,
    handle_season, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Import { match_id, image } => handle_import(*match_id, image),
        Command::ImportText { match_id, file } => handle_import_text(*match_id, file),
        Command::Demo { match_id } => handle_demo(*match_id),
        Command::Report { match_id } => handle_report(*match_id),
        Command::Season => handle_season(),
        Command::Fixtures { file, image } => handle_fixtures(file, *image),
        Command::Reset { match_id } => handle_reset(match_id.to_owned()),
    }
}
