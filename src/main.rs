use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

use tree_export::cli::Cli;

fn main() -> ExitCode {
    env_logger::init();

    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // clap renders help to stdout and argument errors (with their
            // --help hint) to stderr.
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    if let Err(err) = tree_export::run(args) {
        eprintln!("tree-export: {err:#}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}
