use clap::Parser;
use geoid_cli::{logging, run, Cli};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run(&cli, &mut out) {
        Ok(outcome) => ExitCode::from(outcome.code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
