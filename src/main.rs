use clap::Parser;
use codeassist::cli::{run, Cli, Outcome};
use codeassist::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(Outcome::Success(output)) => {
            // An empty directory prints nothing
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Ok(Outcome::Failure(message)) => {
            eprintln!("{}", message);
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("Unexpected error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
