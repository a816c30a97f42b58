use std::process::ExitCode;

use clap::Parser;

mod cli;
mod headless;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let code = cli::finish(cli::run(cli), &mut std::io::stderr());
    ExitCode::from(code)
}
