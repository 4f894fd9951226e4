mod commands;
mod terminal;

use std::process::ExitCode;

use cidrfind_common::config::Config;
use commands::CommandLine;
use terminal::{logging, print};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet, commands.verbose);

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
        jobs: commands.jobs,
    };

    print::banner(cfg.no_banner, cfg.quiet);
    print::header("searching networks", cfg.quiet);

    match commands::lookup::lookup(&commands, &cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
