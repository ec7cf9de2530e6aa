mod config;
mod logging;

use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use wordfreq_engine::run;
use wordfreq_logging::{level_for_verbosity, wordfreq_debug};

use crate::config::{resolve, CmdOptions};
use crate::logging::LogDestination;

fn main() -> ExitCode {
    let options = CmdOptions::parse();

    let destination = match &options.log_file {
        Some(path) => LogDestination::Both(path.clone()),
        None => LogDestination::Terminal,
    };
    logging::initialize(destination, level_for_verbosity(options.verbose));

    match try_main(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(options: &CmdOptions) -> anyhow::Result<()> {
    let config = resolve(options)?;
    wordfreq_debug!("Resolved run config: {:?}", config);

    let mut out = BufWriter::new(io::stdout().lock());
    run(&config, &mut out)?;
    Ok(())
}
