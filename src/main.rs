//! USB HID relay board CLI
//!
//! Switches every attached relay board on, off, or toggles them.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::warn;

use hidrelay::{execute, HidapiTransport, Request, RunReport, ThreadSleep};

// CLI definitions
mod cli;
use cli::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayVersion => {
            print!("{}", e.render());
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            // Usage and parse errors go to stderr and never touch the hardware
            eprint!("{}", e.render());
            return ExitCode::FAILURE;
        }
    };

    setup_logging(cli.verbose);

    match run(&cli) {
        Ok(report) => {
            let failed = report.failures().count();
            if failed > 0 {
                warn!("{} of {} relay write(s) failed", failed, report.outcomes.len());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<RunReport> {
    let config = cli.config();
    if config.verbose {
        println!("verbose flag is set");
    }

    let request = cli.request();
    let step = match request {
        Request::List => "listing relay boards".to_string(),
        Request::Apply(command) => format!("switching relay boards {command}"),
    };

    execute(HidapiTransport::new(), ThreadSleep, &config, request).context(step)
}
