use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use prunedir::{report, run, RunConfig};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Remove directories with a given name, optionally throughout a directory tree",
    long_about = None
)]
struct Args {
    /// Root directory to search (wildcards are expanded)
    #[arg(long, short)]
    directory: Option<String>,

    /// Exact name of the directories to remove
    #[arg(long, short, visible_alias = "regex")]
    pattern: Option<String>,

    /// Also search inside directories that do not match
    #[arg(long, short)]
    recursive: bool,

    /// Show how much space each removed directory used
    #[arg(long, short)]
    sizes: bool,

    /// Print debug information about the walk
    #[arg(long, short)]
    verbose: bool,
}

fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("Failed to build log filter")?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .with(filter)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let outcome = RunConfig::new(
        args.directory.as_deref(),
        args.pattern.as_deref(),
        args.recursive,
    )
    .map(|config| config.with_sizes(args.sizes))
    .and_then(|config| {
        run(&config, |removal| {
            println!(
                "{} {}",
                report::REMOVED_PREFIX.green(),
                report::removal_detail(removal)
            );
        })
    });

    match outcome {
        Ok(summary) => {
            println!("{}", report::summary_line(&summary).bold());
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            if std::io::stderr().is_terminal() {
                eprintln!("{}", err.to_string().red());
            } else {
                eprintln!("{}", err);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
