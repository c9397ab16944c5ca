use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use drycc::console::Console;
use drycc::runner::Runner;

use crate::Commands;

const LOG_ENV: &str = "DRYCC_LOG";

#[derive(Parser)]
#[command(name = "drycc", version)]
#[command(about = "Drycc Workflow command-line client", long_about = None)]
pub(crate) struct Cli {
    /// Profile name, or path to a profile file
    #[arg(short = 'c', long, global = true, default_value = "", hide_default_value = true)]
    config: String,

    /// Log debug output to stderr
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Parse arguments, run the command, and return the process exit code.
pub(crate) fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let runner = Runner::new(cli.config, Console::stdio());
    crate::cli_exec::handle_command(&runner, cli.command)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
