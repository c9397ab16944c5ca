use std::path::PathBuf;

use clap::Args;

use drycc::cmd::apps::DEFAULT_RUN_TIMEOUT;
use drycc::stream::LogOptions;

use super::AppArg;

#[derive(Args)]
pub(crate) struct DestroyArgs {
    #[command(flatten)]
    pub(crate) app: AppArg,
    /// Skip the prompt by passing the application name
    #[arg(long, default_value = "")]
    pub(crate) confirm: String,
}

#[derive(Args)]
pub(crate) struct RunArgs {
    #[command(flatten)]
    pub(crate) app: AppArg,
    /// Seconds the command may run on the server
    #[arg(long, default_value_t = DEFAULT_RUN_TIMEOUT)]
    pub(crate) timeout: u64,
    /// Seconds the run record is kept
    #[arg(long, default_value_t = DEFAULT_RUN_TIMEOUT)]
    pub(crate) expires: u64,
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub(crate) command: Vec<String>,
}

#[derive(Args)]
pub(crate) struct LogsArgs {
    #[command(flatten)]
    pub(crate) app: AppArg,
    /// Number of lines to show
    #[arg(short = 'n', long, default_value_t = 300)]
    pub(crate) lines: u32,
    /// Keep streaming new lines
    #[arg(short = 'f', long)]
    pub(crate) follow: bool,
    /// Seconds before a followed stream is closed
    #[arg(long, default_value_t = 300)]
    pub(crate) timeout: u64,
    #[arg(long)]
    pub(crate) ptype: Option<String>,
    #[arg(long)]
    pub(crate) container: Option<String>,
}

impl LogsArgs {
    pub(crate) fn options(&self) -> LogOptions {
        LogOptions {
            lines: self.lines,
            follow: self.follow,
            timeout: self.timeout,
            ptype: self.ptype.clone(),
            pod: None,
            container: self.container.clone(),
        }
    }
}

#[derive(Args)]
pub(crate) struct PullArgs {
    #[command(flatten)]
    pub(crate) app: AppArg,
    /// Container image to deploy
    pub(crate) image: String,
    #[arg(long)]
    pub(crate) stack: Option<String>,
    /// Procfile describing the process types
    #[arg(long = "procfile-path")]
    pub(crate) procfile_path: Option<PathBuf>,
    #[arg(long, default_value = "")]
    pub(crate) confirm: String,
}
