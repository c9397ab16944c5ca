use clap::Subcommand;

use crate::cli_commands::apps::LogsArgs;
use crate::cli_commands::processes::{ExecArgs, ScaleArgs};
use crate::{AppArg, LimitArg};

#[derive(Subcommand)]
pub(crate) enum PsCommands {
    /// List pods
    List {
        #[command(flatten)]
        app: AppArg,
        /// Only pods of this process type
        #[arg(long)]
        ptype: Option<String>,
        #[command(flatten)]
        limit: LimitArg,
    },
    /// Show logs of one pod
    Logs {
        pod: String,
        #[command(flatten)]
        logs: LogsArgs,
    },
    /// Run a command in a pod
    Exec(ExecArgs),
    /// Describe a pod
    Describe {
        #[command(flatten)]
        app: AppArg,
        pod: String,
    },
    /// Delete pods
    Delete {
        #[command(flatten)]
        app: AppArg,
        #[arg(required = true)]
        pods: Vec<String>,
    },
}

#[derive(Subcommand)]
pub(crate) enum PtsCommands {
    /// List process types
    List {
        #[command(flatten)]
        app: AppArg,
        #[command(flatten)]
        limit: LimitArg,
    },
    /// Describe a process type
    Describe {
        #[command(flatten)]
        app: AppArg,
        ptype: String,
    },
    /// Restart process types (all of them when none are given)
    Restart {
        #[command(flatten)]
        app: AppArg,
        ptypes: Vec<String>,
        #[arg(long, default_value = "")]
        confirm: String,
    },
    /// Scale process types, e.g. web=2
    Scale(ScaleArgs),
    /// Remove process types that are no longer in the Procfile
    Clean {
        #[command(flatten)]
        app: AppArg,
        #[arg(required = true)]
        ptypes: Vec<String>,
    },
}
