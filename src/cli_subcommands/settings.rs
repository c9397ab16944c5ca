use clap::Subcommand;

use crate::{AppArg, LimitArg};

/// Info, enable and disable for one app setting.
#[derive(Subcommand)]
pub(crate) enum ToggleCommands {
    /// Show the setting
    Info {
        #[command(flatten)]
        app: AppArg,
    },
    /// Turn the setting on
    Enable {
        #[command(flatten)]
        app: AppArg,
    },
    /// Turn the setting off
    Disable {
        #[command(flatten)]
        app: AppArg,
    },
}

#[derive(Subcommand)]
pub(crate) enum EventsCommands {
    /// List events of a process type or a pod
    List {
        #[command(flatten)]
        app: AppArg,
        #[arg(long, conflicts_with = "pod")]
        ptype: Option<String>,
        #[arg(long)]
        pod: Option<String>,
        #[command(flatten)]
        limit: LimitArg,
    },
}

#[derive(Subcommand)]
pub(crate) enum GitCommands {
    /// Add a git remote for the app
    Remote {
        #[command(flatten)]
        app: AppArg,
        #[arg(short = 'r', long, default_value = "drycc")]
        remote: String,
        /// Replace a remote that points elsewhere
        #[arg(short = 'f', long)]
        force: bool,
    },
    /// Remove the app's git remotes
    Remove {
        #[command(flatten)]
        app: AppArg,
    },
}
