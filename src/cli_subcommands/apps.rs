use clap::Subcommand;

use crate::cli_commands::apps::{DestroyArgs, LogsArgs, PullArgs, RunArgs};
use crate::{AppArg, LimitArg};

#[derive(Subcommand)]
pub(crate) enum AppsCommands {
    /// Create an application
    Create {
        /// Application name (generated when omitted)
        id: Option<String>,
        /// Name of the git remote to add
        #[arg(short = 'r', long, default_value = "drycc")]
        remote: String,
        /// Do not add a git remote
        #[arg(long)]
        no_remote: bool,
    },
    /// List applications
    List {
        #[command(flatten)]
        limit: LimitArg,
    },
    /// Show application details
    Info {
        #[command(flatten)]
        app: AppArg,
    },
    /// Open the application in a browser
    Open {
        #[command(flatten)]
        app: AppArg,
    },
    /// Show application logs
    Logs(LogsArgs),
    /// Run a one-off command
    Run(RunArgs),
    /// Destroy an application
    Destroy(DestroyArgs),
    /// Transfer an application to another user
    Transfer {
        #[command(flatten)]
        app: AppArg,
        owner: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum BuildsCommands {
    /// Show the latest build
    Info {
        #[command(flatten)]
        app: AppArg,
    },
    /// Deploy an image as a new build
    Create(PullArgs),
}

#[derive(Subcommand)]
pub(crate) enum ReleasesCommands {
    /// List releases
    List {
        #[command(flatten)]
        app: AppArg,
        #[command(flatten)]
        limit: LimitArg,
    },
    /// Show a release, e.g. v2
    Info {
        #[command(flatten)]
        app: AppArg,
        version: String,
    },
    /// Roll back to a release (the previous one by default)
    Rollback {
        #[command(flatten)]
        app: AppArg,
        version: Option<String>,
        /// Only roll back these process types
        #[arg(long, value_delimiter = ',')]
        ptypes: Vec<String>,
    },
}
