use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::AppArg;

/// Either a process type or a config group; neither means `global`.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct TargetArgs {
    #[arg(long)]
    pub(crate) ptype: Option<String>,
    #[arg(long)]
    pub(crate) group: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show environment variables
    Info {
        #[command(flatten)]
        app: AppArg,
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Set environment variables as KEY=value
    Set {
        #[command(flatten)]
        app: AppArg,
        #[arg(required = true)]
        pairs: Vec<String>,
        #[command(flatten)]
        target: TargetArgs,
        #[arg(long, default_value = "")]
        confirm: String,
    },
    /// Remove environment variables
    Unset {
        #[command(flatten)]
        app: AppArg,
        #[arg(required = true)]
        keys: Vec<String>,
        #[command(flatten)]
        target: TargetArgs,
        #[arg(long, default_value = "")]
        confirm: String,
    },
    /// Write environment variables to an env file
    Pull {
        #[command(flatten)]
        app: AppArg,
        #[arg(short = 'o', long, default_value = ".env")]
        output: PathBuf,
        #[command(flatten)]
        target: TargetArgs,
        /// Replace values already in the file
        #[arg(long)]
        overwrite: bool,
    },
    /// Set environment variables from an env file
    Push {
        #[command(flatten)]
        app: AppArg,
        #[arg(short = 'p', long, default_value = ".env")]
        path: PathBuf,
        #[command(flatten)]
        target: TargetArgs,
        #[arg(long, default_value = "")]
        confirm: String,
    },
    /// Attach a config group to a process type
    Attach {
        #[command(flatten)]
        app: AppArg,
        ptype: String,
        group: String,
    },
    /// Detach a config group from a process type
    Detach {
        #[command(flatten)]
        app: AppArg,
        ptype: String,
        group: String,
    },
}
