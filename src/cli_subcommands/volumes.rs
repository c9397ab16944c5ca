use clap::Subcommand;

use crate::{AppArg, LimitArg};

#[derive(Subcommand)]
pub(crate) enum VolumesCommands {
    /// Create a volume, e.g. `volumes add data 2G`
    Add {
        #[command(flatten)]
        app: AppArg,
        name: String,
        size: String,
        /// Volume type, e.g. csi or nfs
        #[arg(long = "type")]
        kind: Option<String>,
        /// Type parameters as key=value
        #[arg(long = "parameter")]
        parameters: Vec<String>,
    },
    /// Grow a volume
    Expand {
        #[command(flatten)]
        app: AppArg,
        name: String,
        size: String,
    },
    /// List volumes
    List {
        #[command(flatten)]
        app: AppArg,
        #[command(flatten)]
        limit: LimitArg,
    },
    /// Show a volume
    Info {
        #[command(flatten)]
        app: AppArg,
        name: String,
    },
    /// Delete a volume
    Remove {
        #[command(flatten)]
        app: AppArg,
        name: String,
    },
    /// Mount a volume as ptype=/path
    Mount {
        #[command(flatten)]
        app: AppArg,
        name: String,
        #[arg(required = true)]
        pairs: Vec<String>,
    },
    /// Unmount a volume from process types
    Unmount {
        #[command(flatten)]
        app: AppArg,
        name: String,
        #[arg(required = true)]
        ptypes: Vec<String>,
    },
    /// Browse files on a volume
    Client {
        #[command(subcommand)]
        command: VolumesClientCommands,
    },
    /// Serve a volume over WebDAV until interrupted
    Serve {
        #[command(flatten)]
        app: AppArg,
        name: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum VolumesClientCommands {
    /// List files under vol://<volume>/<path>
    Ls {
        #[command(flatten)]
        app: AppArg,
        target: String,
    },
    /// Copy a file to or from a volume
    Cp {
        #[command(flatten)]
        app: AppArg,
        src: String,
        dst: String,
    },
    /// Remove a file from a volume
    Rm {
        #[command(flatten)]
        app: AppArg,
        target: String,
    },
}
