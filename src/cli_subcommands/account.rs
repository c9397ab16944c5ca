use std::path::PathBuf;

use clap::Subcommand;

use crate::cli_commands::account::{LoginArgs, WhoamiArgs};
use crate::{AppArg, LimitArg};

#[derive(Subcommand)]
pub(crate) enum AuthCommands {
    /// Log in to a controller
    Login(LoginArgs),
    /// Log out and delete the local profile
    Logout,
    /// Show the logged-in user
    Whoami(WhoamiArgs),
}

#[derive(Subcommand)]
pub(crate) enum KeysCommands {
    /// List SSH keys
    List {
        #[command(flatten)]
        limit: LimitArg,
    },
    /// Upload a public key
    Add {
        /// Public key file (defaults to ~/.ssh/id_rsa.pub)
        path: Option<PathBuf>,
        /// Key id (defaults to the key comment)
        #[arg(long)]
        name: Option<String>,
    },
    /// Remove a key
    Remove { id: String },
}

#[derive(Subcommand)]
pub(crate) enum PermsCommands {
    /// List users with access to the app
    List {
        #[command(flatten)]
        app: AppArg,
        #[command(flatten)]
        limit: LimitArg,
    },
    /// Grant a user permissions, e.g. view,change
    Create {
        #[command(flatten)]
        app: AppArg,
        username: String,
        permissions: String,
    },
    /// Replace a user's permissions
    Update {
        #[command(flatten)]
        app: AppArg,
        username: String,
        permissions: String,
    },
    /// Revoke a user's access
    Delete {
        #[command(flatten)]
        app: AppArg,
        username: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum TokensCommands {
    /// List auth tokens
    List {
        #[command(flatten)]
        limit: LimitArg,
    },
    /// Revoke a token
    Remove {
        id: String,
        #[arg(long, default_value = "")]
        confirm: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum UsersCommands {
    /// List users
    List {
        #[command(flatten)]
        limit: LimitArg,
    },
    /// Enable a user account
    Enable { username: String },
    /// Disable a user account
    Disable { username: String },
}
