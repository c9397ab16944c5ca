use std::path::PathBuf;

use clap::Subcommand;

use crate::{AppArg, LimitArg};

#[derive(Subcommand)]
pub(crate) enum DomainsCommands {
    /// List domains
    List {
        #[command(flatten)]
        app: AppArg,
        #[command(flatten)]
        limit: LimitArg,
    },
    /// Add a domain; bare names are placed under the controller's domain
    Add {
        #[command(flatten)]
        app: AppArg,
        domain: String,
        #[arg(long, default_value = "web")]
        ptype: String,
    },
    /// Remove a domain
    Remove {
        #[command(flatten)]
        app: AppArg,
        domain: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum CertsCommands {
    /// List certificates
    List {
        #[command(flatten)]
        app: AppArg,
        #[command(flatten)]
        limit: LimitArg,
    },
    /// Upload a certificate and its private key
    Add {
        #[command(flatten)]
        app: AppArg,
        name: String,
        cert: PathBuf,
        key: PathBuf,
    },
    /// Remove a certificate
    Remove {
        #[command(flatten)]
        app: AppArg,
        name: String,
    },
    /// Show a certificate
    Info {
        #[command(flatten)]
        app: AppArg,
        name: String,
    },
    /// Attach a certificate to a domain
    Attach {
        #[command(flatten)]
        app: AppArg,
        name: String,
        domain: String,
    },
    /// Detach a certificate from a domain
    Detach {
        #[command(flatten)]
        app: AppArg,
        name: String,
        domain: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum GatewaysCommands {
    /// List gateways
    List {
        #[command(flatten)]
        app: AppArg,
        #[command(flatten)]
        limit: LimitArg,
    },
    /// Add a listener to a gateway
    Add {
        #[command(flatten)]
        app: AppArg,
        name: String,
        #[arg(long)]
        port: u16,
        #[arg(long, default_value = "HTTP")]
        protocol: String,
    },
    /// Remove a listener from a gateway
    Remove {
        #[command(flatten)]
        app: AppArg,
        name: String,
        #[arg(long)]
        port: u16,
        #[arg(long, default_value = "HTTP")]
        protocol: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum ServicesCommands {
    /// List services
    List {
        #[command(flatten)]
        app: AppArg,
        #[command(flatten)]
        limit: LimitArg,
    },
    /// Expose a process type port
    Add {
        #[command(flatten)]
        app: AppArg,
        ptype: String,
        #[arg(long)]
        port: u16,
        #[arg(long, default_value = "TCP")]
        protocol: String,
        #[arg(long)]
        target_port: u16,
    },
    /// Stop exposing a process type port
    Remove {
        #[command(flatten)]
        app: AppArg,
        ptype: String,
        #[arg(long)]
        port: u16,
        #[arg(long, default_value = "TCP")]
        protocol: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum RoutesCommands {
    /// Create a route to a process type
    Create {
        #[command(flatten)]
        app: AppArg,
        name: String,
        #[arg(long, default_value = "web")]
        ptype: String,
        #[arg(long, default_value = "HTTPRoute")]
        kind: String,
        #[arg(long)]
        port: u16,
    },
    /// List routes
    List {
        #[command(flatten)]
        app: AppArg,
        #[command(flatten)]
        limit: LimitArg,
    },
    /// Print a route's rules
    Get {
        #[command(flatten)]
        app: AppArg,
        name: String,
    },
    /// Replace a route's rules from a JSON file
    Set {
        #[command(flatten)]
        app: AppArg,
        name: String,
        #[arg(long = "rules-file")]
        rules_file: PathBuf,
    },
    /// Attach a route to a gateway listener
    Attach {
        #[command(flatten)]
        app: AppArg,
        name: String,
        #[arg(long)]
        port: u16,
        #[arg(long)]
        gateway: String,
    },
    /// Detach a route from a gateway listener
    Detach {
        #[command(flatten)]
        app: AppArg,
        name: String,
        #[arg(long)]
        port: u16,
        #[arg(long)]
        gateway: String,
    },
    /// Remove a route
    Remove {
        #[command(flatten)]
        app: AppArg,
        name: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum TlsCommands {
    /// Show TLS settings
    Info {
        #[command(flatten)]
        app: AppArg,
    },
    /// Redirect plain HTTP requests to HTTPS
    Force {
        #[command(subcommand)]
        command: TlsToggle,
    },
    /// Issue certificates automatically
    Auto {
        #[command(subcommand)]
        command: TlsToggle,
    },
}

#[derive(Subcommand)]
pub(crate) enum TlsToggle {
    Enable {
        #[command(flatten)]
        app: AppArg,
    },
    Disable {
        #[command(flatten)]
        app: AppArg,
    },
}
