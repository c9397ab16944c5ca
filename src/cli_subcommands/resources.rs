use clap::Subcommand;

use crate::{AppArg, LimitArg};

#[derive(Subcommand)]
pub(crate) enum LimitsCommands {
    /// Show the limit plan of each process type
    List {
        #[command(flatten)]
        app: AppArg,
    },
    /// Set limit plans as ptype=plan
    Set {
        #[command(flatten)]
        app: AppArg,
        #[arg(required = true)]
        pairs: Vec<String>,
    },
    /// Remove limit plans
    Unset {
        #[command(flatten)]
        app: AppArg,
        #[arg(required = true)]
        ptypes: Vec<String>,
    },
    /// List limit specs
    Specs {
        #[arg(long)]
        keywords: Option<String>,
        #[command(flatten)]
        limit: LimitArg,
    },
    /// List limit plans
    Plans {
        #[arg(long)]
        spec: Option<String>,
        #[arg(long)]
        cpu: Option<u32>,
        /// Memory in GiB
        #[arg(long)]
        memory: Option<u32>,
        #[command(flatten)]
        limit: LimitArg,
    },
    /// Show a limit plan
    Info { plan: String },
}

#[derive(Subcommand)]
pub(crate) enum ResourcesCommands {
    /// List resource services
    Services {
        #[command(flatten)]
        limit: LimitArg,
    },
    /// List the plans of a resource service
    Plans {
        service: String,
        #[command(flatten)]
        limit: LimitArg,
    },
    /// Create a resource from <service>:<plan>
    Create {
        #[command(flatten)]
        app: AppArg,
        name: String,
        plan: String,
        /// Provisioning options as key=value
        #[arg(long = "values")]
        options: Vec<String>,
    },
    /// List resources
    List {
        #[command(flatten)]
        app: AppArg,
        #[command(flatten)]
        limit: LimitArg,
    },
    /// Describe a resource
    Describe {
        #[command(flatten)]
        app: AppArg,
        name: String,
    },
    /// Move a resource to another plan
    Update {
        #[command(flatten)]
        app: AppArg,
        name: String,
        plan: String,
    },
    /// Destroy a resource
    Destroy {
        #[command(flatten)]
        app: AppArg,
        name: String,
        #[arg(long, default_value = "")]
        confirm: String,
    },
    /// Bind a resource to the app
    Bind {
        #[command(flatten)]
        app: AppArg,
        name: String,
    },
    /// Unbind a resource from the app
    Unbind {
        #[command(flatten)]
        app: AppArg,
        name: String,
    },
}
