use clap::{Args, Subcommand};

use crate::{
    AppsCommands, AuthCommands, BuildsCommands, CertsCommands, ConfigCommands, DomainsCommands,
    EventsCommands, GatewaysCommands, GitCommands, KeysCommands, LimitsCommands, PermsCommands,
    PsCommands, PtsCommands, ReleasesCommands, ResourcesCommands, RoutesCommands,
    ServicesCommands, TlsCommands, ToggleCommands, TokensCommands, UsersCommands,
    VolumesCommands,
};

pub(crate) mod account;
pub(crate) mod apps;
pub(crate) mod misc;
pub(crate) mod processes;

/// `--app/-a`, shared by every app-scoped verb.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct AppArg {
    /// The uniquely identifiable name for the application
    #[arg(short = 'a', long)]
    pub(crate) app: Option<String>,
}

impl AppArg {
    pub(crate) fn get(&self) -> Option<&str> {
        self.app.as_deref()
    }
}

#[derive(Args, Clone, Copy, Debug, Default)]
pub(crate) struct LimitArg {
    /// Maximum number of results to display (defaults to the profile limit)
    #[arg(short = 'l', long, default_value_t = 0, allow_negative_numbers = true)]
    pub(crate) limit: i64,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Log in to a controller
    Login(account::LoginArgs),

    /// Log out and delete the local profile
    Logout,

    /// Show the logged-in user
    Whoami(account::WhoamiArgs),

    /// Manage the login session
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },

    /// Manage applications
    Apps {
        #[command(subcommand)]
        command: AppsCommands,
    },

    /// Destroy an application
    Destroy(apps::DestroyArgs),

    /// Run a one-off command in an application
    Run(apps::RunArgs),

    /// Show application logs
    Logs(apps::LogsArgs),

    /// Manage builds
    Builds {
        #[command(subcommand)]
        command: BuildsCommands,
    },

    /// Deploy an image as a new build
    Pull(apps::PullArgs),

    /// Manage releases
    Releases {
        #[command(subcommand)]
        command: ReleasesCommands,
    },

    /// Manage environment variables
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Manage pods
    Ps {
        #[command(subcommand)]
        command: PsCommands,
    },

    /// Run a command in a pod
    Exec(processes::ExecArgs),

    /// Manage process types
    Pts {
        #[command(subcommand)]
        command: PtsCommands,
    },

    /// Scale process types
    Scale(processes::ScaleArgs),

    /// Manage custom domains
    Domains {
        #[command(subcommand)]
        command: DomainsCommands,
    },

    /// Manage TLS certificates
    Certs {
        #[command(subcommand)]
        command: CertsCommands,
    },

    /// Manage gateway listeners
    Gateways {
        #[command(subcommand)]
        command: GatewaysCommands,
    },

    /// Manage process type services
    Services {
        #[command(subcommand)]
        command: ServicesCommands,
    },

    /// Manage routes
    Routes {
        #[command(subcommand)]
        command: RoutesCommands,
    },

    /// Manage TLS settings
    Tls {
        #[command(subcommand)]
        command: TlsCommands,
    },

    /// Manage SSH keys
    Keys {
        #[command(subcommand)]
        command: KeysCommands,
    },

    /// Manage application permissions
    Perms {
        #[command(subcommand)]
        command: PermsCommands,
    },

    /// Manage auth tokens
    Tokens {
        #[command(subcommand)]
        command: TokensCommands,
    },

    /// Manage users (administrators only)
    Users {
        #[command(subcommand)]
        command: UsersCommands,
    },

    /// Manage resource limits
    Limits {
        #[command(subcommand)]
        command: LimitsCommands,
    },

    /// Manage backing resources
    Resources {
        #[command(subcommand)]
        command: ResourcesCommands,
    },

    /// Manage volumes
    Volumes {
        #[command(subcommand)]
        command: VolumesCommands,
    },

    /// Deploy automatically on config and limit changes
    Autodeploy {
        #[command(subcommand)]
        command: ToggleCommands,
    },

    /// Roll back automatically when a deploy fails
    Autorollback {
        #[command(subcommand)]
        command: ToggleCommands,
    },

    /// Expose the application through the router
    Routable {
        #[command(subcommand)]
        command: ToggleCommands,
    },

    /// Show Kubernetes events
    Events {
        #[command(subcommand)]
        command: EventsCommands,
    },

    /// Manage git remotes
    Git {
        #[command(subcommand)]
        command: GitCommands,
    },

    /// Update the client to the latest release
    Update(misc::UpdateArgs),

    /// Show the client version
    Version(misc::VersionArgs),

    /// Generate a shell completion script
    Completion(misc::CompletionArgs),

    #[command(name = "__complete", hide = true)]
    Complete(misc::CompleteArgs),
}
