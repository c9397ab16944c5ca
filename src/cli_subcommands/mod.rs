mod account;
mod apps;
mod config;
mod networking;
mod processes;
mod resources;
mod settings;
mod volumes;

pub(crate) use self::account::{
    AuthCommands, KeysCommands, PermsCommands, TokensCommands, UsersCommands,
};
pub(crate) use self::apps::{AppsCommands, BuildsCommands, ReleasesCommands};
pub(crate) use self::config::{ConfigCommands, TargetArgs};
pub(crate) use self::networking::{
    CertsCommands, DomainsCommands, GatewaysCommands, RoutesCommands, ServicesCommands,
    TlsCommands, TlsToggle,
};
pub(crate) use self::processes::{PsCommands, PtsCommands};
pub(crate) use self::resources::{LimitsCommands, ResourcesCommands};
pub(crate) use self::settings::{EventsCommands, GitCommands, ToggleCommands};
pub(crate) use self::volumes::{VolumesClientCommands, VolumesCommands};
