use anyhow::Result;

use drycc::cmd;
use drycc::runner::Runner;

use crate::{
    AppsCommands, AuthCommands, BuildsCommands, CertsCommands, Commands, ConfigCommands,
    DomainsCommands, EventsCommands, GatewaysCommands, GitCommands, KeysCommands,
    LimitsCommands, PermsCommands, PsCommands, PtsCommands, ReleasesCommands,
    ResourcesCommands, RoutesCommands, ServicesCommands, TlsCommands, TlsToggle,
    ToggleCommands, TokensCommands, UsersCommands, VolumesClientCommands, VolumesCommands,
};

mod account;
mod apps;
mod config;
mod dispatch;
mod misc;
mod networking;
mod processes;
mod resources;
mod volumes;

/// Run `command`; the result is the process exit code.
pub(super) fn handle_command(r: &Runner, command: Commands) -> Result<i32> {
    dispatch::handle_command(r, command)
}
