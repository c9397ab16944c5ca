use drycc::cmd::app_settings::Toggle;

use super::account::{
    handle_auth_command, handle_keys_command, handle_login_command, handle_perms_command,
    handle_tokens_command, handle_users_command,
};
use super::apps::{
    handle_apps_command, handle_builds_command, handle_destroy_command, handle_logs_command,
    handle_pull_command, handle_releases_command, handle_run_command,
};
use super::config::handle_config_command;
use super::misc::{
    handle_complete_command, handle_completion_command, handle_events_command,
    handle_git_command, handle_toggle_command, handle_update_command,
};
use super::networking::{
    handle_certs_command, handle_domains_command, handle_gateways_command,
    handle_routes_command, handle_services_command, handle_tls_command,
};
use super::processes::{
    handle_exec_command, handle_ps_command, handle_pts_command, handle_scale_command,
};
use super::resources::{handle_limits_command, handle_resources_command};
use super::volumes::handle_volumes_command;
use super::*;

pub(super) fn handle_command(r: &Runner, command: Commands) -> Result<i32> {
    match command {
        Commands::Login(args) => handle_login_command(r, args)?,
        Commands::Logout => cmd::auth::logout(r)?,
        Commands::Whoami(args) => cmd::auth::whoami(r, args.all)?,
        Commands::Auth { command } => handle_auth_command(r, command)?,
        Commands::Apps { command } => return handle_apps_command(r, command),
        Commands::Destroy(args) => handle_destroy_command(r, args)?,
        Commands::Run(args) => return handle_run_command(r, args),
        Commands::Logs(args) => handle_logs_command(r, args)?,
        Commands::Builds { command } => handle_builds_command(r, command)?,
        Commands::Pull(args) => handle_pull_command(r, args)?,
        Commands::Releases { command } => handle_releases_command(r, command)?,
        Commands::Config { command } => handle_config_command(r, command)?,
        Commands::Ps { command } => return handle_ps_command(r, command),
        Commands::Exec(args) => return handle_exec_command(r, args),
        Commands::Pts { command } => handle_pts_command(r, command)?,
        Commands::Scale(args) => handle_scale_command(r, args)?,
        Commands::Domains { command } => handle_domains_command(r, command)?,
        Commands::Certs { command } => handle_certs_command(r, command)?,
        Commands::Gateways { command } => handle_gateways_command(r, command)?,
        Commands::Services { command } => handle_services_command(r, command)?,
        Commands::Routes { command } => handle_routes_command(r, command)?,
        Commands::Tls { command } => handle_tls_command(r, command)?,
        Commands::Keys { command } => handle_keys_command(r, command)?,
        Commands::Perms { command } => handle_perms_command(r, command)?,
        Commands::Tokens { command } => handle_tokens_command(r, command)?,
        Commands::Users { command } => handle_users_command(r, command)?,
        Commands::Limits { command } => handle_limits_command(r, command)?,
        Commands::Resources { command } => handle_resources_command(r, command)?,
        Commands::Volumes { command } => handle_volumes_command(r, command)?,
        Commands::Autodeploy { command } => handle_toggle_command(r, Toggle::Autodeploy, command)?,
        Commands::Autorollback { command } => {
            handle_toggle_command(r, Toggle::Autorollback, command)?
        }
        Commands::Routable { command } => handle_toggle_command(r, Toggle::Routable, command)?,
        Commands::Events { command } => handle_events_command(r, command)?,
        Commands::Git { command } => handle_git_command(r, command)?,
        Commands::Update(args) => handle_update_command(r, args)?,
        Commands::Version(args) => cmd::update::version(r, args.all)?,
        Commands::Completion(args) => handle_completion_command(r, args)?,
        Commands::Complete(args) => handle_complete_command(r, args)?,
    }
    Ok(0)
}
