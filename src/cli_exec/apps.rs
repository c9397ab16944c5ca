use crate::cli_commands::apps::{DestroyArgs, LogsArgs, PullArgs, RunArgs};

use super::*;

pub(super) fn handle_apps_command(r: &Runner, command: AppsCommands) -> Result<i32> {
    match command {
        AppsCommands::Create {
            id,
            remote,
            no_remote,
        } => cmd::apps::create(r, id.as_deref(), &remote, no_remote)?,
        AppsCommands::List { limit } => cmd::apps::list(r, limit.limit)?,
        AppsCommands::Info { app } => cmd::apps::info(r, app.get())?,
        AppsCommands::Open { app } => cmd::apps::open(r, app.get())?,
        AppsCommands::Logs(args) => handle_logs_command(r, args)?,
        AppsCommands::Run(args) => return handle_run_command(r, args),
        AppsCommands::Destroy(args) => handle_destroy_command(r, args)?,
        AppsCommands::Transfer { app, owner } => cmd::apps::transfer(r, app.get(), &owner)?,
    }
    Ok(0)
}

pub(super) fn handle_destroy_command(r: &Runner, args: DestroyArgs) -> Result<()> {
    cmd::apps::destroy(r, args.app.get(), &args.confirm)
}

pub(super) fn handle_run_command(r: &Runner, args: RunArgs) -> Result<i32> {
    cmd::apps::run(r, args.app.get(), &args.command, args.timeout, args.expires)
}

pub(super) fn handle_logs_command(r: &Runner, args: LogsArgs) -> Result<()> {
    cmd::apps::logs(r, args.app.get(), &args.options())
}

pub(super) fn handle_pull_command(r: &Runner, args: PullArgs) -> Result<()> {
    cmd::builds::create(
        r,
        args.app.get(),
        &args.image,
        args.stack.as_deref(),
        args.procfile_path.as_deref(),
        &args.confirm,
    )
}

pub(super) fn handle_builds_command(r: &Runner, command: BuildsCommands) -> Result<()> {
    match command {
        BuildsCommands::Info { app } => cmd::builds::info(r, app.get()),
        BuildsCommands::Create(args) => handle_pull_command(r, args),
    }
}

pub(super) fn handle_releases_command(r: &Runner, command: ReleasesCommands) -> Result<()> {
    match command {
        ReleasesCommands::List { app, limit } => cmd::releases::list(r, app.get(), limit.limit),
        ReleasesCommands::Info { app, version } => cmd::releases::info(r, app.get(), &version),
        ReleasesCommands::Rollback {
            app,
            version,
            ptypes,
        } => cmd::releases::rollback(r, app.get(), version.as_deref(), &ptypes),
    }
}
