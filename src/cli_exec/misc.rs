use std::io::Write;

use clap::CommandFactory;

use drycc::cmd::app_settings::{self, Toggle};
use drycc::completion;

use crate::cli_commands::misc::{CompleteArgs, CompletionArgs, UpdateArgs};
use crate::cli_runtime::Cli;

use super::*;

pub(super) fn handle_toggle_command(r: &Runner, toggle: Toggle, command: ToggleCommands) -> Result<()> {
    match command {
        ToggleCommands::Info { app } => app_settings::info(r, app.get(), toggle),
        ToggleCommands::Enable { app } => app_settings::set(r, app.get(), toggle, true),
        ToggleCommands::Disable { app } => app_settings::set(r, app.get(), toggle, false),
    }
}

pub(super) fn handle_events_command(r: &Runner, command: EventsCommands) -> Result<()> {
    match command {
        EventsCommands::List {
            app,
            ptype,
            pod,
            limit,
        } => cmd::events::list(r, app.get(), ptype.as_deref(), pod.as_deref(), limit.limit),
    }
}

pub(super) fn handle_git_command(r: &Runner, command: GitCommands) -> Result<()> {
    match command {
        GitCommands::Remote { app, remote, force } => {
            cmd::git::remote(r, app.get(), &remote, force)
        }
        GitCommands::Remove { app } => cmd::git::remove(r, app.get()),
    }
}

pub(super) fn handle_update_command(r: &Runner, args: UpdateArgs) -> Result<()> {
    cmd::update::update(r, &args.base_url, args.dry_run)
}

pub(super) fn handle_completion_command(r: &Runner, args: CompletionArgs) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(args.shell, &mut command, name, &mut r.out());
    Ok(())
}

pub(super) fn handle_complete_command(r: &Runner, args: CompleteArgs) -> Result<()> {
    let candidates = completion::complete(
        r,
        args.kind,
        args.app.get(),
        args.service.as_deref(),
        &args.prefix,
    )?;
    let mut out = r.out();
    for c in candidates {
        writeln!(out, "{}", c)?;
    }
    Ok(())
}
