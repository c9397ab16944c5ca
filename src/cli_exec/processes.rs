use drycc::stream::{ExecOptions, LogOptions};

use crate::cli_commands::processes::{ExecArgs, ScaleArgs};

use super::*;

pub(super) fn handle_exec_command(r: &Runner, args: ExecArgs) -> Result<i32> {
    let opts = ExecOptions {
        command: args.command,
        stdin: args.stdin,
        tty: args.tty,
    };
    cmd::ps::exec(r, args.app.get(), &args.pod, &opts)
}

pub(super) fn handle_scale_command(r: &Runner, args: ScaleArgs) -> Result<()> {
    cmd::pts::scale(r, args.app.get(), &args.targets)
}

pub(super) fn handle_ps_command(r: &Runner, command: PsCommands) -> Result<i32> {
    match command {
        PsCommands::List { app, ptype, limit } => {
            cmd::ps::list(r, app.get(), ptype.as_deref(), limit.limit)?
        }
        PsCommands::Logs { pod, logs } => {
            let opts: LogOptions = logs.options();
            cmd::ps::logs(r, logs.app.get(), &pod, opts)?
        }
        PsCommands::Exec(args) => return handle_exec_command(r, args),
        PsCommands::Describe { app, pod } => cmd::ps::describe(r, app.get(), &pod)?,
        PsCommands::Delete { app, pods } => cmd::ps::delete(r, app.get(), &pods)?,
    }
    Ok(0)
}

pub(super) fn handle_pts_command(r: &Runner, command: PtsCommands) -> Result<()> {
    match command {
        PtsCommands::List { app, limit } => cmd::pts::list(r, app.get(), limit.limit),
        PtsCommands::Describe { app, ptype } => cmd::pts::describe(r, app.get(), &ptype),
        PtsCommands::Restart {
            app,
            ptypes,
            confirm,
        } => cmd::pts::restart(r, app.get(), &ptypes, &confirm),
        PtsCommands::Scale(args) => handle_scale_command(r, args),
        PtsCommands::Clean { app, ptypes } => cmd::pts::clean(r, app.get(), &ptypes),
    }
}
