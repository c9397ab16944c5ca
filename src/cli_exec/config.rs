use super::*;

pub(super) fn handle_config_command(r: &Runner, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Info { app, target } => cmd::config::info(
            r,
            app.get(),
            target.ptype.as_deref(),
            target.group.as_deref(),
        ),
        ConfigCommands::Set {
            app,
            pairs,
            target,
            confirm,
        } => cmd::config::set(
            r,
            app.get(),
            &pairs,
            target.ptype.as_deref(),
            target.group.as_deref(),
            &confirm,
        ),
        ConfigCommands::Unset {
            app,
            keys,
            target,
            confirm,
        } => cmd::config::unset(
            r,
            app.get(),
            &keys,
            target.ptype.as_deref(),
            target.group.as_deref(),
            &confirm,
        ),
        ConfigCommands::Pull {
            app,
            output,
            target,
            overwrite,
        } => cmd::config::pull(
            r,
            app.get(),
            &output,
            target.ptype.as_deref(),
            target.group.as_deref(),
            overwrite,
        ),
        ConfigCommands::Push {
            app,
            path,
            target,
            confirm,
        } => cmd::config::push(
            r,
            app.get(),
            &path,
            target.ptype.as_deref(),
            target.group.as_deref(),
            &confirm,
        ),
        ConfigCommands::Attach { app, ptype, group } => {
            cmd::config::attach(r, app.get(), &ptype, &group)
        }
        ConfigCommands::Detach { app, ptype, group } => {
            cmd::config::detach(r, app.get(), &ptype, &group)
        }
    }
}
