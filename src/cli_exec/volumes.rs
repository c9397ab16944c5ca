use super::*;

pub(super) fn handle_volumes_command(r: &Runner, command: VolumesCommands) -> Result<()> {
    match command {
        VolumesCommands::Add {
            app,
            name,
            size,
            kind,
            parameters,
        } => cmd::volumes::add(r, app.get(), &name, &size, kind.as_deref(), &parameters),
        VolumesCommands::Expand { app, name, size } => {
            cmd::volumes::expand(r, app.get(), &name, &size)
        }
        VolumesCommands::List { app, limit } => cmd::volumes::list(r, app.get(), limit.limit),
        VolumesCommands::Info { app, name } => cmd::volumes::info(r, app.get(), &name),
        VolumesCommands::Remove { app, name } => cmd::volumes::remove(r, app.get(), &name),
        VolumesCommands::Mount { app, name, pairs } => {
            cmd::volumes::mount(r, app.get(), &name, &pairs)
        }
        VolumesCommands::Unmount { app, name, ptypes } => {
            cmd::volumes::unmount(r, app.get(), &name, &ptypes)
        }
        VolumesCommands::Client { command } => match command {
            VolumesClientCommands::Ls { app, target } => {
                cmd::volumes::client_ls(r, app.get(), &target)
            }
            VolumesClientCommands::Cp { app, src, dst } => {
                cmd::volumes::client_cp(r, app.get(), &src, &dst)
            }
            VolumesClientCommands::Rm { app, target } => {
                cmd::volumes::client_rm(r, app.get(), &target)
            }
        },
        VolumesCommands::Serve { app, name } => cmd::volumes::serve(r, app.get(), &name),
    }
}
