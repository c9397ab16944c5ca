use super::*;

pub(super) fn handle_limits_command(r: &Runner, command: LimitsCommands) -> Result<()> {
    match command {
        LimitsCommands::List { app } => cmd::limits::list(r, app.get()),
        LimitsCommands::Set { app, pairs } => cmd::limits::set(r, app.get(), &pairs),
        LimitsCommands::Unset { app, ptypes } => cmd::limits::unset(r, app.get(), &ptypes),
        LimitsCommands::Specs { keywords, limit } => {
            cmd::limits::specs(r, keywords.as_deref(), limit.limit)
        }
        LimitsCommands::Plans {
            spec,
            cpu,
            memory,
            limit,
        } => cmd::limits::plans(r, spec.as_deref(), cpu, memory, limit.limit),
        LimitsCommands::Info { plan } => cmd::limits::info(r, &plan),
    }
}

pub(super) fn handle_resources_command(r: &Runner, command: ResourcesCommands) -> Result<()> {
    match command {
        ResourcesCommands::Services { limit } => cmd::resources::services(r, limit.limit),
        ResourcesCommands::Plans { service, limit } => {
            cmd::resources::plans(r, &service, limit.limit)
        }
        ResourcesCommands::Create {
            app,
            name,
            plan,
            options,
        } => cmd::resources::create(r, app.get(), &name, &plan, &options),
        ResourcesCommands::List { app, limit } => {
            cmd::resources::list(r, app.get(), limit.limit)
        }
        ResourcesCommands::Describe { app, name } => {
            cmd::resources::describe(r, app.get(), &name)
        }
        ResourcesCommands::Update { app, name, plan } => {
            cmd::resources::update(r, app.get(), &name, &plan)
        }
        ResourcesCommands::Destroy { app, name, confirm } => {
            cmd::resources::destroy(r, app.get(), &name, &confirm)
        }
        ResourcesCommands::Bind { app, name } => cmd::resources::bind(r, app.get(), &name),
        ResourcesCommands::Unbind { app, name } => cmd::resources::unbind(r, app.get(), &name),
    }
}
