use super::*;

pub(super) fn handle_domains_command(r: &Runner, command: DomainsCommands) -> Result<()> {
    match command {
        DomainsCommands::List { app, limit } => cmd::domains::list(r, app.get(), limit.limit),
        DomainsCommands::Add { app, domain, ptype } => {
            cmd::domains::add(r, app.get(), &domain, &ptype)
        }
        DomainsCommands::Remove { app, domain } => cmd::domains::remove(r, app.get(), &domain),
    }
}

pub(super) fn handle_certs_command(r: &Runner, command: CertsCommands) -> Result<()> {
    match command {
        CertsCommands::List { app, limit } => cmd::certs::list(r, app.get(), limit.limit),
        CertsCommands::Add {
            app,
            name,
            cert,
            key,
        } => cmd::certs::add(r, app.get(), &name, &cert, &key),
        CertsCommands::Remove { app, name } => cmd::certs::remove(r, app.get(), &name),
        CertsCommands::Info { app, name } => cmd::certs::info(r, app.get(), &name),
        CertsCommands::Attach { app, name, domain } => {
            cmd::certs::attach(r, app.get(), &name, &domain)
        }
        CertsCommands::Detach { app, name, domain } => {
            cmd::certs::detach(r, app.get(), &name, &domain)
        }
    }
}

pub(super) fn handle_gateways_command(r: &Runner, command: GatewaysCommands) -> Result<()> {
    match command {
        GatewaysCommands::List { app, limit } => cmd::gateways::list(r, app.get(), limit.limit),
        GatewaysCommands::Add {
            app,
            name,
            port,
            protocol,
        } => cmd::gateways::add(r, app.get(), &name, port, &protocol),
        GatewaysCommands::Remove {
            app,
            name,
            port,
            protocol,
        } => cmd::gateways::remove(r, app.get(), &name, port, &protocol),
    }
}

pub(super) fn handle_services_command(r: &Runner, command: ServicesCommands) -> Result<()> {
    match command {
        ServicesCommands::List { app, limit } => cmd::services::list(r, app.get(), limit.limit),
        ServicesCommands::Add {
            app,
            ptype,
            port,
            protocol,
            target_port,
        } => cmd::services::add(r, app.get(), &ptype, port, &protocol, target_port),
        ServicesCommands::Remove {
            app,
            ptype,
            port,
            protocol,
        } => cmd::services::remove(r, app.get(), &ptype, &protocol, port),
    }
}

pub(super) fn handle_routes_command(r: &Runner, command: RoutesCommands) -> Result<()> {
    match command {
        RoutesCommands::Create {
            app,
            name,
            ptype,
            kind,
            port,
        } => cmd::routes::create(r, app.get(), &name, &ptype, &kind, port),
        RoutesCommands::List { app, limit } => cmd::routes::list(r, app.get(), limit.limit),
        RoutesCommands::Get { app, name } => cmd::routes::get(r, app.get(), &name),
        RoutesCommands::Set {
            app,
            name,
            rules_file,
        } => cmd::routes::set(r, app.get(), &name, &rules_file),
        RoutesCommands::Attach {
            app,
            name,
            port,
            gateway,
        } => cmd::routes::attach(r, app.get(), &name, port, &gateway),
        RoutesCommands::Detach {
            app,
            name,
            port,
            gateway,
        } => cmd::routes::detach(r, app.get(), &name, port, &gateway),
        RoutesCommands::Remove { app, name } => cmd::routes::remove(r, app.get(), &name),
    }
}

pub(super) fn handle_tls_command(r: &Runner, command: TlsCommands) -> Result<()> {
    match command {
        TlsCommands::Info { app } => cmd::tls::info(r, app.get()),
        TlsCommands::Force { command } => match command {
            TlsToggle::Enable { app } => cmd::tls::force(r, app.get(), true),
            TlsToggle::Disable { app } => cmd::tls::force(r, app.get(), false),
        },
        TlsCommands::Auto { command } => match command {
            TlsToggle::Enable { app } => cmd::tls::auto(r, app.get(), true),
            TlsToggle::Disable { app } => cmd::tls::auto(r, app.get(), false),
        },
    }
}
