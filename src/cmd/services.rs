use anyhow::Result;

use crate::api::ServiceCreate;
use crate::cmd::{render, step};
use crate::runner::{Runner, resolve_limit};
use crate::table::Table;

pub fn list(r: &Runner, app: Option<&str>, limit: i64) -> Result<()> {
    let ctx = r.app(app)?;
    let limit = resolve_limit(limit, &ctx.settings.profile);
    let (services, _) = r.request(&ctx.settings.client, |c| c.list_services(&ctx.app, limit))?;
    let mut table = Table::new(["PTYPE", "DOMAIN", "NAME", "PORT", "PROTOCOL", "TARGET-PORT"]);
    for svc in &services {
        for port in &svc.ports {
            table.row([
                svc.ptype.clone(),
                svc.domain.clone(),
                port.name.clone(),
                port.port.to_string(),
                port.protocol.clone(),
                port.target_port.to_string(),
            ]);
        }
    }
    render(r, &table, &format!("No services found in {} app.", ctx.app))
}

pub fn add(
    r: &Runner,
    app: Option<&str>,
    ptype: &str,
    port: u16,
    protocol: &str,
    target_port: u16,
) -> Result<()> {
    let ctx = r.app(app)?;
    let service = ServiceCreate {
        ptype: ptype.to_string(),
        port,
        protocol: protocol.to_string(),
        target_port,
    };
    step(
        r,
        &ctx.settings.client,
        format!("Adding {}:{} service for {} to {}", protocol, port, ptype, ctx.app),
        |c| c.add_service(&ctx.app, &service),
    )?;
    Ok(())
}

pub fn remove(r: &Runner, app: Option<&str>, ptype: &str, protocol: &str, port: u16) -> Result<()> {
    let ctx = r.app(app)?;
    step(
        r,
        &ctx.settings.client,
        format!("Removing {}:{} service for {} from {}", protocol, port, ptype, ctx.app),
        |c| c.remove_service(&ctx.app, ptype, protocol, port),
    )?;
    Ok(())
}
