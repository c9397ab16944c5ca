use anyhow::Result;

use crate::api::GatewayListener;
use crate::cmd::{render, step};
use crate::runner::{Runner, resolve_limit};
use crate::table::Table;

pub fn list(r: &Runner, app: Option<&str>, limit: i64) -> Result<()> {
    let ctx = r.app(app)?;
    let limit = resolve_limit(limit, &ctx.settings.profile);
    let (gateways, _) = r.request(&ctx.settings.client, |c| c.list_gateways(&ctx.app, limit))?;
    let mut table = Table::new(["NAME", "LISTENER", "PORT", "PROTOCOL", "ADDRESSES"]);
    for gw in &gateways {
        let addresses: Vec<&str> = gw.addresses.iter().map(|a| a.value.as_str()).collect();
        for listener in &gw.listeners {
            table.row([
                gw.name.clone(),
                listener.name.clone(),
                listener.port.to_string(),
                listener.protocol.clone(),
                addresses.join(","),
            ]);
        }
    }
    render(r, &table, &format!("No gateways found in {} app.", ctx.app))
}

pub fn add(r: &Runner, app: Option<&str>, name: &str, port: u16, protocol: &str) -> Result<()> {
    let ctx = r.app(app)?;
    let listener = GatewayListener {
        name: name.to_string(),
        port,
        protocol: protocol.to_string(),
    };
    step(
        r,
        &ctx.settings.client,
        format!("Adding gateway {} to {}", name, ctx.app),
        |c| c.add_gateway(&ctx.app, &listener),
    )?;
    Ok(())
}

pub fn remove(r: &Runner, app: Option<&str>, name: &str, port: u16, protocol: &str) -> Result<()> {
    let ctx = r.app(app)?;
    let listener = GatewayListener {
        name: name.to_string(),
        port,
        protocol: protocol.to_string(),
    };
    step(
        r,
        &ctx.settings.client,
        format!("Removing gateway {} from {}", name, ctx.app),
        |c| c.remove_gateway(&ctx.app, &listener),
    )?;
    Ok(())
}
