use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::api::RouteCreate;
use crate::cmd::{render, step};
use crate::runner::{Runner, resolve_limit};
use crate::table::Table;

pub fn create(r: &Runner, app: Option<&str>, name: &str, ptype: &str, kind: &str, port: u16) -> Result<()> {
    let ctx = r.app(app)?;
    let route = RouteCreate {
        name: name.to_string(),
        ptype: ptype.to_string(),
        kind: kind.to_string(),
        port,
    };
    step(
        r,
        &ctx.settings.client,
        format!("Adding route {} to {}", name, ctx.app),
        |c| c.create_route(&ctx.app, &route),
    )?;
    Ok(())
}

pub fn list(r: &Runner, app: Option<&str>, limit: i64) -> Result<()> {
    let ctx = r.app(app)?;
    let limit = resolve_limit(limit, &ctx.settings.profile);
    let (routes, _) = r.request(&ctx.settings.client, |c| c.list_routes(&ctx.app, limit))?;
    let mut table = Table::new(["NAME", "OWNER", "PTYPE", "KIND", "SERVICE-PORT", "GATEWAY", "LISTENER-PORT"]);
    for route in &routes {
        if route.parent_refs.is_empty() {
            table.row([
                route.name.clone(),
                route.owner.clone(),
                route.ptype.clone(),
                route.kind.clone(),
                route.port.to_string(),
                String::new(),
                String::new(),
            ]);
        }
        for parent in &route.parent_refs {
            table.row([
                route.name.clone(),
                route.owner.clone(),
                route.ptype.clone(),
                route.kind.clone(),
                route.port.to_string(),
                parent.name.clone(),
                parent.port.to_string(),
            ]);
        }
    }
    render(r, &table, &format!("No routes found in {} app.", ctx.app))
}

/// Print the route's rules as JSON.
pub fn get(r: &Runner, app: Option<&str>, name: &str) -> Result<()> {
    let ctx = r.app(app)?;
    let rules = r.request(&ctx.settings.client, |c| c.get_route_rules(&ctx.app, name))?;
    let text = serde_json::to_string_pretty(&rules).context("serialize route rules")?;
    writeln!(r.out(), "{}", text)?;
    Ok(())
}

/// Replace the route's rules with the JSON document at `path`.
pub fn set(r: &Runner, app: Option<&str>, name: &str, path: &Path) -> Result<()> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let rules: serde_json::Value = serde_json::from_str(&contents)
        .map_err(|err| crate::error::CliError::malformed(format!("{} is not valid JSON: {}", path.display(), err)))?;
    let ctx = r.app(app)?;
    step(
        r,
        &ctx.settings.client,
        format!("Applying rules to route {}", name),
        |c| c.set_route_rules(&ctx.app, name, &rules),
    )?;
    Ok(())
}

pub fn attach(r: &Runner, app: Option<&str>, name: &str, port: u16, gateway: &str) -> Result<()> {
    let ctx = r.app(app)?;
    step(
        r,
        &ctx.settings.client,
        format!("Attaching route {} to gateway {}", name, gateway),
        |c| c.attach_route(&ctx.app, name, port, gateway),
    )?;
    Ok(())
}

pub fn detach(r: &Runner, app: Option<&str>, name: &str, port: u16, gateway: &str) -> Result<()> {
    let ctx = r.app(app)?;
    step(
        r,
        &ctx.settings.client,
        format!("Detaching route {} from gateway {}", name, gateway),
        |c| c.detach_route(&ctx.app, name, port, gateway),
    )?;
    Ok(())
}

pub fn remove(r: &Runner, app: Option<&str>, name: &str) -> Result<()> {
    let ctx = r.app(app)?;
    step(
        r,
        &ctx.settings.client,
        format!("Removing route {} from {}", name, ctx.app),
        |c| c.delete_route(&ctx.app, name),
    )?;
    Ok(())
}
