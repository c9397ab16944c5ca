use std::io::Write;

use anyhow::Result;

use crate::api::ResourceCreate;
use crate::cmd::{opt, render, require_confirmation, step};
use crate::parse::parse_config;
use crate::runner::{Runner, resolve_limit};
use crate::table::{Table, format_time, write_value};

pub fn services(r: &Runner, limit: i64) -> Result<()> {
    let s = r.settings()?;
    let limit = resolve_limit(limit, &s.profile);
    let (services, _) = r.request(&s.client, |c| c.list_resource_services(limit))?;
    let mut table = Table::new(["ID", "NAME", "UPDATEABLE"]);
    for svc in &services {
        table.row([svc.id.clone(), svc.name.clone(), svc.updateable.to_string()]);
    }
    render(r, &table, "No services found.")
}

pub fn plans(r: &Runner, service: &str, limit: i64) -> Result<()> {
    let s = r.settings()?;
    let limit = resolve_limit(limit, &s.profile);
    let (plans, _) = r.request(&s.client, |c| c.list_resource_plans(service, limit))?;
    let mut table = Table::new(["ID", "NAME", "DESCRIPTION"]);
    for plan in &plans {
        table.row([plan.id.clone(), plan.name.clone(), plan.description.clone()]);
    }
    render(r, &table, &format!("No plans found for {}.", service))
}

/// `plan` is `<service>:<plan>`; `options` are `key=value` pairs.
pub fn create(r: &Runner, app: Option<&str>, name: &str, plan: &str, options: &[String]) -> Result<()> {
    let options = parse_config(options)?.into_iter().collect();
    let ctx = r.app(app)?;
    let resource = ResourceCreate {
        name: name.to_string(),
        plan: plan.to_string(),
        options,
    };
    step(
        r,
        &ctx.settings.client,
        format!("Creating {} to {}", name, ctx.app),
        |c| c.create_resource(&ctx.app, &resource),
    )?;
    Ok(())
}

pub fn list(r: &Runner, app: Option<&str>, limit: i64) -> Result<()> {
    let ctx = r.app(app)?;
    let limit = resolve_limit(limit, &ctx.settings.profile);
    let (resources, _) = r.request(&ctx.settings.client, |c| c.list_resources(&ctx.app, limit))?;
    let mut table = Table::new(["NAME", "OWNER", "PLAN", "STATUS", "BINDING", "UPDATED"]);
    for res in &resources {
        table.row([
            res.name.clone(),
            res.owner.clone(),
            res.plan.clone(),
            opt(&res.status),
            opt(&res.binding),
            format_time(&res.updated),
        ]);
    }
    render(r, &table, &format!("No resources found in {} app.", ctx.app))
}

pub fn describe(r: &Runner, app: Option<&str>, name: &str) -> Result<()> {
    let ctx = r.app(app)?;
    let res = r.request(&ctx.settings.client, |c| c.get_resource(&ctx.app, name))?;
    let mut out = r.out();
    writeln!(out, "=== {} Resource", res.name)?;
    writeln!(out, "uuid:    {}", res.uuid)?;
    writeln!(out, "owner:   {}", res.owner)?;
    writeln!(out, "plan:    {}", res.plan)?;
    writeln!(out, "status:  {}", opt(&res.status))?;
    writeln!(out, "binding: {}", opt(&res.binding))?;
    writeln!(out, "created: {}", format_time(&res.created))?;
    writeln!(out, "updated: {}", format_time(&res.updated))?;
    if !res.options.is_null() {
        writeln!(out, "options:")?;
        write_value(&mut out, &res.options, 2)?;
    }
    if !res.data.is_null() {
        writeln!(out, "data:")?;
        write_value(&mut out, &res.data, 2)?;
    }
    Ok(())
}

pub fn update(r: &Runner, app: Option<&str>, name: &str, plan: &str) -> Result<()> {
    let ctx = r.app(app)?;
    step(
        r,
        &ctx.settings.client,
        format!("Updating {} to plan {}", name, plan),
        |c| c.update_resource(&ctx.app, name, plan),
    )?;
    Ok(())
}

pub fn destroy(r: &Runner, app: Option<&str>, name: &str, confirm: &str) -> Result<()> {
    let ctx = r.app(app)?;
    require_confirmation(
        r,
        &format!("This command will destroy the resource: {}", name),
        name,
        confirm,
        "cancel the resource action",
    )?;
    step(
        r,
        &ctx.settings.client,
        format!("Deleting {} from {}", name, ctx.app),
        |c| c.delete_resource(&ctx.app, name),
    )?;
    Ok(())
}

pub fn bind(r: &Runner, app: Option<&str>, name: &str) -> Result<()> {
    let ctx = r.app(app)?;
    step(
        r,
        &ctx.settings.client,
        format!("Binding resource {} to app {}", name, ctx.app),
        |c| c.bind_resource(&ctx.app, name),
    )?;
    Ok(())
}

pub fn unbind(r: &Runner, app: Option<&str>, name: &str) -> Result<()> {
    let ctx = r.app(app)?;
    step(
        r,
        &ctx.settings.client,
        format!("Unbinding resource {} from app {}", name, ctx.app),
        |c| c.unbind_resource(&ctx.app, name),
    )?;
    Ok(())
}
