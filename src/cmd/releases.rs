use std::io::Write;

use anyhow::Result;

use crate::cmd::{opt, render};
use crate::parse::parse_version;
use crate::runner::{Runner, resolve_limit};
use crate::table::{Table, format_time};

pub fn list(r: &Runner, app: Option<&str>, limit: i64) -> Result<()> {
    let ctx = r.app(app)?;
    let limit = resolve_limit(limit, &ctx.settings.profile);
    let (releases, _) = r.request(&ctx.settings.client, |c| c.list_releases(&ctx.app, limit))?;
    let mut table = Table::new(["VERSION", "OWNER", "STATE", "CREATED", "SUMMARY"]);
    for rel in &releases {
        table.row([
            format!("v{}", rel.version),
            rel.owner.clone(),
            rel.state.clone(),
            format_time(&rel.created),
            rel.summary.clone(),
        ]);
    }
    render(r, &table, "No releases found.")
}

pub fn info(r: &Runner, app: Option<&str>, version: &str) -> Result<()> {
    let version = parse_version(version)?;
    let ctx = r.app(app)?;
    let rel = r.request(&ctx.settings.client, |c| c.get_release(&ctx.app, version))?;
    let mut out = r.out();
    writeln!(out, "=== {} Release v{}", ctx.app, rel.version)?;
    writeln!(out, "uuid:    {}", rel.uuid)?;
    writeln!(out, "owner:   {}", rel.owner)?;
    writeln!(out, "state:   {}", rel.state)?;
    writeln!(out, "build:   {}", opt(&rel.build))?;
    writeln!(out, "config:  {}", opt(&rel.config))?;
    writeln!(out, "created: {}", format_time(&rel.created))?;
    writeln!(out, "summary: {}", rel.summary)?;
    Ok(())
}

pub fn rollback(r: &Runner, app: Option<&str>, version: Option<&str>, ptypes: &[String]) -> Result<()> {
    let version = version.map(parse_version).transpose()?;
    let ctx = r.app(app)?;
    let mut out = r.out();
    match version {
        Some(v) => write!(out, "Rolling back to v{}... ", v)?,
        None => write!(out, "Rolling back one release... ")?,
    }
    out.flush()?;
    let new = r.request(&ctx.settings.client, |c| c.rollback(&ctx.app, version, ptypes))?;
    writeln!(out, "done, v{}", new)?;
    Ok(())
}
