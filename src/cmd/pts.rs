use std::io::Write;
use std::time::Instant;

use anyhow::Result;

use crate::cmd::{render, require_confirmation, step};
use crate::parse::parse_scale;
use crate::runner::{Runner, drink_of_choice, elapsed_secs, resolve_limit};
use crate::table::{Table, format_time, write_value};

pub fn list(r: &Runner, app: Option<&str>, limit: i64) -> Result<()> {
    let ctx = r.app(app)?;
    let limit = resolve_limit(limit, &ctx.settings.profile);
    let (ptypes, _) = r.request(&ctx.settings.client, |c| c.list_ptypes(&ctx.app, limit))?;
    let mut table = Table::new([
        "NAME",
        "RELEASE",
        "READY",
        "UP-TO-DATE",
        "AVAILABLE",
        "GARBAGE",
        "STARTED",
    ]);
    for p in &ptypes {
        table.row([
            p.name.clone(),
            p.release.clone(),
            p.ready.clone(),
            p.up_to_date.to_string(),
            p.available_replicas.to_string(),
            p.garbage.to_string(),
            format_time(&p.started),
        ]);
    }
    render(r, &table, &format!("No process types found in {} app.", ctx.app))
}

pub fn describe(r: &Runner, app: Option<&str>, ptype: &str) -> Result<()> {
    let ctx = r.app(app)?;
    let doc = r.request(&ctx.settings.client, |c| c.describe_ptype(&ctx.app, ptype))?;
    write_value(&mut r.out(), &doc, 0)?;
    Ok(())
}

/// Restart the given process types; all of them (after a `yes`) when empty.
pub fn restart(r: &Runner, app: Option<&str>, ptypes: &[String], confirm: &str) -> Result<()> {
    let ctx = r.app(app)?;
    if ptypes.is_empty() {
        require_confirmation(
            r,
            &format!("This command will restart all process types of app: {}", ctx.app),
            "yes",
            confirm,
            "cancel the restart action",
        )?;
    }
    let started = Instant::now();
    let mut out = r.out();
    writeln!(out, "Restarting processes... but first, {}!", drink_of_choice())?;
    r.request(&ctx.settings.client, |c| c.restart(&ctx.app, ptypes))?;
    writeln!(out, "done in {}s", elapsed_secs(started))?;
    Ok(())
}

pub fn scale(r: &Runner, app: Option<&str>, targets: &[String]) -> Result<()> {
    let targets = parse_scale(targets)?;
    if targets.is_empty() {
        return Err(crate::error::CliError::malformed(
            "at least one 'ptype=num' pair is required, ex: web=2",
        )
        .into());
    }
    let ctx = r.app(app)?;
    let started = Instant::now();
    let mut out = r.out();
    writeln!(out, "Scaling process types... but first, {}!", drink_of_choice())?;
    r.request(&ctx.settings.client, |c| c.scale(&ctx.app, &targets))?;
    writeln!(out, "done in {}s", elapsed_secs(started))?;
    writeln!(out)?;
    list(r, Some(&ctx.app), 0)
}

pub fn clean(r: &Runner, app: Option<&str>, ptypes: &[String]) -> Result<()> {
    if ptypes.is_empty() {
        return Err(crate::error::CliError::malformed("at least one process type is required").into());
    }
    let ctx = r.app(app)?;
    step(
        r,
        &ctx.settings.client,
        format!("Cleaning {}", ptypes.join(", ")),
        |c| c.clean(&ctx.app, ptypes),
    )?;
    Ok(())
}
