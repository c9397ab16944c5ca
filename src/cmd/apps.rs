use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};

use crate::api::RunRequest;
use crate::cmd::{destructive_prompt, render, step};
use crate::git;
use crate::runner::{Runner, elapsed_secs, resolve_limit};
use crate::stream::{self, LogOptions};
use crate::table::{Table, format_time};

pub const DEFAULT_RUN_TIMEOUT: u64 = 3600;

pub fn create(r: &Runner, id: Option<&str>, remote: &str, no_remote: bool) -> Result<()> {
    let s = r.settings()?;
    let app = step(r, &s.client, "Creating Application", |c| c.create_app(id))?;
    let mut out = r.out();
    writeln!(out, "created {}", app.id)?;

    if no_remote {
        writeln!(out, "If you want to add a git remote for this app later, use `drycc git remote -a {}`", app.id)?;
        return Ok(());
    }
    let host = s.profile.controller_host()?;
    match git::create_remote(r.git(), &host, remote, &app.id) {
        Ok(()) => writeln!(out, "Git remote {} successfully created for app {}.", remote, app.id)?,
        Err(err) => {
            tracing::warn!("git remote not created: {:#}", err);
            writeln!(r.err(), "Could not create git remote {}: {:#}", remote, err)?;
        }
    }
    Ok(())
}

pub fn list(r: &Runner, limit: i64) -> Result<()> {
    let s = r.settings()?;
    let limit = resolve_limit(limit, &s.profile);
    let (apps, _) = r.request(&s.client, |c| c.list_apps(limit))?;
    let mut table = Table::new(["ID", "OWNER", "CREATED", "UPDATED"]);
    for app in &apps {
        table.row([
            app.id.clone(),
            app.owner.clone(),
            format_time(&app.created),
            format_time(&app.updated),
        ]);
    }
    render(r, &table, "No apps found.")
}

pub fn info(r: &Runner, app: Option<&str>) -> Result<()> {
    let ctx = r.app(app)?;
    let client = &ctx.settings.client;
    let info = r.request(client, |c| c.get_app(&ctx.app))?;
    let (domains, _) = r.quiet(client, |c| c.list_domains(&ctx.app, -1))?;

    let mut out = r.out();
    writeln!(out, "=== {} Application", info.id)?;
    writeln!(out, "uuid:     {}", info.uuid)?;
    writeln!(out, "owner:    {}", info.owner)?;
    writeln!(out, "created:  {}", format_time(&info.created))?;
    writeln!(out, "updated:  {}", format_time(&info.updated))?;
    if !info.structure.is_empty() {
        let structure: Vec<String> = info
            .structure
            .iter()
            .map(|(ptype, n)| format!("{}={}", ptype, n))
            .collect();
        writeln!(out, "structure: {}", structure.join(" "))?;
    }
    writeln!(out)?;
    writeln!(out, "=== {} Domains", info.id)?;
    if domains.is_empty() {
        writeln!(out, "No domains")?;
    }
    for d in &domains {
        writeln!(out, "{}", d.domain)?;
    }
    Ok(())
}

pub fn open(r: &Runner, app: Option<&str>) -> Result<()> {
    let ctx = r.app(app)?;
    let (domains, _) = r.quiet(&ctx.settings.client, |c| c.list_domains(&ctx.app, 1))?;
    let domain = domains
        .first()
        .with_context(|| format!("no domain is attached to app {}", ctx.app))?;
    let url = format!("http://{}", domain.domain);
    writeln!(r.out(), "{}", url)?;
    open::that(&url).with_context(|| format!("open {}", url))?;
    Ok(())
}

pub fn logs(r: &Runner, app: Option<&str>, opts: &LogOptions) -> Result<()> {
    let ctx = r.app(app)?;
    let client = &ctx.settings.client;
    let res = stream::follow_logs(client, &ctx.app, opts, &mut r.out());
    r.check_api(client, Ok(()))?;
    res
}

/// Run a one-off command; returns the remote exit code.
pub fn run(
    r: &Runner,
    app: Option<&str>,
    command: &[String],
    timeout: u64,
    expires: u64,
) -> Result<i32> {
    let ctx = r.app(app)?;
    let command = command.join(" ");
    if command.trim().is_empty() {
        return Err(crate::error::CliError::malformed("a command is required").into());
    }
    let req = RunRequest {
        command: command.clone(),
        timeout,
        expires,
    };
    let mut out = r.out();
    writeln!(out, "Running '{}'...", command)?;
    let result = r.request(&ctx.settings.client, |c| c.run(&ctx.app, &req))?;
    write!(out, "{}", result.output)?;
    out.flush()?;
    Ok(result.exit_code)
}

pub fn destroy(r: &Runner, app: Option<&str>, confirm: &str) -> Result<()> {
    let ctx = r.app(app)?;
    let warning = format!("This command will destroy the application: {}", ctx.app);
    let answer = r.prompt(&destructive_prompt(&warning, &ctx.app), confirm)?;
    if answer.trim() != ctx.app {
        return Err(crate::error::CliError::canceled(format!(
            "app {} does not match confirm {}, aborting",
            ctx.app,
            answer.trim()
        ))
        .into());
    }

    let started = Instant::now();
    let mut out = r.out();
    writeln!(out, "Destroying {}...", ctx.app)?;
    r.request(&ctx.settings.client, |c| c.delete_app(&ctx.app))?;
    writeln!(out, "done in {}s", elapsed_secs(started))?;

    match ctx
        .settings
        .profile
        .controller_host()
        .and_then(|host| git::delete_app_remotes(r.git(), &host, &ctx.app))
    {
        Ok(removed) => {
            for name in removed {
                writeln!(out, "Git remote {} removed", name)?;
            }
        }
        Err(err) => tracing::warn!("git remote cleanup skipped: {:#}", err),
    }
    Ok(())
}

pub fn transfer(r: &Runner, app: Option<&str>, owner: &str) -> Result<()> {
    let ctx = r.app(app)?;
    step(
        r,
        &ctx.settings.client,
        format!("Transferring {} to {}", ctx.app, owner),
        |c| c.transfer_app(&ctx.app, owner),
    )?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/cmd/apps_tests.rs"]
mod tests;
