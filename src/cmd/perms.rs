use anyhow::Result;

use crate::cmd::{render, step};
use crate::runner::{Runner, resolve_limit};
use crate::table::Table;

pub fn list(r: &Runner, app: Option<&str>, limit: i64) -> Result<()> {
    let ctx = r.app(app)?;
    let limit = resolve_limit(limit, &ctx.settings.profile);
    let (perms, _) = r.request(&ctx.settings.client, |c| c.list_perms(&ctx.app, limit))?;
    let mut table = Table::new(["USERNAME", "PERMISSIONS"]);
    for p in &perms {
        table.row([p.username.clone(), p.permissions.clone()]);
    }
    render(r, &table, &format!("No users have access to {}.", ctx.app))
}

pub fn create(r: &Runner, app: Option<&str>, username: &str, permissions: &str) -> Result<()> {
    let ctx = r.app(app)?;
    step(
        r,
        &ctx.settings.client,
        format!("Adding user {} as a collaborator for {}", username, ctx.app),
        |c| c.create_perm(&ctx.app, username, permissions),
    )?;
    Ok(())
}

pub fn update(r: &Runner, app: Option<&str>, username: &str, permissions: &str) -> Result<()> {
    let ctx = r.app(app)?;
    step(
        r,
        &ctx.settings.client,
        format!("Updating user {} permissions to {}", username, permissions),
        |c| c.update_perm(&ctx.app, username, permissions),
    )?;
    Ok(())
}

pub fn delete(r: &Runner, app: Option<&str>, username: &str) -> Result<()> {
    let ctx = r.app(app)?;
    step(
        r,
        &ctx.settings.client,
        format!("Removing user {} as a collaborator for {}", username, ctx.app),
        |c| c.delete_perm(&ctx.app, username),
    )?;
    Ok(())
}
