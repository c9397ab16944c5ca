use anyhow::Result;

use crate::cmd::{render, step};
use crate::runner::{Runner, resolve_limit};
use crate::table::{Table, format_time};

pub fn list(r: &Runner, limit: i64) -> Result<()> {
    let s = r.settings()?;
    let limit = resolve_limit(limit, &s.profile);
    let (users, _) = r.request(&s.client, |c| c.list_users(limit))?;
    let mut table = Table::new(["ID", "USERNAME", "EMAIL", "ACTIVE", "SUPERUSER", "DATE-JOINED"]);
    for u in &users {
        table.row([
            u.id.to_string(),
            u.username.clone(),
            u.email.clone(),
            u.is_active.to_string(),
            u.is_superuser.to_string(),
            format_time(&u.date_joined),
        ]);
    }
    render(r, &table, "No users found.")
}

pub fn enable(r: &Runner, username: &str) -> Result<()> {
    let s = r.settings()?;
    step(r, &s.client, format!("Enabling user {}", username), |c| c.enable_user(username))?;
    Ok(())
}

pub fn disable(r: &Runner, username: &str) -> Result<()> {
    let s = r.settings()?;
    step(r, &s.client, format!("Disabling user {}", username), |c| c.disable_user(username))?;
    Ok(())
}
