use anyhow::Result;

use crate::cmd::{render, require_confirmation, step};
use crate::runner::{Runner, resolve_limit};
use crate::table::{Table, format_time};

pub fn list(r: &Runner, limit: i64) -> Result<()> {
    let s = r.settings()?;
    let limit = resolve_limit(limit, &s.profile);
    let (tokens, _) = r.request(&s.client, |c| c.list_tokens(limit))?;
    let mut table = Table::new(["UUID", "OWNER", "ALIAS", "KEY", "CREATED"]);
    for t in &tokens {
        table.row([
            t.uuid.clone(),
            t.owner.clone(),
            t.alias.clone(),
            t.key.clone(),
            format_time(&t.created),
        ]);
    }
    render(r, &table, "No tokens found.")
}

pub fn remove(r: &Runner, id: &str, confirm: &str) -> Result<()> {
    let s = r.settings()?;
    require_confirmation(
        r,
        &format!("This command will remove the token: {}", id),
        "yes",
        confirm,
        "cancel the token action",
    )?;
    step(r, &s.client, format!("Removing token {}", id), |c| c.delete_token(id))?;
    Ok(())
}
