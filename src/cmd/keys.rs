use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cmd::{render, step};
use crate::error::CliError;
use crate::runner::{Runner, resolve_limit};
use crate::settings;
use crate::table::Table;

pub fn list(r: &Runner, limit: i64) -> Result<()> {
    let s = r.settings()?;
    let limit = resolve_limit(limit, &s.profile);
    let (keys, _) = r.request(&s.client, |c| c.list_keys(limit))?;
    let mut table = Table::new(["ID", "OWNER", "KEY"]);
    for key in &keys {
        table.row([key.id.clone(), key.owner.clone(), abbreviate(&key.public)]);
    }
    render(r, &table, "No keys found.")
}

/// Elide the middle of a long key body, keeping type and comment.
fn abbreviate(public: &str) -> String {
    let mut fields = public.split_whitespace();
    let (Some(kind), Some(body)) = (fields.next(), fields.next()) else {
        return public.to_string();
    };
    let comment = fields.collect::<Vec<_>>().join(" ");
    let body = if body.len() > 20 {
        format!("{}...{}", &body[..10], &body[body.len() - 10..])
    } else {
        body.to_string()
    };
    format!("{} {} {}", kind, body, comment).trim_end().to_string()
}

fn default_key_path() -> PathBuf {
    settings::home().join(".ssh").join("id_rsa.pub")
}

/// Upload a public key. The id defaults to the key's comment field.
pub fn add(r: &Runner, name: Option<&str>, path: Option<&Path>) -> Result<()> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_key_path);
    let public = std::fs::read_to_string(&path)
        .with_context(|| format!("read {}", path.display()))?
        .trim()
        .to_string();
    let id = match name {
        Some(n) => n.to_string(),
        None => public
            .split_whitespace()
            .nth(2)
            .map(str::to_string)
            .ok_or_else(|| CliError::malformed(format!("{} has no comment field, pass a key name", path.display())))?,
    };
    let s = r.settings()?;
    step(
        r,
        &s.client,
        format!("Uploading {} to drycc", path.display()),
        |c| c.create_key(&id, &public),
    )?;
    Ok(())
}

pub fn remove(r: &Runner, id: &str) -> Result<()> {
    let s = r.settings()?;
    step(r, &s.client, format!("Removing {} SSH Key", id), |c| c.delete_key(id))?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/cmd/keys_tests.rs"]
mod tests;
