//! One entry point per user-visible verb.
//!
//! Every verb follows the same shape: resolve the app (or just the profile),
//! print a leading status, run the request under the progress ticker, then
//! print `done` or render the result.

use std::fmt::Display;
use std::io::Write;

use anyhow::Result;

use crate::api::{ApiResult, Client};
use crate::runner::Runner;
use crate::table::Table;

pub mod app_settings;
pub mod apps;
pub mod auth;
pub mod builds;
pub mod certs;
pub mod config;
pub mod domains;
pub mod events;
pub mod gateways;
pub mod git;
pub mod keys;
pub mod limits;
pub mod perms;
pub mod ps;
pub mod pts;
pub mod releases;
pub mod resources;
pub mod routes;
pub mod services;
pub mod tls;
pub mod tokens;
pub mod update;
pub mod users;
pub mod volumes;

/// Print `<label>... `, run `call` under the ticker, then print `done`.
pub(crate) fn step<T>(
    r: &Runner,
    client: &Client,
    label: impl Display,
    call: impl FnOnce(&Client) -> ApiResult<T>,
) -> Result<T> {
    let mut out = r.out();
    write!(out, "{}... ", label)?;
    out.flush()?;
    let value = r.request(client, call)?;
    writeln!(out, "done")?;
    Ok(value)
}

/// Render `table`, or `empty` when it has no rows.
pub(crate) fn render(r: &Runner, table: &Table, empty: &str) -> Result<()> {
    let mut out = r.out();
    if table.is_empty() {
        writeln!(out, "{}", empty)?;
    } else {
        table.write_to(&mut out)?;
    }
    Ok(())
}

pub(crate) fn destructive_prompt(warning: &str, expected: &str) -> String {
    format!(
        " !    WARNING: Potentially Destructive Action\n !    {}\n !    To proceed, type \"{}\" or re-run this command with --confirm={}\n\n> ",
        warning, expected, expected
    )
}

/// Ask for a literal answer unless `confirm` already carries one.
pub(crate) fn require_confirmation(
    r: &Runner,
    warning: &str,
    expected: &str,
    confirm: &str,
    canceled: &str,
) -> Result<()> {
    let answer = r.prompt(&destructive_prompt(warning, expected), confirm)?;
    if answer.trim() != expected {
        return Err(crate::error::CliError::canceled(canceled).into());
    }
    Ok(())
}

pub(crate) fn opt<T: Display>(v: &Option<T>) -> String {
    v.as_ref().map(|v| v.to_string()).unwrap_or_default()
}
