use anyhow::Result;

use crate::cmd::render;
use crate::error::CliError;
use crate::runner::{Runner, resolve_limit};
use crate::table::{Table, format_time};

/// Events for one process type or one pod; exactly one must be given.
pub fn list(
    r: &Runner,
    app: Option<&str>,
    ptype: Option<&str>,
    pod: Option<&str>,
    limit: i64,
) -> Result<()> {
    if ptype.is_some() == pod.is_some() {
        return Err(CliError::malformed("exactly one of --ptype and --pod is required").into());
    }
    let ctx = r.app(app)?;
    let limit = resolve_limit(limit, &ctx.settings.profile);
    let (events, _) = r.request(&ctx.settings.client, |c| {
        c.list_events(&ctx.app, ptype, pod, limit)
    })?;
    let mut table = Table::new(["REASON", "MESSAGE", "CREATED"]);
    for e in &events {
        table.row([e.reason.clone(), e.message.clone(), format_time(&e.created)]);
    }
    render(r, &table, &format!("No events found in {} app.", ctx.app))
}
