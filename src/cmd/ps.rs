use anyhow::Result;

use crate::cmd::{render, step};
use crate::runner::{Runner, resolve_limit};
use crate::stream::{self, ExecOptions, LogOptions};
use crate::table::{Table, format_time, write_value};

pub fn list(r: &Runner, app: Option<&str>, ptype: Option<&str>, limit: i64) -> Result<()> {
    let ctx = r.app(app)?;
    let limit = resolve_limit(limit, &ctx.settings.profile);
    let (pods, _) = r.request(&ctx.settings.client, |c| c.list_pods(&ctx.app, ptype, limit))?;
    let mut table = Table::new(["NAME", "RELEASE", "STATE", "PTYPE", "READY", "RESTARTS", "STARTED"]);
    for pod in &pods {
        table.row([
            pod.name.clone(),
            pod.release.clone(),
            pod.state.clone(),
            pod.ptype.clone(),
            pod.ready.clone(),
            pod.restarts.to_string(),
            format_time(&pod.started),
        ]);
    }
    render(r, &table, &format!("No pods found in {} app.", ctx.app))
}

pub fn logs(r: &Runner, app: Option<&str>, pod: &str, opts: LogOptions) -> Result<()> {
    let opts = LogOptions {
        pod: Some(pod.to_string()),
        ..opts
    };
    crate::cmd::apps::logs(r, app, &opts)
}

/// Returns the remote exit code.
pub fn exec(r: &Runner, app: Option<&str>, pod: &str, opts: &ExecOptions) -> Result<i32> {
    if opts.command.is_empty() {
        return Err(crate::error::CliError::malformed("a command is required").into());
    }
    let ctx = r.app(app)?;
    let client = &ctx.settings.client;
    let res = stream::exec(client, &ctx.app, pod, opts);
    r.check_api(client, Ok(()))?;
    res
}

pub fn describe(r: &Runner, app: Option<&str>, pod: &str) -> Result<()> {
    let ctx = r.app(app)?;
    let doc = r.request(&ctx.settings.client, |c| c.describe_pod(&ctx.app, pod))?;
    write_value(&mut r.out(), &doc, 0)?;
    Ok(())
}

pub fn delete(r: &Runner, app: Option<&str>, pods: &[String]) -> Result<()> {
    if pods.is_empty() {
        return Err(crate::error::CliError::malformed("at least one pod name is required").into());
    }
    let ctx = r.app(app)?;
    step(
        r,
        &ctx.settings.client,
        format!("Deleting {} from {}", pods.join(", "), ctx.app),
        |c| c.delete_pods(&ctx.app, pods),
    )?;
    Ok(())
}
