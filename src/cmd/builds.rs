use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::api::BuildCreate;
use crate::cmd::{require_confirmation, step};
use crate::parse::parse_procfile;
use crate::runner::Runner;
use crate::table::format_time;

pub fn info(r: &Runner, app: Option<&str>) -> Result<()> {
    let ctx = r.app(app)?;
    let build = r.request(&ctx.settings.client, |c| c.latest_build(&ctx.app))?;
    let mut out = r.out();
    let Some(build) = build else {
        writeln!(out, "No build found.")?;
        return Ok(());
    };
    writeln!(out, "=== {} Build", ctx.app)?;
    writeln!(out, "uuid:    {}", build.uuid)?;
    writeln!(out, "owner:   {}", build.owner)?;
    writeln!(out, "image:   {}", build.image)?;
    writeln!(out, "stack:   {}", build.stack)?;
    writeln!(out, "sha:     {}", build.sha)?;
    writeln!(out, "created: {}", format_time(&build.created))?;
    if !build.procfile.is_empty() {
        writeln!(out)?;
        writeln!(out, "=== {} Procfile", ctx.app)?;
        for (ptype, command) in &build.procfile {
            writeln!(out, "{}: {}", ptype, command)?;
        }
    }
    Ok(())
}

/// Deploy `image` as a new build.
///
/// A Procfile that differs from the one in the latest build replaces it, so
/// that case asks for `yes` first.
pub fn create(
    r: &Runner,
    app: Option<&str>,
    image: &str,
    stack: Option<&str>,
    procfile_path: Option<&Path>,
    confirm: &str,
) -> Result<()> {
    let ctx = r.app(app)?;
    let client = &ctx.settings.client;

    let procfile = match procfile_path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("read {}", path.display()))?;
            Some(parse_procfile(&contents)?)
        }
        None => None,
    };

    if let Some(procfile) = &procfile {
        let latest = r.quiet(client, |c| c.latest_build(&ctx.app))?;
        if let Some(latest) = latest
            && !latest.procfile.is_empty()
            && latest.procfile != *procfile
        {
            require_confirmation(
                r,
                &format!("This command will override the Procfile of app: {}", ctx.app),
                "yes",
                confirm,
                "cancel the build action",
            )?;
        }
    }

    let build = BuildCreate {
        image: image.to_string(),
        stack: stack.map(str::to_string),
        procfile,
    };
    step(r, client, "Creating build", |c| c.create_build(&ctx.app, &build))?;
    Ok(())
}
