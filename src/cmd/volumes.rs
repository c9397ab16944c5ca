use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::api::VolumeCreate;
use crate::cmd::{render, step};
use crate::error::CliError;
use crate::parse::{check_size, parse_config, parse_volume_paths, parse_volume_url};
use crate::runner::{Runner, resolve_limit};
use crate::stream::{self, SessionEnd};
use crate::table::{Table, format_time, write_value};

pub fn add(
    r: &Runner,
    app: Option<&str>,
    name: &str,
    size: &str,
    kind: Option<&str>,
    parameters: &[String],
) -> Result<()> {
    check_size(size)?;
    let parameters = parse_config(parameters)?.into_iter().collect();
    let ctx = r.app(app)?;
    let volume = VolumeCreate {
        name: name.to_string(),
        size: size.to_string(),
        kind: kind.map(str::to_string),
        parameters,
    };
    step(
        r,
        &ctx.settings.client,
        format!("Creating volume {} to {}", name, ctx.app),
        |c| c.create_volume(&ctx.app, &volume),
    )?;
    Ok(())
}

pub fn expand(r: &Runner, app: Option<&str>, name: &str, size: &str) -> Result<()> {
    check_size(size)?;
    let ctx = r.app(app)?;
    step(
        r,
        &ctx.settings.client,
        format!("Expanding volume {} to {}", name, size),
        |c| c.expand_volume(&ctx.app, name, size),
    )?;
    Ok(())
}

pub fn list(r: &Runner, app: Option<&str>, limit: i64) -> Result<()> {
    let ctx = r.app(app)?;
    let limit = resolve_limit(limit, &ctx.settings.profile);
    let (volumes, _) = r.request(&ctx.settings.client, |c| c.list_volumes(&ctx.app, limit))?;
    let mut table = Table::new(["NAME", "OWNER", "TYPE", "PTYPE", "PATH", "SIZE"]);
    for v in &volumes {
        if v.path.is_empty() {
            table.row([
                v.name.clone(),
                v.owner.clone(),
                v.kind.clone(),
                String::new(),
                String::new(),
                v.size.clone(),
            ]);
        }
        for (ptype, path) in &v.path {
            table.row([
                v.name.clone(),
                v.owner.clone(),
                v.kind.clone(),
                ptype.clone(),
                path.clone(),
                v.size.clone(),
            ]);
        }
    }
    render(r, &table, &format!("No volumes found in {} app.", ctx.app))
}

pub fn info(r: &Runner, app: Option<&str>, name: &str) -> Result<()> {
    let ctx = r.app(app)?;
    let v = r.request(&ctx.settings.client, |c| c.get_volume(&ctx.app, name))?;
    let mut out = r.out();
    writeln!(out, "=== {} Volume", v.name)?;
    writeln!(out, "uuid:    {}", v.uuid)?;
    writeln!(out, "owner:   {}", v.owner)?;
    writeln!(out, "type:    {}", v.kind)?;
    writeln!(out, "size:    {}", v.size)?;
    writeln!(out, "created: {}", format_time(&v.created))?;
    writeln!(out, "updated: {}", format_time(&v.updated))?;
    if !v.path.is_empty() {
        writeln!(out, "path:")?;
        for (ptype, path) in &v.path {
            writeln!(out, "  {}: {}", ptype, path)?;
        }
    }
    if !v.parameters.is_null() {
        writeln!(out, "parameters:")?;
        write_value(&mut out, &v.parameters, 2)?;
    }
    Ok(())
}

pub fn remove(r: &Runner, app: Option<&str>, name: &str) -> Result<()> {
    let ctx = r.app(app)?;
    step(
        r,
        &ctx.settings.client,
        format!("Deleting volume {} from {}", name, ctx.app),
        |c| c.delete_volume(&ctx.app, name),
    )?;
    Ok(())
}

pub fn mount(r: &Runner, app: Option<&str>, name: &str, pairs: &[String]) -> Result<()> {
    let paths = parse_volume_paths(pairs)?;
    if paths.is_empty() {
        return Err(CliError::malformed("at least one 'ptype=/path' pair is required, ex: web=/data").into());
    }
    let ctx = r.app(app)?;
    let paths: BTreeMap<String, Option<String>> =
        paths.into_iter().map(|(k, v)| (k, Some(v))).collect();
    step(
        r,
        &ctx.settings.client,
        format!("Mounting volume {}", name),
        |c| c.set_volume_paths(&ctx.app, name, &paths),
    )?;
    Ok(())
}

pub fn unmount(r: &Runner, app: Option<&str>, name: &str, ptypes: &[String]) -> Result<()> {
    if ptypes.is_empty() {
        return Err(CliError::malformed("at least one process type is required").into());
    }
    let ctx = r.app(app)?;
    let paths: BTreeMap<String, Option<String>> =
        ptypes.iter().map(|p| (p.clone(), None)).collect();
    step(
        r,
        &ctx.settings.client,
        format!("Unmounting volume {}", name),
        |c| c.set_volume_paths(&ctx.app, name, &paths),
    )?;
    Ok(())
}

fn volume_url(s: &str) -> Result<(String, String)> {
    parse_volume_url(s).ok_or_else(|| {
        CliError::malformed(format!("'{}' does not match the pattern 'vol://<volume>/<path>'", s)).into()
    })
}

/// List files under `vol://<volume>/<path>`.
pub fn client_ls(r: &Runner, app: Option<&str>, target: &str) -> Result<()> {
    let (volume, path) = volume_url(target)?;
    let ctx = r.app(app)?;
    let entries = r.request(&ctx.settings.client, |c| {
        c.list_volume_files(&ctx.app, &volume, &path)
    })?;
    let mut table = Table::new(["NAME", "TYPE", "SIZE", "MODIFIED"]);
    for e in &entries {
        table.row([e.name.clone(), e.kind.clone(), e.size.to_string(), format_time(&e.timestamp)]);
    }
    render(r, &table, "No files found.")
}

/// Copy between the local filesystem and a volume; exactly one side is `vol://`.
pub fn client_cp(r: &Runner, app: Option<&str>, src: &str, dst: &str) -> Result<()> {
    match (parse_volume_url(src), parse_volume_url(dst)) {
        (Some((volume, remote)), None) => {
            let ctx = r.app(app)?;
            let bytes = r.request(&ctx.settings.client, |c| {
                c.download_volume_file(&ctx.app, &volume, &remote)
            })?;
            let local = local_target(Path::new(dst), &remote);
            std::fs::write(&local, &bytes).with_context(|| format!("write {}", local.display()))?;
            writeln!(r.out(), "Downloaded {} to {}", src, local.display())?;
        }
        (None, Some((volume, remote))) => {
            let bytes = std::fs::read(src).with_context(|| format!("read {}", src))?;
            let remote = if remote.is_empty() || remote.ends_with('/') {
                let file = Path::new(src)
                    .file_name()
                    .and_then(|n| n.to_str())
                    .with_context(|| format!("{} has no file name", src))?;
                format!("{}{}", remote, file)
            } else {
                remote
            };
            let ctx = r.app(app)?;
            step(
                r,
                &ctx.settings.client,
                format!("Uploading {} to vol://{}/{}", src, volume, remote),
                |c| c.upload_volume_file(&ctx.app, &volume, &remote, bytes),
            )?;
        }
        _ => {
            return Err(CliError::malformed(
                "exactly one of source and destination must be 'vol://<volume>/<path>'",
            )
            .into());
        }
    }
    Ok(())
}

/// A directory destination receives the remote file's base name.
fn local_target(dst: &Path, remote: &str) -> std::path::PathBuf {
    if dst.is_dir() {
        let name = remote.rsplit('/').find(|s| !s.is_empty()).unwrap_or("download");
        dst.join(name)
    } else {
        dst.to_path_buf()
    }
}

pub fn client_rm(r: &Runner, app: Option<&str>, target: &str) -> Result<()> {
    let (volume, path) = volume_url(target)?;
    if path.is_empty() {
        return Err(CliError::malformed("refusing to remove the volume root").into());
    }
    let ctx = r.app(app)?;
    step(
        r,
        &ctx.settings.client,
        format!("Removing {}", target),
        |c| c.delete_volume_file(&ctx.app, &volume, &path),
    )?;
    Ok(())
}

/// Open a WebDAV session on a volume and hold it until interrupted.
pub fn serve(r: &Runner, app: Option<&str>, name: &str) -> Result<()> {
    let ctx = r.app(app)?;
    let client = &ctx.settings.client;
    let session = r.request(client, |c| c.serve_volume(&ctx.app, name))?;

    let mut out = r.out();
    writeln!(out, "WebDAV endpoint for volume {} is ready:", name)?;
    writeln!(out, "  endpoint: {}", session.endpoint)?;
    writeln!(out, "  username: {}", session.username)?;
    writeln!(out, "  password: {}", session.password)?;
    writeln!(out, "Press Ctrl-C to stop.")?;
    out.flush()?;

    match stream::serve_volume(client, &ctx.app, name, &session)? {
        SessionEnd::Signal => writeln!(out, "Session closed.")?,
        SessionEnd::Closed => writeln!(out, "Session ended by the server.")?,
    }
    Ok(())
}
