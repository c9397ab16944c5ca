use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::api::CertCreate;
use crate::cmd::{render, step};
use crate::runner::{Runner, resolve_limit};
use crate::table::{Table, format_time};

pub fn list(r: &Runner, app: Option<&str>, limit: i64) -> Result<()> {
    let ctx = r.app(app)?;
    let limit = resolve_limit(limit, &ctx.settings.profile);
    let (certs, _) = r.request(&ctx.settings.client, |c| c.list_certs(&ctx.app, limit))?;
    let mut table = Table::new(["NAME", "COMMON-NAME", "EXPIRES", "SAN", "DOMAINS"]);
    for cert in &certs {
        table.row([
            cert.name.clone(),
            cert.common_name.clone(),
            format_time(&cert.expires),
            cert.san.join(","),
            cert.domains.join(","),
        ]);
    }
    render(r, &table, "No certs")
}

pub fn add(r: &Runner, app: Option<&str>, name: &str, cert: &Path, key: &Path) -> Result<()> {
    let certificate =
        std::fs::read_to_string(cert).with_context(|| format!("read {}", cert.display()))?;
    let key = std::fs::read_to_string(key).with_context(|| format!("read {}", key.display()))?;
    let ctx = r.app(app)?;
    let body = CertCreate {
        name: name.to_string(),
        certificate,
        key,
    };
    step(r, &ctx.settings.client, "Adding SSL endpoint", |c| {
        c.create_cert(&ctx.app, &body)
    })?;
    Ok(())
}

pub fn remove(r: &Runner, app: Option<&str>, name: &str) -> Result<()> {
    let ctx = r.app(app)?;
    step(
        r,
        &ctx.settings.client,
        format!("Removing {}", name),
        |c| c.delete_cert(&ctx.app, name),
    )?;
    Ok(())
}

pub fn info(r: &Runner, app: Option<&str>, name: &str) -> Result<()> {
    let ctx = r.app(app)?;
    let cert = r.request(&ctx.settings.client, |c| c.get_cert(&ctx.app, name))?;
    let mut out = r.out();
    writeln!(out, "=== {} Certificate", cert.name)?;
    writeln!(out, "Common Name(s):     {}", cert.common_name)?;
    writeln!(out, "Expires At:         {}", format_time(&cert.expires))?;
    writeln!(out, "Starts At:          {}", format_time(&cert.starts))?;
    writeln!(out, "Fingerprint:        {}", cert.fingerprint)?;
    writeln!(out, "Subject Alt Name:   {}", cert.san.join(","))?;
    writeln!(out, "Issuer:             {}", cert.issuer)?;
    writeln!(out, "Subject:            {}", cert.subject)?;
    writeln!(out)?;
    writeln!(out, "Connected Domains:  {}", cert.domains.join(","))?;
    writeln!(out, "Owner:              {}", cert.owner)?;
    writeln!(out, "Created:            {}", format_time(&cert.created))?;
    writeln!(out, "Updated:            {}", format_time(&cert.updated))?;
    Ok(())
}

pub fn attach(r: &Runner, app: Option<&str>, name: &str, domain: &str) -> Result<()> {
    let ctx = r.app(app)?;
    step(
        r,
        &ctx.settings.client,
        format!("Attaching certificate {} to domain {}", name, domain),
        |c| c.attach_cert(&ctx.app, name, domain),
    )?;
    Ok(())
}

pub fn detach(r: &Runner, app: Option<&str>, name: &str, domain: &str) -> Result<()> {
    let ctx = r.app(app)?;
    step(
        r,
        &ctx.settings.client,
        format!("Detaching certificate {} from domain {}", name, domain),
        |c| c.detach_cert(&ctx.app, name, domain),
    )?;
    Ok(())
}
