use std::io::Write;

use anyhow::Result;

use crate::api::TlsUpdate;
use crate::cmd::step;
use crate::runner::Runner;
use crate::table::{format_time, write_value};

fn flag(v: Option<bool>) -> &'static str {
    match v {
        Some(true) => "true",
        Some(false) => "false",
        None => "not set",
    }
}

pub fn info(r: &Runner, app: Option<&str>) -> Result<()> {
    let ctx = r.app(app)?;
    let tls = r.request(&ctx.settings.client, |c| c.get_tls(&ctx.app))?;
    let mut out = r.out();
    writeln!(out, "=== {} TLS", ctx.app)?;
    writeln!(out, "https enforced: {}", flag(tls.https_enforced))?;
    writeln!(out, "certs auto:     {}", flag(tls.certs_auto_enabled))?;
    writeln!(out, "updated:        {}", format_time(&tls.updated))?;
    if !tls.issuer.is_null() {
        writeln!(out, "issuer:")?;
        write_value(&mut out, &tls.issuer, 2)?;
    }
    Ok(())
}

/// Toggle HTTPS enforcement on the app's routes.
pub fn force(r: &Runner, app: Option<&str>, on: bool) -> Result<()> {
    let ctx = r.app(app)?;
    let update = TlsUpdate {
        https_enforced: Some(on),
        ..Default::default()
    };
    let label = format!(
        "{} https-only requests for {}",
        if on { "Enabling" } else { "Disabling" },
        ctx.app
    );
    step(r, &ctx.settings.client, label, |c| c.set_tls(&ctx.app, &update))?;
    Ok(())
}

/// Toggle automatic certificate issuance.
pub fn auto(r: &Runner, app: Option<&str>, on: bool) -> Result<()> {
    let ctx = r.app(app)?;
    let update = TlsUpdate {
        certs_auto_enabled: Some(on),
        ..Default::default()
    };
    let label = format!(
        "{} certificate automation for {}",
        if on { "Enabling" } else { "Disabling" },
        ctx.app
    );
    step(r, &ctx.settings.client, label, |c| c.set_tls(&ctx.app, &update))?;
    Ok(())
}
