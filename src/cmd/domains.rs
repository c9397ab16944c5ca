use anyhow::Result;

use crate::cmd::{render, step};
use crate::parse::expand_url;
use crate::runner::{Runner, resolve_limit};
use crate::table::{Table, format_time};

pub fn list(r: &Runner, app: Option<&str>, limit: i64) -> Result<()> {
    let ctx = r.app(app)?;
    let limit = resolve_limit(limit, &ctx.settings.profile);
    let (domains, _) = r.request(&ctx.settings.client, |c| c.list_domains(&ctx.app, limit))?;
    let mut table = Table::new(["DOMAIN", "PTYPE", "CREATED"]);
    for d in &domains {
        table.row([d.domain.clone(), d.ptype.clone(), format_time(&d.created)]);
    }
    render(r, &table, &format!("No domains found in {} app.", ctx.app))
}

pub fn add(r: &Runner, app: Option<&str>, domain: &str, ptype: &str) -> Result<()> {
    let ctx = r.app(app)?;
    let domain = expand_url(&ctx.settings.profile.controller_host()?, domain);
    step(
        r,
        &ctx.settings.client,
        format!("Adding {} to {}", domain, ctx.app),
        |c| c.add_domain(&ctx.app, &domain, ptype),
    )?;
    Ok(())
}

pub fn remove(r: &Runner, app: Option<&str>, domain: &str) -> Result<()> {
    let ctx = r.app(app)?;
    let domain = expand_url(&ctx.settings.profile.controller_host()?, domain);
    step(
        r,
        &ctx.settings.client,
        format!("Removing {} from {}", domain, ctx.app),
        |c| c.remove_domain(&ctx.app, &domain),
    )?;
    Ok(())
}
