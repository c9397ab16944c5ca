use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::api::{Client, Config, ConfigUpdate, ConfigValue};
use crate::cmd::{render, step};
use crate::parse::{parse_config, parse_env_file};
use crate::runner::{ConfigTarget, Runner};
use crate::table::Table;

fn value_for(target: &ConfigTarget, name: String, value: Option<String>) -> ConfigValue {
    let (ptype, group) = match target {
        ConfigTarget::Ptype(p) => (Some(p.clone()), None),
        ConfigTarget::Group(g) => (None, Some(g.clone())),
    };
    ConfigValue {
        name,
        value,
        group,
        ptype,
    }
}

fn scope(v: &ConfigValue) -> String {
    match (&v.ptype, &v.group) {
        (Some(p), _) => format!("ptype:{}", p),
        (None, Some(g)) => format!("group:{}", g),
        (None, None) => format!("group:{}", crate::runner::GLOBAL_GROUP),
    }
}

fn write_config(r: &Runner, app: &str, config: &Config, filter: Option<&ConfigTarget>) -> Result<()> {
    let mut table = Table::new(["SCOPE", "NAME", "VALUE"]);
    for v in &config.values {
        if let Some(target) = filter
            && !target.matches(v.ptype.as_deref(), v.group.as_deref())
        {
            continue;
        }
        table.row([scope(v), v.name.clone(), v.value.clone().unwrap_or_default()]);
    }
    writeln!(r.out(), "=== {} Config", app)?;
    render(r, &table, "No config values.")?;

    if filter.is_none() && !config.values_refs.is_empty() {
        let mut out = r.out();
        writeln!(out)?;
        writeln!(out, "=== {} Attached Groups", app)?;
        let mut refs = Table::new(["PTYPE", "GROUPS"]);
        for (ptype, groups) in &config.values_refs {
            refs.row([ptype.clone(), groups.join(",")]);
        }
        refs.write_to(&mut out)?;
    }
    Ok(())
}

pub fn info(r: &Runner, app: Option<&str>, ptype: Option<&str>, group: Option<&str>) -> Result<()> {
    let filter = match (ptype, group) {
        (None, None) => None,
        _ => Some(ConfigTarget::resolve(ptype, group)?),
    };
    let ctx = r.app(app)?;
    let config = r.request(&ctx.settings.client, |c| c.get_config(&ctx.app))?;
    write_config(r, &ctx.app, &config, filter.as_ref())
}

fn apply(
    r: &Runner,
    client: &Client,
    app: &str,
    label: &str,
    target: &ConfigTarget,
    values: Vec<ConfigValue>,
) -> Result<()> {
    let update = ConfigUpdate {
        values: Some(values),
        ..Default::default()
    };
    let config = step(r, client, label, |c| c.set_config(app, &update))?;
    writeln!(r.out())?;
    write_config(r, app, &config, Some(target))
}

pub fn set(
    r: &Runner,
    app: Option<&str>,
    pairs: &[String],
    ptype: Option<&str>,
    group: Option<&str>,
    confirm: &str,
) -> Result<()> {
    let target = ConfigTarget::resolve(ptype, group)?;
    let pairs = parse_config(pairs)?;
    let ctx = r.app(app)?;
    let client = &ctx.settings.client;
    r.confirm_global_config(client, &ctx.app, &target, confirm)?;

    let values = pairs
        .into_iter()
        .map(|(k, v)| value_for(&target, k, Some(v)))
        .collect();
    apply(r, client, &ctx.app, "Creating config", &target, values)
}

pub fn unset(
    r: &Runner,
    app: Option<&str>,
    keys: &[String],
    ptype: Option<&str>,
    group: Option<&str>,
    confirm: &str,
) -> Result<()> {
    let target = ConfigTarget::resolve(ptype, group)?;
    let ctx = r.app(app)?;
    let client = &ctx.settings.client;
    r.confirm_global_config(client, &ctx.app, &target, confirm)?;

    let values = keys
        .iter()
        .map(|k| value_for(&target, k.clone(), None))
        .collect();
    apply(r, client, &ctx.app, "Removing config", &target, values)
}

/// Write the target's values to a `.env` file.
pub fn pull(
    r: &Runner,
    app: Option<&str>,
    output: &Path,
    ptype: Option<&str>,
    group: Option<&str>,
    overwrite: bool,
) -> Result<()> {
    let target = ConfigTarget::resolve(ptype, group)?;
    if output.exists() && !overwrite {
        anyhow::bail!("{} already exists, use --overwrite to replace it", output.display());
    }
    let ctx = r.app(app)?;
    let config = r.request(&ctx.settings.client, |c| c.get_config(&ctx.app))?;

    let mut lines = BTreeMap::new();
    for v in &config.values {
        if target.matches(v.ptype.as_deref(), v.group.as_deref())
            && let Some(value) = &v.value
        {
            lines.insert(v.name.clone(), value.clone());
        }
    }
    let contents: String = lines
        .iter()
        .map(|(k, v)| format!("{}={}\n", k, v))
        .collect();
    std::fs::write(output, contents).with_context(|| format!("write {}", output.display()))?;
    writeln!(
        r.out(),
        "Wrote {} values of {} to {}",
        lines.len(),
        target.describe(),
        output.display()
    )?;
    Ok(())
}

/// Set every value from a `.env` file.
pub fn push(
    r: &Runner,
    app: Option<&str>,
    path: &Path,
    ptype: Option<&str>,
    group: Option<&str>,
    confirm: &str,
) -> Result<()> {
    let target = ConfigTarget::resolve(ptype, group)?;
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let pairs = parse_env_file(&contents)?;
    if pairs.is_empty() {
        anyhow::bail!("{} has no config values", path.display());
    }
    let ctx = r.app(app)?;
    let client = &ctx.settings.client;
    r.confirm_global_config(client, &ctx.app, &target, confirm)?;

    let values = pairs
        .into_iter()
        .map(|(k, v)| value_for(&target, k, Some(v)))
        .collect();
    apply(r, client, &ctx.app, "Creating config", &target, values)
}

/// Attach `group` to `ptype`, keeping the other attachments.
pub fn attach(r: &Runner, app: Option<&str>, ptype: &str, group: &str) -> Result<()> {
    let ctx = r.app(app)?;
    let client = &ctx.settings.client;
    let config = r.quiet(client, |c| c.get_config(&ctx.app))?;
    let mut refs = config.values_refs;
    let groups = refs.entry(ptype.to_string()).or_default();
    if !groups.iter().any(|g| g == group) {
        groups.push(group.to_string());
    }
    step(
        r,
        client,
        format!("Attaching {} to {}", group, ptype),
        |c| c.set_config_refs(&ctx.app, &refs),
    )?;
    Ok(())
}

pub fn detach(r: &Runner, app: Option<&str>, ptype: &str, group: &str) -> Result<()> {
    let ctx = r.app(app)?;
    let client = &ctx.settings.client;
    let config = r.quiet(client, |c| c.get_config(&ctx.app))?;
    let mut refs = config.values_refs;
    let attached = refs
        .get_mut(ptype)
        .map(|groups| {
            let before = groups.len();
            groups.retain(|g| g != group);
            before != groups.len()
        })
        .unwrap_or(false);
    if !attached {
        anyhow::bail!("group {} is not attached to {}", group, ptype);
    }
    step(
        r,
        client,
        format!("Detaching {} from {}", group, ptype),
        |c| c.set_config_refs(&ctx.app, &refs),
    )?;
    Ok(())
}
