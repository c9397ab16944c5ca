use std::collections::{BTreeMap, HashMap};
use std::io::Write;

use anyhow::Result;

use crate::api::{Client, ConfigUpdate, LimitPlan};
use crate::cmd::{render, step};
use crate::parse::parse_limits;
use crate::runner::{Runner, resolve_limit};
use crate::table::{Table, write_value};

/// Plan lookups for one rendering, fetched at most once per id.
struct PlanCache<'a> {
    r: &'a Runner,
    client: &'a Client,
    plans: HashMap<String, Option<LimitPlan>>,
}

impl<'a> PlanCache<'a> {
    fn new(r: &'a Runner, client: &'a Client) -> Self {
        Self {
            r,
            client,
            plans: HashMap::new(),
        }
    }

    fn get(&mut self, id: &str) -> Result<Option<&LimitPlan>> {
        if !self.plans.contains_key(id) {
            let plan = match self.r.quiet(self.client, |c| c.get_limit_plan(id)) {
                Ok(plan) => Some(plan),
                Err(err) => match err.downcast_ref::<crate::api::ApiError>() {
                    Some(api) if api.is_not_found() => None,
                    _ => return Err(err),
                },
            };
            self.plans.insert(id.to_string(), plan);
        }
        Ok(self.plans.get(id).and_then(Option::as_ref))
    }
}

fn write_limits(r: &Runner, client: &Client, app: &str, limits: &BTreeMap<String, String>) -> Result<()> {
    let mut cache = PlanCache::new(r, client);
    let mut table = Table::new(["PTYPE", "PLAN", "CPU", "MEMORY"]);
    for (ptype, plan_id) in limits {
        let (cpu, memory) = match cache.get(plan_id)? {
            Some(plan) => (plan.cpu.to_string(), format!("{}Gi", plan.memory)),
            None => (String::new(), String::new()),
        };
        table.row([ptype.clone(), plan_id.clone(), cpu, memory]);
    }
    writeln!(r.out(), "=== {} Limits", app)?;
    render(r, &table, "No limits set.")
}

pub fn list(r: &Runner, app: Option<&str>) -> Result<()> {
    let ctx = r.app(app)?;
    let client = &ctx.settings.client;
    let config = r.request(client, |c| c.get_config(&ctx.app))?;
    write_limits(r, client, &ctx.app, &config.limits)
}

pub fn set(r: &Runner, app: Option<&str>, pairs: &[String]) -> Result<()> {
    let limits = parse_limits(pairs)?;
    let ctx = r.app(app)?;
    let client = &ctx.settings.client;
    let update = ConfigUpdate {
        limits: Some(limits.into_iter().map(|(k, v)| (k, Some(v))).collect()),
        ..Default::default()
    };
    let config = step(r, client, "Applying limits", |c| c.set_config(&ctx.app, &update))?;
    writeln!(r.out())?;
    write_limits(r, client, &ctx.app, &config.limits)
}

pub fn unset(r: &Runner, app: Option<&str>, ptypes: &[String]) -> Result<()> {
    if ptypes.is_empty() {
        return Err(crate::error::CliError::malformed("at least one process type is required").into());
    }
    let ctx = r.app(app)?;
    let client = &ctx.settings.client;
    let update = ConfigUpdate {
        limits: Some(ptypes.iter().map(|p| (p.clone(), None)).collect()),
        ..Default::default()
    };
    let config = step(r, client, "Removing limits", |c| c.set_config(&ctx.app, &update))?;
    writeln!(r.out())?;
    write_limits(r, client, &ctx.app, &config.limits)
}

pub fn specs(r: &Runner, keywords: Option<&str>, limit: i64) -> Result<()> {
    let s = r.settings()?;
    let limit = resolve_limit(limit, &s.profile);
    let (specs, _) = r.request(&s.client, |c| c.list_limit_specs(keywords, limit))?;
    let mut table = Table::new(["ID", "CPU", "MEMORY", "KEYWORDS"]);
    for spec in &specs {
        table.row([
            spec.id.clone(),
            summary(&spec.cpu),
            summary(&spec.memory),
            spec.keywords.join(","),
        ]);
    }
    render(r, &table, "No specs found.")
}

pub fn plans(
    r: &Runner,
    spec: Option<&str>,
    cpu: Option<u32>,
    memory: Option<u32>,
    limit: i64,
) -> Result<()> {
    let s = r.settings()?;
    let limit = resolve_limit(limit, &s.profile);
    let (plans, _) = r.request(&s.client, |c| c.list_limit_plans(spec, cpu, memory, limit))?;
    let mut table = Table::new(["ID", "SPEC", "CPU", "MEMORY"]);
    for plan in &plans {
        table.row([
            plan.id.clone(),
            plan.spec.id.clone(),
            plan.cpu.to_string(),
            format!("{}Gi", plan.memory),
        ]);
    }
    render(r, &table, "No plans found.")
}

pub fn info(r: &Runner, plan: &str) -> Result<()> {
    let s = r.settings()?;
    let plan = r.request(&s.client, |c| c.get_limit_plan(plan))?;
    let doc = serde_json::to_value(&plan)?;
    write_value(&mut r.out(), &doc, 0)?;
    Ok(())
}

/// Short text for a spec's cpu or memory description.
fn summary(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::Object(map) => ["name", "type", "size"]
            .iter()
            .find_map(|k| map.get(*k).and_then(|v| v.as_str()))
            .map(str::to_string)
            .unwrap_or_else(|| v.to_string()),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
