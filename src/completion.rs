//! Dynamic shell completion candidates fetched from the controller.

use anyhow::Result;

use crate::api::Client;
use crate::error::CliError;
use crate::runner::Runner;

/// Everything the completion helper knows how to list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum CompletionKind {
    Apps,
    Ptypes,
    Routes,
    Certs,
    Gateways,
    Plans,
    Specs,
    Services,
    Resources,
    ResourcePlans,
    Domains,
    Tokens,
    Volumes,
    Perms,
}

impl CompletionKind {
    fn app_scoped(self) -> bool {
        matches!(
            self,
            CompletionKind::Ptypes
                | CompletionKind::Routes
                | CompletionKind::Certs
                | CompletionKind::Gateways
                | CompletionKind::Resources
                | CompletionKind::Domains
                | CompletionKind::Volumes
                | CompletionKind::Perms
        )
    }
}

/// Candidates for `kind` starting with `prefix`, sorted and deduplicated.
///
/// `arg` carries the service id for [`CompletionKind::ResourcePlans`].
pub fn complete(
    r: &Runner,
    kind: CompletionKind,
    app: Option<&str>,
    arg: Option<&str>,
    prefix: &str,
) -> Result<Vec<String>> {
    let mut names = if kind.app_scoped() {
        let ctx = r.app(app)?;
        let client = &ctx.settings.client;
        let names = app_candidates(client, kind, &ctx.app)?;
        r.check_api(client, Ok(()))?;
        names
    } else {
        let s = r.settings()?;
        let names = account_candidates(&s.client, kind, arg)?;
        r.check_api(&s.client, Ok(()))?;
        names
    };
    names.retain(|n| n.starts_with(prefix));
    names.sort();
    names.dedup();
    Ok(names)
}

fn app_candidates(client: &Client, kind: CompletionKind, app: &str) -> Result<Vec<String>> {
    let names = match kind {
        CompletionKind::Ptypes => names(client.list_ptypes(app, -1)?.0, |p| p.name),
        CompletionKind::Routes => names(client.list_routes(app, -1)?.0, |r| r.name),
        CompletionKind::Certs => names(client.list_certs(app, -1)?.0, |c| c.name),
        CompletionKind::Gateways => names(client.list_gateways(app, -1)?.0, |g| g.name),
        CompletionKind::Resources => names(client.list_resources(app, -1)?.0, |r| r.name),
        CompletionKind::Domains => names(client.list_domains(app, -1)?.0, |d| d.domain),
        CompletionKind::Volumes => names(client.list_volumes(app, -1)?.0, |v| v.name),
        CompletionKind::Perms => names(client.list_perms(app, -1)?.0, |p| p.username),
        _ => Vec::new(),
    };
    Ok(names)
}

fn account_candidates(
    client: &Client,
    kind: CompletionKind,
    arg: Option<&str>,
) -> Result<Vec<String>> {
    let names = match kind {
        CompletionKind::Apps => names(client.list_apps(-1)?.0, |a| a.id),
        CompletionKind::Plans => {
            names(client.list_limit_plans(None, None, None, -1)?.0, |p| p.id)
        }
        CompletionKind::Specs => names(client.list_limit_specs(None, -1)?.0, |s| s.id),
        CompletionKind::Services => names(client.list_resource_services(-1)?.0, |s| s.name),
        CompletionKind::ResourcePlans => {
            let service = arg
                .filter(|s| !s.is_empty())
                .ok_or_else(|| CliError::malformed("resource-plans needs a service name"))?;
            names(client.list_resource_plans(service, -1)?.0, |p| {
                format!("{}:{}", service, p.name)
            })
        }
        CompletionKind::Tokens => names(client.list_tokens(-1)?.0, |t| t.uuid),
        _ => Vec::new(),
    };
    Ok(names)
}

fn names<T>(items: Vec<T>, f: impl Fn(T) -> String) -> Vec<String> {
    items.into_iter().map(f).collect()
}

#[cfg(test)]
#[path = "tests/completion_tests.rs"]
mod tests;
