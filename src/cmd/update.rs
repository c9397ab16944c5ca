use std::io::Write;

use anyhow::Result;

use crate::runner::Runner;
use crate::settings::{API_VERSION, CLIENT_VERSION};
use crate::stream::{self, UpdateOutcome};

pub fn update(r: &Runner, base_url: &str, dry_run: bool) -> Result<()> {
    let mut out = r.out();
    match stream::self_update(base_url, dry_run)? {
        UpdateOutcome::UpToDate(version) => {
            writeln!(out, "Already up to date ({}).", version)?;
        }
        UpdateOutcome::DryRun(release) => {
            writeln!(out, "Newer version available: {} ({})", release.version, release.file)?;
        }
        UpdateOutcome::Installed { release, path } => {
            writeln!(out, "Updated {} to {}", path.display(), release.version)?;
        }
    }
    Ok(())
}

pub fn version(r: &Runner, all: bool) -> Result<()> {
    let mut out = r.out();
    if !all {
        writeln!(out, "{}", CLIENT_VERSION)?;
        return Ok(());
    }
    writeln!(out, "client:     {}", CLIENT_VERSION)?;
    writeln!(out, "api:        {}", API_VERSION)?;
    match r.settings() {
        Ok(s) => {
            let server = r
                .quiet(&s.client, |c| c.whoami())
                .ok()
                .and_then(|_| s.client.server_version());
            writeln!(out, "controller: {}", server.as_deref().unwrap_or("unknown"))?;
        }
        Err(err) => tracing::debug!("no profile for version check: {:#}", err),
    }
    Ok(())
}
