//! Which application a command targets.

use std::path::Path;

use anyhow::{Context, Result};

use crate::git::{self, GitRunner, NameOrigin};
use crate::settings::{self, Settings};

pub const APP_ENV: &str = "DRYCC_APP";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppSource {
    Flag,
    Env,
    Remote,
    Directory,
}

pub struct AppContext {
    pub app: String,
    pub settings: Settings,
    pub source: AppSource,
}

/// Load the profile and resolve the target app.
///
/// Precedence: explicit value, `DRYCC_APP`, a git remote pointing at the
/// profile's controller, then the current directory's name.
pub fn load_app_settings(
    config: &str,
    explicit: Option<&str>,
    git: &dyn GitRunner,
) -> Result<AppContext> {
    let settings = settings::load(config)?;
    let env_app = std::env::var(APP_ENV).ok();
    let cwd = std::env::current_dir().context("get current dir")?;
    let host = settings.profile.controller_host()?;
    let (app, source) = resolve_app(explicit, env_app.as_deref(), git, &host, &cwd)?;
    tracing::debug!(%app, ?source, "resolved app");
    Ok(AppContext {
        app,
        settings,
        source,
    })
}

pub fn resolve_app(
    explicit: Option<&str>,
    env_app: Option<&str>,
    git: &dyn GitRunner,
    host: &str,
    cwd: &Path,
) -> Result<(String, AppSource)> {
    if let Some(app) = explicit.filter(|a| !a.is_empty()) {
        return Ok((app.to_string(), AppSource::Flag));
    }
    if let Some(app) = env_app.filter(|a| !a.is_empty()) {
        return Ok((app.to_string(), AppSource::Env));
    }
    let (app, origin) = git::detect_app_name(git, host, cwd)?;
    let source = match origin {
        NameOrigin::Remote => AppSource::Remote,
        NameOrigin::Directory => AppSource::Directory,
    };
    Ok((app, source))
}

#[cfg(test)]
#[path = "tests/app_context_tests.rs"]
mod tests;
