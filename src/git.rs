//! Bridge to the `git` binary for app remotes.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};

use crate::error::CliError;

/// Port the builder accepts pushes on.
pub const BUILDER_PORT: u16 = 2222;
pub const DEFAULT_REMOTE: &str = "drycc";

#[derive(Clone, Debug, Default)]
pub struct GitOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Executes git subcommands. Swapped out in tests.
pub trait GitRunner {
    fn run(&self, args: &[&str]) -> std::io::Result<GitOutput>;
}

/// Runs the `git` found on `PATH` in the current directory.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemGit;

impl GitRunner for SystemGit {
    fn run(&self, args: &[&str]) -> std::io::Result<GitOutput> {
        tracing::debug!(?args, "git");
        let out = Command::new("git").args(args).output()?;
        Ok(GitOutput {
            success: out.status.success(),
            stdout: String::from_utf8_lossy(&out.stdout).to_string(),
            stderr: String::from_utf8_lossy(&out.stderr).to_string(),
        })
    }
}

fn git_ok(git: &dyn GitRunner, args: &[&str]) -> Result<String> {
    let out = git
        .run(args)
        .with_context(|| format!("run git {}", args.join(" ")))?;
    if !out.success {
        anyhow::bail!("git {} failed: {}", args.join(" "), out.stderr.trim());
    }
    Ok(out.stdout)
}

/// The canonical remote URL for an app on a controller host.
pub fn repository_url(host: &str, app: &str) -> String {
    format!("ssh://git@{}:{}/{}.git", host, BUILDER_PORT, app)
}

pub fn init(git: &dyn GitRunner) -> Result<()> {
    git_ok(git, &["init"]).map(|_| ())
}

/// URL of remote `name`, or [`CliError::RemoteNotFound`].
pub fn remote_url(git: &dyn GitRunner, name: &str) -> Result<String> {
    let out = git
        .run(&["remote", "get-url", name])
        .with_context(|| format!("run git remote get-url {}", name))?;
    if out.success {
        return Ok(out.stdout.trim().to_string());
    }
    if out.stderr.contains("No such remote") {
        return Err(CliError::RemoteNotFound(name.to_string()).into());
    }
    anyhow::bail!("git remote get-url {} failed: {}", name, out.stderr.trim())
}

pub fn create_remote(git: &dyn GitRunner, host: &str, name: &str, app: &str) -> Result<()> {
    let url = repository_url(host, app);
    let out = git
        .run(&["remote", "add", name, &url])
        .with_context(|| format!("run git remote add {}", name))?;
    if !out.success {
        if out.stderr.contains("already exists") {
            anyhow::bail!("remote {} already exists", name);
        }
        anyhow::bail!("git remote add {} failed: {}", name, out.stderr.trim());
    }
    Ok(())
}

pub fn delete_remote(git: &dyn GitRunner, name: &str) -> Result<()> {
    git_ok(git, &["remote", "remove", name]).map(|_| ())
}

/// All `(name, url)` pairs, fetch URLs only.
pub fn list_remotes(git: &dyn GitRunner) -> Result<Vec<(String, String)>> {
    let stdout = git_ok(git, &["remote", "-v"])?;
    let mut remotes: Vec<(String, String)> = Vec::new();
    for line in stdout.lines() {
        let mut fields = line.split_whitespace();
        let (Some(name), Some(url)) = (fields.next(), fields.next()) else {
            continue;
        };
        if fields.next() == Some("(push)") {
            continue;
        }
        if !remotes.iter().any(|(n, _)| n == name) {
            remotes.push((name.to_string(), url.to_string()));
        }
    }
    Ok(remotes)
}

/// Remove every remote pointing at `app` on `host`; returns the removed names.
pub fn delete_app_remotes(git: &dyn GitRunner, host: &str, app: &str) -> Result<Vec<String>> {
    let expected = repository_url(host, app);
    let mut removed = Vec::new();
    for (name, url) in list_remotes(git)? {
        if url == expected {
            delete_remote(git, &name)?;
            removed.push(name);
        }
    }
    Ok(removed)
}

/// Split a remote URL into `(host, app)` when it points at an app repository.
pub fn parse_remote_url(remote: &str) -> Option<(String, String)> {
    let (host, path) = match url::Url::parse(remote) {
        Ok(u) if u.has_host() => (u.host_str()?.to_string(), u.path().to_string()),
        _ => {
            // scp-like `git@host:app.git`
            let (authority, path) = remote.split_once(':')?;
            let host = authority.rsplit('@').next()?;
            (host.to_string(), path.to_string())
        }
    };
    let app = path
        .trim_matches('/')
        .rsplit('/')
        .next()?
        .strip_suffix(".git")?
        .to_string();
    if app.is_empty() {
        return None;
    }
    Some((host, app))
}

/// App id from the first remote that targets `host`.
pub fn find_app_remote(git: &dyn GitRunner, host: &str) -> Result<Option<String>> {
    for (name, url) in list_remotes(git)? {
        if let Some((remote_host, app)) = parse_remote_url(&url)
            && remote_host == host
        {
            tracing::debug!(remote = %name, %app, "matched app remote");
            return Ok(Some(app));
        }
    }
    Ok(None)
}

/// Where [`detect_app_name`] found the app id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameOrigin {
    Remote,
    Directory,
}

/// App id from a matching remote, else the basename of `cwd`.
pub fn detect_app_name(git: &dyn GitRunner, host: &str, cwd: &Path) -> Result<(String, NameOrigin)> {
    match find_app_remote(git, host) {
        Ok(Some(app)) => return Ok((app, NameOrigin::Remote)),
        Ok(None) => {}
        Err(err) => tracing::debug!("skipping git remotes: {:#}", err),
    }
    let name = cwd
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .ok_or(CliError::AppNameUnresolved)?;
    Ok((name.to_string(), NameOrigin::Directory))
}

#[cfg(test)]
#[path = "tests/git_tests.rs"]
mod tests;
