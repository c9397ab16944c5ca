//! Profile store: the single JSON file that holds the local session.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::api::Client;
use crate::error::CliError;

/// API version this client speaks; sent as `Drycc-Version` on every request.
pub const API_VERSION: &str = "2.3";
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DEFAULT_LIMIT: i64 = 100;
pub const DEFAULT_PROFILE: &str = "client";

const PROFILE_ENV: &str = "DRYCC_PROFILE";
const PROFILE_DIR: &str = ".drycc";

fn default_ssl_verify() -> bool {
    true
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

pub fn default_user_agent() -> String {
    format!("Drycc Client {}", CLIENT_VERSION)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub username: String,
    #[serde(default = "default_ssl_verify")]
    pub ssl_verify: bool,
    #[serde(default)]
    pub controller: String,
    #[serde(default)]
    pub token: String,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(skip, default = "default_user_agent")]
    pub user_agent: String,
}

impl Profile {
    pub fn new(controller: impl Into<String>, ssl_verify: bool) -> Self {
        Self {
            username: String::new(),
            ssl_verify,
            controller: controller.into(),
            token: String::new(),
            limit: DEFAULT_LIMIT,
            user_agent: default_user_agent(),
        }
    }

    pub fn api_version(&self) -> &'static str {
        API_VERSION
    }

    /// Host (and port, when explicit) of the controller URL.
    pub fn controller_host(&self) -> Result<String> {
        let url = url::Url::parse(&self.controller)
            .with_context(|| format!("parse controller url {}", self.controller))?;
        url.host_str()
            .map(str::to_string)
            .with_context(|| format!("controller url {} has no host", self.controller))
    }
}

/// A loaded profile together with the client built from it.
pub struct Settings {
    pub profile: Profile,
    pub path: PathBuf,
    pub client: Client,
}

/// Load the profile selected by `config` (a name, a path, or empty).
pub fn load(config: &str) -> Result<Settings> {
    let path = locate(config);
    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(CliError::NotLoggedIn.into());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("read profile {}", path.display()));
        }
    };

    let mut profile: Profile = serde_json::from_slice(&bytes).map_err(|err| CliError::Config {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;
    if profile.controller.is_empty() {
        return Err(CliError::NotLoggedIn.into());
    }
    validate_controller(&profile.controller).map_err(|reason| CliError::Config {
        path: path.display().to_string(),
        reason,
    })?;
    if profile.limit <= 0 {
        profile.limit = DEFAULT_LIMIT;
    }
    if profile.user_agent.is_empty() {
        profile.user_agent = default_user_agent();
    }

    let client = Client::new(&profile)?;
    tracing::debug!(path = %path.display(), controller = %profile.controller, "loaded profile");
    Ok(Settings {
        profile,
        path,
        client,
    })
}

/// Persist `profile` to the location selected by `config`, returning the path.
pub fn save(profile: &Profile, config: &str) -> Result<PathBuf> {
    let path = locate(config);
    let bytes = serde_json::to_vec_pretty(profile).context("serialize profile")?;
    write_private(&path, &bytes).with_context(|| format!("write profile {}", path.display()))?;
    Ok(path)
}

/// Remove the profile selected by `config`. A missing file is not an error.
pub fn delete(config: &str) -> Result<()> {
    let path = locate(config);
    match fs::remove_file(&path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err).with_context(|| format!("remove profile {}", path.display())),
    }
}

fn validate_controller(controller: &str) -> std::result::Result<(), String> {
    let url = url::Url::parse(controller).map_err(|err| format!("controller url: {}", err))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("unsupported controller scheme {}", other)),
    }
    if url.host_str().is_none() {
        return Err("controller url has no host".to_string());
    }
    Ok(())
}

/// Resolve the profile path for `config`.
///
/// A value that looks like a path (contains a separator and ends in `.json`)
/// is used as-is after `~` and `$VAR` expansion; otherwise it names a profile
/// under `<home>/.drycc/`. An empty value falls back to `DRYCC_PROFILE`, then
/// to `client`.
pub fn locate(config: &str) -> PathBuf {
    locate_with(config, &|key| std::env::var(key).ok())
}

pub(crate) fn locate_with(config: &str, env: &dyn Fn(&str) -> Option<String>) -> PathBuf {
    let selector = if config.is_empty() {
        env(PROFILE_ENV).unwrap_or_else(|| DEFAULT_PROFILE.to_string())
    } else {
        config.to_string()
    };

    if looks_like_path(&selector) {
        return PathBuf::from(expand_user(&selector, env));
    }

    home_with(env)
        .join(PROFILE_DIR)
        .join(format!("{}.json", selector))
}

fn looks_like_path(s: &str) -> bool {
    (s.contains('/') || s.contains('\\')) && s.ends_with(".json")
}

/// Home directory: `HOME`, or `HOMEDRIVE` + `HOMEPATH` on Windows.
pub fn home() -> PathBuf {
    home_with(&|key| std::env::var(key).ok())
}

fn home_with(env: &dyn Fn(&str) -> Option<String>) -> PathBuf {
    if cfg!(windows) {
        let drive = env("HOMEDRIVE").unwrap_or_default();
        let path = env("HOMEPATH").unwrap_or_default();
        PathBuf::from(format!("{}{}", drive, path))
    } else {
        PathBuf::from(env("HOME").unwrap_or_default())
    }
}

/// Point home discovery at `dir`. Only meant for tests.
pub fn set_home(dir: &Path) {
    // SAFETY: callers are single-threaded test setup code.
    unsafe {
        if cfg!(windows) {
            let s = dir.display().to_string();
            let (drive, rest) = match s.find(':') {
                Some(idx) => s.split_at(idx + 1),
                None => ("", s.as_str()),
            };
            std::env::set_var("HOMEDRIVE", drive);
            std::env::set_var("HOMEPATH", rest);
        } else {
            std::env::set_var("HOME", dir);
        }
    }
}

/// Expand a leading `~` and any `$VAR` / `${VAR}` references.
pub(crate) fn expand_user(s: &str, env: &dyn Fn(&str) -> Option<String>) -> String {
    let s = match s.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') => {
            format!("{}{}", home_with(env).display(), rest)
        }
        _ => s.to_string(),
    };

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        let braced = chars.peek() == Some(&'{');
        if braced {
            chars.next();
        }
        let mut name = String::new();
        while let Some(&n) = chars.peek() {
            if n.is_ascii_alphanumeric() || n == '_' {
                name.push(n);
                chars.next();
            } else {
                break;
            }
        }
        if braced {
            if chars.peek() == Some(&'}') {
                chars.next();
            } else {
                out.push_str("${");
                out.push_str(&name);
                continue;
            }
        }
        if name.is_empty() {
            out.push('$');
            continue;
        }
        out.push_str(&env(&name).unwrap_or_default());
    }
    out
}

fn write_private(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        create_private_dir(parent)?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    write_private_file(&tmp, bytes)
        .with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new()
        .recursive(true)
        .mode(0o700)
        .create(dir)
        .with_context(|| format!("create {}", dir.display()))
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))
}

#[cfg(unix)]
fn write_private_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;
    let mut f = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    f.write_all(bytes)
}

#[cfg(not(unix))]
fn write_private_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    fs::write(path, bytes)
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
