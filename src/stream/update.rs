use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::api::error_for_response;
use crate::settings::{CLIENT_VERSION, default_user_agent};

pub const DEFAULT_BASE_URL: &str = "https://www.drycc.cc/workflow-cli/releases";

/// A published build of the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Published {
    pub version: String,
    /// File name under the release base URL.
    pub file: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    UpToDate(String),
    DryRun(Published),
    Installed { release: Published, path: PathBuf },
}

/// `-<os>-<arch>` of this build, in release naming.
pub fn platform_suffix() -> String {
    let os = match std::env::consts::OS {
        "macos" => "darwin",
        other => other,
    };
    let arch = match std::env::consts::ARCH {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "x86" => "386",
        other => other,
    };
    format!("-{}-{}", os, arch)
}

/// Pick the release for `suffix` out of an index of `drycc-<version>-<os>-<arch>` lines.
pub fn parse_index(index: &str, suffix: &str) -> Option<Published> {
    index.lines().map(str::trim).find_map(|line| {
        let stem = line.strip_suffix(".exe").unwrap_or(line);
        let version = stem.strip_prefix("drycc-")?.strip_suffix(suffix)?;
        if version.is_empty() {
            return None;
        }
        Some(Published {
            version: version.to_string(),
            file: line.to_string(),
        })
    })
}

fn same_version(a: &str, b: &str) -> bool {
    a.trim_start_matches('v') == b.trim_start_matches('v')
}

fn fetch(http: &reqwest::blocking::Client, url: &str) -> Result<Vec<u8>> {
    let resp = http.get(url).send().with_context(|| format!("fetch {}", url))?;
    let status = resp.status();
    let body = resp.bytes().with_context(|| format!("read {}", url))?;
    if let Some(err) = error_for_response(status, &body) {
        return Err(err).with_context(|| format!("fetch {}", url));
    }
    Ok(body.to_vec())
}

/// Replace the running executable with the newest published build.
pub fn self_update(base_url: &str, dry_run: bool) -> Result<UpdateOutcome> {
    let target = std::env::current_exe().context("locate current executable")?;
    update_to(base_url, CLIENT_VERSION, dry_run, &target)
}

/// [`self_update`] against an explicit version and target.
pub fn update_to(
    base_url: &str,
    current: &str,
    dry_run: bool,
    target: &Path,
) -> Result<UpdateOutcome> {
    let base = base_url.trim_end_matches('/');
    let http = reqwest::blocking::Client::builder()
        .user_agent(default_user_agent())
        .build()
        .context("build reqwest client")?;

    let index = fetch(&http, &format!("{}/index.txt", base))?;
    let index = String::from_utf8_lossy(&index);
    let suffix = platform_suffix();
    let release = parse_index(&index, &suffix)
        .with_context(|| format!("no release for platform {}", suffix.trim_start_matches('-')))?;
    tracing::debug!(latest = %release.version, %current, "checked for updates");

    if same_version(&release.version, current) {
        return Ok(UpdateOutcome::UpToDate(release.version));
    }
    if dry_run {
        return Ok(UpdateOutcome::DryRun(release));
    }

    let bytes = fetch(&http, &format!("{}/{}", base, release.file))?;
    install(&bytes, target)?;
    Ok(UpdateOutcome::Installed {
        release,
        path: target.to_path_buf(),
    })
}

/// Atomically replace `target` with `bytes`, keeping it executable.
pub fn install(bytes: &[u8], target: &Path) -> Result<()> {
    let dir = target
        .parent()
        .with_context(|| format!("{} has no parent directory", target.display()))?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("create temp file in {}", dir.display()))?;
    tmp.write_all(bytes).context("write new binary")?;
    tmp.flush().context("flush new binary")?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(tmp.path(), std::fs::Permissions::from_mode(0o755))
            .context("mark new binary executable")?;
    }

    tmp.persist(target)
        .map_err(|err| err.error)
        .with_context(|| format!("replace {}", target.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/stream/update_tests.rs"]
mod tests;
