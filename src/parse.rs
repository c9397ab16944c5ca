//! Grammars for positional arguments.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::CliError;

static CONFIG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_\-.]+)=(.*)$").expect("config regex"));
static LIMIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z0-9]+(?:-[a-z0-9]+)*)=([-.a-zA-Z0-9]+)$").expect("limit regex")
});
static VOLUME_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z0-9]+(?:-[a-z0-9]+)*)=(/[\w][\w\-/]*)$").expect("volume path regex")
});
static SCALE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z0-9]+(?:-[a-z0-9]+)*)=([0-9]+)$").expect("scale regex"));
static SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]*[gG]$").expect("size regex"));

/// `KEY=value` pairs, in input order. A repeated key keeps its last value.
pub fn parse_config(pairs: &[String]) -> Result<Vec<(String, String)>, CliError> {
    let mut out: Vec<(String, String)> = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let caps = CONFIG_RE.captures(pair).ok_or_else(|| {
            CliError::malformed(format!(
                "'{}' does not match the pattern 'key=var', ex: MODE=test",
                pair
            ))
        })?;
        let (key, value) = (caps[1].to_string(), caps[2].to_string());
        match out.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = value,
            None => out.push((key, value)),
        }
    }
    Ok(out)
}

/// `ptype=plan` pairs.
pub fn parse_limits(pairs: &[String]) -> Result<BTreeMap<String, String>, CliError> {
    let mut out = BTreeMap::new();
    for pair in pairs {
        let caps = LIMIT_RE.captures(pair).ok_or_else(|| {
            CliError::malformed(format!(
                "'{}' does not match the pattern 'ptype=plan', ex: web=std1.large.c1m1",
                pair
            ))
        })?;
        out.insert(caps[1].to_string(), caps[2].to_string());
    }
    Ok(out)
}

/// `ptype=/mount/path` pairs.
pub fn parse_volume_paths(pairs: &[String]) -> Result<BTreeMap<String, String>, CliError> {
    let mut out = BTreeMap::new();
    for pair in pairs {
        let caps = VOLUME_PATH_RE.captures(pair).ok_or_else(|| {
            CliError::malformed(format!(
                "'{}' does not match the pattern 'ptype=/path', ex: web=/data",
                pair
            ))
        })?;
        out.insert(caps[1].to_string(), caps[2].to_string());
    }
    Ok(out)
}

/// `ptype=count` pairs.
pub fn parse_scale(pairs: &[String]) -> Result<BTreeMap<String, u32>, CliError> {
    let mut out = BTreeMap::new();
    for pair in pairs {
        let invalid = || {
            CliError::malformed(format!(
                "'{}' does not match the pattern 'ptype=num', ex: web=2",
                pair
            ))
        };
        let caps = SCALE_RE.captures(pair).ok_or_else(invalid)?;
        let count: u32 = caps[2].parse().map_err(|_| invalid())?;
        out.insert(caps[1].to_string(), count);
    }
    Ok(out)
}

/// Volume sizes are whole gigabytes: `2G` or `2g`.
pub fn check_size(size: &str) -> Result<(), CliError> {
    if SIZE_RE.is_match(size) {
        Ok(())
    } else {
        Err(CliError::malformed(format!(
            "{} doesn't fit format #unit\nExamples: 2G 2g",
            size
        )))
    }
}

/// Comma separated list, empty items dropped.
pub fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Qualify a bare name against the controller's parent domain.
///
/// Names containing a dot are returned unchanged; `test` under controller host
/// `drycc.foo.com` becomes `test.foo.com`.
pub fn expand_url(host: &str, name: &str) -> String {
    if name.contains('.') {
        return name.to_string();
    }
    match host.split_once('.') {
        Some((_, parent)) if !parent.is_empty() => format!("{}.{}", name, parent),
        _ => name.to_string(),
    }
}

/// Parse a `.env` style file: `KEY=value` lines, blanks and `#` comments skipped.
pub fn parse_env_file(contents: &str) -> Result<Vec<(String, String)>, CliError> {
    let lines: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(|l| l.strip_prefix("export ").unwrap_or(l).to_string())
        .collect();
    parse_config(&lines)
}

/// Release version as `v3` or `3`.
pub fn parse_version(s: &str) -> Result<u32, CliError> {
    s.trim_start_matches(['v', 'V'])
        .parse()
        .map_err(|_| CliError::malformed(format!("{} is not a valid release version, ex: v2", s)))
}

/// Procfile: `ptype: command` lines.
pub fn parse_procfile(contents: &str) -> Result<BTreeMap<String, String>, CliError> {
    let mut out = BTreeMap::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (ptype, command) = line
            .split_once(':')
            .filter(|(p, c)| !p.trim().is_empty() && !c.trim().is_empty())
            .ok_or_else(|| {
                CliError::malformed(format!(
                    "'{}' does not match the pattern 'ptype: command', ex: web: ./server",
                    line
                ))
            })?;
        out.insert(ptype.trim().to_string(), command.trim().to_string());
    }
    Ok(out)
}

/// Split `vol://<volume>/<path>` into the volume name and path.
pub fn parse_volume_url(s: &str) -> Option<(String, String)> {
    let rest = s.strip_prefix("vol://")?;
    let (name, path) = rest.split_once('/').unwrap_or((rest, ""));
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), path.to_string()))
}

#[cfg(test)]
#[path = "tests/parse_tests.rs"]
mod tests;
