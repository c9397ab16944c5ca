//! The per-command orchestration shared by every verb.

use std::cell::Cell;
use std::io::Write;
use std::time::Instant;

use anyhow::Result;

use crate::api::{ApiError, ApiResult, Client};
use crate::app_context::{self, AppContext};
use crate::console::{Console, Writer};
use crate::error::CliError;
use crate::git::{GitRunner, SystemGit};
use crate::progress::progress;
use crate::settings::{self, Profile, Settings};

pub const GLOBAL_GROUP: &str = "global";
const DRINK_ENV: &str = "DRYCC_DRINK_OF_CHOICE";

/// Whether the API version warning has been shown in this process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompatWarning {
    Pristine,
    AlreadyWarned,
}

pub struct Runner {
    config: String,
    console: Console,
    git: Box<dyn GitRunner>,
    warning: Cell<CompatWarning>,
}

impl Runner {
    /// `config` selects the profile: a name, a path, or empty for the default.
    pub fn new(config: impl Into<String>, console: Console) -> Self {
        Self {
            config: config.into(),
            console,
            git: Box::new(SystemGit),
            warning: Cell::new(CompatWarning::Pristine),
        }
    }

    pub fn with_git(self, git: impl GitRunner + 'static) -> Self {
        Self {
            git: Box::new(git),
            ..self
        }
    }

    pub fn config(&self) -> &str {
        &self.config
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn out(&self) -> Writer {
        self.console.out()
    }

    pub fn err(&self) -> Writer {
        self.console.err()
    }

    pub fn git(&self) -> &dyn GitRunner {
        self.git.as_ref()
    }

    pub fn compat_warning(&self) -> CompatWarning {
        self.warning.get()
    }

    /// Load the profile for account-scoped verbs.
    pub fn settings(&self) -> Result<Settings> {
        settings::load(&self.config)
    }

    /// Load the profile and resolve the target app for app-scoped verbs.
    pub fn app(&self, app: Option<&str>) -> Result<AppContext> {
        app_context::load_app_settings(&self.config, app, self.git.as_ref())
    }

    /// Run `call` with the progress ticker on stdout.
    ///
    /// The ticker is stopped (and its frame erased) before this returns, so
    /// callers may print their result line right away.
    pub fn request<T>(
        &self,
        client: &Client,
        call: impl FnOnce(&Client) -> ApiResult<T>,
    ) -> Result<T> {
        let ticker = progress(self.out());
        let res = call(client);
        ticker.stop();
        self.check_api(client, res)
    }

    /// Like [`Runner::request`] without the ticker.
    pub fn quiet<T>(&self, client: &Client, call: impl FnOnce(&Client) -> ApiResult<T>) -> Result<T> {
        let res = call(client);
        self.check_api(client, res)
    }

    /// Apply the compatibility filter: a version mismatch is reported once per
    /// process and otherwise ignored; every other error propagates.
    pub fn check_api<T>(&self, client: &Client, res: ApiResult<T>) -> Result<T> {
        match client.check_api_compatibility() {
            Err(ApiError::ApiMismatch { client, server }) => self.warn_mismatch(&client, &server),
            Err(err) => tracing::warn!("compatibility check failed: {}", err),
            Ok(()) => {}
        }
        match res {
            Ok(v) => Ok(v),
            Err(ApiError::ApiMismatch { client, server }) => {
                self.warn_mismatch(&client, &server);
                Err(anyhow::anyhow!("API version mismatch"))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn warn_mismatch(&self, client: &str, server: &str) {
        if self.warning.get() == CompatWarning::AlreadyWarned {
            return;
        }
        self.warning.set(CompatWarning::AlreadyWarned);
        let mut err = self.err();
        let _ = writeln!(
            err,
            "!    WARNING: Client and server API versions do not match. Please consider upgrading.\n\
             !    Client version: {}\n\
             !    Server version: {}",
            client, server
        );
    }

    /// Return `confirm` when given; otherwise print `warning` and read a line.
    ///
    /// Without a terminal on stdin nothing is asked and the answer is empty.
    pub fn prompt(&self, warning: &str, confirm: &str) -> Result<String> {
        if !confirm.is_empty() {
            return Ok(confirm.to_string());
        }
        if !self.console.interactive() {
            tracing::debug!("stdin is not a terminal; skipping confirmation prompt");
            return Ok(String::new());
        }
        let mut out = self.out();
        write!(out, "{}", warning)?;
        out.flush()?;
        self.console.read_line()
    }

    pub fn password(&self, prompt: &str) -> Result<String> {
        self.console.read_password(prompt)
    }

    /// Gate a change to the global config group behind a literal `yes` when
    /// the app deploys automatically.
    pub fn confirm_global_config(
        &self,
        client: &Client,
        app: &str,
        target: &ConfigTarget,
        confirm: &str,
    ) -> Result<()> {
        if !target.is_global() || confirm == "yes" {
            return Ok(());
        }
        if !confirm.is_empty() {
            return Err(CliError::canceled("cancel the config action").into());
        }
        let app_settings = self.quiet(client, |c| c.get_app_settings(app))?;
        if !app_settings.autodeploy {
            return Ok(());
        }
        let warning = format!(
            " !    WARNING: Potentially Disruptive Action\n \
             !    This command will change the global config group of app: {}\n \
             !    and, with autodeploy enabled, restart every process that uses it.\n \
             !    To proceed, type \"yes\" !\n\n> ",
            app
        );
        let answer = self.prompt(&warning, "")?;
        if answer.trim() != "yes" {
            return Err(CliError::canceled("cancel the config action").into());
        }
        Ok(())
    }
}

/// Where a config change applies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigTarget {
    Ptype(String),
    Group(String),
}

impl ConfigTarget {
    /// Exactly one of `ptype` and `group`; neither means the `global` group.
    pub fn resolve(ptype: Option<&str>, group: Option<&str>) -> Result<Self, CliError> {
        let ptype = ptype.filter(|p| !p.is_empty());
        let group = group.filter(|g| !g.is_empty());
        match (ptype, group) {
            (Some(_), Some(_)) => Err(CliError::malformed(
                "Only one of ptype and group can be selected.",
            )),
            (Some(p), None) => Ok(Self::Ptype(p.to_string())),
            (None, Some(g)) => Ok(Self::Group(g.to_string())),
            (None, None) => Ok(Self::Group(GLOBAL_GROUP.to_string())),
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self, Self::Group(g) if g == GLOBAL_GROUP)
    }

    pub fn matches(&self, ptype: Option<&str>, group: Option<&str>) -> bool {
        match self {
            Self::Ptype(p) => ptype == Some(p.as_str()),
            Self::Group(g) => group == Some(g.as_str()) || (ptype.is_none() && group.is_none() && g == GLOBAL_GROUP),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Ptype(p) => format!("ptype {}", p),
            Self::Group(g) => format!("group {}", g),
        }
    }
}

/// User-facing page size: `0` (unset) and negatives use the profile default.
pub fn resolve_limit(limit: i64, profile: &Profile) -> i64 {
    if limit > 0 { limit } else { profile.limit }
}

pub fn drink_of_choice() -> String {
    std::env::var(DRINK_ENV)
        .ok()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| "coffee".to_string())
}

/// Whole seconds since `start`, for `done in Ns` lines.
pub fn elapsed_secs(start: Instant) -> u64 {
    start.elapsed().as_secs()
}

#[cfg(test)]
#[path = "tests/runner_tests.rs"]
mod tests;
