use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::api::{AuthToken, Client};
use crate::error::CliError;
use crate::runner::Runner;
use crate::settings::{self, Profile};
use crate::table;

const LOGIN_POLL: Duration = Duration::from_secs(2);
const LOGIN_WAIT: Duration = Duration::from_secs(300);

pub struct LoginArgs<'a> {
    pub controller: &'a str,
    pub username: Option<&'a str>,
    pub password: Option<&'a str>,
    pub ssl_verify: bool,
    pub limit: i64,
}

/// `controller.example.com/` -> `http://controller.example.com`
pub fn normalize_controller(controller: &str) -> String {
    let trimmed = controller.trim().trim_end_matches('/');
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}

pub fn login(r: &Runner, args: LoginArgs<'_>) -> Result<()> {
    let mut profile = Profile::new(normalize_controller(args.controller), args.ssl_verify);
    if args.limit > 0 {
        profile.limit = args.limit;
    }
    let client = Client::new(&profile)?;

    let token = match args.username {
        Some(username) => {
            let password = match args.password {
                Some(p) => p.to_string(),
                None => r.password("password")?,
            };
            r.request(&client, |c| c.login(username, &password))?
        }
        None => browser_login(r, &client)?,
    };

    profile.username = token.username;
    profile.token = token.token;
    let path = settings::save(&profile, r.config())?;

    let mut out = r.out();
    writeln!(out, "Logged in as {}", profile.username)?;
    writeln!(out, "Configuration file written to {}", path.display())?;
    Ok(())
}

fn browser_login(r: &Runner, client: &Client) -> Result<AuthToken> {
    let challenge = r.quiet(client, |c| c.login_challenge())?;
    let mut out = r.out();
    writeln!(out, "Opening browser to {}", challenge.url)?;
    if let Err(err) = open::that(&challenge.url) {
        tracing::debug!("could not open browser: {}", err);
        writeln!(out, "Open the URL above in a browser to continue.")?;
    }
    write!(out, "Waiting for login... ")?;
    out.flush()?;

    let started = Instant::now();
    loop {
        if let Some(token) = r.request(client, |c| c.login_token(&challenge.key))? {
            writeln!(out, "done")?;
            return Ok(token);
        }
        if started.elapsed() >= LOGIN_WAIT {
            writeln!(out)?;
            return Err(CliError::canceled("timed out waiting for browser login").into());
        }
        std::thread::sleep(LOGIN_POLL);
    }
}

/// Drop the local session. Succeeds when there is none.
pub fn logout(r: &Runner) -> Result<()> {
    match r.settings() {
        Ok(s) => {
            if let Err(err) = r.quiet(&s.client, |c| c.logout()) {
                tracing::warn!("server logout failed: {:#}", err);
            }
        }
        Err(err) => tracing::debug!("no active session: {:#}", err),
    }
    settings::delete(r.config()).context("remove profile")?;
    writeln!(r.out(), "Logged out")?;
    Ok(())
}

pub fn whoami(r: &Runner, all: bool) -> Result<()> {
    let s = r.settings()?;
    let user = r.quiet(&s.client, |c| c.whoami())?;
    let mut out = r.out();
    if !all {
        writeln!(out, "You are {} at {}", user.username, s.profile.controller)?;
        return Ok(());
    }
    writeln!(out, "ID:          {}", user.id)?;
    writeln!(out, "Username:    {}", user.username)?;
    writeln!(out, "Email:       {}", user.email)?;
    writeln!(out, "First Name:  {}", user.first_name)?;
    writeln!(out, "Last Name:   {}", user.last_name)?;
    writeln!(out, "Last Login:  {}", crate::cmd::opt(&user.last_login))?;
    writeln!(out, "Is Superuser: {}", user.is_superuser)?;
    writeln!(out, "Is Staff:    {}", user.is_staff)?;
    writeln!(out, "Is Active:   {}", user.is_active)?;
    writeln!(out, "Date Joined: {}", table::format_time(&user.date_joined))?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/cmd/auth_tests.rs"]
mod tests;
