use std::io::Write;

use anyhow::Result;

use crate::error::CliError;
use crate::git;
use crate::runner::Runner;

/// Point `remote` at the app, creating it when absent.
///
/// An existing remote with a different URL is left alone unless `force`.
pub fn remote(r: &Runner, app: Option<&str>, remote: &str, force: bool) -> Result<()> {
    let ctx = r.app(app)?;
    let host = ctx.settings.profile.controller_host()?;
    let expected = git::repository_url(&host, &ctx.app);
    let mut out = r.out();

    match git::remote_url(r.git(), remote) {
        Ok(url) if url == expected => {
            writeln!(out, "Remote {} already exists and is correctly configured for app {}.", remote, ctx.app)?;
            return Ok(());
        }
        Ok(url) if !force => {
            anyhow::bail!(
                "Remote {} already exists, please run 'drycc git remote -f' to overwrite\nExisting remote URL: {}",
                remote,
                url
            );
        }
        Ok(_) => {
            writeln!(out, "Deleting old {} remote...", remote)?;
            git::delete_remote(r.git(), remote)?;
        }
        Err(err) if matches!(err.downcast_ref::<CliError>(), Some(CliError::RemoteNotFound(_))) => {}
        Err(err) => return Err(err),
    }

    git::create_remote(r.git(), &host, remote, &ctx.app)?;
    writeln!(out, "Git remote {} successfully created for app {}.", remote, ctx.app)?;
    Ok(())
}

/// Delete every remote that points at the app.
pub fn remove(r: &Runner, app: Option<&str>) -> Result<()> {
    let ctx = r.app(app)?;
    let host = ctx.settings.profile.controller_host()?;
    let removed = git::delete_app_remotes(r.git(), &host, &ctx.app)?;
    let mut out = r.out();
    if removed.is_empty() {
        writeln!(out, "No git remotes for app {} found.", ctx.app)?;
    }
    for name in removed {
        writeln!(out, "Git remote {} removed", name)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/cmd/git_tests.rs"]
mod tests;
