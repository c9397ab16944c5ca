//! The per-app boolean switches: autodeploy, autorollback and routable.

use std::io::Write;

use anyhow::Result;

use crate::api::{AppSettings, AppSettingsUpdate};
use crate::cmd::step;
use crate::runner::Runner;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Autodeploy,
    Autorollback,
    Routable,
}

impl Toggle {
    pub fn name(self) -> &'static str {
        match self {
            Toggle::Autodeploy => "autodeploy",
            Toggle::Autorollback => "autorollback",
            Toggle::Routable => "routable",
        }
    }

    fn read(self, s: &AppSettings) -> bool {
        match self {
            Toggle::Autodeploy => s.autodeploy,
            Toggle::Autorollback => s.autorollback,
            Toggle::Routable => s.routable,
        }
    }

    fn update(self, on: bool) -> AppSettingsUpdate {
        let mut update = AppSettingsUpdate::default();
        match self {
            Toggle::Autodeploy => update.autodeploy = Some(on),
            Toggle::Autorollback => update.autorollback = Some(on),
            Toggle::Routable => update.routable = Some(on),
        }
        update
    }
}

pub fn info(r: &Runner, app: Option<&str>, toggle: Toggle) -> Result<()> {
    let ctx = r.app(app)?;
    let settings = r.request(&ctx.settings.client, |c| c.get_app_settings(&ctx.app))?;
    let mut out = r.out();
    writeln!(out, "=== {} {}", ctx.app, toggle.name())?;
    writeln!(out, "{}: {}", toggle.name(), toggle.read(&settings))?;
    Ok(())
}

pub fn set(r: &Runner, app: Option<&str>, toggle: Toggle, on: bool) -> Result<()> {
    let ctx = r.app(app)?;
    let label = format!(
        "{} {} for {}",
        if on { "Enabling" } else { "Disabling" },
        toggle.name(),
        ctx.app
    );
    let update = toggle.update(on);
    step(r, &ctx.settings.client, label, |c| c.set_app_settings(&ctx.app, &update))?;
    Ok(())
}
