use std::process::Command;

use anyhow::{Context, Result};

fn run_drycc(args: &[&str]) -> Result<String> {
    let out = Command::new(env!("CARGO_BIN_EXE_drycc"))
        .args(args)
        .output()
        .with_context(|| format!("run drycc {:?}", args))?;

    if !out.status.success() {
        anyhow::bail!(
            "drycc {:?} failed (status {:?})\nstdout:\n{}\nstderr:\n{}",
            args,
            out.status,
            String::from_utf8_lossy(&out.stdout),
            String::from_utf8_lossy(&out.stderr)
        );
    }

    Ok(String::from_utf8_lossy(&out.stdout).to_string())
}

#[test]
fn cli_help_surface_is_stable() -> Result<()> {
    let help = run_drycc(&["--help"])?;
    assert!(help.contains("Usage: drycc"));
    for noun in ["apps", "config", "ps", "pts", "volumes", "routes", "resources", "login"] {
        assert!(help.contains(noun), "missing {noun} in:\n{help}");
    }
    assert!(!help.contains("__complete"));

    let volumes = run_drycc(&["volumes", "--help"])?;
    assert!(volumes.contains("Usage: drycc volumes [OPTIONS] <COMMAND>"));
    for verb in ["add", "expand", "mount", "unmount", "client", "serve"] {
        assert!(volumes.contains(verb), "missing {verb} in:\n{volumes}");
    }

    let config = run_drycc(&["config", "--help"])?;
    for verb in ["set", "unset", "pull", "push", "attach", "detach"] {
        assert!(config.contains(verb), "missing {verb} in:\n{config}");
    }

    Ok(())
}

#[test]
fn version_prints_the_package_version() -> Result<()> {
    let out = run_drycc(&["version"])?;
    assert_eq!(out.trim(), env!("CARGO_PKG_VERSION"));
    Ok(())
}

#[test]
fn completion_scripts_are_generated() -> Result<()> {
    let script = run_drycc(&["completion", "bash"])?;
    assert!(script.contains("drycc"));
    Ok(())
}
