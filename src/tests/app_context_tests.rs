use std::path::PathBuf;

use super::*;
use crate::error::CliError;
use crate::git::GitOutput;

/// Reports a fixed `git remote -v` listing, or fails like a non-repository.
struct Remotes(Option<&'static str>);

impl GitRunner for Remotes {
    fn run(&self, _args: &[&str]) -> std::io::Result<GitOutput> {
        Ok(match self.0 {
            Some(listing) => GitOutput {
                success: true,
                stdout: listing.to_string(),
                stderr: String::new(),
            },
            None => GitOutput {
                success: false,
                stdout: String::new(),
                stderr: "fatal: not a git repository".to_string(),
            },
        })
    }
}

const HOST: &str = "drycc.example.com";
const LISTING: &str = "origin\tgit@github.com:me/site.git (fetch)\n\
                       drycc\tssh://git@drycc.example.com:2222/blog.git (fetch)\n";

fn cwd() -> PathBuf {
    PathBuf::from("/home/me/projects/site-dir")
}

#[test]
fn explicit_app_wins() {
    let (app, source) =
        resolve_app(Some("flagged"), Some("from-env"), &Remotes(Some(LISTING)), HOST, &cwd()).unwrap();
    assert_eq!(app, "flagged");
    assert_eq!(source, AppSource::Flag);
}

#[test]
fn environment_beats_remotes() {
    let (app, source) = resolve_app(None, Some("from-env"), &Remotes(Some(LISTING)), HOST, &cwd()).unwrap();
    assert_eq!(app, "from-env");
    assert_eq!(source, AppSource::Env);
}

#[test]
fn empty_values_are_ignored() {
    let (app, source) = resolve_app(Some(""), Some(""), &Remotes(Some(LISTING)), HOST, &cwd()).unwrap();
    assert_eq!(app, "blog");
    assert_eq!(source, AppSource::Remote);
}

#[test]
fn remotes_for_other_controllers_fall_through_to_directory() {
    let (app, source) =
        resolve_app(None, None, &Remotes(Some(LISTING)), "other.example.com", &cwd()).unwrap();
    assert_eq!(app, "site-dir");
    assert_eq!(source, AppSource::Directory);
}

#[test]
fn git_failures_fall_through_to_directory() {
    let (app, source) = resolve_app(None, None, &Remotes(None), HOST, &cwd()).unwrap();
    assert_eq!(app, "site-dir");
    assert_eq!(source, AppSource::Directory);
}

#[test]
fn filesystem_root_cannot_name_an_app() {
    let err = resolve_app(None, None, &Remotes(None), HOST, &PathBuf::from("/")).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CliError>(),
        Some(CliError::AppNameUnresolved)
    ));
}
