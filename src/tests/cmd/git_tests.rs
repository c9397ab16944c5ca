use super::*;
use crate::console::Console;
use crate::test_support::{FakeGit, write_profile};

const REPO: &str = "ssh://git@drycc.example.com:2222/myapp.git";

fn runner(git: &FakeGit) -> (Runner, crate::console::Capture, tempfile::TempDir) {
    let home = tempfile::tempdir().unwrap();
    let config = write_profile(home.path(), "http://drycc.example.com");
    let (console, capture) = Console::captured();
    (Runner::new(config, console).with_git(git.clone()), capture, home)
}

#[test]
fn missing_remote_is_created() {
    let git = FakeGit::default();
    let (r, capture, _home) = runner(&git);
    remote(&r, Some("myapp"), "drycc", false).unwrap();
    assert_eq!(
        git.remotes.borrow().as_slice(),
        [("drycc".to_string(), REPO.to_string())]
    );
    assert_eq!(
        capture.stdout(),
        "Git remote drycc successfully created for app myapp.\n"
    );
}

#[test]
fn correct_remote_is_left_alone() {
    let git = FakeGit::with(&[("drycc", REPO)]);
    let (r, capture, _home) = runner(&git);
    remote(&r, Some("myapp"), "drycc", false).unwrap();
    assert!(capture.stdout().contains("already exists and is correctly configured"));
    assert!(!git.calls.borrow().iter().any(|c| c.starts_with("remote add")));
}

#[test]
fn foreign_remote_needs_force() {
    let git = FakeGit::with(&[("drycc", "ssh://git@drycc.example.com:2222/other.git")]);
    let (r, _capture, _home) = runner(&git);
    let err = remote(&r, Some("myapp"), "drycc", false).unwrap_err();
    assert!(err.to_string().contains("drycc git remote -f"));

    remote(&r, Some("myapp"), "drycc", true).unwrap();
    assert_eq!(
        git.remotes.borrow().as_slice(),
        [("drycc".to_string(), REPO.to_string())]
    );
}

#[test]
fn remove_reports_when_nothing_matches() {
    let git = FakeGit::with(&[("origin", "git@github.com:me/site.git")]);
    let (r, capture, _home) = runner(&git);
    remove(&r, Some("myapp")).unwrap();
    assert_eq!(capture.stdout(), "No git remotes for app myapp found.\n");
    assert_eq!(git.names(), ["origin"]);
}
