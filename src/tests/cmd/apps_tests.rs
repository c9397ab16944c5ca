use super::*;
use crate::console::Console;
use crate::test_support::{FakeController, FakeGit, write_profile};

#[test]
fn destroy_removes_the_apps_git_remotes() {
    let controller = FakeController::start(&[("DELETE", "/v2/apps/myapp/", 204, serde_json::Value::Null)]);
    let home = tempfile::tempdir().unwrap();
    let config = write_profile(home.path(), &controller.base_url);
    let git = FakeGit::with(&[
        ("drycc", "ssh://git@127.0.0.1:2222/myapp.git"),
        ("origin", "git@github.com:me/myapp.git"),
    ]);
    let (console, capture) = Console::captured();
    let r = Runner::new(config, console).with_git(git.clone());

    destroy(&r, Some("myapp"), "myapp").unwrap();

    assert_eq!(controller.hits("DELETE", "/v2/apps/myapp/"), 1);
    let stdout = capture.stdout();
    assert!(stdout.contains("Destroying myapp..."));
    assert!(stdout.contains("Git remote drycc removed"));
    assert_eq!(git.names(), ["origin"]);
}

#[test]
fn destroy_aborts_on_a_wrong_answer() {
    let controller = FakeController::start(&[("DELETE", "/v2/apps/myapp/", 204, serde_json::Value::Null)]);
    let home = tempfile::tempdir().unwrap();
    let config = write_profile(home.path(), &controller.base_url);
    let git = FakeGit::with(&[("drycc", "ssh://git@127.0.0.1:2222/myapp.git")]);
    let (console, capture) = Console::captured();
    let r = Runner::new(config, console.with_input(std::io::Cursor::new("nope\n"))).with_git(git.clone());

    let err = destroy(&r, Some("myapp"), "").unwrap_err();

    assert_eq!(err.to_string(), "app myapp does not match confirm nope, aborting");
    assert!(capture.stdout().contains("This command will destroy the application: myapp"));
    assert_eq!(controller.hits("DELETE", "/v2/apps/myapp/"), 0);
    assert_eq!(git.names(), ["drycc"]);
}
