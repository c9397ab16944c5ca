use std::path::Path;

use super::*;
use crate::test_support::FakeGit;

#[test]
fn repository_url_is_what_create_remote_writes() {
    let git = FakeGit::default();
    create_remote(&git, "drycc.example.com", "drycc", "myapp").unwrap();
    assert_eq!(
        remote_url(&git, "drycc").unwrap(),
        repository_url("drycc.example.com", "myapp")
    );
    assert_eq!(
        repository_url("drycc.example.com", "myapp"),
        "ssh://git@drycc.example.com:2222/myapp.git"
    );
}

#[test]
fn missing_remote_is_distinguished() {
    let git = FakeGit::default();
    let err = remote_url(&git, "drycc").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CliError>(),
        Some(CliError::RemoteNotFound(name)) if name == "drycc"
    ));
}

#[test]
fn create_remote_refuses_duplicates() {
    let git = FakeGit::with(&[("drycc", "ssh://git@other:2222/x.git")]);
    let err = create_remote(&git, "drycc.example.com", "drycc", "myapp").unwrap_err();
    assert!(err.to_string().contains("already exists"));
}

#[test]
fn list_remotes_skips_push_urls() {
    let git = FakeGit::with(&[("origin", "git@github.com:me/repo.git"), ("drycc", "ssh://git@h:2222/a.git")]);
    let remotes = list_remotes(&git).unwrap();
    assert_eq!(
        remotes,
        vec![
            ("origin".to_string(), "git@github.com:me/repo.git".to_string()),
            ("drycc".to_string(), "ssh://git@h:2222/a.git".to_string()),
        ]
    );
}

#[test]
fn delete_app_remotes_only_touches_matching_urls() {
    let git = FakeGit::with(&[
        ("drycc", "ssh://git@h.example.com:2222/app.git"),
        ("staging", "ssh://git@h.example.com:2222/app.git"),
        ("other", "ssh://git@h.example.com:2222/other.git"),
    ]);
    let removed = delete_app_remotes(&git, "h.example.com", "app").unwrap();
    assert_eq!(removed, vec!["drycc", "staging"]);
    assert_eq!(list_remotes(&git).unwrap().len(), 1);
}

#[test]
fn remote_urls_parse_into_host_and_app() {
    assert_eq!(
        parse_remote_url("ssh://git@drycc.example.com:2222/myapp.git"),
        Some(("drycc.example.com".to_string(), "myapp".to_string()))
    );
    assert_eq!(
        parse_remote_url("git@github.com:me/repo.git"),
        Some(("github.com".to_string(), "repo".to_string()))
    );
    assert_eq!(parse_remote_url("https://example.com/not-a-repo"), None);
}

#[test]
fn app_name_comes_from_matching_remote_then_directory() {
    let git = FakeGit::with(&[
        ("origin", "git@github.com:me/repo.git"),
        ("drycc", "ssh://git@drycc.example.com:2222/myapp.git"),
    ]);
    let cwd = Path::new("/work/checkout");
    assert_eq!(
        detect_app_name(&git, "drycc.example.com", cwd).unwrap(),
        ("myapp".to_string(), NameOrigin::Remote)
    );
    assert_eq!(
        detect_app_name(&git, "elsewhere.example.com", cwd).unwrap(),
        ("checkout".to_string(), NameOrigin::Directory)
    );
}

#[test]
fn init_runs_git_init() {
    let git = FakeGit::default();
    init(&git).unwrap();
    assert_eq!(git.calls.borrow().as_slice(), ["init"]);
}
