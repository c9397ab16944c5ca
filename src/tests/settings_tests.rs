use super::*;

fn env_of(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| {
        vars.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    }
}

fn profile_path(dir: &tempfile::TempDir) -> String {
    dir.path().join("profiles").join("test.json").display().to_string()
}

#[cfg(unix)]
#[test]
fn names_resolve_under_home() {
    let env = env_of(&[("HOME", "/home/dev")]);
    assert_eq!(
        locate_with("", &env),
        PathBuf::from("/home/dev/.drycc/client.json")
    );
    assert_eq!(
        locate_with("staging", &env),
        PathBuf::from("/home/dev/.drycc/staging.json")
    );
}

#[cfg(unix)]
#[test]
fn profile_env_applies_only_without_a_selector() {
    let env = env_of(&[("HOME", "/home/dev"), ("DRYCC_PROFILE", "prod")]);
    assert_eq!(
        locate_with("", &env),
        PathBuf::from("/home/dev/.drycc/prod.json")
    );
    assert_eq!(
        locate_with("dev", &env),
        PathBuf::from("/home/dev/.drycc/dev.json")
    );
}

#[cfg(unix)]
#[test]
fn paths_are_expanded_and_kept() {
    let env = env_of(&[("HOME", "/home/dev"), ("CFG", "/etc/drycc")]);
    assert_eq!(
        locate_with("~/custom/p.json", &env),
        PathBuf::from("/home/dev/custom/p.json")
    );
    assert_eq!(
        locate_with("$CFG/p.json", &env),
        PathBuf::from("/etc/drycc/p.json")
    );
    assert_eq!(
        locate_with("${CFG}/p.json", &env),
        PathBuf::from("/etc/drycc/p.json")
    );
    // no `.json` suffix: treated as a profile name
    assert_eq!(
        locate_with("a/b", &env),
        PathBuf::from("/home/dev/.drycc/a/b.json")
    );
}

#[cfg(unix)]
#[test]
fn resolution_is_idempotent() {
    let env = env_of(&[("HOME", "/home/dev")]);
    for input in ["", "client", "work", "~/x/y.json", "/abs/p.json"] {
        let once = locate_with(input, &env);
        let twice = locate_with(&once.display().to_string(), &env);
        assert_eq!(once, twice, "input {input:?}");
    }
}

#[test]
fn expand_user_leaves_unknown_syntax_alone() {
    let env = env_of(&[("HOME", "/h")]);
    assert_eq!(expand_user("price$", &env), "price$");
    assert_eq!(expand_user("${open", &env), "${open");
    assert_eq!(expand_user("~user/x", &env), "~user/x");
    assert_eq!(expand_user("$MISSING/x", &env), "/x");
}

#[test]
fn missing_fields_take_defaults() {
    let profile: Profile = serde_json::from_str(r#"{"controller":"http://d.example.com"}"#).unwrap();
    assert_eq!(profile.limit, 100);
    assert!(profile.ssl_verify);
    assert_eq!(profile.user_agent, default_user_agent());
    assert!(profile.token.is_empty());
}

#[test]
fn user_agent_names_the_bare_version() {
    assert_eq!(default_user_agent(), format!("Drycc Client {}", CLIENT_VERSION));
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let config = profile_path(&dir);

    let mut profile = Profile::new("https://drycc.example.com", false);
    profile.username = "alice".to_string();
    profile.token = "secret".to_string();
    profile.limit = 25;
    let path = save(&profile, &config).unwrap();
    assert_eq!(path, PathBuf::from(&config));

    let loaded = load(&config).unwrap();
    assert_eq!(loaded.profile, profile);
    assert_eq!(loaded.client.base_url(), "https://drycc.example.com");
    assert!(!loaded.client.ssl_verify());
}

#[cfg(unix)]
#[test]
fn saved_profile_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let config = profile_path(&dir);
    let path = save(&Profile::new("http://d.example.com", true), &config).unwrap();

    let file_mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    let dir_mode = fs::metadata(path.parent().unwrap()).unwrap().permissions().mode() & 0o777;
    assert_eq!(file_mode, 0o600);
    assert_eq!(dir_mode, 0o700);
}

#[test]
fn missing_profile_is_not_logged_in() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(&profile_path(&dir)).err().unwrap();
    assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::NotLoggedIn)));
}

#[test]
fn empty_controller_is_not_logged_in() {
    let dir = tempfile::tempdir().unwrap();
    let config = profile_path(&dir);
    save(&Profile::new("", true), &config).unwrap();
    let err = load(&config).err().unwrap();
    assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::NotLoggedIn)));
}

#[test]
fn malformed_controller_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = profile_path(&dir);
    save(&Profile::new("ftp://d.example.com", true), &config).unwrap();
    let err = load(&config).err().unwrap();
    assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::Config { .. })));
}

#[test]
fn delete_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let config = profile_path(&dir);
    save(&Profile::new("http://d.example.com", true), &config).unwrap();
    delete(&config).unwrap();
    delete(&config).unwrap();
    assert!(!PathBuf::from(&config).exists());
}

#[test]
fn controller_host_drops_scheme_and_path() {
    let profile = Profile::new("https://drycc.foo.com:8443/base/", true);
    assert_eq!(profile.controller_host().unwrap(), "drycc.foo.com");
}
