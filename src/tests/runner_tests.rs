use std::io::Cursor;

use super::*;
use crate::api::API_VERSION_HEADER;
use crate::test_support::FakeController;

fn client() -> Client {
    Client::new(&Profile::new("http://drycc.example.com", true)).unwrap()
}

fn mismatched_client() -> Client {
    let c = client();
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(API_VERSION_HEADER, "9.1".parse().unwrap());
    c.record_server_version(&headers);
    c
}

#[test]
fn config_target_defaults_to_global_group() {
    let target = ConfigTarget::resolve(None, Some("")).unwrap();
    assert_eq!(target, ConfigTarget::Group("global".to_string()));
    assert!(target.is_global());
    assert_eq!(target.describe(), "group global");
}

#[test]
fn config_target_takes_one_selector() {
    assert_eq!(
        ConfigTarget::resolve(Some("web"), None).unwrap(),
        ConfigTarget::Ptype("web".to_string())
    );
    assert!(!ConfigTarget::resolve(None, Some("db")).unwrap().is_global());
    let err = ConfigTarget::resolve(Some("web"), Some("db")).unwrap_err();
    assert_eq!(err.to_string(), "Only one of ptype and group can be selected.");
}

#[test]
fn config_target_matches_entries() {
    let web = ConfigTarget::Ptype("web".to_string());
    assert!(web.matches(Some("web"), None));
    assert!(!web.matches(None, Some("web")));

    let global = ConfigTarget::Group(GLOBAL_GROUP.to_string());
    assert!(global.matches(None, Some("global")));
    assert!(global.matches(None, None));
    assert!(!global.matches(Some("web"), None));
}

#[test]
fn non_positive_limits_use_the_profile_default() {
    let mut profile = Profile::new("http://d.example.com", true);
    profile.limit = 25;
    assert_eq!(resolve_limit(0, &profile), 25);
    assert_eq!(resolve_limit(-1, &profile), 25);
    assert_eq!(resolve_limit(7, &profile), 7);
}

#[test]
fn prompt_short_circuits_on_confirm() {
    let (console, capture) = Console::captured();
    let r = Runner::new("", console);
    assert_eq!(r.prompt("sure? ", "myapp").unwrap(), "myapp");
    assert_eq!(capture.stdout(), "");
}

#[test]
fn prompt_reads_an_answer() {
    let (console, capture) = Console::captured();
    let r = Runner::new("", console.with_input(Cursor::new("myapp\n")));
    assert_eq!(r.prompt("sure? ", "").unwrap(), "myapp");
    assert_eq!(capture.stdout(), "sure? ");
}

#[test]
fn mismatch_warning_is_printed_once() {
    let (console, capture) = Console::captured();
    let r = Runner::new("", console);
    let c = mismatched_client();

    assert_eq!(r.quiet(&c, |_| Ok(1)).unwrap(), 1);
    assert_eq!(r.quiet(&c, |_| Ok(2)).unwrap(), 2);

    let stderr = capture.stderr();
    assert_eq!(stderr.matches("WARNING: Client and server API versions").count(), 1);
    assert!(stderr.contains("Server version: 9.1"));
    assert_eq!(r.compat_warning(), CompatWarning::AlreadyWarned);
}

#[test]
fn matching_versions_stay_silent() {
    let (console, capture) = Console::captured();
    let r = Runner::new("", console);
    let err = r
        .quiet(&client(), |_| -> ApiResult<()> { Err(ApiError::NotFound("Not found.".into())) })
        .unwrap_err();
    assert_eq!(err.to_string(), "Not Found: Not found.");
    assert_eq!(capture.stderr(), "");
    assert_eq!(r.compat_warning(), CompatWarning::Pristine);
}

#[test]
fn explicit_non_yes_confirm_cancels_global_changes() {
    let (console, _capture) = Console::captured();
    let r = Runner::new("", console);
    let global = ConfigTarget::Group(GLOBAL_GROUP.to_string());
    let err = r
        .confirm_global_config(&client(), "myapp", &global, "no")
        .unwrap_err();
    assert_eq!(err.to_string(), "cancel the config action");
    assert!(
        r.confirm_global_config(&client(), "myapp", &global, "yes")
            .is_ok()
    );
    let web = ConfigTarget::Ptype("web".to_string());
    assert!(r.confirm_global_config(&client(), "myapp", &web, "").is_ok());
}

#[test]
fn drinks_default_to_coffee() {
    if std::env::var(DRINK_ENV).is_err() {
        assert_eq!(drink_of_choice(), "coffee");
    }
}

fn autodeploy_controller(autodeploy: bool) -> FakeController {
    FakeController::start(&[(
        "GET",
        "/v2/apps/myapp/settings/",
        200,
        serde_json::json!({"app": "myapp", "autodeploy": autodeploy}),
    )])
}

fn controller_client(controller: &FakeController) -> Client {
    Client::new(&Profile::new(&controller.base_url, true)).unwrap()
}

#[test]
fn autodeploy_global_changes_need_a_typed_yes() {
    let controller = autodeploy_controller(true);
    let global = ConfigTarget::Group(GLOBAL_GROUP.to_string());

    let (console, capture) = Console::captured();
    let r = Runner::new("", console.with_input(Cursor::new("yes\n")));
    r.confirm_global_config(&controller_client(&controller), "myapp", &global, "")
        .unwrap();
    let stdout = capture.stdout();
    assert!(stdout.contains("WARNING: Potentially Disruptive Action"));
    assert!(stdout.contains("global config group of app: myapp"));

    let (console, _capture) = Console::captured();
    let r = Runner::new("", console.with_input(Cursor::new("no\n")));
    let err = r
        .confirm_global_config(&controller_client(&controller), "myapp", &global, "")
        .unwrap_err();
    assert_eq!(err.to_string(), "cancel the config action");
    assert_eq!(controller.hits("GET", "/v2/apps/myapp/settings/"), 2);
}

#[test]
fn global_changes_pass_silently_without_autodeploy() {
    let controller = autodeploy_controller(false);
    let global = ConfigTarget::Group(GLOBAL_GROUP.to_string());
    let (console, capture) = Console::captured();
    let r = Runner::new("", console.with_input(Cursor::new("no\n")));
    r.confirm_global_config(&controller_client(&controller), "myapp", &global, "")
        .unwrap();
    assert_eq!(capture.stdout(), "");
    assert_eq!(controller.hits("GET", "/v2/apps/myapp/settings/"), 1);
}

#[test]
fn passwords_come_from_injected_input() {
    let (console, _capture) = Console::captured();
    let r = Runner::new("", console.with_input(Cursor::new("s3cret\n")));
    assert_eq!(r.password("password").unwrap(), "s3cret");
}
