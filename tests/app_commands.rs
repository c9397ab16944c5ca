mod common;

use anyhow::Result;
use axum::http::Method;
use serde_json::json;

use common::{FakeController, Route, Session, stderr, stdout};

fn app(id: &str) -> serde_json::Value {
    json!({
        "uuid": format!("{id}-uuid"),
        "id": id,
        "owner": "dev",
        "structure": {},
        "created": "2024-01-02T03:04:05Z",
        "updated": "2024-01-02T03:04:05.123456+00:00",
    })
}

#[test]
fn apps_list_renders_a_table() -> Result<()> {
    let server = FakeController::start(vec![Route::json(
        Method::GET,
        "/v2/apps/",
        json!({"count": 2, "next": null, "previous": null, "results": [app("myapp"), app("other")]}),
    )])?;
    let session = Session::new(&server.base_url)?;

    let out = session.drycc(&["apps", "list"])?;
    assert!(out.status.success(), "{}", stderr(&out));
    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0].split_whitespace().collect::<Vec<_>>(),
        ["ID", "OWNER", "CREATED", "UPDATED"]
    );
    assert_eq!(
        lines[1].split_whitespace().collect::<Vec<_>>(),
        ["myapp", "dev", "2024-01-02T03:04:05Z", "2024-01-02T03:04:05Z"]
    );
    assert!(lines[2].starts_with("other"));

    let hits = server.hits("GET", "/v2/apps/");
    assert_eq!(hits.len(), 1);
    assert!(hits[0].query.contains("limit=100"));
    assert_eq!(hits[0].authorization.as_deref(), Some("Bearer secret-token"));
    Ok(())
}

#[test]
fn empty_app_list_says_so() -> Result<()> {
    let server = FakeController::start(vec![Route::json(
        Method::GET,
        "/v2/apps/",
        json!({"count": 0, "results": []}),
    )])?;
    let session = Session::new(&server.base_url)?;
    let out = session.drycc(&["apps", "list", "-l", "5"])?;
    assert!(out.status.success());
    assert_eq!(stdout(&out), "No apps found.\n");
    assert!(server.hits("GET", "/v2/apps/")[0].query.contains("limit=5"));
    Ok(())
}

#[test]
fn destroy_requires_the_app_name() -> Result<()> {
    let server = FakeController::start(vec![Route::new(Method::DELETE, "/v2/apps/myapp/", 204, "")])?;
    let session = Session::new(&server.base_url)?;

    let out = session.drycc(&["destroy", "-a", "myapp", "--confirm", "wrong"])?;
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("app myapp does not match confirm wrong, aborting"));
    assert!(server.hits("DELETE", "/v2/apps/myapp/").is_empty());

    let out = session.drycc(&["destroy", "-a", "myapp", "--confirm", "myapp"])?;
    assert!(out.status.success(), "{}", stderr(&out));
    let text = stdout(&out);
    assert!(text.contains("Destroying myapp..."));
    assert!(text.contains("done in "));
    assert_eq!(server.hits("DELETE", "/v2/apps/myapp/").len(), 1);
    Ok(())
}

#[test]
fn destroy_without_a_terminal_does_not_prompt() -> Result<()> {
    let server = FakeController::start(vec![Route::new(Method::DELETE, "/v2/apps/myapp/", 204, "")])?;
    let session = Session::new(&server.base_url)?;

    let out = session.drycc(&["destroy", "-a", "myapp"])?;
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("app myapp does not match confirm , aborting"));
    assert!(!stdout(&out).contains("Potentially Destructive Action"));
    assert!(server.hits("DELETE", "/v2/apps/myapp/").is_empty());
    Ok(())
}

#[test]
fn refused_global_config_change_is_canceled() -> Result<()> {
    let server = FakeController::start(Vec::new())?;
    let session = Session::new(&server.base_url)?;

    let out = session.drycc(&["config", "unset", "FOO", "-a", "myapp", "--confirm", "no"])?;
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("cancel the config action"));
    assert!(server.requests().is_empty());
    Ok(())
}

#[test]
fn malformed_arguments_never_reach_the_controller() -> Result<()> {
    let server = FakeController::start(Vec::new())?;
    let session = Session::new(&server.base_url)?;

    let out = session.drycc(&["scale", "test", "-a", "myapp"])?;
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("'test' does not match the pattern 'ptype=num', ex: web=2"));

    let out = session.drycc(&["volumes", "add", "data", "500K", "-a", "myapp"])?;
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("500K doesn't fit format #unit"));

    let out = session.drycc(&["config", "set", "bad key=1", "-a", "myapp", "--ptype", "web"])?;
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("does not match the pattern 'key=var', ex: MODE=test"));

    assert!(server.requests().is_empty());
    Ok(())
}

#[test]
fn controller_errors_are_reported() -> Result<()> {
    let server = FakeController::start(vec![Route::new(
        Method::GET,
        "/v2/apps/missing/config/",
        404,
        r#"{"detail":"Not found."}"#,
    )])?;
    let session = Session::new(&server.base_url)?;
    let out = session.drycc(&["config", "info", "-a", "missing"])?;
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Not Found: Not found."));
    Ok(())
}

#[test]
fn completion_follows_every_page() -> Result<()> {
    let server = FakeController::start(vec![
        Route::json(
            Method::GET,
            "/v2/apps/",
            json!({"count": 3, "next": null, "results": [app("beta")]}),
        )
        .with_query("page=2"),
        Route::json(
            Method::GET,
            "/v2/apps/",
            json!({
                "count": 3,
                "next": "{base}/v2/apps/?limit=100&page=2",
                "results": [app("gamma"), app("alpha")],
            }),
        ),
    ])?;
    let session = Session::new(&server.base_url)?;

    let out = session.drycc(&["__complete", "apps"])?;
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out), "alpha\nbeta\ngamma\n");
    assert_eq!(server.hits("GET", "/v2/apps/").len(), 2);

    let out = session.drycc(&["__complete", "apps", "g"])?;
    assert_eq!(stdout(&out), "gamma\n");
    Ok(())
}

#[test]
fn version_mismatch_warns_once_per_run() -> Result<()> {
    let server = FakeController::start_with_version(
        "9.1",
        vec![
            Route::json(
                Method::GET,
                "/v2/apps/",
                json!({"count": 2, "next": null, "results": [app("beta")]}),
            )
            .with_query("page=2"),
            Route::json(
                Method::GET,
                "/v2/apps/",
                json!({"count": 2, "next": "{base}/v2/apps/?page=2", "results": [app("alpha")]}),
            ),
        ],
    )?;
    let session = Session::new(&server.base_url)?;

    let out = session.drycc(&["__complete", "apps"])?;
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out), "alpha\nbeta\n");
    let err = stderr(&out);
    assert_eq!(err.matches("WARNING: Client and server API versions do not match").count(), 1);
    assert!(err.contains("Server version: 9.1"));
    Ok(())
}
