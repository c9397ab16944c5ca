//! Fakes shared by unit tests.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Method, Response, StatusCode, Uri};

use crate::git::{GitOutput, GitRunner};

/// Answers `git remote` subcommands from an in-memory remote list.
///
/// Clones share state, so a copy handed to a `Runner` can be inspected later.
#[derive(Clone, Default)]
pub(crate) struct FakeGit {
    pub(crate) remotes: Rc<RefCell<Vec<(String, String)>>>,
    pub(crate) calls: Rc<RefCell<Vec<String>>>,
}

impl FakeGit {
    pub(crate) fn with(remotes: &[(&str, &str)]) -> Self {
        let git = Self::default();
        git.remotes.borrow_mut().extend(
            remotes
                .iter()
                .map(|(n, u)| (n.to_string(), u.to_string())),
        );
        git
    }

    pub(crate) fn names(&self) -> Vec<String> {
        self.remotes.borrow().iter().map(|(n, _)| n.clone()).collect()
    }

    fn ok(stdout: String) -> GitOutput {
        GitOutput {
            success: true,
            stdout,
            stderr: String::new(),
        }
    }

    fn fail(stderr: &str) -> GitOutput {
        GitOutput {
            success: false,
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }
}

impl GitRunner for FakeGit {
    fn run(&self, args: &[&str]) -> std::io::Result<GitOutput> {
        self.calls.borrow_mut().push(args.join(" "));
        let mut remotes = self.remotes.borrow_mut();
        let out = match args {
            ["init"] => Self::ok(String::new()),
            ["remote", "-v"] => Self::ok(
                remotes
                    .iter()
                    .map(|(n, u)| format!("{n}\t{u} (fetch)\n{n}\t{u} (push)\n"))
                    .collect(),
            ),
            ["remote", "get-url", name] => match remotes.iter().find(|(n, _)| n == name) {
                Some((_, url)) => Self::ok(format!("{url}\n")),
                None => Self::fail(&format!("error: No such remote '{name}'")),
            },
            ["remote", "add", name, url] => {
                if remotes.iter().any(|(n, _)| n == name) {
                    Self::fail(&format!("error: remote {name} already exists."))
                } else {
                    remotes.push((name.to_string(), url.to_string()));
                    Self::ok(String::new())
                }
            }
            ["remote", "remove", name] => {
                remotes.retain(|(n, _)| n != name);
                Self::ok(String::new())
            }
            _ => Self::fail("unsupported"),
        };
        Ok(out)
    }
}

struct Canned {
    method: Method,
    path: String,
    status: StatusCode,
    body: String,
}

struct Shared {
    routes: Vec<Canned>,
    seen: Mutex<Vec<(String, String)>>,
}

/// A controller that answers canned JSON on a background runtime.
pub(crate) struct FakeController {
    pub(crate) base_url: String,
    shared: Arc<Shared>,
}

impl FakeController {
    /// `routes` are `(method, path, status, body)`.
    pub(crate) fn start(routes: &[(&str, &str, u16, serde_json::Value)]) -> Self {
        let routes = routes
            .iter()
            .map(|(method, path, status, body)| Canned {
                method: method.parse().expect("method"),
                path: path.to_string(),
                status: StatusCode::from_u16(*status).expect("status"),
                body: if body.is_null() { String::new() } else { body.to_string() },
            })
            .collect();
        let shared = Arc::new(Shared {
            routes,
            seen: Mutex::new(Vec::new()),
        });

        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.set_nonblocking(true).expect("nonblocking");
        let base_url = format!("http://{}", listener.local_addr().expect("addr"));
        let app = Router::new().fallback(answer).with_state(shared.clone());
        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("runtime");
            rt.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).expect("listener");
                axum::serve(listener, app).await.expect("serve");
            });
        });
        Self { base_url, shared }
    }

    pub(crate) fn hits(&self, method: &str, path: &str) -> usize {
        self.shared
            .seen
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, p)| m == method && p == path)
            .count()
    }
}

async fn answer(State(shared): State<Arc<Shared>>, method: Method, uri: Uri) -> Response<Body> {
    shared
        .seen
        .lock()
        .unwrap()
        .push((method.to_string(), uri.path().to_string()));
    let (status, body) = match shared
        .routes
        .iter()
        .find(|r| r.method == method && r.path == uri.path())
    {
        Some(r) => (r.status, r.body.clone()),
        None => (StatusCode::NOT_FOUND, r#"{"detail":"Not found."}"#.to_string()),
    };
    Response::builder()
        .status(status)
        .header("Drycc-API-Version", "2.3")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .expect("response")
}

/// Write a profile for `controller` under `dir`; returns the `-c` value.
pub(crate) fn write_profile(dir: &Path, controller: &str) -> String {
    let path = dir.join("profile.json");
    let profile = serde_json::json!({
        "username": "dev",
        "ssl_verify": true,
        "controller": controller,
        "token": "secret-token",
        "limit": 100,
    });
    std::fs::write(&path, profile.to_string()).expect("write profile");
    path.display().to_string()
}
