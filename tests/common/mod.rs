#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::{Arc, Mutex};
use std::thread;

use anyhow::{Context, Result};
use axum::Router;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{Method, Response, StatusCode, Uri};

pub const API_VERSION_HEADER: &str = "Drycc-API-Version";

/// One canned answer. `{base}` in the body is replaced by the server URL.
#[derive(Clone)]
pub struct Route {
    method: Method,
    path: String,
    query: Option<String>,
    status: StatusCode,
    body: String,
}

impl Route {
    pub fn new(method: Method, path: &str, status: u16, body: impl Into<String>) -> Self {
        Self {
            method,
            path: path.to_string(),
            query: None,
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body: body.into(),
        }
    }

    pub fn json(method: Method, path: &str, body: serde_json::Value) -> Self {
        Self::new(method, path, 200, body.to_string())
    }

    /// Only match requests whose query string contains `fragment`.
    pub fn with_query(mut self, fragment: &str) -> Self {
        self.query = Some(fragment.to_string());
        self
    }

    fn matches(&self, method: &Method, uri: &Uri) -> bool {
        self.method == method
            && self.path == uri.path()
            && self
                .query
                .as_deref()
                .is_none_or(|q| uri.query().unwrap_or("").contains(q))
    }
}

#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: String,
    pub body: String,
    pub authorization: Option<String>,
}

struct Shared {
    base_url: String,
    api_version: String,
    routes: Vec<Route>,
    requests: Mutex<Vec<Recorded>>,
}

/// An in-process stand-in for the controller, served on a background runtime.
pub struct FakeController {
    pub base_url: String,
    shared: Arc<Shared>,
}

impl FakeController {
    pub fn start(routes: Vec<Route>) -> Result<Self> {
        Self::start_with_version("2.3", routes)
    }

    pub fn start_with_version(api_version: &str, routes: Vec<Route>) -> Result<Self> {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").context("bind fake controller")?;
        listener.set_nonblocking(true)?;
        let base_url = format!("http://{}", listener.local_addr()?);
        let shared = Arc::new(Shared {
            base_url: base_url.clone(),
            api_version: api_version.to_string(),
            routes,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(answer).with_state(shared.clone());
        thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("fake controller runtime");
            rt.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).expect("tokio listener");
                axum::serve(listener, app).await.expect("serve fake controller");
            });
        });

        Ok(Self { base_url, shared })
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.shared.requests.lock().unwrap().clone()
    }

    /// Requests for `method` on `path`, in arrival order.
    pub fn hits(&self, method: &str, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }
}

async fn answer(
    State(shared): State<Arc<Shared>>,
    method: Method,
    uri: Uri,
    headers: axum::http::HeaderMap,
    body: Bytes,
) -> Response<Body> {
    shared.requests.lock().unwrap().push(Recorded {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().unwrap_or("").to_string(),
        body: String::from_utf8_lossy(&body).to_string(),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });

    let (status, body) = match shared.routes.iter().find(|r| r.matches(&method, &uri)) {
        Some(route) => (route.status, route.body.replace("{base}", &shared.base_url)),
        None => (StatusCode::NOT_FOUND, r#"{"detail":"Not found."}"#.to_string()),
    };
    Response::builder()
        .status(status)
        .header(API_VERSION_HEADER, shared.api_version.as_str())
        .header("content-type", "application/json")
        .body(Body::from(body))
        .expect("fake controller response")
}

/// A throwaway home directory holding a profile for `controller`.
pub struct Session {
    pub home: tempfile::TempDir,
}

impl Session {
    pub fn new(controller: &str) -> Result<Self> {
        let home = tempfile::tempdir().context("create home")?;
        let session = Self { home };
        let profile = serde_json::json!({
            "username": "dev",
            "ssl_verify": true,
            "controller": controller,
            "token": "secret-token",
            "limit": 100,
        });
        std::fs::write(session.profile_path(), profile.to_string())?;
        Ok(session)
    }

    /// A home without any profile.
    pub fn logged_out() -> Result<Self> {
        Ok(Self {
            home: tempfile::tempdir().context("create home")?,
        })
    }

    pub fn profile_path(&self) -> PathBuf {
        self.home.path().join("profile.json")
    }

    pub fn drycc(&self, args: &[&str]) -> Result<Output> {
        let profile = self.profile_path();
        let profile = profile.to_str().context("profile path")?;
        let mut full = vec!["-c", profile];
        full.extend_from_slice(args);
        run_drycc(self.home.path(), &full)
    }
}

/// Run the binary with `home` as both `HOME` and working directory.
pub fn run_drycc(home: &Path, args: &[&str]) -> Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_drycc"))
        .args(args)
        .current_dir(home)
        .env("HOME", home)
        .env_remove("DRYCC_APP")
        .env_remove("DRYCC_PROFILE")
        .env_remove("DRYCC_LOG")
        .stdin(std::process::Stdio::null())
        .output()
        .with_context(|| format!("run drycc {:?}", args))
}

/// Captured stdout with any progress ticker frames removed.
pub fn stdout(out: &Output) -> String {
    let mut text = String::from_utf8_lossy(&out.stdout).to_string();
    for frame in ["   ", "...", "o..", ".o.", "..o"] {
        text = text.replace(&format!("{frame}\x08\x08\x08"), "");
    }
    text
}

pub fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}
