//! Typed client for the controller's REST API.

use std::collections::BTreeMap;
use std::sync::Mutex;

use anyhow::{Context, Result};
use reqwest::Method;

use crate::settings::{API_VERSION, Profile};

mod error;
pub use self::error::{ApiError, ApiResult};

mod http_client;
pub(crate) use self::http_client::error_for_response;

mod types;
pub use self::types::*;

mod apps;
mod auth;
mod config;
mod networking;
mod processes;
mod resources;
mod volumes;

pub const VERSION_HEADER: &str = "Drycc-Version";
pub const API_VERSION_HEADER: &str = "Drycc-API-Version";

/// Default page size requested from list endpoints.
pub const PAGE_SIZE: i64 = 100;

pub struct Client {
    base_url: String,
    token: String,
    user_agent: String,
    ssl_verify: bool,
    http: reqwest::blocking::Client,
    server_version: Mutex<Option<String>>,
}

impl Client {
    pub fn new(profile: &Profile) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(profile.user_agent.clone())
            .danger_accept_invalid_certs(!profile.ssl_verify)
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: profile.controller.trim_end_matches('/').to_string(),
            token: profile.token.clone(),
            user_agent: profile.user_agent.clone(),
            ssl_verify: profile.ssl_verify,
            http,
            server_version: Mutex::new(None),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn ssl_verify(&self) -> bool {
        self.ssl_verify
    }

    /// API version reported by the controller on the last response, if any.
    pub fn server_version(&self) -> Option<String> {
        self.server_version
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }

    /// Fails with [`ApiError::ApiMismatch`] when the controller reported an
    /// API version this client does not speak.
    pub fn check_api_compatibility(&self) -> ApiResult<()> {
        match self.server_version() {
            Some(server) if !versions_compatible(API_VERSION, &server) => {
                Err(ApiError::ApiMismatch {
                    client: API_VERSION.to_string(),
                    server,
                })
            }
            _ => Ok(()),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// An async client with the same TLS policy, for streaming operations.
    pub(crate) fn async_http(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .user_agent(self.user_agent.clone())
            .danger_accept_invalid_certs(!self.ssl_verify)
            .build()
            .context("build async reqwest client")
    }

    /// Headers every request carries.
    pub(crate) fn default_headers(&self) -> BTreeMap<&'static str, String> {
        let mut headers = BTreeMap::new();
        headers.insert(VERSION_HEADER, API_VERSION.to_string());
        if !self.token.is_empty() {
            headers.insert("Authorization", format!("Bearer {}", self.token));
        }
        headers
    }

    pub(crate) fn async_request(
        &self,
        http: &reqwest::Client,
        method: Method,
        path: &str,
    ) -> reqwest::RequestBuilder {
        let mut req = http.request(method, self.url(path));
        for (k, v) in self.default_headers() {
            req = req.header(k, v);
        }
        req
    }

    pub(crate) fn record_server_version(&self, headers: &reqwest::header::HeaderMap) {
        let Some(value) = headers.get(API_VERSION_HEADER) else {
            return;
        };
        match value.to_str() {
            Ok(v) => {
                if let Ok(mut guard) = self.server_version.lock() {
                    *guard = Some(v.to_string());
                }
            }
            Err(_) => tracing::warn!("ignoring unreadable {} header", API_VERSION_HEADER),
        }
    }
}

/// Versions are compatible when their major and minor components agree.
pub fn versions_compatible(client: &str, server: &str) -> bool {
    fn major_minor(v: &str) -> (&str, &str) {
        let mut parts = v.trim().trim_start_matches('v').split('.');
        (parts.next().unwrap_or(""), parts.next().unwrap_or("0"))
    }
    major_minor(client) == major_minor(server)
}

/// Percent-encode a single path segment. Only RFC 3986 unreserved
/// characters pass through; a space becomes `%20`.
pub(crate) fn segment(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

#[cfg(test)]
#[path = "tests/api/client_tests.rs"]
mod tests;
