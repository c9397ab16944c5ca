use reqwest::Method;
use reqwest::blocking::{RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::*;

/// Inspect a status and body, returning the mapped error for non-success.
pub(crate) fn error_for_response(status: reqwest::StatusCode, body: &[u8]) -> Option<ApiError> {
    if status.is_success() {
        None
    } else {
        Some(error::from_status(status, body))
    }
}

impl Client {
    pub(super) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.request_url(method, self.url(path))
    }

    fn request_url(&self, method: Method, url: String) -> RequestBuilder {
        let mut req = self.http.request(method, url);
        for (k, v) in self.default_headers() {
            req = req.header(k, v);
        }
        req
    }

    /// Send a request, record the server API version and map failures.
    pub(super) fn send(&self, req: RequestBuilder) -> ApiResult<Response> {
        let req = req.build().map_err(ApiError::Transport)?;
        let method = req.method().clone();
        let url = req.url().to_string();
        let resp = self.http.execute(req).map_err(ApiError::Transport)?;

        self.record_server_version(resp.headers());
        let status = resp.status();
        tracing::debug!(%method, %url, status = status.as_u16(), "controller request");

        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.bytes().map_err(ApiError::Transport)?;
        Err(error::from_status(status, &body))
    }

    /// Async counterpart of [`Client::send`] for streaming endpoints.
    pub(crate) async fn send_async(
        &self,
        req: reqwest::RequestBuilder,
    ) -> ApiResult<reqwest::Response> {
        let resp = req.send().await.map_err(ApiError::Transport)?;
        self.record_server_version(resp.headers());
        let status = resp.status();
        tracing::debug!(url = %resp.url(), status = status.as_u16(), "controller stream request");

        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.bytes().await.map_err(ApiError::Transport)?;
        Err(error::from_status(status, &body))
    }

    pub(super) fn send_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> ApiResult<T> {
        let resp = self.send(req)?;
        let bytes = resp.bytes().map_err(ApiError::Transport)?;
        serde_json::from_slice(&bytes).map_err(|err| ApiError::Decode(err.to_string()))
    }

    pub(super) fn send_unit(&self, req: RequestBuilder) -> ApiResult<()> {
        let _ = self.send(req)?;
        Ok(())
    }

    pub(super) fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send_json(self.request(Method::GET, path))
    }

    pub(super) fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send_json(self.request(Method::POST, path).json(body))
    }

    pub(super) fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<()> {
        self.send_unit(self.request(Method::POST, path).json(body))
    }

    pub(super) fn delete_unit(&self, path: &str) -> ApiResult<()> {
        self.send_unit(self.request(Method::DELETE, path))
    }

    /// Fetch a paginated collection.
    ///
    /// `limit < 0` follows `next` links and returns every item; `0` requests a
    /// default-sized page; a positive value requests one page and returns at
    /// most that many items. The second value is the server-reported total.
    pub(super) fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        limit: i64,
    ) -> ApiResult<(Vec<T>, u64)> {
        let page_size = if limit > 0 { limit } else { PAGE_SIZE };
        let mut params: Vec<(&str, String)> = query.to_vec();
        params.push(("limit", page_size.to_string()));

        let mut page: Page<T> = self.send_json(self.request(Method::GET, path).query(&params))?;
        let count = page.count;

        if limit >= 0 {
            let mut results = page.results;
            results.truncate(page_size as usize);
            return Ok((results, count));
        }

        let mut all = Vec::new();
        loop {
            all.extend(page.results);
            match page.next.take() {
                Some(next) if !next.is_empty() => {
                    page = self.send_json(self.request_url(Method::GET, next))?;
                }
                _ => break,
            }
        }
        Ok((all, count))
    }
}
