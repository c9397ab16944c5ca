//! Volumes, their mount paths and the file browser.

use super::*;

fn volume_path(app: &str, name: &str) -> String {
    format!("/v2/apps/{}/volumes/{}/", segment(app), segment(name))
}

/// Encode a remote file path segment by segment, keeping the separators.
pub(super) fn filer_path(app: &str, name: &str, path: &str) -> String {
    let encoded: Vec<String> = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(segment)
        .collect();
    format!("{}filer/{}", volume_path(app, name), encoded.join("/"))
}

impl Client {
    pub fn create_volume(&self, app: &str, volume: &VolumeCreate) -> ApiResult<Volume> {
        self.post_json(&format!("/v2/apps/{}/volumes/", segment(app)), volume)
    }

    pub fn expand_volume(&self, app: &str, name: &str, size: &str) -> ApiResult<Volume> {
        self.send_json(
            self.request(Method::PATCH, &volume_path(app, name))
                .json(&serde_json::json!({ "size": size })),
        )
    }

    pub fn list_volumes(&self, app: &str, limit: i64) -> ApiResult<(Vec<Volume>, u64)> {
        self.list(&format!("/v2/apps/{}/volumes/", segment(app)), &[], limit)
    }

    pub fn get_volume(&self, app: &str, name: &str) -> ApiResult<Volume> {
        self.get_json(&volume_path(app, name))
    }

    pub fn delete_volume(&self, app: &str, name: &str) -> ApiResult<()> {
        self.delete_unit(&volume_path(app, name))
    }

    /// Set (`Some`) or clear (`None`) mount paths per process type.
    pub fn set_volume_paths(
        &self,
        app: &str,
        name: &str,
        paths: &BTreeMap<String, Option<String>>,
    ) -> ApiResult<Volume> {
        let path = format!("{}path/", volume_path(app, name));
        self.send_json(
            self.request(Method::PATCH, &path)
                .json(&serde_json::json!({ "path": paths })),
        )
    }

    pub fn list_volume_files(&self, app: &str, name: &str, path: &str) -> ApiResult<Vec<FilerEntry>> {
        let req = self
            .request(Method::GET, &filer_path(app, name, path))
            .query(&[("action", "list")]);
        self.send_json(req)
    }

    pub fn download_volume_file(&self, app: &str, name: &str, path: &str) -> ApiResult<Vec<u8>> {
        let resp = self.send(
            self.request(Method::GET, &filer_path(app, name, path))
                .query(&[("action", "get")]),
        )?;
        let bytes = resp.bytes().map_err(ApiError::Transport)?;
        Ok(bytes.to_vec())
    }

    pub fn upload_volume_file(
        &self,
        app: &str,
        name: &str,
        path: &str,
        contents: Vec<u8>,
    ) -> ApiResult<()> {
        self.send_unit(
            self.request(Method::PUT, &filer_path(app, name, path))
                .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
                .body(contents),
        )
    }

    pub fn delete_volume_file(&self, app: &str, name: &str, path: &str) -> ApiResult<()> {
        self.delete_unit(&filer_path(app, name, path))
    }

    /// Open a WebDAV session on the volume.
    pub fn serve_volume(&self, app: &str, name: &str) -> ApiResult<FilerSession> {
        self.post_json(&format!("{}serve/", volume_path(app, name)), &serde_json::json!({}))
    }

    pub(crate) fn serve_session_path(app: &str, name: &str) -> String {
        format!("{}serve/", volume_path(app, name))
    }
}
