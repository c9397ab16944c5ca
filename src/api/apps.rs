//! Applications, builds, releases, settings, TLS, events and permissions.

use std::time::Duration;

use super::*;

fn app_path(app: &str) -> String {
    format!("/v2/apps/{}/", segment(app))
}

impl Client {
    pub fn create_app(&self, id: Option<&str>) -> ApiResult<App> {
        let body = match id {
            Some(id) => serde_json::json!({ "id": id }),
            None => serde_json::json!({}),
        };
        self.post_json("/v2/apps/", &body)
    }

    pub fn list_apps(&self, limit: i64) -> ApiResult<(Vec<App>, u64)> {
        self.list("/v2/apps/", &[], limit)
    }

    pub fn get_app(&self, app: &str) -> ApiResult<App> {
        self.get_json(&app_path(app))
    }

    pub fn delete_app(&self, app: &str) -> ApiResult<()> {
        self.delete_unit(&app_path(app))
    }

    pub fn transfer_app(&self, app: &str, owner: &str) -> ApiResult<()> {
        self.post_unit(&app_path(app), &serde_json::json!({ "owner": owner }))
    }

    /// Run a one-off command. The transport timeout covers the server-side one.
    pub fn run(&self, app: &str, req: &RunRequest) -> ApiResult<RunResult> {
        let path = format!("{}run/", app_path(app));
        let wait = Duration::from_secs(req.timeout.saturating_add(60));
        self.send_json(self.request(Method::POST, &path).json(req).timeout(wait))
    }

    /// Latest build, if the app has one.
    pub fn latest_build(&self, app: &str) -> ApiResult<Option<Build>> {
        let (builds, _) = self.list::<Build>(&format!("{}builds/", app_path(app)), &[], 1)?;
        Ok(builds.into_iter().next())
    }

    pub fn create_build(&self, app: &str, build: &BuildCreate) -> ApiResult<Build> {
        self.post_json(&format!("{}builds/", app_path(app)), build)
    }

    pub fn list_releases(&self, app: &str, limit: i64) -> ApiResult<(Vec<Release>, u64)> {
        self.list(&format!("{}releases/", app_path(app)), &[], limit)
    }

    pub fn get_release(&self, app: &str, version: u32) -> ApiResult<Release> {
        self.get_json(&format!("{}releases/v{}/", app_path(app), version))
    }

    /// Roll back to `version` (the previous release when `None`); returns the new version.
    pub fn rollback(&self, app: &str, version: Option<u32>, ptypes: &[String]) -> ApiResult<u32> {
        #[derive(serde::Deserialize)]
        struct Rolled {
            version: u32,
        }
        let mut body = serde_json::Map::new();
        if let Some(v) = version {
            body.insert("version".into(), v.into());
        }
        if !ptypes.is_empty() {
            body.insert("ptypes".into(), ptypes.join(",").into());
        }
        let out: Rolled = self.post_json(&format!("{}releases/rollback/", app_path(app)), &body)?;
        Ok(out.version)
    }

    pub fn get_app_settings(&self, app: &str) -> ApiResult<AppSettings> {
        self.get_json(&format!("{}settings/", app_path(app)))
    }

    pub fn set_app_settings(&self, app: &str, update: &AppSettingsUpdate) -> ApiResult<AppSettings> {
        self.post_json(&format!("{}settings/", app_path(app)), update)
    }

    pub fn get_tls(&self, app: &str) -> ApiResult<Tls> {
        self.get_json(&format!("{}tls/", app_path(app)))
    }

    pub fn set_tls(&self, app: &str, update: &TlsUpdate) -> ApiResult<Tls> {
        self.post_json(&format!("{}tls/", app_path(app)), update)
    }

    /// Events for a process type or a single pod.
    pub fn list_events(
        &self,
        app: &str,
        ptype: Option<&str>,
        pod: Option<&str>,
        limit: i64,
    ) -> ApiResult<(Vec<Event>, u64)> {
        let mut query = Vec::new();
        if let Some(p) = ptype {
            query.push(("ptype", p.to_string()));
        }
        if let Some(p) = pod {
            query.push(("pod_name", p.to_string()));
        }
        self.list(&format!("{}events/", app_path(app)), &query, limit)
    }

    pub fn list_perms(&self, app: &str, limit: i64) -> ApiResult<(Vec<Perm>, u64)> {
        self.list(&format!("{}perms/", app_path(app)), &[], limit)
    }

    pub fn create_perm(&self, app: &str, username: &str, permissions: &str) -> ApiResult<()> {
        self.post_unit(
            &format!("{}perms/", app_path(app)),
            &serde_json::json!({ "username": username, "permissions": permissions }),
        )
    }

    pub fn update_perm(&self, app: &str, username: &str, permissions: &str) -> ApiResult<()> {
        let path = format!("{}perms/{}/", app_path(app), segment(username));
        self.send_unit(
            self.request(Method::PUT, &path)
                .json(&serde_json::json!({ "permissions": permissions })),
        )
    }

    pub fn delete_perm(&self, app: &str, username: &str) -> ApiResult<()> {
        self.delete_unit(&format!("{}perms/{}/", app_path(app), segment(username)))
    }
}
