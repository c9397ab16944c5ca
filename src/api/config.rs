//! Configuration values, group attachments and limit plans.

use super::*;

impl Client {
    pub fn get_config(&self, app: &str) -> ApiResult<Config> {
        self.get_json(&format!("/v2/apps/{}/config/", segment(app)))
    }

    /// Post a partial update; the controller answers with the merged config.
    pub fn set_config(&self, app: &str, update: &ConfigUpdate) -> ApiResult<Config> {
        self.post_json(&format!("/v2/apps/{}/config/", segment(app)), update)
    }

    /// Replace the groups attached to process types.
    pub fn set_config_refs(
        &self,
        app: &str,
        refs: &BTreeMap<String, Vec<String>>,
    ) -> ApiResult<Config> {
        let path = format!("/v2/apps/{}/config/", segment(app));
        self.send_json(
            self.request(Method::PATCH, &path)
                .json(&serde_json::json!({ "values_refs": refs })),
        )
    }

    pub fn list_limit_specs(&self, keywords: Option<&str>, limit: i64) -> ApiResult<(Vec<LimitSpec>, u64)> {
        let query: Vec<(&str, String)> = keywords
            .map(|k| vec![("keywords", k.to_string())])
            .unwrap_or_default();
        self.list("/v2/limits/specs/", &query, limit)
    }

    pub fn list_limit_plans(
        &self,
        spec: Option<&str>,
        cpu: Option<u32>,
        memory: Option<u32>,
        limit: i64,
    ) -> ApiResult<(Vec<LimitPlan>, u64)> {
        let mut query = Vec::new();
        if let Some(s) = spec {
            query.push(("spec-id", s.to_string()));
        }
        if let Some(c) = cpu {
            query.push(("cpu", c.to_string()));
        }
        if let Some(m) = memory {
            query.push(("memory", m.to_string()));
        }
        self.list("/v2/limits/plans/", &query, limit)
    }

    pub fn get_limit_plan(&self, id: &str) -> ApiResult<LimitPlan> {
        self.get_json(&format!("/v2/limits/plans/{}/", segment(id)))
    }
}
