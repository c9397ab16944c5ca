//! Process types and pods.

use super::*;

impl Client {
    pub fn list_ptypes(&self, app: &str, limit: i64) -> ApiResult<(Vec<Ptype>, u64)> {
        self.list(&format!("/v2/apps/{}/ptypes/", segment(app)), &[], limit)
    }

    pub fn describe_ptype(&self, app: &str, ptype: &str) -> ApiResult<serde_json::Value> {
        self.get_json(&format!(
            "/v2/apps/{}/ptypes/{}/describe/",
            segment(app),
            segment(ptype)
        ))
    }

    pub fn scale(&self, app: &str, targets: &BTreeMap<String, u32>) -> ApiResult<()> {
        self.post_unit(&format!("/v2/apps/{}/ptypes/scale/", segment(app)), targets)
    }

    /// Restart the named process types; an empty list restarts all of them.
    pub fn restart(&self, app: &str, ptypes: &[String]) -> ApiResult<()> {
        let mut body = serde_json::Map::new();
        if !ptypes.is_empty() {
            body.insert("ptypes".into(), ptypes.join(",").into());
        }
        self.post_unit(&format!("/v2/apps/{}/ptypes/restart/", segment(app)), &body)
    }

    /// Remove leftover resources of process types no longer in the release.
    pub fn clean(&self, app: &str, ptypes: &[String]) -> ApiResult<()> {
        self.post_unit(
            &format!("/v2/apps/{}/ptypes/clean/", segment(app)),
            &serde_json::json!({ "ptypes": ptypes }),
        )
    }

    pub fn list_pods(&self, app: &str, ptype: Option<&str>, limit: i64) -> ApiResult<(Vec<Pod>, u64)> {
        let query: Vec<(&str, String)> = ptype
            .map(|p| vec![("ptype", p.to_string())])
            .unwrap_or_default();
        self.list(&format!("/v2/apps/{}/pods/", segment(app)), &query, limit)
    }

    pub fn describe_pod(&self, app: &str, pod: &str) -> ApiResult<serde_json::Value> {
        self.get_json(&format!(
            "/v2/apps/{}/pods/{}/describe/",
            segment(app),
            segment(pod)
        ))
    }

    pub fn delete_pods(&self, app: &str, pods: &[String]) -> ApiResult<()> {
        self.post_unit(
            &format!("/v2/apps/{}/pods/delete/", segment(app)),
            &serde_json::json!({ "pod_ids": pods.join(",") }),
        )
    }
}
