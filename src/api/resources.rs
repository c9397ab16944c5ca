//! Service catalog and per-app resource instances.

use super::*;

fn resource_path(app: &str, name: &str) -> String {
    format!("/v2/apps/{}/resources/{}/", segment(app), segment(name))
}

impl Client {
    pub fn list_resource_services(&self, limit: i64) -> ApiResult<(Vec<ResourceService>, u64)> {
        self.list("/v2/resources/services/", &[], limit)
    }

    pub fn list_resource_plans(
        &self,
        service: &str,
        limit: i64,
    ) -> ApiResult<(Vec<ResourcePlan>, u64)> {
        self.list(
            &format!("/v2/resources/services/{}/plans/", segment(service)),
            &[],
            limit,
        )
    }

    pub fn create_resource(&self, app: &str, resource: &ResourceCreate) -> ApiResult<Resource> {
        self.post_json(&format!("/v2/apps/{}/resources/", segment(app)), resource)
    }

    pub fn list_resources(&self, app: &str, limit: i64) -> ApiResult<(Vec<Resource>, u64)> {
        self.list(&format!("/v2/apps/{}/resources/", segment(app)), &[], limit)
    }

    pub fn get_resource(&self, app: &str, name: &str) -> ApiResult<Resource> {
        self.get_json(&resource_path(app, name))
    }

    /// Move an instance to another plan.
    pub fn update_resource(&self, app: &str, name: &str, plan: &str) -> ApiResult<Resource> {
        self.send_json(
            self.request(Method::PUT, &resource_path(app, name))
                .json(&serde_json::json!({ "plan": plan })),
        )
    }

    pub fn delete_resource(&self, app: &str, name: &str) -> ApiResult<()> {
        self.delete_unit(&resource_path(app, name))
    }

    pub fn bind_resource(&self, app: &str, name: &str) -> ApiResult<Resource> {
        self.binding(app, name, "bind")
    }

    pub fn unbind_resource(&self, app: &str, name: &str) -> ApiResult<Resource> {
        self.binding(app, name, "unbind")
    }

    fn binding(&self, app: &str, name: &str, action: &str) -> ApiResult<Resource> {
        let path = format!("{}binding/", resource_path(app, name));
        self.send_json(
            self.request(Method::PATCH, &path)
                .json(&serde_json::json!({ "bind_action": action })),
        )
    }
}
