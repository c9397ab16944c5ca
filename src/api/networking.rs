//! Domains, certificates, gateways, routes and services.

use super::*;

impl Client {
    pub fn list_domains(&self, app: &str, limit: i64) -> ApiResult<(Vec<Domain>, u64)> {
        self.list(&format!("/v2/apps/{}/domains/", segment(app)), &[], limit)
    }

    pub fn add_domain(&self, app: &str, domain: &str, ptype: &str) -> ApiResult<Domain> {
        self.post_json(
            &format!("/v2/apps/{}/domains/", segment(app)),
            &serde_json::json!({ "domain": domain, "ptype": ptype }),
        )
    }

    pub fn remove_domain(&self, app: &str, domain: &str) -> ApiResult<()> {
        self.delete_unit(&format!(
            "/v2/apps/{}/domains/{}/",
            segment(app),
            segment(domain)
        ))
    }

    pub fn list_certs(&self, app: &str, limit: i64) -> ApiResult<(Vec<Cert>, u64)> {
        self.list(&format!("/v2/apps/{}/certs/", segment(app)), &[], limit)
    }

    pub fn create_cert(&self, app: &str, cert: &CertCreate) -> ApiResult<Cert> {
        self.post_json(&format!("/v2/apps/{}/certs/", segment(app)), cert)
    }

    pub fn get_cert(&self, app: &str, name: &str) -> ApiResult<Cert> {
        self.get_json(&format!("/v2/apps/{}/certs/{}/", segment(app), segment(name)))
    }

    pub fn delete_cert(&self, app: &str, name: &str) -> ApiResult<()> {
        self.delete_unit(&format!("/v2/apps/{}/certs/{}/", segment(app), segment(name)))
    }

    pub fn attach_cert(&self, app: &str, name: &str, domain: &str) -> ApiResult<()> {
        self.post_unit(
            &format!("/v2/apps/{}/certs/{}/domain/", segment(app), segment(name)),
            &serde_json::json!({ "domain": domain }),
        )
    }

    pub fn detach_cert(&self, app: &str, name: &str, domain: &str) -> ApiResult<()> {
        self.delete_unit(&format!(
            "/v2/apps/{}/certs/{}/domain/{}/",
            segment(app),
            segment(name),
            segment(domain)
        ))
    }

    pub fn list_gateways(&self, app: &str, limit: i64) -> ApiResult<(Vec<Gateway>, u64)> {
        self.list(&format!("/v2/apps/{}/gateways/", segment(app)), &[], limit)
    }

    pub fn add_gateway(&self, app: &str, listener: &GatewayListener) -> ApiResult<()> {
        self.post_unit(&format!("/v2/apps/{}/gateways/", segment(app)), listener)
    }

    pub fn remove_gateway(&self, app: &str, listener: &GatewayListener) -> ApiResult<()> {
        let path = format!("/v2/apps/{}/gateways/", segment(app));
        self.send_unit(self.request(Method::DELETE, &path).json(listener))
    }

    pub fn create_route(&self, app: &str, route: &RouteCreate) -> ApiResult<()> {
        self.post_unit(&format!("/v2/apps/{}/routes/", segment(app)), route)
    }

    pub fn list_routes(&self, app: &str, limit: i64) -> ApiResult<(Vec<Route>, u64)> {
        self.list(&format!("/v2/apps/{}/routes/", segment(app)), &[], limit)
    }

    pub fn get_route_rules(&self, app: &str, name: &str) -> ApiResult<serde_json::Value> {
        self.get_json(&format!(
            "/v2/apps/{}/routes/{}/rules/",
            segment(app),
            segment(name)
        ))
    }

    pub fn set_route_rules(&self, app: &str, name: &str, rules: &serde_json::Value) -> ApiResult<()> {
        let path = format!("/v2/apps/{}/routes/{}/rules/", segment(app), segment(name));
        self.send_unit(self.request(Method::PUT, &path).json(rules))
    }

    pub fn attach_route(&self, app: &str, name: &str, port: u16, gateway: &str) -> ApiResult<()> {
        let path = format!("/v2/apps/{}/routes/{}/attach/", segment(app), segment(name));
        self.send_unit(
            self.request(Method::PATCH, &path)
                .json(&serde_json::json!({ "port": port, "gateway": gateway })),
        )
    }

    pub fn detach_route(&self, app: &str, name: &str, port: u16, gateway: &str) -> ApiResult<()> {
        let path = format!("/v2/apps/{}/routes/{}/detach/", segment(app), segment(name));
        self.send_unit(
            self.request(Method::PATCH, &path)
                .json(&serde_json::json!({ "port": port, "gateway": gateway })),
        )
    }

    pub fn delete_route(&self, app: &str, name: &str) -> ApiResult<()> {
        self.delete_unit(&format!("/v2/apps/{}/routes/{}/", segment(app), segment(name)))
    }

    pub fn list_services(&self, app: &str, limit: i64) -> ApiResult<(Vec<Service>, u64)> {
        self.list(&format!("/v2/apps/{}/services/", segment(app)), &[], limit)
    }

    pub fn add_service(&self, app: &str, service: &ServiceCreate) -> ApiResult<()> {
        self.post_unit(&format!("/v2/apps/{}/services/", segment(app)), service)
    }

    pub fn remove_service(&self, app: &str, ptype: &str, protocol: &str, port: u16) -> ApiResult<()> {
        let path = format!("/v2/apps/{}/services/", segment(app));
        self.send_unit(self.request(Method::DELETE, &path).json(&serde_json::json!({
            "ptype": ptype,
            "protocol": protocol,
            "port": port,
        })))
    }
}
