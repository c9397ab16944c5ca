//! DTOs for controller requests and responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// List envelope returned by paginated endpoints.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<T>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct App {
    pub uuid: String,
    pub id: String,
    pub owner: String,
    pub structure: BTreeMap<String, i64>,
    pub created: String,
    pub updated: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_superuser: bool,
    pub is_staff: bool,
    pub is_active: bool,
    pub date_joined: String,
    pub last_login: Option<String>,
}

/// Pending browser login: open `url`, then poll the token endpoint with `key`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginChallenge {
    pub key: String,
    pub url: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AuthToken {
    pub username: String,
    pub token: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Key {
    pub uuid: String,
    pub id: String,
    pub owner: String,
    pub public: String,
    pub created: String,
    pub updated: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Token {
    pub uuid: String,
    pub owner: String,
    pub alias: String,
    pub key: String,
    pub created: String,
    pub updated: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Build {
    pub uuid: String,
    pub app: String,
    pub owner: String,
    pub image: String,
    pub stack: String,
    pub sha: String,
    pub procfile: BTreeMap<String, String>,
    pub dryccfile: serde_json::Value,
    pub created: String,
    pub updated: String,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct BuildCreate {
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procfile: Option<BTreeMap<String, String>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Release {
    pub uuid: String,
    pub app: String,
    pub owner: String,
    pub version: u32,
    pub summary: String,
    pub state: String,
    pub build: Option<String>,
    pub config: Option<String>,
    pub created: String,
    pub updated: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigValue {
    pub name: String,
    /// `None` removes the key.
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ptype: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub uuid: String,
    pub owner: String,
    pub app: String,
    pub values: Vec<ConfigValue>,
    pub values_refs: BTreeMap<String, Vec<String>>,
    pub limits: BTreeMap<String, String>,
    pub timeout: Option<u64>,
    pub tags: BTreeMap<String, serde_json::Value>,
    pub registry: BTreeMap<String, serde_json::Value>,
    pub healthcheck: serde_json::Value,
    pub created: String,
    pub updated: String,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct ConfigUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<ConfigValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values_refs: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<BTreeMap<String, Option<String>>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
    pub uuid: String,
    pub app: String,
    pub owner: String,
    pub domain: String,
    pub ptype: String,
    pub created: String,
    pub updated: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Cert {
    pub uuid: String,
    pub name: String,
    pub owner: String,
    pub common_name: String,
    pub expires: String,
    pub starts: String,
    pub fingerprint: String,
    pub san: Vec<String>,
    pub domains: Vec<String>,
    pub issuer: String,
    pub subject: String,
    pub created: String,
    pub updated: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct CertCreate {
    pub name: String,
    pub certificate: String,
    pub key: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Listener {
    pub name: String,
    pub port: u16,
    pub protocol: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayAddress {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Gateway {
    pub name: String,
    pub app: String,
    pub owner: String,
    pub listeners: Vec<Listener>,
    pub addresses: Vec<GatewayAddress>,
    pub created: String,
    pub updated: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct GatewayListener {
    pub name: String,
    pub port: u16,
    pub protocol: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParentRef {
    pub name: String,
    pub port: u16,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Route {
    pub name: String,
    pub app: String,
    pub owner: String,
    pub kind: String,
    pub ptype: String,
    pub port: u16,
    pub parent_refs: Vec<ParentRef>,
    pub rules: serde_json::Value,
    pub created: String,
    pub updated: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct RouteCreate {
    pub name: String,
    pub ptype: String,
    pub kind: String,
    pub port: u16,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicePort {
    pub name: String,
    pub port: u16,
    pub protocol: String,
    pub target_port: u16,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    pub ptype: String,
    pub domain: String,
    pub ports: Vec<ServicePort>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ServiceCreate {
    pub ptype: String,
    pub port: u16,
    pub protocol: String,
    pub target_port: u16,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Ptype {
    pub name: String,
    pub release: String,
    pub ready: String,
    pub up_to_date: i64,
    pub available_replicas: i64,
    pub started: String,
    pub garbage: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pod {
    pub name: String,
    pub release: String,
    #[serde(rename = "type")]
    pub ptype: String,
    pub state: String,
    pub ready: String,
    pub restarts: i64,
    pub started: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Perm {
    pub app: String,
    pub username: String,
    pub permissions: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitSpec {
    pub id: String,
    pub cpu: serde_json::Value,
    pub memory: serde_json::Value,
    pub features: serde_json::Value,
    pub keywords: Vec<String>,
    pub disabled: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitPlan {
    pub id: String,
    pub spec: LimitSpec,
    pub cpu: i64,
    pub memory: i64,
    pub features: serde_json::Value,
    pub disabled: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceService {
    pub id: String,
    pub name: String,
    pub updateable: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcePlan {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Resource {
    pub uuid: String,
    pub app: String,
    pub owner: String,
    pub name: String,
    pub plan: String,
    pub data: serde_json::Value,
    pub options: serde_json::Value,
    pub status: Option<String>,
    pub binding: Option<String>,
    pub created: String,
    pub updated: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ResourceCreate {
    pub name: String,
    pub plan: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Volume {
    pub uuid: String,
    pub app: String,
    pub owner: String,
    pub name: String,
    pub size: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub path: BTreeMap<String, String>,
    pub parameters: serde_json::Value,
    pub created: String,
    pub updated: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct VolumeCreate {
    pub name: String,
    pub size: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilerEntry {
    pub name: String,
    pub path: String,
    pub size: u64,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Short-lived WebDAV credentials for a volume.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilerSession {
    pub id: String,
    pub endpoint: String,
    pub username: String,
    pub password: String,
    /// Seconds between keepalive polls.
    pub keepalive: u64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub uuid: String,
    pub owner: String,
    pub app: String,
    pub autodeploy: bool,
    pub autorollback: bool,
    pub routable: bool,
    pub allowlist: Vec<String>,
    pub label: BTreeMap<String, String>,
    pub created: String,
    pub updated: String,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct AppSettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autodeploy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorollback: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routable: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tls {
    pub uuid: String,
    pub owner: String,
    pub app: String,
    pub https_enforced: Option<bool>,
    pub certs_auto_enabled: Option<bool>,
    pub issuer: serde_json::Value,
    pub created: String,
    pub updated: String,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct TlsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub https_enforced: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certs_auto_enabled: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub reason: String,
    pub message: String,
    pub created: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct RunRequest {
    pub command: String,
    pub timeout: u64,
    pub expires: u64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RunResult {
    pub exit_code: i32,
    pub output: String,
}
