//! Authentication, keys, tokens and users.

use super::*;

impl Client {
    /// Exchange credentials for a token.
    pub fn login(&self, username: &str, password: &str) -> ApiResult<AuthToken> {
        self.post_json(
            "/v2/auth/login/",
            &serde_json::json!({ "username": username, "password": password }),
        )
    }

    /// Start a browser login.
    pub fn login_challenge(&self) -> ApiResult<LoginChallenge> {
        self.post_json("/v2/auth/login/", &serde_json::json!({}))
    }

    /// Poll a browser login; `None` while the user has not finished.
    pub fn login_token(&self, key: &str) -> ApiResult<Option<AuthToken>> {
        match self.get_json::<AuthToken>(&format!("/v2/auth/token/{}/", segment(key))) {
            Ok(token) if token.token.is_empty() => Ok(None),
            Ok(token) => Ok(Some(token)),
            Err(ApiError::NotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub fn logout(&self) -> ApiResult<()> {
        self.send_unit(self.request(Method::GET, "/v2/auth/logout/"))
    }

    pub fn whoami(&self) -> ApiResult<User> {
        self.get_json("/v2/auth/whoami/")
    }

    pub fn list_keys(&self, limit: i64) -> ApiResult<(Vec<Key>, u64)> {
        self.list("/v2/keys/", &[], limit)
    }

    pub fn create_key(&self, id: &str, public: &str) -> ApiResult<Key> {
        self.post_json("/v2/keys/", &serde_json::json!({ "id": id, "public": public }))
    }

    pub fn delete_key(&self, id: &str) -> ApiResult<()> {
        self.delete_unit(&format!("/v2/keys/{}/", segment(id)))
    }

    pub fn list_tokens(&self, limit: i64) -> ApiResult<(Vec<Token>, u64)> {
        self.list("/v2/tokens/", &[], limit)
    }

    pub fn delete_token(&self, id: &str) -> ApiResult<()> {
        self.delete_unit(&format!("/v2/tokens/{}/", segment(id)))
    }

    pub fn list_users(&self, limit: i64) -> ApiResult<(Vec<User>, u64)> {
        self.list("/v2/users/", &[], limit)
    }

    pub fn enable_user(&self, username: &str) -> ApiResult<()> {
        let path = format!("/v2/users/{}/enable/", segment(username));
        self.send_unit(self.request(Method::PATCH, &path))
    }

    pub fn disable_user(&self, username: &str) -> ApiResult<()> {
        let path = format!("/v2/users/{}/disable/", segment(username));
        self.send_unit(self.request(Method::PATCH, &path))
    }
}
