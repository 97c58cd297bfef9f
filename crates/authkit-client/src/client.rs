//! The auth service client.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::types::{Claims, LoginRequest, TokenSet};

/// Client for the platform authentication service.
///
/// Holds the three derived endpoint URLs and a pooled `reqwest` transport
/// with the configured request timeout. Construct once and share; all
/// operations take `&self` and are independent of each other.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    tenant: Option<String>,
    login_url: String,
    refresh_url: String,
    introspect_url: String,
}

impl AuthClient {
    /// Build a client from validated configuration.
    pub fn new(config: AuthConfig) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AuthError::Transport {
                endpoint: config.base_url().to_string(),
                source: e,
            })?;

        Ok(Self {
            http,
            tenant: config.tenant().map(str::to_string),
            login_url: config.login_url(),
            refresh_url: config.refresh_url(),
            introspect_url: config.introspect_url(),
        })
    }

    /// Shorthand for a tenant-scoped client with default settings.
    pub fn for_tenant(
        tenant: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, AuthError> {
        Self::new(AuthConfig::for_tenant(tenant, base_url)?)
    }

    /// The tenant this client is scoped to, if any.
    pub fn tenant(&self) -> Option<&str> {
        self.tenant.as_deref()
    }

    /// Exchange credentials for an access/refresh token pair.
    pub async fn login(&self, request: &LoginRequest) -> Result<TokenSet, AuthError> {
        tracing::debug!(url = %self.login_url, identifier = %request.identifier, "login request");
        let resp = self.post(&self.login_url, request).await?;

        let status = resp.status();
        if status != StatusCode::OK {
            tracing::warn!(%status, "login rejected");
            return Err(AuthError::LoginFailed { status });
        }
        self.decode(resp, &self.login_url).await
    }

    /// Exchange a refresh token for a fresh token pair.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenSet, AuthError> {
        tracing::debug!(url = %self.refresh_url, "refresh request");
        let body = serde_json::json!({ "refresh_token": refresh_token });
        let resp = self.post(&self.refresh_url, &body).await?;

        let status = resp.status();
        if status != StatusCode::OK {
            tracing::warn!(%status, "refresh rejected");
            return Err(AuthError::RefreshFailed { status });
        }
        self.decode(resp, &self.refresh_url).await
    }

    /// Ask the auth service whether `token` is active and return its claims.
    ///
    /// A 200 response with `active == false` is a *valid* answer from the
    /// service but an error under this SDK's contract: callers get
    /// [`AuthError::TokenInactive`] instead of a claims object they might
    /// forget to check.
    pub async fn introspect(&self, token: &str) -> Result<Claims, AuthError> {
        tracing::debug!(url = %self.introspect_url, "introspect request");
        let body = serde_json::json!({ "token": token });
        let resp = self.post(&self.introspect_url, &body).await?;

        let status = resp.status();
        if status != StatusCode::OK {
            tracing::warn!(%status, "introspection rejected");
            return Err(AuthError::TokenInvalid { status });
        }

        let claims: Claims = self.decode(resp, &self.introspect_url).await?;
        if !claims.active {
            tracing::warn!(sub = %claims.sub, "token inactive");
            return Err(AuthError::TokenInactive);
        }
        Ok(claims)
    }

    async fn post(
        &self,
        url: &str,
        body: &impl Serialize,
    ) -> Result<reqwest::Response, AuthError> {
        self.http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| AuthError::Transport {
                endpoint: url.to_string(),
                source: e,
            })
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
        url: &str,
    ) -> Result<T, AuthError> {
        resp.json().await.map_err(|e| AuthError::Decode {
            endpoint: url.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_tenant_scoped_endpoints() {
        let client = AuthClient::for_tenant("acme", "https://auth.example.com").expect("client");
        assert_eq!(client.tenant(), Some("acme"));
        assert_eq!(
            client.introspect_url,
            "https://auth.example.com/api/v1/acme/auth/introspect"
        );
    }

    #[test]
    fn builds_tenantless_from_config() {
        let config = AuthConfig::new("https://auth.example.com/").expect("config");
        let client = AuthClient::new(config).expect("client");
        assert_eq!(client.tenant(), None);
        assert_eq!(
            client.login_url,
            "https://auth.example.com/api/v1/auth/login"
        );
    }

    #[test]
    fn rejects_bad_base_url() {
        let result = AuthClient::for_tenant("acme", "not-a-url");
        assert!(matches!(result, Err(AuthError::Config(_))));
    }
}
