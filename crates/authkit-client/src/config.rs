//! Client configuration and endpoint derivation.

use std::time::Duration;

use url::Url;

/// Default per-request timeout applied to the underlying HTTP transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const API_PREFIX: &str = "/api/v1";

/// Configuration errors, all detected at construction time.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Base URL is not an absolute http/https URL.
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Tenant was given but is empty.
    #[error("tenant must not be empty")]
    EmptyTenant,
}

/// Connection settings for an [`AuthClient`](crate::AuthClient).
///
/// Validated when built: the base URL must parse as an absolute http/https
/// URL, and the tenant (when present) must be non-empty. A trailing slash on
/// the base URL is tolerated and trimmed.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    base_url: String,
    tenant: Option<String>,
    timeout: Duration,
}

impl AuthConfig {
    /// Configuration for a tenant-less deployment (`/api/v1/auth/...`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = validate_base_url(base_url.into())?;
        Ok(Self {
            base_url,
            tenant: None,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Configuration for a tenant-scoped deployment
    /// (`/api/v1/{tenant}/auth/...`).
    pub fn for_tenant(
        tenant: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let tenant = tenant.into();
        if tenant.is_empty() {
            return Err(ConfigError::EmptyTenant);
        }
        let base_url = validate_base_url(base_url.into())?;
        Ok(Self {
            base_url,
            tenant: Some(tenant),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Override the default 10 s request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The validated, trailing-slash-trimmed base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The tenant this client is scoped to, if any.
    pub fn tenant(&self) -> Option<&str> {
        self.tenant.as_deref()
    }

    /// The per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Absolute URL of the login endpoint.
    pub fn login_url(&self) -> String {
        format!("{}{}/login", self.base_url, self.auth_prefix())
    }

    /// Absolute URL of the refresh endpoint.
    pub fn refresh_url(&self) -> String {
        format!("{}{}/refresh", self.base_url, self.auth_prefix())
    }

    /// Absolute URL of the introspect endpoint.
    pub fn introspect_url(&self) -> String {
        format!("{}{}/introspect", self.base_url, self.auth_prefix())
    }

    fn auth_prefix(&self) -> String {
        match &self.tenant {
            Some(tenant) => format!("{API_PREFIX}/{tenant}/auth"),
            None => format!("{API_PREFIX}/auth"),
        }
    }
}

fn validate_base_url(raw: String) -> Result<String, ConfigError> {
    let parsed = Url::parse(&raw).map_err(|e| ConfigError::InvalidBaseUrl {
        url: raw.clone(),
        reason: e.to_string(),
    })?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ConfigError::InvalidBaseUrl {
            url: raw,
            reason: format!("unsupported scheme {:?}", parsed.scheme()),
        });
    }
    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tenant_scoped_endpoints() {
        let config = AuthConfig::for_tenant("acme", "https://auth.example.com").expect("config");
        assert_eq!(
            config.login_url(),
            "https://auth.example.com/api/v1/acme/auth/login"
        );
        assert_eq!(
            config.refresh_url(),
            "https://auth.example.com/api/v1/acme/auth/refresh"
        );
        assert_eq!(
            config.introspect_url(),
            "https://auth.example.com/api/v1/acme/auth/introspect"
        );
        assert_eq!(config.tenant(), Some("acme"));
    }

    #[test]
    fn tenantless_endpoints() {
        let config = AuthConfig::new("https://auth.example.com").expect("config");
        assert_eq!(
            config.introspect_url(),
            "https://auth.example.com/api/v1/auth/introspect"
        );
        assert_eq!(config.tenant(), None);
    }

    #[test]
    fn trailing_slash_trimmed() {
        let config = AuthConfig::new("https://auth.example.com/").expect("config");
        assert_eq!(config.base_url(), "https://auth.example.com");
        assert_eq!(
            config.login_url(),
            "https://auth.example.com/api/v1/auth/login"
        );
    }

    #[test]
    fn default_timeout_is_ten_seconds() {
        let config = AuthConfig::new("https://auth.example.com").expect("config");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn timeout_override() {
        let config = AuthConfig::new("https://auth.example.com")
            .expect("config")
            .with_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn rejects_relative_base_url() {
        let result = AuthConfig::new("auth.example.com");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let result = AuthConfig::new("ftp://auth.example.com");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn rejects_empty_tenant() {
        let result = AuthConfig::for_tenant("", "https://auth.example.com");
        assert!(matches!(result, Err(ConfigError::EmptyTenant)));
    }
}
