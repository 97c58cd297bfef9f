//! Wire DTOs for the auth service endpoints.
//!
//! Every field mirrors the service's fixed JSON schema; the client never
//! fills anything the server did not send.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Credentials sent to the login endpoint.
///
/// `client_id` and `totp` are optional and omitted from the JSON body when
/// unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username or e-mail address.
    pub identifier: String,
    /// OAuth-style client identifier, when the deployment requires one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    pub password: String,
    /// One-time TOTP code for accounts with two-factor enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totp: Option<String>,
}

impl LoginRequest {
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            client_id: None,
            password: password.into(),
            totp: None,
        }
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn with_totp(mut self, totp: impl Into<String>) -> Self {
        self.totp = Some(totp.into());
        self
    }
}

/// Success body of the login and refresh endpoints: an access/refresh token
/// pair. Both tokens are opaque strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenSet {
    pub access_token: String,
    /// Scheme the access token is presented under, e.g. `"Bearer"`.
    pub token_type: String,
    /// Access-token lifetime in seconds.
    pub expires_in: u64,
    pub refresh_token: String,
    /// Absolute expiry of the refresh token (RFC 3339).
    pub refresh_expires_at: DateTime<Utc>,
}

/// Success body of the introspect endpoint: whether the token is active and
/// the identity claims bound to it.
///
/// The whole struct defaults field-wise: when a token is inactive the
/// service may send as little as `{"active": false}`, and that must still
/// decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Claims {
    /// Whether the token is currently valid. Callers of
    /// [`AuthClient::introspect`](crate::AuthClient::introspect) never see
    /// `false` here — an inactive token is surfaced as
    /// [`AuthError::TokenInactive`](crate::AuthError::TokenInactive).
    pub active: bool,
    pub username: String,
    /// Subject identifier.
    pub sub: String,
    /// Audience the token was issued for.
    pub aud: String,
    /// Space-separated scope string.
    pub scope: String,
    /// Expiry, seconds since epoch.
    pub exp: i64,
    /// Issued-at, seconds since epoch.
    pub iat: i64,
    pub roles: Vec<String>,
    /// Deployment-specific claims the fixed schema does not name.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Claims {
    /// Whether `role` appears in the token's role set.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// The individual entries of the space-separated scope string.
    pub fn scopes(&self) -> impl Iterator<Item = &str> {
        self.scope.split_whitespace()
    }
}
