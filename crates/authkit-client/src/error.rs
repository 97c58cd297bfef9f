//! Auth SDK error types.

use reqwest::StatusCode;

/// Errors from auth service calls and bearer-header validation.
///
/// One closed enumeration covers the whole SDK so that callers (and the
/// framework middleware) can match on error kind rather than comparing
/// message strings. Nothing here is retried internally; whether an error is
/// worth retrying is the caller's policy.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Login endpoint returned a non-200 status.
    #[error("login failed: {status}")]
    LoginFailed { status: StatusCode },

    /// Refresh endpoint returned a non-200 status.
    #[error("refresh failed: {status}")]
    RefreshFailed { status: StatusCode },

    /// Introspect endpoint returned a non-200 status.
    #[error("invalid token: {status}")]
    TokenInvalid { status: StatusCode },

    /// Introspection succeeded but the token is not active. The HTTP call
    /// itself was fine; the SDK contract still treats this as an error so
    /// callers cannot forget to check the flag.
    #[error("token inactive")]
    TokenInactive,

    /// Request carried no Authorization header (or an empty one).
    #[error("authorization header missing")]
    NoAuthHeader,

    /// Authorization header present but not a well-formed `Bearer <token>`.
    #[error("invalid authorization header type")]
    InvalidAuthType,

    /// Transport-level failure (connect, timeout, TLS) before any status
    /// was received.
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        source: reqwest::Error,
    },

    /// The service answered 200 but the body did not match the wire schema.
    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        source: reqwest::Error,
    },

    /// Client construction failed.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}
