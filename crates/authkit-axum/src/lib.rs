//! # Authkit Axum Adapter
//!
//! Bearer-token gatekeeping for axum applications, backed by any
//! [`ValidateToken`] implementation — normally an
//! [`AuthClient`](authkit_client::AuthClient) introspecting tokens against
//! the remote auth service.
//!
//! Two integration styles, one contract:
//!
//! - [`bearer_auth`] + [`BearerAuth`] — a chain-style middleware function
//!   for [`axum::middleware::from_fn_with_state`].
//! - [`RequireBearerLayer`] — a [`tower::Layer`] that wraps the inner
//!   handler service.
//!
//! Both extract the `Authorization: Bearer <token>` header, reject
//! malformed requests locally *before* any call to the auth service, ask
//! the validator about well-formed tokens, and either attach
//! [`CurrentUser`] to the request extensions and continue, or abort with a
//! `401` whose JSON body is `{"error": "<reason>"}`.
//!
//! ```no_run
//! use authkit_axum::{bearer_auth, BearerAuth, CurrentUser, RequireBearerLayer};
//! use authkit_client::AuthClient;
//! use axum::{middleware, routing::get, Router};
//!
//! # fn run() -> Result<(), authkit_client::AuthError> {
//! async fn whoami(user: CurrentUser) -> String {
//!     user.sub.clone()
//! }
//!
//! let client = AuthClient::for_tenant("acme", "https://auth.example.com")?;
//!
//! // Chain style:
//! let app: Router = Router::new()
//!     .route("/whoami", get(whoami))
//!     .layer(middleware::from_fn_with_state(
//!         BearerAuth::new(client),
//!         bearer_auth::<AuthClient>,
//!     ));
//!
//! // ... or handler-wrapping style:
//! let client = AuthClient::for_tenant("acme", "https://auth.example.com")?;
//! let app: Router = Router::new()
//!     .route("/whoami", get(whoami))
//!     .layer(RequireBearerLayer::new(client));
//! # Ok(())
//! # }
//! ```

use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use authkit_client::AuthError;
pub use authkit_client::ValidateToken;

mod extract;
mod layer;
mod middleware;

pub use extract::{CurrentUser, NoCurrentUser};
pub use layer::{RequireBearer, RequireBearerLayer};
pub use middleware::{bearer_auth, BearerAuth};

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// The header value must be exactly two space-separated parts with a
/// case-insensitive `Bearer` scheme and a non-empty token. A missing or
/// empty header is [`AuthError::NoAuthHeader`]; anything else malformed
/// (wrong scheme, extra parts, undecodable bytes) is
/// [`AuthError::InvalidAuthType`].
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = match headers.get(header::AUTHORIZATION) {
        None => return Err(AuthError::NoAuthHeader),
        Some(value) => value.to_str().map_err(|_| AuthError::InvalidAuthType)?,
    };
    if value.is_empty() {
        return Err(AuthError::NoAuthHeader);
    }

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None)
            if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() =>
        {
            Ok(token)
        }
        _ => Err(AuthError::InvalidAuthType),
    }
}

/// The uniform rejection: 401 with `{"error": "<reason>"}`.
pub(crate) fn unauthorized(err: &AuthError) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({ "error": err.to_string() })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn missing_header() {
        let err = bearer_token(&HeaderMap::new()).unwrap_err();
        assert!(matches!(err, AuthError::NoAuthHeader));
    }

    #[test]
    fn empty_header_treated_as_missing() {
        let err = bearer_token(&headers_with("")).unwrap_err();
        assert!(matches!(err, AuthError::NoAuthHeader));
    }

    #[test]
    fn well_formed_bearer() {
        assert_eq!(bearer_token(&headers_with("Bearer abc123")).unwrap(), "abc123");
    }

    #[test]
    fn scheme_is_case_insensitive() {
        assert_eq!(bearer_token(&headers_with("bearer abc123")).unwrap(), "abc123");
        assert_eq!(bearer_token(&headers_with("BEARER abc123")).unwrap(), "abc123");
    }

    #[test]
    fn wrong_scheme_rejected() {
        let err = bearer_token(&headers_with("Basic dXNlcjpwYXNz")).unwrap_err();
        assert!(matches!(err, AuthError::InvalidAuthType));
    }

    #[test]
    fn scheme_without_token_rejected() {
        let err = bearer_token(&headers_with("Bearer")).unwrap_err();
        assert!(matches!(err, AuthError::InvalidAuthType));
    }

    #[test]
    fn three_parts_rejected() {
        let err = bearer_token(&headers_with("Bearer abc def")).unwrap_err();
        assert!(matches!(err, AuthError::InvalidAuthType));
    }

    #[test]
    fn double_space_rejected() {
        // "Bearer  abc" splits into three parts, not two.
        let err = bearer_token(&headers_with("Bearer  abc")).unwrap_err();
        assert!(matches!(err, AuthError::InvalidAuthType));
    }

    #[test]
    fn non_utf8_header_rejected_as_invalid_type() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"Bearer \xff").unwrap(),
        );
        let err = bearer_token(&headers).unwrap_err();
        assert!(matches!(err, AuthError::InvalidAuthType));
    }
}
