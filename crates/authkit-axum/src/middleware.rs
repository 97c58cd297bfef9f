//! Chain-style middleware for `axum::middleware::from_fn_with_state`.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use authkit_client::ValidateToken;

use crate::extract::CurrentUser;
use crate::{bearer_token, unauthorized};

/// State for [`bearer_auth`]: the validator shared across requests.
pub struct BearerAuth<V> {
    validator: Arc<V>,
}

impl<V> BearerAuth<V> {
    pub fn new(validator: V) -> Self {
        Self {
            validator: Arc::new(validator),
        }
    }

    /// Share a validator that is already behind an `Arc` (e.g. one
    /// `AuthClient` used both here and elsewhere in the application).
    pub fn from_arc(validator: Arc<V>) -> Self {
        Self { validator }
    }
}

// Manual impl: `V` itself does not need to be `Clone` behind the `Arc`.
impl<V> Clone for BearerAuth<V> {
    fn clone(&self) -> Self {
        Self {
            validator: Arc::clone(&self.validator),
        }
    }
}

/// Validate the request's bearer token and run the rest of the chain.
///
/// Malformed headers are rejected before any network call; a well-formed
/// token is passed to the validator, and on success the resulting
/// [`CurrentUser`] is inserted into the request extensions for downstream
/// handlers. Every failure becomes a `401` with `{"error": "<reason>"}` —
/// the chain below never runs.
///
/// Apply with
/// `router.layer(middleware::from_fn_with_state(BearerAuth::new(client), bearer_auth::<AuthClient>))`.
pub async fn bearer_auth<V>(
    State(auth): State<BearerAuth<V>>,
    mut request: Request,
    next: Next,
) -> Response
where
    V: ValidateToken + 'static,
{
    let token = match bearer_token(request.headers()) {
        Ok(token) => token.to_string(),
        Err(err) => {
            tracing::warn!(reason = %err, "authentication rejected before introspection");
            return unauthorized(&err);
        }
    };

    match auth.validator.validate(&token).await {
        Ok(claims) => {
            request.extensions_mut().insert(CurrentUser(claims));
            next.run(request).await
        }
        Err(err) => {
            tracing::warn!(reason = %err, "token validation failed");
            unauthorized(&err)
        }
    }
}
