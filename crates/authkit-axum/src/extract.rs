//! Extractor handing the validated claims to route handlers.

use std::ops::Deref;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use authkit_client::Claims;

/// The authenticated caller, as attached by the bearer middleware.
///
/// Handlers take it as an argument; the `FromRequestParts` impl reads the
/// extension the middleware inserted. Derefs to [`Claims`].
///
/// ```no_run
/// use authkit_axum::CurrentUser;
///
/// async fn whoami(user: CurrentUser) -> String {
///     format!("{} ({})", user.username, user.sub)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Claims);

impl CurrentUser {
    pub fn into_inner(self) -> Claims {
        self.0
    }
}

impl Deref for CurrentUser {
    type Target = Claims;

    fn deref(&self) -> &Claims {
        &self.0
    }
}

/// Rejection when no [`CurrentUser`] extension is present — the route is
/// not behind the bearer middleware, or the middleware did not run.
#[derive(Debug)]
pub struct NoCurrentUser;

impl IntoResponse for NoCurrentUser {
    fn into_response(self) -> Response {
        // Same 401 shape as the middleware rejections; the distinct message
        // points at the missing layer rather than a bad token.
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "error": "no authenticated caller in request context" })),
        )
            .into_response()
    }
}

#[axum::async_trait]
impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = NoCurrentUser;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(NoCurrentUser)
    }
}
