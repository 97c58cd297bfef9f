//! Handler-wrapping style: a `tower::Layer` enforcing the bearer contract.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use tower::{Layer, Service};

use authkit_client::ValidateToken;

use crate::extract::CurrentUser;
use crate::{bearer_token, unauthorized};

/// Wraps a service in [`RequireBearer`].
///
/// Same contract as [`bearer_auth`](crate::bearer_auth), packaged as a
/// layer for stacks that compose middleware as `tower` services:
/// `router.layer(RequireBearerLayer::new(client))`.
pub struct RequireBearerLayer<V> {
    validator: Arc<V>,
}

impl<V> RequireBearerLayer<V> {
    pub fn new(validator: V) -> Self {
        Self {
            validator: Arc::new(validator),
        }
    }

    /// Share a validator that is already behind an `Arc`.
    pub fn from_arc(validator: Arc<V>) -> Self {
        Self { validator }
    }
}

impl<V> Clone for RequireBearerLayer<V> {
    fn clone(&self) -> Self {
        Self {
            validator: Arc::clone(&self.validator),
        }
    }
}

impl<S, V> Layer<S> for RequireBearerLayer<V> {
    type Service = RequireBearer<S, V>;

    fn layer(&self, inner: S) -> Self::Service {
        RequireBearer {
            inner,
            validator: Arc::clone(&self.validator),
        }
    }
}

/// Service produced by [`RequireBearerLayer`]: validates the bearer token,
/// then either calls the wrapped service with [`CurrentUser`] attached or
/// short-circuits with a `401`.
pub struct RequireBearer<S, V> {
    inner: S,
    validator: Arc<V>,
}

impl<S: Clone, V> Clone for RequireBearer<S, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            validator: Arc::clone(&self.validator),
        }
    }
}

impl<S, V> Service<Request<Body>> for RequireBearer<S, V>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
    V: ValidateToken + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Response, S::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<Body>) -> Self::Future {
        // The service we observed as ready must be the one we drive; keep
        // the fresh clone on `self` and move the ready one into the future.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let validator = Arc::clone(&self.validator);

        Box::pin(async move {
            let token = match bearer_token(request.headers()) {
                Ok(token) => token.to_string(),
                Err(err) => {
                    tracing::warn!(reason = %err, "authentication rejected before introspection");
                    return Ok(unauthorized(&err));
                }
            };

            match validator.validate(&token).await {
                Ok(claims) => {
                    request.extensions_mut().insert(CurrentUser(claims));
                    inner.call(request).await
                }
                Err(err) => {
                    tracing::warn!(reason = %err, "token validation failed");
                    Ok(unauthorized(&err))
                }
            }
        })
    }
}
