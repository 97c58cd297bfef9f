//! The token-validation capability consumed by framework middleware.

use async_trait::async_trait;

use crate::client::AuthClient;
use crate::error::AuthError;
use crate::types::Claims;

/// Validate a bearer token and return the claims bound to it.
///
/// This is the one seam between the SDK core and framework adapters: the
/// middleware crates are generic over `ValidateToken`, so tests substitute
/// a stub and applications hand in an [`AuthClient`]. Implementations must
/// be `Send + Sync`; the trait is object-safe so adapters can also hold a
/// `Arc<dyn ValidateToken>`.
#[async_trait]
pub trait ValidateToken: Send + Sync {
    /// Return the claims for an *active* token, or the reason it was
    /// rejected.
    async fn validate(&self, token: &str) -> Result<Claims, AuthError>;
}

#[async_trait]
impl ValidateToken for AuthClient {
    async fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        self.introspect(token).await
    }
}
