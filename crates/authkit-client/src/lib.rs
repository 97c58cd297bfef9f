//! # Authkit Client
//!
//! Typed client for the platform authentication service. Three operations,
//! all POST-with-JSON round trips:
//!
//! - **login** — exchange credentials (plus optional TOTP code) for an
//!   access/refresh token pair
//! - **refresh** — exchange a refresh token for a fresh token pair
//! - **introspect** — ask the auth service whether a bearer token is active
//!   and retrieve the claims bound to it
//!
//! Tokens are opaque to this crate: it never inspects or mutates their
//! contents, it only carries them to and from the auth service.
//!
//! ## Deployment variants
//!
//! Multi-tenant deployments scope the auth endpoints under
//! `/api/v1/{tenant}/auth`; single-tenant deployments use `/api/v1/auth`.
//! Both are handled by one client, selected at configuration time:
//!
//! ```no_run
//! use authkit_client::{AuthClient, AuthConfig, LoginRequest};
//!
//! # async fn run() -> Result<(), authkit_client::AuthError> {
//! let client = AuthClient::new(AuthConfig::for_tenant("acme", "https://auth.example.com")?)?;
//! let tokens = client
//!     .login(&LoginRequest::new("dev@example.com", "hunter2").with_totp("123456"))
//!     .await?;
//! let claims = client.introspect(&tokens.access_token).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency & cancellation
//!
//! `AuthClient` is `Send + Sync` and cheap to share (`reqwest` pools
//! connections internally); the three operations hold no state between
//! calls, so concurrent calls on one instance do not interfere. Dropping a
//! call future aborts the in-flight request — there is no other
//! cancellation channel, and no operation is ever retried internally.

pub mod client;
pub mod config;
pub mod error;
pub mod types;
pub mod validate;

pub use client::AuthClient;
pub use config::{AuthConfig, ConfigError};
pub use error::AuthError;
pub use types::{Claims, LoginRequest, TokenSet};
pub use validate::ValidateToken;
