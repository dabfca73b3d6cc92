//! Session establishment and identity operations.

use async_trait::async_trait;
use outreach_core::{IdentityUser, JwtToken};

use crate::GatewayResult;

#[derive(Debug, Clone)]
pub struct LoginArgs {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct RegisterArgs {
    pub username: String,
    pub password: String,
    pub name: String,
    /// Ask the backend to also establish a cookie session for later refresh.
    pub create_session: Option<bool>,
}

/// Operations that establish, renew, and tear down the session.
///
/// Every token-acquiring operation (login, register, refresh) stores the
/// returned token for all subsequent calls; logout clears it.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Log in. A 401 response surfaces as
    /// [`GatewayError::InvalidCredentials`](crate::GatewayError::InvalidCredentials).
    async fn login(&self, args: LoginArgs) -> GatewayResult<JwtToken>;

    /// Register and log in.
    async fn register(&self, args: RegisterArgs) -> GatewayResult<JwtToken>;

    /// Refresh the current session to get a new token. Relies on the
    /// server-side cookie session.
    async fn refresh(&self) -> GatewayResult<JwtToken>;

    /// Log out the current user. The held token is dropped even when the
    /// remote call fails.
    async fn logout(&self) -> GatewayResult<()>;

    /// Get the authenticated principal's identity.
    async fn identity(&self) -> GatewayResult<IdentityUser>;
}
