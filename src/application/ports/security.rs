// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::AdminPrincipal};
use async_trait::async_trait;

#[async_trait]
pub trait AdminTokenVerifier: Send + Sync {
    /// Resolve a raw bearer token into the administrator it belongs to.
    async fn verify(&self, token: &str) -> ApplicationResult<AdminPrincipal>;
}
