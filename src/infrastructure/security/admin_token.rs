use crate::application::{
    dto::AdminPrincipal,
    error::{ApplicationError, ApplicationResult},
    ports::security::AdminTokenVerifier,
};
use async_trait::async_trait;
use sha2::{Digest, Sha256};

const ADMIN_SUBJECT: &str = "admin";

/// Accepts a single pre-shared administrator token.
///
/// Only the SHA-256 digest of the configured token is kept in memory. Incoming
/// tokens are hashed and compared over the full digest width so the comparison
/// time does not depend on where the first mismatch is.
#[derive(Clone)]
pub struct StaticAdminTokenVerifier {
    digest: [u8; 32],
}

impl StaticAdminTokenVerifier {
    pub fn new(token: &str) -> Self {
        Self {
            digest: Sha256::digest(token.as_bytes()).into(),
        }
    }

    fn matches(&self, candidate: &str) -> bool {
        let candidate: [u8; 32] = Sha256::digest(candidate.as_bytes()).into();
        self.digest
            .iter()
            .zip(candidate.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

#[async_trait]
impl AdminTokenVerifier for StaticAdminTokenVerifier {
    async fn verify(&self, token: &str) -> ApplicationResult<AdminPrincipal> {
        if token.is_empty() || !self.matches(token) {
            tracing::warn!("rejected admin token");
            return Err(ApplicationError::unauthorized("invalid admin token"));
        }
        Ok(AdminPrincipal {
            subject: ADMIN_SUBJECT.to_string(),
        })
    }
}
