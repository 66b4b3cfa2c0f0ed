// src/infrastructure/security/mod.rs
pub mod admin_token;

pub use admin_token::StaticAdminTokenVerifier;
