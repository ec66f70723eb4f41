//! Anti-forgery tokens for settings submissions

use crate::contract::ContextId;
use sha2::{Digest, Sha256};

/// Issues and checks the token a settings submission must echo back
pub trait CsrfVerifier: Send + Sync {
    /// Token to embed in the rendered form
    fn token_for(&self, context_id: ContextId) -> String;

    /// Whether `token` is the one issued for `context_id`
    fn verify(&self, context_id: ContextId, token: &str) -> bool {
        constant_time_eq(self.token_for(context_id).as_bytes(), token.as_bytes())
    }
}

/// Derives tokens from a server secret: hex(SHA-256(secret ":" context_id))
#[derive(Clone)]
pub struct SecretCsrfVerifier {
    secret: String,
}

impl SecretCsrfVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl CsrfVerifier for SecretCsrfVerifier {
    fn token_for(&self, context_id: ContextId) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.secret.as_bytes());
        hasher.update(b":");
        hasher.update(context_id.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
