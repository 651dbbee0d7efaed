//! Session cookie signing (HMAC-SHA256)

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

#[derive(Error, Debug)]
pub enum SigningError {
    #[error("Signing secret must not be empty")]
    EmptySecret,
    #[error("Invalid signing key: {0}")]
    InvalidKey(String),
}

/// Signs session ids as `<id>.<hex hmac>` and verifies them back.
#[derive(Clone)]
pub struct CookieSigner {
    mac: HmacSha256,
}

impl CookieSigner {
    pub fn new(secret: &str) -> Result<Self, SigningError> {
        if secret.is_empty() {
            return Err(SigningError::EmptySecret);
        }
        let mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|e| SigningError::InvalidKey(e.to_string()))?;
        Ok(Self { mac })
    }

    pub fn sign(&self, id: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(id.as_bytes());
        format!("{}.{}", id, hex::encode(mac.finalize().into_bytes()))
    }

    /// Returns the session id if the signature matches, `None` otherwise.
    pub fn unsign(&self, value: &str) -> Option<String> {
        let (id, signature) = value.rsplit_once('.')?;
        let signature = hex::decode(signature).ok()?;

        let mut mac = self.mac.clone();
        mac.update(id.as_bytes());
        mac.verify_slice(&signature).ok()?;

        Some(id.to_string())
    }
}

impl fmt::Debug for CookieSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CookieSigner").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_then_unsign() {
        let signer = CookieSigner::new("secret").unwrap();
        let signed = signer.sign("abc123");
        assert!(signed.starts_with("abc123."));
        assert_eq!(signer.unsign(&signed).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_rejects_tampered_values() {
        let signer = CookieSigner::new("secret").unwrap();
        let signed = signer.sign("abc123");

        let forged = signed.replacen("abc123", "abc124", 1);
        assert!(signer.unsign(&forged).is_none());
        assert!(signer.unsign("abc123").is_none());
        assert!(signer.unsign("abc123.nothex").is_none());
    }

    #[test]
    fn test_other_secret_does_not_verify() {
        let signed = CookieSigner::new("one").unwrap().sign("abc123");
        assert!(CookieSigner::new("two").unwrap().unsign(&signed).is_none());
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(matches!(CookieSigner::new(""), Err(SigningError::EmptySecret)));
    }
}
