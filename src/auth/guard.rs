//! Shared-secret comparison.
//!
//! The presented credential is the raw `Authorization` header value, as
//! bytes. No scheme prefix is stripped and no text decoding happens, so a
//! client configured with `secret-token` must send exactly
//! `Authorization: secret-token`, and a non-ASCII secret matches the same
//! UTF-8 bytes on the wire.

use std::fmt;

use subtle::ConstantTimeEq;
use tracing::warn;

use super::errors::{AuthError, AuthResult};

/// A non-empty secret whose `Debug` output never shows the value
#[derive(Clone)]
pub struct SharedSecret(String);

impl SharedSecret {
    pub fn new(secret: impl Into<String>) -> AuthResult<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(AuthError::EmptySecret);
        }
        Ok(Self(secret))
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(***)")
    }
}

/// Authorizes requests against a configured [`SharedSecret`]
#[derive(Debug, Clone)]
pub struct AccessGuard {
    secret: SharedSecret,
}

impl AccessGuard {
    pub fn new(secret: SharedSecret) -> Self {
        Self { secret }
    }

    /// Accepts only a credential byte-equal to the secret
    pub fn authorize(&self, presented: Option<&[u8]>) -> AuthResult<()> {
        let Some(credential) = presented else {
            warn!("request rejected: missing credential");
            return Err(AuthError::Unauthorized);
        };

        if bool::from(credential.ct_eq(self.secret.as_bytes())) {
            Ok(())
        } else {
            warn!("request rejected: credential mismatch");
            Err(AuthError::Unauthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guard() -> AccessGuard {
        AccessGuard::new(SharedSecret::new("secret-token").unwrap())
    }

    #[test]
    fn test_exact_secret_is_authorized() {
        assert!(guard().authorize(Some(&b"secret-token"[..])).is_ok());
    }

    #[test]
    fn test_missing_credential_is_rejected() {
        assert_eq!(guard().authorize(None), Err(AuthError::Unauthorized));
    }

    #[test]
    fn test_near_misses_are_rejected() {
        let guard = guard();
        for presented in ["", "secret-token ", "Secret-Token", "Bearer secret-token", "secret"] {
            assert_eq!(
                guard.authorize(Some(presented.as_bytes())),
                Err(AuthError::Unauthorized)
            );
        }
    }

    #[test]
    fn test_non_ascii_secret_matches_its_utf8_bytes() {
        let guard = AccessGuard::new(SharedSecret::new("pässwort").unwrap());
        assert!(guard.authorize(Some("pässwort".as_bytes())).is_ok());
        assert_eq!(
            guard.authorize(Some(&b"passwort"[..])),
            Err(AuthError::Unauthorized)
        );
    }

    #[test]
    fn test_empty_secret_is_refused() {
        assert_eq!(SharedSecret::new("").unwrap_err(), AuthError::EmptySecret);
    }

    #[test]
    fn test_debug_hides_secret() {
        let rendered = format!("{:?}", guard());
        assert!(!rendered.contains("secret-token"));
    }
}
