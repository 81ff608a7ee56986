//! Signed JWT assertions for Google service-account authentication.
//!
//! A service account proves its identity to the OAuth2 token endpoint by
//! presenting a short-lived RS256 JWT (the "assertion") signed with the
//! account's private key. The token endpoint answers with a bearer token.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifetime of an assertion. Google rejects anything longer than one hour.
pub const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Grant type sent alongside the assertion to the token endpoint.
pub const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Error type for JWT operations.
#[derive(Debug, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingError(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// Claims of a service-account assertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssertionClaims {
    /// Service account email
    pub iss: String,
    /// Space-separated OAuth scopes
    pub scope: String,
    /// Token endpoint URI
    pub aud: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Signs assertions on behalf of one service account.
#[derive(Clone)]
pub struct AssertionSigner {
    client_email: String,
    token_uri: String,
    encoding_key: EncodingKey,
    algorithm: Algorithm,
}

impl std::fmt::Debug for AssertionSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssertionSigner")
            .field("client_email", &self.client_email)
            .field("token_uri", &self.token_uri)
            .field("encoding_key", &"[REDACTED]")
            .finish()
    }
}

impl AssertionSigner {
    /// Creates a signer from the service account's RSA private key in PEM format.
    pub fn from_rsa_pem(
        client_email: impl Into<String>,
        token_uri: impl Into<String>,
        private_key_pem: &str,
    ) -> Result<Self, JwtError> {
        let encoding_key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())
            .map_err(|e| JwtError::InvalidKey(format!("Invalid private key: {}", e)))?;

        Ok(Self {
            client_email: client_email.into(),
            token_uri: token_uri.into(),
            encoding_key,
            algorithm: Algorithm::RS256,
        })
    }

    /// Creates a signer with an HS256 symmetric key.
    /// DO NOT use in production - only for tests.
    #[doc(hidden)]
    pub fn new_for_testing(client_email: &str, token_uri: &str, secret: &str) -> Self {
        Self {
            client_email: client_email.to_string(),
            token_uri: token_uri.to_string(),
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            algorithm: Algorithm::HS256,
        }
    }

    pub fn client_email(&self) -> &str {
        &self.client_email
    }

    pub fn token_uri(&self) -> &str {
        &self.token_uri
    }

    /// Builds the claims for an assertion requesting `scopes`.
    pub fn claims(&self, scopes: &[&str]) -> AssertionClaims {
        let now = Utc::now();
        AssertionClaims {
            iss: self.client_email.clone(),
            scope: scopes.join(" "),
            aud: self.token_uri.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ASSERTION_LIFETIME_SECS)).timestamp(),
        }
    }

    /// Signs a fresh assertion requesting `scopes`.
    pub fn sign(&self, scopes: &[&str]) -> Result<String, JwtError> {
        let claims = self.claims(scopes);
        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, DecodingKey, Validation};

    const EMAIL: &str = "ledger@club-project.iam.gserviceaccount.com";
    const TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
    const SECRET: &str = "test_secret_key_for_assertions_12345";

    fn test_signer() -> AssertionSigner {
        AssertionSigner::new_for_testing(EMAIL, TOKEN_URI, SECRET)
    }

    fn decode_claims(token: &str) -> AssertionClaims {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[TOKEN_URI]);
        decode::<AssertionClaims>(
            token,
            &DecodingKey::from_secret(SECRET.as_bytes()),
            &validation,
        )
        .unwrap()
        .claims
    }

    #[test]
    fn test_sign_produces_jwt() {
        let token = test_signer().sign(&["scope.a"]).unwrap();
        assert_eq!(token.matches('.').count(), 2);
    }

    #[test]
    fn test_signed_claims_round_trip() {
        let token = test_signer()
            .sign(&[
                "https://www.googleapis.com/auth/spreadsheets",
                "https://www.googleapis.com/auth/drive.metadata.readonly",
            ])
            .unwrap();
        let claims = decode_claims(&token);

        assert_eq!(claims.iss, EMAIL);
        assert_eq!(claims.aud, TOKEN_URI);
        assert_eq!(
            claims.scope,
            "https://www.googleapis.com/auth/spreadsheets https://www.googleapis.com/auth/drive.metadata.readonly"
        );
    }

    #[test]
    fn test_claims_lifetime() {
        let before = Utc::now().timestamp();
        let claims = test_signer().claims(&["scope.a"]);
        let after = Utc::now().timestamp();

        assert!(claims.iat >= before && claims.iat <= after);
        assert_eq!(claims.exp - claims.iat, ASSERTION_LIFETIME_SECS);
    }

    #[test]
    fn test_invalid_pem_rejected() {
        let result = AssertionSigner::from_rsa_pem(EMAIL, TOKEN_URI, "not a pem");
        assert!(matches!(result, Err(JwtError::InvalidKey(_))));
    }

    #[test]
    fn test_debug_redacts_key() {
        let debug = format!("{:?}", test_signer());
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains(SECRET));
    }

    #[test]
    fn test_jwt_error_display() {
        assert!(format!("{}", JwtError::EncodingError("x".to_string())).contains("encode"));
        assert!(format!("{}", JwtError::InvalidKey("x".to_string())).contains("Invalid key"));
    }
}
