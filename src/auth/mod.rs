use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims carried by issued tokens.
///
/// The issuance endpoint signs a fixed identity rather than a real account;
/// the token proves possession, not who you are.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(user: impl Into<String>, expiry_hours: u64) -> Self {
        let now = Utc::now();
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            user: user.into(),
            iat: now.timestamp(),
            exp,
        }
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("JWT secret not configured")]
    MissingSecret,

    #[error("JWT generation error: {0}")]
    Generation(jsonwebtoken::errors::Error),

    #[error("Invalid JWT token: {0}")]
    Verification(jsonwebtoken::errors::Error),
}

/// Signs and verifies opaque bearer tokens.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    expiry_hours: u64,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, expiry_hours: u64) -> Self {
        Self {
            secret: secret.into(),
            expiry_hours,
        }
    }

    /// Issue a freshly signed token with the fixed claim payload.
    pub fn sign(&self) -> Result<String, TokenError> {
        let claims = Claims::new("admin", self.expiry_hours);
        self.sign_claims(&claims)
    }

    fn sign_claims(&self, claims: &Claims) -> Result<String, TokenError> {
        if self.secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());
        encode(&Header::default(), claims, &encoding_key).map_err(TokenError::Generation)
    }

    /// Verify signature and expiry, returning the embedded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        if self.secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }

        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let validation = Validation::default();

        decode::<Claims>(token, &decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(TokenError::Verification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_then_verify_round_trip() {
        let service = TokenService::new("test-secret", 24);
        let token = service.sign().expect("sign");
        let claims = service.verify(&token).expect("verify");
        assert_eq!(claims.user, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn garbage_token_is_rejected() {
        let service = TokenService::new("test-secret", 24);
        assert!(matches!(
            service.verify("not.a.jwt"),
            Err(TokenError::Verification(_))
        ));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let signer = TokenService::new("secret-a", 24);
        let verifier = TokenService::new("secret-b", 24);
        let token = signer.sign().expect("sign");
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let service = TokenService::new("test-secret", 24);
        let now = Utc::now().timestamp();
        let stale = Claims {
            user: "admin".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = service.sign_claims(&stale).expect("sign");
        assert!(matches!(
            service.verify(&token),
            Err(TokenError::Verification(_))
        ));
    }

    #[test]
    fn empty_secret_cannot_sign() {
        let service = TokenService::new("", 24);
        assert!(matches!(service.sign(), Err(TokenError::MissingSecret)));
    }
}
