//! Session tokens.
//!
//! Access tokens are short-lived HS256 JWTs that carry the caller's role and
//! capability flags, so extractors never hit the database. Refresh tokens are
//! opaque; the server keeps only their SHA-256 digest.

use bloodbank_core::types::DbId;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::config::{env_or, ConfigError};

/// `iss` claim stamped on every access token and required on decode.
pub const TOKEN_ISSUER: &str = "bloodbank";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User id.
    pub sub: DbId,
    pub iss: String,
    /// Profile role at issue time (`admin`, `staff` or `user`).
    pub role: String,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

/// The identity an access token is issued for.
#[derive(Debug, Clone, Copy)]
pub struct TokenSubject<'a> {
    pub user_id: DbId,
    pub role: &'a str,
    pub is_staff: bool,
    pub is_superuser: bool,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry_mins: i64,
    pub refresh_token_expiry_days: i64,
}

const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 15;
const DEFAULT_REFRESH_EXPIRY_DAYS: i64 = 7;

impl JwtConfig {
    /// | Env Var                    | Required | Default |
    /// |----------------------------|----------|---------|
    /// | `JWT_SECRET`               | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS`   | no       | `15`    |
    /// | `JWT_REFRESH_EXPIRY_DAYS`  | no       | `7`     |
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let access_token_expiry_mins: i64 =
            env_or("JWT_ACCESS_EXPIRY_MINS", DEFAULT_ACCESS_EXPIRY_MINS)?;
        let refresh_token_expiry_days: i64 =
            env_or("JWT_REFRESH_EXPIRY_DAYS", DEFAULT_REFRESH_EXPIRY_DAYS)?;

        Ok(Self {
            secret,
            access_token_expiry_mins,
            refresh_token_expiry_days,
        })
    }
}

pub fn generate_access_token(
    subject: TokenSubject<'_>,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.access_token_expiry_mins * 60;

    let claims = Claims {
        sub: subject.user_id,
        iss: TOKEN_ISSUER.to_string(),
        role: subject.role.to_string(),
        is_staff: subject.is_staff,
        is_superuser: subject.is_superuser,
        exp,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Decode an access token. Signature, expiry and issuer must all check out.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.set_issuer(&[TOKEN_ISSUER]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
}

/// New refresh token as `(plaintext, digest)`. Only the digest is stored.
pub fn generate_refresh_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let digest = hash_refresh_token(&plaintext);
    (plaintext, digest)
}

/// Hex SHA-256 of a refresh token, the key sessions are looked up by.
pub fn hash_refresh_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        }
    }

    fn nurse() -> TokenSubject<'static> {
        TokenSubject {
            user_id: 42,
            role: "staff",
            is_staff: true,
            is_superuser: false,
        }
    }

    fn sign(claims: &Claims, config: &JwtConfig) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed")
    }

    fn member_claims(exp_offset: i64, iss: &str) -> Claims {
        let now = chrono::Utc::now().timestamp();
        Claims {
            sub: 7,
            iss: iss.to_string(),
            role: "user".to_string(),
            is_staff: false,
            is_superuser: false,
            exp: now + exp_offset,
            iat: now - 600,
            jti: Uuid::new_v4().to_string(),
        }
    }

    #[test]
    fn access_token_carries_role_and_capabilities() {
        let config = test_config();
        let token = generate_access_token(nurse(), &config).expect("token should be issued");

        let claims = validate_token(&token, &config).expect("token should validate");
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.iss, TOKEN_ISSUER);
        assert_eq!(claims.role, "staff");
        assert!(claims.is_staff);
        assert!(!claims.is_superuser);
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn expired_token_is_rejected() {
        let config = test_config();
        // Past the default 60 second leeway.
        let token = sign(&member_claims(-300, TOKEN_ISSUER), &config);
        assert!(validate_token(&token, &config).is_err());
    }

    #[test]
    fn foreign_issuer_is_rejected() {
        let config = test_config();
        let token = sign(&member_claims(300, "some-other-service"), &config);
        assert!(validate_token(&token, &config).is_err());
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let other = JwtConfig {
            secret: "another-secret".to_string(),
            ..test_config()
        };
        let token = generate_access_token(nurse(), &other).expect("token should be issued");
        assert!(validate_token(&token, &test_config()).is_err());
    }

    #[test]
    fn refresh_digest_is_stable_hex() {
        let (plaintext, digest) = generate_refresh_token();
        assert_eq!(digest, hash_refresh_token(&plaintext));
        assert_eq!(digest.len(), 64);
        assert_ne!(plaintext, digest);
    }
}
