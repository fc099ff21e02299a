//! JWT token service
//!
//! Issues and verifies the signed bearer tokens used by every protected
//! operation. Tokens are stateless: no revocation list is kept, expiry is
//! the sole lifetime bound.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Signing secret (at least 32 characters, enforced at startup)
    pub secret: String,
    /// Token lifetime in minutes
    pub expiration_minutes: i64,
    /// Token issuer
    pub issuer: String,
}

/// Claims stored in a token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (subject)
    pub sub: String,
    /// User email
    pub email: String,
    /// Role name
    pub role: String,
    /// Expiry timestamp
    pub exp: i64,
    /// Issued-at timestamp
    pub iat: i64,
    /// Issuer
    pub iss: String,
}

/// JWT errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),
}

/// JWT token service
#[derive(Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    /// Create a new JWT service from configuration
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Generate a new token for a user
    pub fn generate_token(
        &self,
        user_id: &str,
        email: &str,
        role: &str,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.expiration_minutes);

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Verify and decode a token
    ///
    /// Fails when the signature does not match the configured secret, the
    /// issuer claim does not match the configured issuer, or the token has
    /// expired.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::InvalidToken => JwtError::InvalidToken(e.to_string()),
                _ => JwtError::InvalidToken(format!("Token validation failed: {}", e)),
            }
        })?;

        Ok(token_data.claims)
    }

    /// Extract the token from an Authorization header value
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

/// Current user context, decoded from validated JWT claims
///
/// Created by the auth middleware and threaded through the request as a
/// value; never ambient state.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// User ID
    pub id: String,
    /// User email
    pub email: String,
    /// Role name
    pub role: String,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
            role: claims.role,
        }
    }
}

impl CurrentUser {
    /// Whether this user carries the administrator role
    pub fn is_admin(&self) -> bool {
        self.role == "ADMIN"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "0123456789abcdef0123456789abcdef".to_string(),
            expiration_minutes: 60,
            issuer: "hr-admin-api".to_string(),
        }
    }

    #[test]
    fn test_token_round_trip() {
        let service = JwtService::with_config(test_config());

        let token = service
            .generate_token("user:admin", "admin@example.com", "ADMIN")
            .expect("Failed to generate test token");

        let claims = service
            .validate_token(&token)
            .expect("Failed to validate test token");

        assert_eq!(claims.sub, "user:admin");
        assert_eq!(claims.email, "admin@example.com");
        assert_eq!(claims.role, "ADMIN");
        assert_eq!(claims.iss, "hr-admin-api");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = JwtConfig {
            expiration_minutes: -10,
            ..test_config()
        };
        let service = JwtService::with_config(config);

        let token = service
            .generate_token("user:admin", "admin@example.com", "ADMIN")
            .unwrap();

        match service.validate_token(&token) {
            Err(JwtError::ExpiredToken) => {}
            other => panic!("Expected ExpiredToken, got {:?}", other.map(|c| c.sub)),
        }
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service = JwtService::with_config(test_config());
        let other = JwtService::with_config(JwtConfig {
            secret: "ffffffffffffffffffffffffffffffff".to_string(),
            ..test_config()
        });

        let token = service
            .generate_token("user:admin", "admin@example.com", "ADMIN")
            .unwrap();

        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let service = JwtService::with_config(test_config());
        let other = JwtService::with_config(JwtConfig {
            issuer: "someone-else".to_string(),
            ..test_config()
        });

        let token = service
            .generate_token("user:admin", "admin@example.com", "ADMIN")
            .unwrap();

        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn test_extract_from_header() {
        assert_eq!(
            JwtService::extract_from_header("Bearer abc.def.ghi"),
            Some("abc.def.ghi")
        );
        assert_eq!(JwtService::extract_from_header("Basic abc"), None);
        assert_eq!(JwtService::extract_from_header("abc.def.ghi"), None);
    }

    #[test]
    fn test_current_user_from_claims() {
        let service = JwtService::with_config(test_config());
        let token = service
            .generate_token("user:admin", "admin@example.com", "ADMIN")
            .unwrap();
        let user = CurrentUser::from(service.validate_token(&token).unwrap());

        assert_eq!(user.id, "user:admin");
        assert!(user.is_admin());
    }
}
