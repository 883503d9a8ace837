use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::Session;
use super::errors::AuthError;

/// Resolves the caller's session; consulted before every gated operation.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn get_session(&self, token: Option<&str>) -> Option<Session>;
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

// one year; larger values overflow chrono arithmetic
const MAX_TTL_HOURS: i64 = 24 * 365;

/// HS256 token issuer/verifier.
#[derive(Clone)]
pub struct JwtAuthProvider {
    secret: String,
    ttl: Duration,
}

impl JwtAuthProvider {
    pub fn new(secret: impl Into<String>, ttl_hours: i64) -> Self {
        Self { secret: secret.into(), ttl: Duration::hours(ttl_hours.clamp(-MAX_TTL_HOURS, MAX_TTL_HOURS)) }
    }

    pub fn issue(&self, subject: &str) -> Result<(String, Session), AuthError> {
        let now = Utc::now();
        let exp = now + self.ttl;
        let claims = Claims { sub: subject.to_string(), iat: now.timestamp(), exp: exp.timestamp() };
        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(self.secret.as_bytes()))
            .map_err(|e| AuthError::TokenError(e.to_string()))?;
        let expires_at = DateTime::from_timestamp(claims.exp, 0).unwrap_or(exp);
        Ok((token, Session { subject: claims.sub, expires_at }))
    }

    pub fn verify(&self, token: &str) -> Result<Session, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        let data = decode::<Claims>(token, &DecodingKey::from_secret(self.secret.as_bytes()), &validation)
            .map_err(|e| AuthError::TokenError(e.to_string()))?;
        let expires_at = DateTime::from_timestamp(data.claims.exp, 0)
            .ok_or_else(|| AuthError::TokenError("exp out of range".into()))?;
        Ok(Session { subject: data.claims.sub, expires_at })
    }
}

#[async_trait]
impl AuthProvider for JwtAuthProvider {
    async fn get_session(&self, token: Option<&str>) -> Option<Session> {
        let token = token.filter(|t| !t.is_empty())?;
        match self.verify(token) {
            Ok(session) => Some(session),
            Err(e) => {
                debug!(error = %e, "token rejected");
                None
            }
        }
    }
}
