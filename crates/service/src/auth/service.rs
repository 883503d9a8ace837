use std::sync::Arc;

use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Argon2, PasswordHash,
};
use rand::rngs::OsRng;
use tracing::{info, instrument, warn};

use super::domain::{LoginInput, Session};
use super::errors::AuthError;
use super::provider::JwtAuthProvider;

/// Owner account credentials
#[derive(Clone, Debug, Default)]
pub struct OwnerCredentials {
    pub email: String,
    /// argon2 PHC string
    pub password_hash: String,
}

/// Single-owner login independent of web framework
pub struct AuthService {
    tokens: Arc<JwtAuthProvider>,
    owner: OwnerCredentials,
}

impl AuthService {
    pub fn new(tokens: Arc<JwtAuthProvider>, owner: OwnerCredentials) -> Self {
        Self { tokens, owner }
    }

    pub fn enabled(&self) -> bool {
        !self.owner.email.trim().is_empty() && !self.owner.password_hash.trim().is_empty()
    }

    /// Verify owner credentials and issue a token.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::auth::{AuthService, JwtAuthProvider, LoginInput};
    /// use service::auth::service::{hash_password, OwnerCredentials};
    /// let owner = OwnerCredentials { email: "me@studio.test".into(), password_hash: hash_password("Passw0rd!").unwrap() };
    /// let svc = AuthService::new(Arc::new(JwtAuthProvider::new("secret", 12)), owner);
    /// let (token, session) = svc.login(LoginInput { email: "me@studio.test".into(), password: "Passw0rd!".into() }).unwrap();
    /// assert!(!token.is_empty());
    /// assert_eq!(session.subject, "me@studio.test");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub fn login(&self, input: LoginInput) -> Result<(String, Session), AuthError> {
        if !self.enabled() {
            return Err(AuthError::Disabled);
        }
        if input.email.trim().is_empty() || input.password.is_empty() {
            return Err(AuthError::Validation("email and password are required".into()));
        }
        if !input.email.trim().eq_ignore_ascii_case(self.owner.email.trim()) {
            warn!("login for unknown account");
            return Err(AuthError::Unauthorized);
        }
        let parsed = PasswordHash::new(&self.owner.password_hash).map_err(|e| AuthError::HashError(e.to_string()))?;
        if Argon2::default().verify_password(input.password.as_bytes(), &parsed).is_err() {
            warn!("login with wrong password");
            return Err(AuthError::Unauthorized);
        }
        let issued = self.tokens.issue(self.owner.email.trim())?;
        info!("owner_logged_in");
        Ok(issued)
    }
}

/// Hash a password into an argon2 PHC string (for `auth.owner_password_hash`).
pub fn hash_password(plain: &str) -> Result<String, AuthError> {
    if plain.len() < 8 {
        return Err(AuthError::Validation("password too short (>=8)".into()));
    }
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AuthError::HashError(e.to_string()))
}
