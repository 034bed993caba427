use std::env;

/// Settings for verifying HS256 bearer tokens.
///
/// Environment variables:
/// - JWT_SECRET: shared signing secret (required for authenticated routes)
/// - JWT_ISSUER: expected `iss` claim (optional; not checked when unset)
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub issuer: Option<String>,
}

impl AuthConfig {
    /// Returns `None` when no secret is configured; every protected route then rejects.
    pub fn from_env() -> Option<Self> {
        let secret = env::var("JWT_SECRET").ok().filter(|s| !s.is_empty())?;
        let issuer = env::var("JWT_ISSUER").ok().filter(|s| !s.is_empty());
        Some(Self { secret, issuer })
    }
}
