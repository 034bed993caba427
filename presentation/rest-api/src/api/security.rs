use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem::Request;
use poem::http::HeaderMap;
use poem::http::header::AUTHORIZATION;
use poem_openapi::SecurityScheme;
use serde::{Deserialize, Serialize};

use crate::config::auth_config::AuthConfig;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth.not_configured")]
    NotConfigured,
    #[error("auth.token_validation_failed: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
    #[error("auth.empty_subject")]
    EmptySubject,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    iss: Option<String>,
}

/// Verifies an HS256 token and returns its `sub` claim.
fn extract_user_id(token: &str, config: &AuthConfig) -> Result<String, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    if let Some(issuer) = &config.issuer {
        validation.set_issuer(&[issuer]);
    }

    let key = DecodingKey::from_secret(config.secret.as_bytes());
    let token_data = decode::<Claims>(token, &key, &validation)?;

    if token_data.claims.sub.trim().is_empty() {
        return Err(AuthError::EmptySubject);
    }
    Ok(token_data.claims.sub)
}

/// Bearer token authentication. The wrapped value is the caller's user id.
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "jwt_bearer_checker")]
pub struct JwtBearer(pub String);

async fn jwt_bearer_checker(_req: &Request, bearer: poem_openapi::auth::Bearer) -> Option<String> {
    let result = AuthConfig::from_env()
        .ok_or(AuthError::NotConfigured)
        .and_then(|config| extract_user_id(&bearer.token, &config));

    match result {
        Ok(user_id) => Some(user_id),
        Err(AuthError::NotConfigured) => {
            tracing::error!("JWT_SECRET is not set, rejecting authenticated request");
            None
        }
        Err(e) => {
            tracing::warn!("bearer auth failed: {e}");
            None
        }
    }
}

/// Resolves the caller on routes that also serve anonymous users.
/// A missing, malformed or unverifiable token yields `None`.
pub fn optional_user(headers: &HeaderMap) -> Option<String> {
    let token = bearer_token(headers)?;
    let config = AuthConfig::from_env()?;
    viewer_from_token(token, &config)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    scheme
        .eq_ignore_ascii_case("bearer")
        .then(|| token.trim())
        .filter(|token| !token.is_empty())
}

fn viewer_from_token(token: &str, config: &AuthConfig) -> Option<String> {
    match extract_user_id(token, config) {
        Ok(user_id) => Some(user_id),
        Err(e) => {
            tracing::debug!("ignoring bearer token on public route: {e}");
            None
        }
    }
}
