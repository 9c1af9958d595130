use crate::config::get_config;
use crate::error::{Error, Result};
use crate::middleware::auth::Claims;
use crate::models::user::User;
use jsonwebtoken::{encode, EncodingKey, Header};

/// Issues the bearer token returned by login. The session travels in the
/// token instead of a client-held user object.
pub fn issue_token(user: &User) -> Result<String> {
    let config = get_config();
    let exp = chrono::Utc::now() + chrono::Duration::hours(config.token_ttl_hours);
    let claims = Claims {
        sub: user.id.to_string(),
        exp: exp.timestamp() as usize,
        role: Some(user.role.clone()),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| Error::Internal(format!("Failed to issue token: {}", e)))
}
