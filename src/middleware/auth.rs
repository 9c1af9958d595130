use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub role: Option<String>,
}

impl Claims {
    /// The authenticated account id carried in the token subject.
    pub fn user_id(&self) -> crate::error::Result<Uuid> {
        self.sub
            .parse()
            .map_err(|_| Error::Unauthorized("Invalid subject claim".to_string()))
    }
}

/// Extracting `Claims` in a handler requires a valid `Authorization: Bearer`
/// token; the request is rejected with 401 otherwise.
#[async_trait]
impl<S> FromRequestParts<S> for Claims
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .ok_or_else(|| Error::Unauthorized("Missing authorization header".to_string()))?;
        let auth_str = auth_header
            .to_str()
            .map_err(|_| Error::Unauthorized("Malformed authorization header".to_string()))?;
        let token = auth_str
            .strip_prefix("Bearer ")
            .ok_or_else(|| Error::Unauthorized("Unsupported authorization scheme".to_string()))?;

        let config = crate::config::get_config();
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|_| Error::Unauthorized("Invalid token".to_string()))?;
        Ok(data.claims)
    }
}
