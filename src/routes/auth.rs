use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use validator::Validate;

use crate::{
    dto::auth_dto::{AuthResponse, LoginPayload, SignupPayload, UserResponse},
    error::{Error, Result},
    utils::{crypto, token},
    AppState,
};

#[axum::debug_handler]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let password_hash = crypto::hash_password(&payload.password)?;
    let user = state
        .user_service
        .create(&payload.name, &payload.phone, &password_hash, &payload.role)
        .await?;
    tracing::info!(user_id = %user.id, role = %user.role, "account created");
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Signup successful",
            "user": UserResponse::from(user),
        })),
    ))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state
        .user_service
        .find_by_phone(&payload.phone)
        .await?
        .ok_or_else(|| Error::Unauthorized("User not found".to_string()))?;
    if !crypto::verify_password(&payload.password, &user.password_hash)? {
        return Err(Error::Unauthorized("Invalid credentials".to_string()));
    }
    let token = token::issue_token(&user)?;
    Ok(Json(AuthResponse {
        token,
        user: UserResponse::from(user),
    }))
}
