use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::auth_dto::{UpdateProfilePayload, UserResponse},
    error::{Error, Result},
    middleware::auth::Claims,
    AppState,
};

#[axum::debug_handler]
pub async fn update_profile(
    State(state): State<AppState>,
    claims: Claims,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProfilePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    if claims.user_id()? != id {
        return Err(Error::Forbidden(
            "Cannot update another user's profile".to_string(),
        ));
    }
    let user = state.user_service.update_profile(id, payload).await?;
    Ok(Json(json!({
        "message": "User updated successfully",
        "user": UserResponse::from(user),
    })))
}
