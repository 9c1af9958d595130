use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use crate::{
    dto::notification_dto::{
        MarkReadPayload, MarkReadResponse, NotificationResponse, UnreadCountResponse,
    },
    dto::DataResponse,
    error::{Error, Result},
    middleware::auth::Claims,
    AppState,
};

fn ensure_recipient(claims: &Claims, user_id: Uuid) -> Result<()> {
    if claims.user_id()? != user_id {
        return Err(Error::Forbidden(
            "Notifications are only visible to their recipient".to_string(),
        ));
    }
    Ok(())
}

#[axum::debug_handler]
pub async fn list_notifications(
    State(state): State<AppState>,
    claims: Claims,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    ensure_recipient(&claims, user_id)?;
    let notifications = state
        .notification_service
        .list_for_recipient(user_id)
        .await?;
    let data: Vec<NotificationResponse> = notifications
        .into_iter()
        .map(NotificationResponse::from)
        .collect();
    Ok(Json(DataResponse::new(data)))
}

#[axum::debug_handler]
pub async fn mark_read(
    State(state): State<AppState>,
    claims: Claims,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<MarkReadPayload>,
) -> Result<impl IntoResponse> {
    ensure_recipient(&claims, user_id)?;
    let updated_count = state
        .notification_service
        .mark_read(user_id, payload.notification_ids, payload.mark_all_as_read)
        .await?;
    Ok(Json(MarkReadResponse {
        success: true,
        updated_count,
    }))
}

#[axum::debug_handler]
pub async fn unread_count(
    State(state): State<AppState>,
    claims: Claims,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    ensure_recipient(&claims, user_id)?;
    let count = state.notification_service.count_unread(user_id).await?;
    Ok(Json(UnreadCountResponse {
        success: true,
        count,
    }))
}
