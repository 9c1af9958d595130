use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use validator::Validate;

use crate::{
    dto::feedback_dto::{FeedbackResponse, SubmitFeedbackPayload},
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(payload): Json<SubmitFeedbackPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let feedback = state.feedback_service.submit(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Feedback submitted successfully!",
            "feedback": FeedbackResponse::from(feedback),
        })),
    ))
}
