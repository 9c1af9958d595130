use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use validator::Validate;

use crate::{
    dto::query_dto::{QueryResponse, SubmitQueryPayload},
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn submit_query(
    State(state): State<AppState>,
    Json(payload): Json<SubmitQueryPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let query = state.query_service.submit(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Query submitted successfully!",
            "query": QueryResponse::from(query),
        })),
    ))
}
