use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    dto::application_dto::{
        ApplicantEntry, ApplicationListQuery, ApplicationResponse, AppliedJobEntry,
        SubmitApplicationPayload, UpdateStatusPayload,
    },
    dto::DataResponse,
    error::{Error, Result},
    middleware::auth::Claims,
    AppState,
};

#[axum::debug_handler]
pub async fn submit_application(
    State(state): State<AppState>,
    _claims: Claims,
    Json(payload): Json<SubmitApplicationPayload>,
) -> Result<impl IntoResponse> {
    let application = state
        .application_service
        .submit(payload.job_id, payload.job_seeker_id)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Application submitted successfully!",
            "application": ApplicationResponse::from(application),
        })),
    ))
}

#[axum::debug_handler]
pub async fn update_application_status(
    State(state): State<AppState>,
    claims: Claims,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusPayload>,
) -> Result<impl IntoResponse> {
    let application = state
        .application_service
        .update_status(id, &payload.status, claims.user_id()?)
        .await?;
    Ok(Json(json!({
        "message": "Application status updated successfully!",
        "application": ApplicationResponse::from(application),
    })))
}

/// `?job=` lists applicants for a job (seeker fields joined); `?seeker=`
/// lists a seeker's applications (job fields joined).
#[axum::debug_handler]
pub async fn list_applications(
    State(state): State<AppState>,
    _claims: Claims,
    Query(query): Query<ApplicationListQuery>,
) -> Result<Response> {
    if let Some(job_id) = query.job {
        let rows = state.application_service.list_for_job(job_id).await?;
        let data: Vec<ApplicantEntry> = rows.into_iter().map(ApplicantEntry::from).collect();
        return Ok(Json(DataResponse::new(data)).into_response());
    }
    if let Some(seeker_id) = query.seeker {
        let rows = state.application_service.list_for_seeker(seeker_id).await?;
        let data: Vec<AppliedJobEntry> = rows.into_iter().map(AppliedJobEntry::from).collect();
        return Ok(Json(DataResponse::new(data)).into_response());
    }
    Err(Error::BadRequest(
        "Provide either a job or a seeker query parameter.".to_string(),
    ))
}
