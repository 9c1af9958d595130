use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::job_dto::{CreateJobPayload, JobListQuery, JobResponse, UpdateJobPayload},
    dto::DataResponse,
    error::{Error, Result},
    middleware::auth::Claims,
    AppState,
};

#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    claims: Claims,
    Json(payload): Json<CreateJobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    if claims.user_id()? != payload.provider {
        return Err(Error::Forbidden(
            "Cannot post a job for another account".to_string(),
        ));
    }
    let job = state.job_service.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Job created successfully",
            "job": JobResponse::from(job),
        })),
    ))
}

#[axum::debug_handler]
pub async fn update_job(
    State(state): State<AppState>,
    claims: Claims,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateJobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let job = state
        .job_service
        .update(id, claims.user_id()?, payload)
        .await?;
    Ok(Json(JobResponse::from(job)))
}

#[axum::debug_handler]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> Result<impl IntoResponse> {
    let jobs = state.job_service.list(query).await?;
    let data = jobs.into_iter().map(JobResponse::from).collect();
    Ok(Json(DataResponse::new(data)))
}

#[axum::debug_handler]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let job = state
        .job_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Job not found.".to_string()))?;
    Ok(Json(json!({
        "success": true,
        "data": JobResponse::from(job),
    })))
}

#[axum::debug_handler]
pub async fn list_posted_jobs(
    State(state): State<AppState>,
    _claims: Claims,
    Path(provider_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let jobs = state.job_service.list_by_provider(provider_id).await?;
    let data = jobs.into_iter().map(JobResponse::from).collect();
    Ok(Json(DataResponse::new(data)))
}
