pub mod applications;
pub mod auth;
pub mod feedback;
pub mod health;
pub mod jobs;
pub mod notifications;
pub mod queries;
pub mod users;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::AppState;

/// Full API router. Browsing, signup and feedback are public; handlers that
/// act on behalf of an account extract bearer-token claims themselves.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/jobs", get(jobs::list_jobs).post(jobs::create_job))
        .route(
            "/api/jobs/:id",
            get(jobs::get_job).patch(jobs::update_job),
        )
        .route("/api/jobs/posted/:provider_id", get(jobs::list_posted_jobs))
        .route(
            "/api/applications",
            get(applications::list_applications).post(applications::submit_application),
        )
        .route(
            "/api/applications/:id",
            put(applications::update_application_status),
        )
        .route(
            "/api/notifications/:user_id",
            get(notifications::list_notifications).put(notifications::mark_read),
        )
        .route(
            "/api/notifications/:user_id/unread-count",
            get(notifications::unread_count),
        )
        .route("/api/users/:id", put(users::update_profile))
        .route("/api/feedback", post(feedback::submit_feedback))
        .route("/api/submit-query", post(queries::submit_query))
        .with_state(state)
}
