use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;
use uuid::Uuid;

use jobboard_backend::dto::job_dto::CreateJobPayload;
use jobboard_backend::models::user::User;
use jobboard_backend::utils::{crypto, token};
use jobboard_backend::AppState;

async fn setup() -> Option<AppState> {
    dotenvy::dotenv().ok();
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL not set; skipping integration test");
        return None;
    }
    std::env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    std::env::set_var("JWT_SECRET", "test_secret_key");
    let _ = jobboard_backend::config::init_config();

    let pool = jobboard_backend::database::pool::create_pool()
        .await
        .expect("pool");
    sqlx::migrate!("./migrations").run(&pool).await.expect("migrations");
    Some(AppState::new(pool).expect("app state"))
}

fn unique_phone() -> String {
    format!("t{}", &Uuid::new_v4().simple().to_string()[..12])
}

async fn seed_user(state: &AppState, name: &str, role: &str) -> User {
    let hash = crypto::hash_password("password123").expect("hash");
    state
        .user_service
        .create(name, &unique_phone(), &hash, role)
        .await
        .expect("seed user")
}

async fn seed_job(state: &AppState, provider: &User, title: &str) -> Uuid {
    let job = state
        .job_service
        .create(CreateJobPayload {
            title: title.to_string(),
            description: "Cooking for a student hostel".to_string(),
            location: "MG Road".to_string(),
            city: "Bengaluru".to_string(),
            salary: Decimal::from(18000),
            deadline: chrono::NaiveDate::from_ymd_opt(2027, 1, 31).unwrap(),
            provider: provider.id,
        })
        .await
        .expect("seed job");
    job.id
}

fn bearer(user: &User) -> String {
    format!("Bearer {}", token::issue_token(user).expect("token"))
}

async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    auth: &str,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", auth);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    // rejection bodies from axum extractors are plain text
    let json = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
    (status, json)
}

#[tokio::test]
async fn application_lifecycle_end_to_end() {
    let Some(state) = setup().await else { return };
    let app = jobboard_backend::routes::api_router(state.clone());

    let provider = seed_user(&state, "Priya P", "job-provider").await;
    let seeker = seed_user(&state, "Asha S", "job-seeker").await;
    let job_id = seed_job(&state, &provider, "Cook").await;

    // Submit: one pending application, one new_applicant notification for
    // the provider mentioning the job title.
    let (status, body) = send_json(
        &app,
        "POST",
        "/api/applications",
        &bearer(&seeker),
        Some(json!({ "jobId": job_id, "jobSeekerId": seeker.id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let application_id = body["application"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["application"]["status"], "pending");
    assert_eq!(
        body["application"]["provider"],
        provider.id.to_string()
    );

    let (status, body) = send_json(
        &app,
        "GET",
        &format!("/api/notifications/{}", provider.id),
        &bearer(&provider),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["type"], "new_applicant");
    assert!(items[0]["message"].as_str().unwrap().contains("Cook"));
    assert!(items[0]["message"].as_str().unwrap().contains("Asha S"));
    assert_eq!(items[0]["relatedEntity"]["kind"], "application");
    assert_eq!(items[0]["relatedEntity"]["id"], application_id);

    // Second submit for the same pair is a conflict with no extra rows.
    let (status, _) = send_json(
        &app,
        "POST",
        "/api/applications",
        &bearer(&seeker),
        Some(json!({ "jobId": job_id, "jobSeekerId": seeker.id })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let rows: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM applications WHERE job_id = $1 AND seeker_id = $2",
    )
    .bind(job_id)
    .bind(seeker.id)
    .fetch_one(&state.pool)
    .await
    .unwrap();
    assert_eq!(rows, 1);

    // Provider review: status change notifies the seeker with the job title
    // and the new status string.
    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/api/applications/{}", application_id),
        &bearer(&provider),
        Some(json!({ "status": "interview" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["application"]["status"], "interview");

    let (status, body) = send_json(
        &app,
        "GET",
        &format!("/api/notifications/{}", seeker.id),
        &bearer(&seeker),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["type"], "application_status_update");
    assert!(items[0]["message"].as_str().unwrap().contains("Cook"));
    assert!(items[0]["message"].as_str().unwrap().contains("interview"));

    // Idempotent repeat: success, no second notification.
    let (status, _) = send_json(
        &app,
        "PUT",
        &format!("/api/applications/{}", application_id),
        &bearer(&provider),
        Some(json!({ "status": "interview" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send_json(
        &app,
        "GET",
        &format!("/api/notifications/{}", seeker.id),
        &bearer(&seeker),
        None,
    )
    .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // Unread count matches the unread subset of the list; mark-all zeroes it.
    let (status, body) = send_json(
        &app,
        "GET",
        &format!("/api/notifications/{}/unread-count", seeker.id),
        &bearer(&seeker),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);

    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/api/notifications/{}", seeker.id),
        &bearer(&seeker),
        Some(json!({ "markAllAsRead": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updatedCount"], 1);

    let (_, body) = send_json(
        &app,
        "GET",
        &format!("/api/notifications/{}/unread-count", seeker.id),
        &bearer(&seeker),
        None,
    )
    .await;
    assert_eq!(body["count"], 0);

    // Invalid status and unknown application id.
    let (status, _) = send_json(
        &app,
        "PUT",
        &format!("/api/applications/{}", application_id),
        &bearer(&provider),
        Some(json!({ "status": "accepted" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_json(
        &app,
        "PUT",
        &format!("/api/applications/{}", Uuid::new_v4()),
        &bearer(&provider),
        Some(json!({ "status": "reviewed" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn concurrent_duplicate_submissions_yield_one_conflict() {
    let Some(state) = setup().await else { return };
    let app = jobboard_backend::routes::api_router(state.clone());

    let provider = seed_user(&state, "Provider C", "job-provider").await;
    let seeker = seed_user(&state, "Seeker C", "job-seeker").await;
    let job_id = seed_job(&state, &provider, "Nanny").await;

    let payload = json!({ "jobId": job_id, "jobSeekerId": seeker.id });
    let auth = bearer(&seeker);
    let (first, second) = tokio::join!(
        send_json(&app, "POST", "/api/applications", &auth, Some(payload.clone())),
        send_json(&app, "POST", "/api/applications", &auth, Some(payload.clone())),
    );

    let mut statuses = vec![first.0, second.0];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::CREATED, StatusCode::CONFLICT]);

    let rows: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM applications WHERE job_id = $1 AND seeker_id = $2",
    )
    .bind(job_id)
    .bind(seeker.id)
    .fetch_one(&state.pool)
    .await
    .unwrap();
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn submit_rejects_missing_or_misrolled_accounts() {
    let Some(state) = setup().await else { return };
    let app = jobboard_backend::routes::api_router(state.clone());

    let provider = seed_user(&state, "Provider R", "job-provider").await;
    let seeker = seed_user(&state, "Seeker R", "job-seeker").await;
    let job_id = seed_job(&state, &provider, "Housekeeper").await;

    // Unknown job and unknown seeker.
    let (status, _) = send_json(
        &app,
        "POST",
        "/api/applications",
        &bearer(&seeker),
        Some(json!({ "jobId": Uuid::new_v4(), "jobSeekerId": seeker.id })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/applications",
        &bearer(&seeker),
        Some(json!({ "jobId": job_id, "jobSeekerId": Uuid::new_v4() })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // A provider account cannot apply.
    let (status, _) = send_json(
        &app,
        "POST",
        "/api/applications",
        &bearer(&provider),
        Some(json!({ "jobId": job_id, "jobSeekerId": provider.id })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn application_listings_join_counterpart_fields() {
    let Some(state) = setup().await else { return };
    let app = jobboard_backend::routes::api_router(state.clone());

    let provider = seed_user(&state, "Provider L", "job-provider").await;
    let seeker = seed_user(&state, "Seeker L", "job-seeker").await;
    let job_id = seed_job(&state, &provider, "Playschool Teacher").await;

    state
        .application_service
        .submit(job_id, seeker.id)
        .await
        .expect("submit");

    let (status, body) = send_json(
        &app,
        "GET",
        &format!("/api/applications?job={}", job_id),
        &bearer(&provider),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["jobSeeker"]["name"], "Seeker L");
    assert_eq!(items[0]["status"], "pending");

    let (status, body) = send_json(
        &app,
        "GET",
        &format!("/api/applications?seeker={}", seeker.id),
        &bearer(&seeker),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["job"]["title"], "Playschool Teacher");
    assert_eq!(items[0]["job"]["providerName"], "Provider L");

    // Neither query parameter is a bad request.
    let (status, _) = send_json(&app, "GET", "/api/applications", &bearer(&seeker), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
