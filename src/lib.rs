pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    application_service::{ApplicationService, TransitionPolicy},
    feedback_service::FeedbackService,
    job_service::JobService,
    notification_service::NotificationService,
    query_service::QueryService,
    user_service::UserService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub user_service: UserService,
    pub job_service: JobService,
    pub application_service: ApplicationService,
    pub notification_service: NotificationService,
    pub feedback_service: FeedbackService,
    pub query_service: QueryService,
}

impl AppState {
    pub fn new(pool: PgPool) -> error::Result<Self> {
        let config = crate::config::get_config();
        let policy = TransitionPolicy::from_name(&config.transition_policy)?;

        let user_service = UserService::new(pool.clone());
        let job_service = JobService::new(pool.clone());
        let application_service = ApplicationService::new(pool.clone(), policy);
        let notification_service = NotificationService::new(pool.clone());
        let feedback_service = FeedbackService::new(pool.clone());
        let query_service = QueryService::new(pool.clone());

        Ok(Self {
            pool,
            user_service,
            job_service,
            application_service,
            notification_service,
            feedback_service,
            query_service,
        })
    }
}
