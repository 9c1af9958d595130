use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::job::Job;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobPayload {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(length(min = 1))]
    pub city: String,
    pub salary: Decimal,
    pub deadline: NaiveDate,
    pub provider: Uuid,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobPayload {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub location: Option<String>,
    #[validate(length(min = 1))]
    pub city: Option<String>,
    pub salary: Option<Decimal>,
    pub deadline: Option<NaiveDate>,
}

/// Filters for the public job listing. All text filters are case-insensitive
/// substring matches.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListQuery {
    pub title: Option<String>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub min_salary: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub city: String,
    pub salary: Decimal,
    pub deadline: NaiveDate,
    pub provider: Uuid,
    pub provider_name: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            title: job.title,
            description: job.description,
            location: job.location,
            city: job.city,
            salary: job.salary,
            deadline: job.deadline,
            provider: job.provider_id,
            provider_name: job.provider_name,
            created_at: job.created_at,
        }
    }
}
