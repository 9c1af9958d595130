use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::application::{Application, ApplicationWithJob, ApplicationWithSeeker};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitApplicationPayload {
    pub job_id: Uuid,
    pub job_seeker_id: Uuid,
}

/// Status arrives as a plain string so an out-of-set value can be rejected
/// with a 400 instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusPayload {
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationListQuery {
    pub job: Option<Uuid>,
    pub seeker: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponse {
    pub id: Uuid,
    pub job: Uuid,
    pub job_seeker: Uuid,
    pub provider: Uuid,
    pub status: String,
    pub applied_at: DateTime<Utc>,
}

impl From<Application> for ApplicationResponse {
    fn from(app: Application) -> Self {
        Self {
            id: app.id,
            job: app.job_id,
            job_seeker: app.seeker_id,
            provider: app.provider_id,
            status: app.status,
            applied_at: app.applied_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantEntry {
    pub id: Uuid,
    pub status: String,
    pub applied_at: DateTime<Utc>,
    pub job_seeker: ApplicantSeeker,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantSeeker {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}

impl From<ApplicationWithSeeker> for ApplicantEntry {
    fn from(row: ApplicationWithSeeker) -> Self {
        Self {
            id: row.id,
            status: row.status,
            applied_at: row.applied_at,
            job_seeker: ApplicantSeeker {
                id: row.seeker_id,
                name: row.seeker_name,
                phone: row.seeker_phone,
                email: row.seeker_email,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedJobEntry {
    pub id: Uuid,
    pub status: String,
    pub applied_at: DateTime<Utc>,
    pub job: AppliedJob,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedJob {
    pub id: Uuid,
    pub title: String,
    pub provider_name: String,
}

impl From<ApplicationWithJob> for AppliedJobEntry {
    fn from(row: ApplicationWithJob) -> Self {
        Self {
            id: row.id,
            status: row.status,
            applied_at: row.applied_at,
            job: AppliedJob {
                id: row.job_id,
                title: row.job_title,
                provider_name: row.provider_name,
            },
        }
    }
}
