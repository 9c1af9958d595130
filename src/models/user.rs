use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const ROLE_JOB_SEEKER: &str = "job-seeker";
pub const ROLE_JOB_PROVIDER: &str = "job-provider";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub email: Option<String>,
    pub city: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_job_seeker(&self) -> bool {
        self.role == ROLE_JOB_SEEKER
    }

    pub fn is_job_provider(&self) -> bool {
        self.role == ROLE_JOB_PROVIDER
    }
}

pub fn is_valid_role(role: &str) -> bool {
    role == ROLE_JOB_SEEKER || role == ROLE_JOB_PROVIDER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_set_is_closed() {
        assert!(is_valid_role("job-seeker"));
        assert!(is_valid_role("job-provider"));
        assert!(!is_valid_role("admin"));
        assert!(!is_valid_role(""));
    }
}
