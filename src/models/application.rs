use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The fixed status set for an application. `Pending` is the initial value;
/// every other value is reached through provider review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    Interview,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Pending,
        ApplicationStatus::Reviewed,
        ApplicationStatus::Interview,
        ApplicationStatus::Rejected,
        ApplicationStatus::Hired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Reviewed => "reviewed",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Hired => "hired",
        }
    }

    /// Position in the nominal review progression, used by the forward-only
    /// transition policy.
    pub fn rank(&self) -> u8 {
        match self {
            ApplicationStatus::Pending => 0,
            ApplicationStatus::Reviewed => 1,
            ApplicationStatus::Interview => 2,
            ApplicationStatus::Rejected => 3,
            ApplicationStatus::Hired => 3,
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "reviewed" => Ok(ApplicationStatus::Reviewed),
            "interview" => Ok(ApplicationStatus::Interview),
            "rejected" => Ok(ApplicationStatus::Rejected),
            "hired" => Ok(ApplicationStatus::Hired),
            other => Err(format!("Unknown application status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    pub id: Uuid,
    pub job_id: Uuid,
    pub seeker_id: Uuid,
    /// Copied from the job at creation time so providers can query their
    /// inbound applications without a join.
    pub provider_id: Uuid,
    pub status: String,
    pub applied_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Application row joined with the seeker's contact fields, returned to the
/// job's provider.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationWithSeeker {
    pub id: Uuid,
    pub job_id: Uuid,
    pub status: String,
    pub applied_at: DateTime<Utc>,
    pub seeker_id: Uuid,
    pub seeker_name: String,
    pub seeker_phone: String,
    pub seeker_email: Option<String>,
}

/// Application row joined with job fields, returned to the seeker.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationWithJob {
    pub id: Uuid,
    pub status: String,
    pub applied_at: DateTime<Utc>,
    pub job_id: Uuid,
    pub job_title: String,
    pub provider_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        for status in ApplicationStatus::ALL {
            assert_eq!(status.as_str().parse::<ApplicationStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!("accepted".parse::<ApplicationStatus>().is_err());
        assert!("PENDING".parse::<ApplicationStatus>().is_err());
        assert!("".parse::<ApplicationStatus>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ApplicationStatus::Interview).unwrap();
        assert_eq!(json, "\"interview\"");
        let back: ApplicationStatus = serde_json::from_str("\"hired\"").unwrap();
        assert_eq!(back, ApplicationStatus::Hired);
    }
}
