use crate::error::{Error, Result};
use crate::models::application::{
    Application, ApplicationStatus, ApplicationWithJob, ApplicationWithSeeker,
};
use crate::models::job::Job;
use crate::models::notification::{NotificationKind, RelatedEntity};
use crate::models::user::User;
use crate::services::notification_service::{self, NewNotification};
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

const APPLICATION_COLUMNS: &str =
    "id, job_id, seeker_id, provider_id, status, applied_at, updated_at";

/// Which status transitions a provider may perform. The permissive policy
/// matches the historically observed behavior where any status can move to
/// any other, including reverting a hired application back to pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPolicy {
    Permissive,
    ForwardOnly,
}

impl TransitionPolicy {
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "permissive" => Ok(TransitionPolicy::Permissive),
            "forward-only" => Ok(TransitionPolicy::ForwardOnly),
            other => Err(Error::Config(format!(
                "Unknown transition policy: {}",
                other
            ))),
        }
    }

    pub fn allows(&self, from: ApplicationStatus, to: ApplicationStatus) -> bool {
        match self {
            TransitionPolicy::Permissive => true,
            TransitionPolicy::ForwardOnly => to.rank() >= from.rank(),
        }
    }
}

pub fn new_applicant_message(job_title: &str, seeker_name: &str) -> String {
    format!(
        "New applicant for your job: \"{}\" from {}.",
        job_title, seeker_name
    )
}

pub fn status_update_message(job_title: &str, status: ApplicationStatus) -> String {
    format!(
        "Your application for \"{}\" has been updated to \"{}\".",
        job_title, status
    )
}

#[derive(Clone)]
pub struct ApplicationService {
    pool: PgPool,
    policy: TransitionPolicy,
}

impl ApplicationService {
    pub fn new(pool: PgPool, policy: TransitionPolicy) -> Self {
        Self { pool, policy }
    }

    /// Creates the application and the provider-facing notification in a
    /// single transaction. The UNIQUE (job_id, seeker_id) index is the
    /// duplicate guard, so a concurrent second submit surfaces as Conflict
    /// instead of a second row.
    pub async fn submit(&self, job_id: Uuid, seeker_id: Uuid) -> Result<Application> {
        let job = self
            .find_job(job_id)
            .await?
            .ok_or_else(|| Error::NotFound("Job not found".to_string()))?;
        let seeker = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(seeker_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Job seeker not found".to_string()))?;
        if !seeker.is_job_seeker() {
            return Err(Error::Forbidden(
                "User is not authorized to apply for jobs".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await?;

        let application = sqlx::query_as::<_, Application>(&format!(
            "INSERT INTO applications (job_id, seeker_id, provider_id) \
             VALUES ($1, $2, $3) \
             RETURNING {}",
            APPLICATION_COLUMNS
        ))
        .bind(job_id)
        .bind(seeker_id)
        .bind(job.provider_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match Error::from(e) {
            Error::Conflict(_) => {
                Error::Conflict("You have already applied for this job.".to_string())
            }
            other => other,
        })?;

        notification_service::insert(
            &mut *tx,
            NewNotification {
                recipient_id: job.provider_id,
                kind: NotificationKind::NewApplicant,
                message: new_applicant_message(&job.title, &seeker.name),
                related: Some(RelatedEntity::Application(application.id)),
            },
        )
        .await?;

        tx.commit().await?;
        info!(
            application_id = %application.id,
            job_id = %job_id,
            seeker_id = %seeker_id,
            "application submitted"
        );
        Ok(application)
    }

    /// Updates the status and notifies the seeker in one transaction. A
    /// same-status call is an idempotent no-op that writes nothing. `actor_id`
    /// must be the provider owning the application.
    pub async fn update_status(
        &self,
        id: Uuid,
        new_status: &str,
        actor_id: Uuid,
    ) -> Result<Application> {
        let new_status: ApplicationStatus = new_status
            .parse()
            .map_err(|_| Error::BadRequest("Invalid or missing status.".to_string()))?;

        let application = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound("Application not found".to_string()))?;
        if application.provider_id != actor_id {
            return Err(Error::Forbidden(
                "Only the job's provider can review this application".to_string(),
            ));
        }
        let current: ApplicationStatus =
            application.status.parse().map_err(Error::Internal)?;

        if current == new_status {
            debug!(application_id = %id, status = %current, "status unchanged, skipping");
            return Ok(application);
        }
        if !self.policy.allows(current, new_status) {
            return Err(Error::Forbidden(format!(
                "Status transition {} -> {} is not allowed",
                current, new_status
            )));
        }

        let job_title: String = sqlx::query_scalar("SELECT title FROM jobs WHERE id = $1")
            .bind(application.job_id)
            .fetch_one(&self.pool)
            .await?;

        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query_as::<_, Application>(&format!(
            "UPDATE applications SET status = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {}",
            APPLICATION_COLUMNS
        ))
        .bind(id)
        .bind(new_status.as_str())
        .fetch_one(&mut *tx)
        .await?;

        notification_service::insert(
            &mut *tx,
            NewNotification {
                recipient_id: application.seeker_id,
                kind: NotificationKind::ApplicationStatusUpdate,
                message: status_update_message(&job_title, new_status),
                related: Some(RelatedEntity::Application(application.id)),
            },
        )
        .await?;

        tx.commit().await?;
        info!(
            application_id = %id,
            from = %current,
            to = %new_status,
            "application status updated"
        );
        Ok(updated)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Application>> {
        let application = sqlx::query_as::<_, Application>(&format!(
            "SELECT {} FROM applications WHERE id = $1",
            APPLICATION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(application)
    }

    /// Applicants for one job, with seeker contact fields joined. Oldest
    /// application first so providers review in arrival order.
    pub async fn list_for_job(&self, job_id: Uuid) -> Result<Vec<ApplicationWithSeeker>> {
        self.find_job(job_id)
            .await?
            .ok_or_else(|| Error::NotFound("Job not found".to_string()))?;

        let rows = sqlx::query_as::<_, ApplicationWithSeeker>(
            "SELECT a.id, a.job_id, a.status, a.applied_at, \
                    u.id AS seeker_id, u.name AS seeker_name, \
                    u.phone AS seeker_phone, u.email AS seeker_email \
             FROM applications a \
             JOIN users u ON u.id = a.seeker_id \
             WHERE a.job_id = $1 \
             ORDER BY a.applied_at ASC",
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Applications of one seeker, with job fields joined, newest first.
    pub async fn list_for_seeker(&self, seeker_id: Uuid) -> Result<Vec<ApplicationWithJob>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(seeker_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("User not found".to_string()))?;
        if !user.is_job_seeker() {
            return Err(Error::Forbidden(
                "Access denied: user is not a job seeker".to_string(),
            ));
        }

        let rows = sqlx::query_as::<_, ApplicationWithJob>(
            "SELECT a.id, a.status, a.applied_at, \
                    j.id AS job_id, j.title AS job_title, j.provider_name \
             FROM applications a \
             JOIN jobs j ON j.id = a.job_id \
             WHERE a.seeker_id = $1 \
             ORDER BY a.applied_at DESC",
        )
        .bind(seeker_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_job(&self, id: Uuid) -> Result<Option<Job>> {
        let job = sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissive_policy_allows_any_pair() {
        let policy = TransitionPolicy::Permissive;
        for from in ApplicationStatus::ALL {
            for to in ApplicationStatus::ALL {
                assert!(policy.allows(from, to));
            }
        }
    }

    #[test]
    fn forward_only_policy_blocks_reverts() {
        let policy = TransitionPolicy::ForwardOnly;
        assert!(policy.allows(ApplicationStatus::Pending, ApplicationStatus::Reviewed));
        assert!(policy.allows(ApplicationStatus::Reviewed, ApplicationStatus::Interview));
        assert!(policy.allows(ApplicationStatus::Interview, ApplicationStatus::Hired));
        assert!(!policy.allows(ApplicationStatus::Hired, ApplicationStatus::Pending));
        assert!(!policy.allows(ApplicationStatus::Interview, ApplicationStatus::Reviewed));
    }

    #[test]
    fn policy_names_parse() {
        assert_eq!(
            TransitionPolicy::from_name("permissive").unwrap(),
            TransitionPolicy::Permissive
        );
        assert_eq!(
            TransitionPolicy::from_name("forward-only").unwrap(),
            TransitionPolicy::ForwardOnly
        );
        assert!(TransitionPolicy::from_name("strict").is_err());
    }

    #[test]
    fn notification_messages_interpolate_fields() {
        let msg = new_applicant_message("Cook", "Asha");
        assert!(msg.contains("Cook"));
        assert!(msg.contains("Asha"));

        let msg = status_update_message("Cook", ApplicationStatus::Interview);
        assert!(msg.contains("Cook"));
        assert!(msg.contains("interview"));
    }
}
