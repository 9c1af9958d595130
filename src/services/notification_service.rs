use crate::error::{Error, Result};
use crate::models::notification::{Notification, NotificationKind, RelatedEntity};
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

const NOTIFICATION_COLUMNS: &str =
    "id, recipient_id, kind, message, related_kind, related_id, is_read, created_at";

#[derive(Debug, Clone)]
pub struct NewNotification {
    pub recipient_id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub related: Option<RelatedEntity>,
}

/// Inserts a notification on any executor, so lifecycle actions can write it
/// inside the same transaction as the application row.
pub async fn insert<'e, E>(executor: E, new: NewNotification) -> Result<Notification>
where
    E: PgExecutor<'e>,
{
    let (related_kind, related_id) = match new.related {
        Some(related) => (Some(related.kind_str()), Some(related.id())),
        None => (None, None),
    };
    let notification = sqlx::query_as::<_, Notification>(&format!(
        "INSERT INTO notifications (recipient_id, kind, message, related_kind, related_id) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING {}",
        NOTIFICATION_COLUMNS
    ))
    .bind(new.recipient_id)
    .bind(new.kind.as_str())
    .bind(&new.message)
    .bind(related_kind)
    .bind(related_id)
    .fetch_one(executor)
    .await?;
    Ok(notification)
}

#[derive(Clone)]
pub struct NotificationService {
    pool: PgPool,
}

impl NotificationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: NewNotification) -> Result<Notification> {
        insert(&self.pool, new).await
    }

    pub async fn list_for_recipient(&self, user_id: Uuid) -> Result<Vec<Notification>> {
        self.ensure_recipient(user_id).await?;

        let notifications = sqlx::query_as::<_, Notification>(&format!(
            "SELECT {} FROM notifications WHERE recipient_id = $1 ORDER BY created_at DESC",
            NOTIFICATION_COLUMNS
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(notifications)
    }

    pub async fn count_unread(&self, user_id: Uuid) -> Result<i64> {
        self.ensure_recipient(user_id).await?;

        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE recipient_id = $1 AND is_read = FALSE",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// Flips is_read on the requested subset, always scoped to the recipient
    /// so one user cannot mark another user's notifications.
    pub async fn mark_read(
        &self,
        user_id: Uuid,
        notification_ids: Option<Vec<Uuid>>,
        mark_all: bool,
    ) -> Result<u64> {
        if mark_all {
            let result = sqlx::query(
                "UPDATE notifications SET is_read = TRUE \
                 WHERE recipient_id = $1 AND is_read = FALSE",
            )
            .bind(user_id)
            .execute(&self.pool)
            .await?;
            return Ok(result.rows_affected());
        }

        match notification_ids {
            Some(ids) if !ids.is_empty() => {
                let result = sqlx::query(
                    "UPDATE notifications SET is_read = TRUE \
                     WHERE recipient_id = $1 AND id = ANY($2)",
                )
                .bind(user_id)
                .bind(&ids)
                .execute(&self.pool)
                .await?;
                Ok(result.rows_affected())
            }
            _ => Err(Error::BadRequest(
                "No notification IDs or markAllAsRead flag provided.".to_string(),
            )),
        }
    }

    async fn ensure_recipient(&self, user_id: Uuid) -> Result<()> {
        let exists: Option<Uuid> = sqlx::query_scalar("SELECT id FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        if exists.is_none() {
            return Err(Error::NotFound("User not found".to_string()));
        }
        Ok(())
    }
}
