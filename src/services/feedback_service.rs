use crate::dto::feedback_dto::SubmitFeedbackPayload;
use crate::error::Result;
use crate::models::feedback::Feedback;
use sqlx::PgPool;

#[derive(Clone)]
pub struct FeedbackService {
    pool: PgPool,
}

impl FeedbackService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn submit(&self, payload: SubmitFeedbackPayload) -> Result<Feedback> {
        let user_name = payload.user_name.unwrap_or_else(|| "Anonymous".to_string());
        let user_email = payload.user_email.unwrap_or_else(|| "N/A".to_string());

        let feedback = sqlx::query_as::<_, Feedback>(
            "INSERT INTO feedback (user_id, user_name, user_email, subject, message, rating) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(payload.user_id)
        .bind(user_name)
        .bind(user_email)
        .bind(payload.subject)
        .bind(payload.message)
        .bind(payload.rating)
        .fetch_one(&self.pool)
        .await?;
        Ok(feedback)
    }
}
