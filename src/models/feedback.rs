use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Feedback {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub user_name: String,
    pub user_email: String,
    pub subject: String,
    pub message: String,
    pub rating: Option<i32>,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}
