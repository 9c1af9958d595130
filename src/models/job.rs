use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: Uuid,
    pub provider_id: Uuid,
    /// Provider display name, denormalized at post time.
    pub provider_name: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub city: String,
    pub salary: Decimal,
    pub deadline: NaiveDate,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
