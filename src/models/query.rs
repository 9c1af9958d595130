use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A contact query from the public site. Unlike feedback, every field is
/// required; there is no anonymous form.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactQuery {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub query: String,
    pub created_at: Option<DateTime<Utc>>,
}
