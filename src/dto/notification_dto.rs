use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::notification::{Notification, RelatedEntity};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub id: Uuid,
    pub recipient: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub related_entity: Option<RelatedEntity>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(n: Notification) -> Self {
        let related_entity = n.related();
        Self {
            id: n.id,
            recipient: n.recipient_id,
            kind: n.kind,
            message: n.message,
            related_entity,
            is_read: n.is_read,
            created_at: n.created_at,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadPayload {
    pub notification_ids: Option<Vec<Uuid>>,
    #[serde(default)]
    pub mark_all_as_read: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadResponse {
    pub success: bool,
    pub updated_count: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnreadCountResponse {
    pub success: bool,
    pub count: i64,
}
