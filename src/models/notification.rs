use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ApplicationStatusUpdate,
    NewApplicant,
    GeneralMessage,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::ApplicationStatusUpdate => "application_status_update",
            NotificationKind::NewApplicant => "new_applicant",
            NotificationKind::GeneralMessage => "general_message",
        }
    }
}

/// Typed link from a notification to the entity it concerns. Stored as a
/// (kind, id) column pair and surfaced to clients as a tagged object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum RelatedEntity {
    Job(Uuid),
    Application(Uuid),
}

impl RelatedEntity {
    pub fn kind_str(&self) -> &'static str {
        match self {
            RelatedEntity::Job(_) => "job",
            RelatedEntity::Application(_) => "application",
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            RelatedEntity::Job(id) | RelatedEntity::Application(id) => *id,
        }
    }

    pub fn from_columns(kind: Option<&str>, id: Option<Uuid>) -> Option<RelatedEntity> {
        match (kind, id) {
            (Some("job"), Some(id)) => Some(RelatedEntity::Job(id)),
            (Some("application"), Some(id)) => Some(RelatedEntity::Application(id)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub kind: String,
    pub message: String,
    pub related_kind: Option<String>,
    pub related_id: Option<Uuid>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn related(&self) -> Option<RelatedEntity> {
        RelatedEntity::from_columns(self.related_kind.as_deref(), self.related_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn related_entity_maps_column_pair() {
        let id = Uuid::new_v4();
        assert_eq!(
            RelatedEntity::from_columns(Some("application"), Some(id)),
            Some(RelatedEntity::Application(id))
        );
        assert_eq!(
            RelatedEntity::from_columns(Some("job"), Some(id)),
            Some(RelatedEntity::Job(id))
        );
        // Either half missing, or an unknown tag, yields no link.
        assert_eq!(RelatedEntity::from_columns(Some("job"), None), None);
        assert_eq!(RelatedEntity::from_columns(None, Some(id)), None);
        assert_eq!(RelatedEntity::from_columns(Some("user"), Some(id)), None);
    }

    #[test]
    fn related_entity_serializes_tagged() {
        let id = Uuid::new_v4();
        let json = serde_json::to_value(RelatedEntity::Application(id)).unwrap();
        assert_eq!(json["kind"], "application");
        assert_eq!(json["id"], id.to_string());
    }
}
