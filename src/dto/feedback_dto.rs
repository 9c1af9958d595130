use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::feedback::Feedback;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackPayload {
    pub user_id: Option<Uuid>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    #[validate(length(min = 1))]
    pub subject: String,
    #[validate(length(min = 1))]
    pub message: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
    pub id: Uuid,
    pub subject: String,
    pub status: String,
}

impl From<Feedback> for FeedbackResponse {
    fn from(f: Feedback) -> Self {
        Self {
            id: f.id,
            subject: f.subject,
            status: f.status,
        }
    }
}
