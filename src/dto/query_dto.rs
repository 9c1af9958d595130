use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::query::ContactQuery;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQueryPayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 5))]
    pub phone: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub query: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    pub id: Uuid,
    pub name: String,
    pub query: String,
}

impl From<ContactQuery> for QueryResponse {
    fn from(q: ContactQuery) -> Self {
        Self {
            id: q.id,
            name: q.name,
            query: q.query,
        }
    }
}
