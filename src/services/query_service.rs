use crate::dto::query_dto::SubmitQueryPayload;
use crate::error::Result;
use crate::models::query::ContactQuery;
use sqlx::PgPool;

#[derive(Clone)]
pub struct QueryService {
    pool: PgPool,
}

impl QueryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn submit(&self, payload: SubmitQueryPayload) -> Result<ContactQuery> {
        let query = sqlx::query_as::<_, ContactQuery>(
            "INSERT INTO contact_queries (name, phone, email, query) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(payload.name)
        .bind(payload.phone)
        .bind(payload.email)
        .bind(payload.query)
        .fetch_one(&self.pool)
        .await?;
        Ok(query)
    }
}
