use crate::dto::auth_dto::UpdateProfilePayload;
use crate::error::{Error, Result};
use crate::models::user::{self, User};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: &str,
        phone: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<User> {
        if !user::is_valid_role(role) {
            return Err(Error::BadRequest(format!("Invalid role: {}", role)));
        }

        let created = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, phone, password_hash, role) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(name)
        .bind(phone)
        .bind(password_hash)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match Error::from(e) {
            // unique index on phone
            Error::Conflict(_) => Error::Conflict("Phone number already registered".to_string()),
            other => other,
        })?;
        Ok(created)
    }

    pub async fn find_by_phone(&self, phone: &str) -> Result<Option<User>> {
        let found = sqlx::query_as::<_, User>("SELECT * FROM users WHERE phone = $1")
            .bind(phone)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let found = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found)
    }

    pub async fn update_profile(&self, id: Uuid, payload: UpdateProfilePayload) -> Result<User> {
        let updated = sqlx::query_as::<_, User>(
            "UPDATE users SET \
                name = COALESCE($2, name), \
                email = COALESCE($3, email), \
                city = COALESCE($4, city), \
                avatar_url = COALESCE($5, avatar_url), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(payload.name)
        .bind(payload.email)
        .bind(payload.city)
        .bind(payload.avatar_url)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;
        Ok(updated)
    }
}
