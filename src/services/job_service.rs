use crate::dto::job_dto::{CreateJobPayload, JobListQuery, UpdateJobPayload};
use crate::error::{Error, Result};
use crate::models::job::Job;
use crate::models::user::User;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

#[derive(Clone)]
pub struct JobService {
    pool: PgPool,
}

impl JobService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateJobPayload) -> Result<Job> {
        let provider = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(payload.provider)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Job provider not found.".to_string()))?;
        if !provider.is_job_provider() {
            return Err(Error::Forbidden(
                "User is not authorized to post jobs".to_string(),
            ));
        }

        let job = sqlx::query_as::<_, Job>(
            "INSERT INTO jobs \
                (provider_id, provider_name, title, description, location, city, salary, deadline) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(provider.id)
        .bind(&provider.name)
        .bind(payload.title)
        .bind(payload.description)
        .bind(payload.location)
        .bind(payload.city)
        .bind(payload.salary)
        .bind(payload.deadline)
        .fetch_one(&self.pool)
        .await?;
        Ok(job)
    }

    /// Edits are restricted to the provider that posted the job.
    pub async fn update(&self, id: Uuid, actor_id: Uuid, payload: UpdateJobPayload) -> Result<Job> {
        let job = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound("Job not found.".to_string()))?;
        if job.provider_id != actor_id {
            return Err(Error::Forbidden(
                "Only the posting provider can edit this job".to_string(),
            ));
        }

        let updated = sqlx::query_as::<_, Job>(
            "UPDATE jobs SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                location = COALESCE($4, location), \
                city = COALESCE($5, city), \
                salary = COALESCE($6, salary), \
                deadline = COALESCE($7, deadline), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(payload.title)
        .bind(payload.description)
        .bind(payload.location)
        .bind(payload.city)
        .bind(payload.salary)
        .bind(payload.deadline)
        .fetch_one(&self.pool)
        .await?;
        Ok(updated)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Job>> {
        let job = sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(job)
    }

    pub async fn list(&self, query: JobListQuery) -> Result<Vec<Job>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT * FROM jobs WHERE 1 = 1");
        if let Some(title) = &query.title {
            builder.push(" AND title ILIKE ");
            builder.push_bind(format!("%{}%", title));
        }
        if let Some(location) = &query.location {
            builder.push(" AND location ILIKE ");
            builder.push_bind(format!("%{}%", location));
        }
        if let Some(city) = &query.city {
            builder.push(" AND city ILIKE ");
            builder.push_bind(format!("%{}%", city));
        }
        if let Some(min_salary) = query.min_salary {
            builder.push(" AND salary >= ");
            builder.push_bind(min_salary);
        }
        builder.push(" ORDER BY created_at DESC");

        let jobs = builder
            .build_query_as::<Job>()
            .fetch_all(&self.pool)
            .await?;
        Ok(jobs)
    }

    pub async fn list_by_provider(&self, provider_id: Uuid) -> Result<Vec<Job>> {
        let provider = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(provider_id)
            .fetch_optional(&self.pool)
            .await?;
        match provider {
            Some(user) if user.is_job_provider() => {}
            _ => {
                return Err(Error::Forbidden(
                    "Access denied: user is not a job provider".to_string(),
                ))
            }
        }

        let jobs = sqlx::query_as::<_, Job>(
            "SELECT * FROM jobs WHERE provider_id = $1 ORDER BY created_at DESC",
        )
        .bind(provider_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(jobs)
    }
}
