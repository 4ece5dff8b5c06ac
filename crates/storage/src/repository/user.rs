use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::user::{CreateUserRequest, UpdateUserRequest};
use crate::error::{Result, StorageError};
use crate::models::User;

pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, goal, photo_url, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Create a new user
    pub async fn create(&self, req: &CreateUserRequest) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, goal)
            VALUES ($1, $2)
            RETURNING id, name, goal, photo_url, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.goal)
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    /// Update name and goal, and the photo when one is given
    pub async fn update(&self, id: Uuid, req: &UpdateUserRequest) -> Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = $2,
                goal = $3,
                photo_url = COALESCE($4, photo_url)
            WHERE id = $1
            RETURNING id, name, goal, photo_url, created_at
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.goal)
        .bind(&req.photo_url)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }
}
