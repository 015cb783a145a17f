// Database repository for user accounts

use sqlx::PgPool;
use uuid::Uuid;

use crate::pagination::Pagination;
use crate::users::{error::UserError, models::User};

/// User repository for database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new UserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new account record
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, UserError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password_hash, is_hidden, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return UserError::EmailTaken;
                }
            }
            UserError::Database(e.to_string())
        })?;

        Ok(user)
    }

    /// One page of all accounts, oldest first, no filter
    pub async fn list(&self, page: &Pagination) -> Result<Vec<User>, UserError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, is_hidden, created_at
            FROM users
            ORDER BY created_at
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| UserError::Database(e.to_string()))?;

        Ok(users)
    }

    /// Find an account by id
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash, is_hidden, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::Database(e.to_string()))?;

        Ok(user)
    }

    /// Find an account by email (case-insensitive)
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash, is_hidden, created_at FROM users WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::Database(e.to_string()))?;

        Ok(user)
    }

    /// Apply a partial profile update, keeping stored values for omitted fields
    /// Returns None when the id does not exist
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<Option<User>, UserError> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = $1, email = $2
            WHERE id = $3
            RETURNING id, name, email, password_hash, is_hidden, created_at
            "#,
        )
        .bind(name.unwrap_or(existing.name))
        .bind(email.unwrap_or(existing.email))
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return UserError::EmailTaken;
                }
            }
            UserError::Database(e.to_string())
        })?;

        Ok(Some(user))
    }

    /// Set only the visibility flag
    /// Returns None when the id does not exist
    pub async fn set_hidden(&self, id: Uuid, is_hidden: bool) -> Result<Option<User>, UserError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET is_hidden = $1
            WHERE id = $2
            RETURNING id, name, email, password_hash, is_hidden, created_at
            "#,
        )
        .bind(is_hidden)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::Database(e.to_string()))?;

        Ok(user)
    }

    /// Delete an account by id
    pub async fn delete(&self, id: Uuid) -> Result<(), UserError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| UserError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound);
        }

        Ok(())
    }
}
