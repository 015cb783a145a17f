use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::pagination::Pagination;
use crate::ratings::{Rating, RatingEntry, RatingError, UserSummary};

/// Row shape produced by the enriched listing query
#[derive(FromRow)]
struct RatingRow {
    id: Uuid,
    score: f64,
    comment: Option<String>,
    created_at: DateTime<Utc>,
    user_id: Uuid,
    user_name: Option<String>,
    user_email: Option<String>,
    rater_id: Uuid,
    rater_name: Option<String>,
    rater_email: Option<String>,
}

impl From<RatingRow> for RatingEntry {
    fn from(row: RatingRow) -> Self {
        let user = match (row.user_name, row.user_email) {
            (Some(name), Some(email)) => Some(UserSummary {
                id: row.user_id,
                name,
                email,
            }),
            _ => None,
        };
        let rater = match (row.rater_name, row.rater_email) {
            (Some(name), Some(email)) => Some(UserSummary {
                id: row.rater_id,
                name,
                email,
            }),
            _ => None,
        };

        RatingEntry {
            id: row.id,
            user,
            rater,
            score: row.score,
            comment: row.comment,
            created_at: row.created_at,
        }
    }
}

/// Repository for database operations on ratings
#[derive(Clone)]
pub struct RatingRepository {
    pool: PgPool,
}

impl RatingRepository {
    /// Create a new RatingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new rating
    pub async fn create(
        &self,
        user_id: Uuid,
        rater_id: Uuid,
        score: f64,
        comment: Option<String>,
    ) -> Result<Rating, RatingError> {
        let rating = sqlx::query_as::<_, Rating>(
            r#"
            INSERT INTO ratings (id, user_id, rater_id, score, comment)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, rater_id, score, comment, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(rater_id)
        .bind(score)
        .bind(comment)
        .fetch_one(&self.pool)
        .await?;

        Ok(rating)
    }

    /// Find a rating by id
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Rating>, RatingError> {
        let rating = sqlx::query_as::<_, Rating>(
            r#"
            SELECT id, user_id, rater_id, score, comment, created_at
            FROM ratings
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(rating)
    }

    /// One page of ratings received by an account, oldest first,
    /// enriched with both parties' minimal profiles
    pub async fn list_by_user(
        &self,
        user_id: Uuid,
        page: &Pagination,
    ) -> Result<Vec<RatingEntry>, RatingError> {
        let rows = sqlx::query_as::<_, RatingRow>(
            r#"
            SELECT r.id, r.score, r.comment, r.created_at,
                   r.user_id, u.name AS user_name, u.email AS user_email,
                   r.rater_id, p.name AS rater_name, p.email AS rater_email
            FROM ratings r
            LEFT JOIN users u ON u.id = r.user_id
            LEFT JOIN users p ON p.id = r.rater_id
            WHERE r.user_id = $1
            ORDER BY r.created_at
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(RatingEntry::from).collect())
    }

    /// Total number of ratings received by an account
    pub async fn count_by_user(&self, user_id: Uuid) -> Result<i64, RatingError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ratings WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    /// Apply a partial update; only supplied fields change
    /// Returns None when the id does not exist
    pub async fn update(
        &self,
        id: Uuid,
        score: Option<f64>,
        comment: Option<String>,
    ) -> Result<Option<Rating>, RatingError> {
        let rating = match (score, comment) {
            (Some(new_score), Some(new_comment)) => {
                sqlx::query_as::<_, Rating>(
                    r#"
                    UPDATE ratings
                    SET score = $1, comment = $2
                    WHERE id = $3
                    RETURNING id, user_id, rater_id, score, comment, created_at
                    "#,
                )
                .bind(new_score)
                .bind(new_comment)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
            }
            (Some(new_score), None) => {
                sqlx::query_as::<_, Rating>(
                    r#"
                    UPDATE ratings
                    SET score = $1
                    WHERE id = $2
                    RETURNING id, user_id, rater_id, score, comment, created_at
                    "#,
                )
                .bind(new_score)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
            }
            (None, Some(new_comment)) => {
                sqlx::query_as::<_, Rating>(
                    r#"
                    UPDATE ratings
                    SET comment = $1
                    WHERE id = $2
                    RETURNING id, user_id, rater_id, score, comment, created_at
                    "#,
                )
                .bind(new_comment)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
            }
            // No fields supplied: nothing changes, return the stored entity
            (None, None) => self.find_by_id(id).await?,
        };

        Ok(rating)
    }

    /// Delete a rating by id
    pub async fn delete(&self, id: Uuid) -> Result<(), RatingError> {
        let result = sqlx::query("DELETE FROM ratings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RatingError::NotFound);
        }

        Ok(())
    }
}
