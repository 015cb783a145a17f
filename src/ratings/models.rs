use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Domain model representing a trust rating in the database
#[derive(Debug, Clone, FromRow)]
pub struct Rating {
    pub id: Uuid,
    /// Account receiving the rating
    pub user_id: Uuid,
    /// Account submitting the rating
    pub rater_id: Uuid,
    pub score: f64,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request DTO for creating a new rating
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateRatingRequest {
    /// Id of the account receiving the rating
    pub user: Uuid,
    /// Id of the account submitting the rating
    pub rater: Uuid,
    #[validate(range(min = 1.0, max = 5.0, message = "Score must be between 1 and 5"))]
    #[schema(example = 4.5, minimum = 1.0, maximum = 5.0)]
    pub score: f64,
    #[validate(length(max = 1000, message = "Comment must not exceed 1000 characters"))]
    pub comment: Option<String>,
}

/// Request DTO for updating an existing rating
/// All fields are optional to support partial updates
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRatingRequest {
    #[validate(range(min = 1.0, max = 5.0, message = "Score must be between 1 and 5"))]
    #[schema(example = 5.0, minimum = 1.0, maximum = 5.0)]
    pub score: Option<f64>,
    #[validate(length(max = 1000, message = "Comment must not exceed 1000 characters"))]
    pub comment: Option<String>,
}

/// Response DTO for a single rating
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingResponse {
    pub id: Uuid,
    pub user: Uuid,
    pub rater: Uuid,
    pub score: f64,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Rating> for RatingResponse {
    fn from(rating: Rating) -> Self {
        Self {
            id: rating.id,
            user: rating.user_id,
            rater: rating.rater_id,
            score: rating.score,
            comment: rating.comment,
            created_at: rating.created_at,
        }
    }
}

/// Minimal account profile attached to listed ratings
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// A listed rating enriched with the profiles of both parties
/// A dangling account reference yields a null profile
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingEntry {
    pub id: Uuid,
    pub user: Option<UserSummary>,
    pub rater: Option<UserSummary>,
    pub score: f64,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One page of ratings for an account, with pagination totals
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingPage {
    pub ratings: Vec<RatingEntry>,
    pub total_ratings: i64,
    pub total_pages: u32,
    pub current_page: u32,
}
