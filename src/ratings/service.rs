use uuid::Uuid;
use validator::Validate;

use crate::pagination::{PageParams, PageValidator};
use crate::ratings::{
    CreateRatingRequest, Rating, RatingError, RatingPage, RatingRepository, UpdateRatingRequest,
};

/// Service layer for rating operations
#[derive(Clone)]
pub struct RatingService {
    repository: RatingRepository,
}

impl RatingService {
    /// Create a new RatingService
    pub fn new(repository: RatingRepository) -> Self {
        Self { repository }
    }

    /// Create a new rating
    /// Rejects scores outside [1,5] before persistence
    pub async fn create(&self, request: CreateRatingRequest) -> Result<Rating, RatingError> {
        request
            .validate()
            .map_err(|e| RatingError::Validation(e.to_string()))?;

        self.repository
            .create(request.user, request.rater, request.score, request.comment)
            .await
    }

    /// One page of ratings received by an account, with totals
    pub async fn list_by_user(
        &self,
        user_id: Uuid,
        params: PageParams,
    ) -> Result<RatingPage, RatingError> {
        let page = PageValidator::validate(params)
            .map_err(|e| RatingError::Validation(e.to_string()))?;

        let ratings = self.repository.list_by_user(user_id, &page).await?;
        let total_ratings = self.repository.count_by_user(user_id).await?;

        Ok(RatingPage {
            ratings,
            total_ratings,
            total_pages: page.total_pages(total_ratings),
            current_page: page.page,
        })
    }

    /// Apply a partial update to an existing rating
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateRatingRequest,
    ) -> Result<Rating, RatingError> {
        request
            .validate()
            .map_err(|e| RatingError::Validation(e.to_string()))?;

        self.repository
            .update(id, request.score, request.comment)
            .await?
            .ok_or(RatingError::NotFound)
    }

    /// Delete a rating by id
    pub async fn delete(&self, id: Uuid) -> Result<(), RatingError> {
        self.repository.delete(id).await
    }
}
