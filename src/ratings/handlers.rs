// HTTP handlers for rating endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::pagination::PageParams;
use crate::ratings::{
    CreateRatingRequest, RatingError, RatingPage, RatingResponse, UpdateRatingRequest,
};
use crate::AppState;

/// Create a new rating
/// POST /api/ratings
#[utoipa::path(
    post,
    path = "/api/ratings",
    request_body = CreateRatingRequest,
    responses(
        (status = 201, description = "Rating created successfully", body = RatingResponse),
        (status = 400, description = "Score outside [1,5] or invalid payload"),
        (status = 500, description = "Internal server error")
    ),
    tag = "ratings"
)]
pub async fn create_rating_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateRatingRequest>,
) -> Result<(StatusCode, Json<RatingResponse>), RatingError> {
    tracing::debug!("Creating rating for user {} by {}", request.user, request.rater);

    let rating = state.rating_service.create(request).await?;

    tracing::info!("Successfully created rating with id: {}", rating.id);
    Ok((StatusCode::CREATED, Json(rating.into())))
}

/// Paginated ratings received by an account
/// GET /api/ratings/:userId
#[utoipa::path(
    get,
    path = "/api/ratings/{userId}",
    params(
        ("userId" = Uuid, Path, description = "Id of the rated account"),
        PageParams,
    ),
    responses(
        (status = 200, description = "Page of ratings with totals", body = RatingPage),
        (status = 400, description = "Invalid pagination parameters"),
        (status = 500, description = "Internal server error")
    ),
    tag = "ratings"
)]
pub async fn get_ratings_by_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(params): Query<PageParams>,
) -> Result<Json<RatingPage>, RatingError> {
    tracing::debug!("Listing ratings for user {}", user_id);

    let page = state.rating_service.list_by_user(user_id, params).await?;

    tracing::debug!(
        "Returning {} of {} ratings for user {}",
        page.ratings.len(),
        page.total_ratings,
        user_id
    );
    Ok(Json(page))
}

/// Update an existing rating
/// PUT /api/ratings/:id
#[utoipa::path(
    put,
    path = "/api/ratings/{id}",
    params(
        ("id" = Uuid, Path, description = "Rating id")
    ),
    request_body = UpdateRatingRequest,
    responses(
        (status = 200, description = "Rating updated successfully", body = RatingResponse),
        (status = 400, description = "Score outside [1,5] or invalid payload"),
        (status = 404, description = "Rating not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "ratings"
)]
pub async fn update_rating_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRatingRequest>,
) -> Result<Json<RatingResponse>, RatingError> {
    tracing::debug!("Updating rating with id: {}", id);

    let rating = state.rating_service.update(id, request).await?;

    tracing::info!("Successfully updated rating with id: {}", id);
    Ok(Json(rating.into()))
}

/// Delete a rating
/// DELETE /api/ratings/:id
#[utoipa::path(
    delete,
    path = "/api/ratings/{id}",
    params(
        ("id" = Uuid, Path, description = "Rating id")
    ),
    responses(
        (status = 204, description = "Rating deleted successfully"),
        (status = 404, description = "Rating not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "ratings"
)]
pub async fn delete_rating_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, RatingError> {
    tracing::debug!("Deleting rating with id: {}", id);

    state.rating_service.delete(id).await?;

    tracing::info!("Successfully deleted rating with id: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
