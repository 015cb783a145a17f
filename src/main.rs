pub mod db;
pub mod pagination;
pub mod ratings;
pub mod users;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use ratings::handlers::{
    create_rating_handler, delete_rating_handler, get_ratings_by_user_handler,
    update_rating_handler,
};
use ratings::models::{
    CreateRatingRequest, RatingEntry, RatingPage, RatingResponse, UpdateRatingRequest, UserSummary,
};
use ratings::repository::RatingRepository;
use ratings::service::RatingService;
use users::repository::UserRepository;
use users::service::UserService;

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        ratings::handlers::create_rating_handler,
        ratings::handlers::get_ratings_by_user_handler,
        ratings::handlers::update_rating_handler,
        ratings::handlers::delete_rating_handler,
    ),
    components(
        schemas(CreateRatingRequest, UpdateRatingRequest, RatingResponse, RatingEntry, RatingPage, UserSummary)
    ),
    tags(
        (name = "ratings", description = "Trust rating endpoints")
    ),
    info(
        title = "Trust Rating API",
        version = "1.0.0",
        description = "RESTful API for user-to-user trust ratings"
    )
)]
struct ApiDoc;

/// Application state shared across handlers
/// Repositories and services are constructed once at startup
#[derive(Clone)]
pub struct AppState {
    pub rating_service: RatingService,
    pub user_service: UserService,
}

impl AppState {
    pub fn new(db: PgPool) -> Self {
        Self {
            rating_service: RatingService::new(RatingRepository::new(db.clone())),
            user_service: UserService::new(UserRepository::new(db)),
        }
    }
}

/// Creates and configures the application router
/// Maps the rating endpoints to their handlers and adds CORS middleware
/// User operations are a library surface invoked by the owning application
pub fn create_router(db: PgPool) -> Router {
    use tower_http::cors::{Any, CorsLayer};

    let state = AppState::new(db);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // API routes
        .route("/api/ratings", post(create_rating_handler))
        .route("/api/ratings/:id", get(get_ratings_by_user_handler))
        .route("/api/ratings/:id", put(update_rating_handler))
        .route("/api/ratings/:id", delete(delete_rating_handler))
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Trust Rating API - Starting...");

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());

    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&database_url)
        .await
        .expect("Failed to create database pool");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations completed successfully");

    let app = create_router(db_pool);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Trust Rating API is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}

#[cfg(test)]
mod tests;
