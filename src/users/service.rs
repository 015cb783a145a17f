// User service - account operations invoked by the owning application

use uuid::Uuid;
use validator::Validate;

use crate::pagination::{PageParams, PageValidator};
use crate::users::{
    error::UserError,
    models::{CreateUserRequest, UpdateUserRequest, UserResponse},
    password::PasswordService,
    repository::UserRepository,
};

/// Service layer for account operations
#[derive(Clone)]
pub struct UserService {
    repository: UserRepository,
}

impl UserService {
    /// Create a new UserService
    pub fn new(repository: UserRepository) -> Self {
        Self { repository }
    }

    /// Create a new account
    /// The password is stored as an Argon2id hash, never in plaintext
    pub async fn create(&self, request: CreateUserRequest) -> Result<UserResponse, UserError> {
        request
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        let password_hash = PasswordService::hash_password(&request.password)?;

        let user = self
            .repository
            .create(&request.name, &request.email, &password_hash)
            .await?;

        tracing::info!("Created account {}", user.id);
        Ok(user.into())
    }

    /// One page of all accounts, no filter, no total count
    pub async fn list(&self, params: PageParams) -> Result<Vec<UserResponse>, UserError> {
        let page =
            PageValidator::validate(params).map_err(|e| UserError::Validation(e.to_string()))?;

        let users = self.repository.list(&page).await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Fetch an account by id
    pub async fn get_by_id(&self, id: Uuid) -> Result<UserResponse, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(UserResponse::from)
            .ok_or(UserError::NotFound)
    }

    /// Apply a partial profile update; only supplied fields change
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, UserError> {
        request
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        self.repository
            .update(id, request.name, request.email)
            .await?
            .map(UserResponse::from)
            .ok_or(UserError::NotFound)
    }

    /// Delete an account by id
    pub async fn delete(&self, id: Uuid) -> Result<(), UserError> {
        self.repository.delete(id).await?;

        tracing::info!("Deleted account {}", id);
        Ok(())
    }

    /// Set only the visibility flag
    pub async fn set_hidden(&self, id: Uuid, is_hidden: bool) -> Result<UserResponse, UserError> {
        self.repository
            .set_hidden(id, is_hidden)
            .await?
            .map(UserResponse::from)
            .ok_or(UserError::NotFound)
    }

    /// Look up an account by email and verify the password
    /// Unknown email or wrong password returns None, never an error
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserResponse>, UserError> {
        let Some(user) = self.repository.find_by_email(email).await? else {
            return Ok(None);
        };

        if PasswordService::verify_password(password, &user.password_hash)? {
            Ok(Some(user.into()))
        } else {
            Ok(None)
        }
    }
}
