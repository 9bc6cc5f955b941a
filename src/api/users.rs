use crate::api::{api_client, ApiError};
use crate::models::{AdminUpdateUserRequest, UpdateProfileRequest, UserProfile};

pub async fn get_profile() -> Result<UserProfile, ApiError> {
    api_client().get("/users/profile").await
}

pub async fn update_profile(request: &UpdateProfileRequest) -> Result<UserProfile, ApiError> {
    api_client().put("/users/profile", request).await
}

pub async fn get_users() -> Result<Vec<UserProfile>, ApiError> {
    api_client().get("/users").await
}

/// Admin-only: update another account, including its role.
pub async fn update_user(user_id: &str, request: &AdminUpdateUserRequest) -> Result<UserProfile, ApiError> {
    api_client().put(&format!("/users/{}", user_id), request).await
}

pub async fn delete_user(user_id: &str) -> Result<(), ApiError> {
    api_client().delete(&format!("/users/{}", user_id)).await
}
