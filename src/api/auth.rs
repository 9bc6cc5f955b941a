use crate::api::{api_client, ApiError};
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::state::session;

pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let response: LoginResponse = api_client().post("/users/login", &request).await?;

    // Persist the session so it survives a reload
    session::persist(&response.token, response.role);

    Ok(response)
}

pub async fn register(request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
    api_client().post("/users/register", request).await
}
