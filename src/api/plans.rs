use crate::api::{api_client, ApiError};
use crate::models::{CreatePlanRequest, Plan};

pub async fn get_plans() -> Result<Vec<Plan>, ApiError> {
    api_client().get("/plans").await
}

pub async fn create_plan(request: &CreatePlanRequest) -> Result<Plan, ApiError> {
    api_client().post("/plans", request).await
}

pub async fn update_plan(plan_id: &str, request: &CreatePlanRequest) -> Result<Plan, ApiError> {
    api_client().put(&format!("/plans/{}", plan_id), request).await
}

pub async fn delete_plan(plan_id: &str) -> Result<(), ApiError> {
    api_client().delete(&format!("/plans/{}", plan_id)).await
}
