use crate::api::{api_client, ApiError};
use crate::models::{
    CreateRechargeRequest, CreateRechargeResponse, RechargeRecord, RechargeStatus,
    UpdateRechargeStatusRequest,
};

pub async fn create_recharge(request: &CreateRechargeRequest) -> Result<CreateRechargeResponse, ApiError> {
    api_client().post("/recharges", request).await
}

pub async fn get_user_recharges() -> Result<Vec<RechargeRecord>, ApiError> {
    api_client().get("/recharges/user").await
}

pub async fn get_all_recharges() -> Result<Vec<RechargeRecord>, ApiError> {
    api_client().get("/recharges").await
}

pub async fn update_recharge_status(recharge_id: &str, status: RechargeStatus) -> Result<RechargeRecord, ApiError> {
    let request = UpdateRechargeStatusRequest { status };
    api_client().put(&format!("/recharges/{}/status", recharge_id), &request).await
}
