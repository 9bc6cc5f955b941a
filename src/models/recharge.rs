use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RechargeRecord {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: String,
    pub operator: String,
    #[serde(rename = "planName")]
    pub plan_name: String,
    pub amount: u32,
    pub status: RechargeStatus,
    #[serde(rename = "transactionId", default)]
    pub transaction_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "userName", default)]
    pub user_name: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RechargeStatus {
    Pending,
    Success,
    Failed,
}

impl RechargeStatus {
    pub fn display_name(&self) -> &str {
        match self {
            RechargeStatus::Pending => "Pending",
            RechargeStatus::Success => "Success",
            RechargeStatus::Failed => "Failed",
        }
    }

    pub fn color_class(&self) -> &str {
        match self {
            RechargeStatus::Pending => "badge-pending",
            RechargeStatus::Success => "badge-success",
            RechargeStatus::Failed => "badge-failed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRechargeRequest {
    #[serde(rename = "mobileNumber")]
    pub mobile_number: String,
    pub operator: String,
    #[serde(rename = "planName")]
    pub plan_name: String,
    pub amount: u32,
}

/// `POST /recharges` replies with a confirmation message and the stored
/// record (transaction id and status are assigned server-side).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRechargeResponse {
    #[serde(default)]
    pub message: String,
    pub recharge: RechargeRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRechargeStatusRequest {
    pub status: RechargeStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_lowercase_wire_form() {
        assert_eq!(serde_json::to_string(&RechargeStatus::Success).unwrap(), "\"success\"");
        let parsed: RechargeStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(parsed, RechargeStatus::Pending);
    }
}
