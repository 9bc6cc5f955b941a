use serde::{Deserialize, Serialize};

/// The four carriers plans are scoped to.
pub const OPERATORS: [&str; 4] = ["Airtel", "Jio", "Vi", "BSNL"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    pub operator: String,
    pub price: u32,
    pub validity: String,
    pub data: String,
    pub calls: String,
    pub sms: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub popular: bool,
}

impl Plan {
    /// Built-in catalog used when the remote plan fetch fails, so the
    /// storefront is never empty. One plan per operator.
    pub fn fallback_catalog() -> Vec<Plan> {
        vec![
            Plan {
                id: "fallback-1".to_string(),
                name: "Basic Plan".to_string(),
                operator: "Airtel".to_string(),
                price: 199,
                validity: "28 days".to_string(),
                data: "1.5GB/day".to_string(),
                calls: "Unlimited".to_string(),
                sms: "100/day".to_string(),
                description: "Perfect for daily use".to_string(),
                popular: true,
            },
            Plan {
                id: "fallback-2".to_string(),
                name: "Premium Plan".to_string(),
                operator: "Jio".to_string(),
                price: 399,
                validity: "56 days".to_string(),
                data: "2GB/day".to_string(),
                calls: "Unlimited".to_string(),
                sms: "100/day".to_string(),
                description: "Best value for money".to_string(),
                popular: true,
            },
            Plan {
                id: "fallback-3".to_string(),
                name: "Super Plan".to_string(),
                operator: "Vi".to_string(),
                price: 479,
                validity: "56 days".to_string(),
                data: "1.5GB/day".to_string(),
                calls: "Unlimited".to_string(),
                sms: "100/day".to_string(),
                description: "Long validity plan".to_string(),
                popular: false,
            },
            Plan {
                id: "fallback-4".to_string(),
                name: "Economy Plan".to_string(),
                operator: "BSNL".to_string(),
                price: 99,
                validity: "18 days".to_string(),
                data: "1GB/day".to_string(),
                calls: "Unlimited".to_string(),
                sms: "100/day".to_string(),
                description: "Budget-friendly option".to_string(),
                popular: false,
            },
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlanRequest {
    pub name: String,
    pub operator: String,
    pub price: u32,
    pub validity: String,
    pub data: String,
    pub calls: String,
    pub sms: String,
    pub description: String,
    pub popular: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_catalog_covers_every_operator_once() {
        let catalog = Plan::fallback_catalog();
        assert_eq!(catalog.len(), 4);
        for operator in OPERATORS {
            assert_eq!(
                catalog.iter().filter(|p| p.operator == operator).count(),
                1,
                "expected exactly one fallback plan for {operator}"
            );
        }
    }

    #[test]
    fn plan_deserializes_mongo_style_document() {
        let body = r#"{
            "_id": "66f1a",
            "name": "Basic Plan",
            "operator": "Airtel",
            "price": 199,
            "validity": "28 days",
            "data": "1.5GB/day",
            "calls": "Unlimited",
            "sms": "100/day",
            "popular": true
        }"#;
        let plan: Plan = serde_json::from_str(body).unwrap();
        assert_eq!(plan.id, "66f1a");
        assert_eq!(plan.price, 199);
        assert!(plan.description.is_empty());
        assert!(plan.popular);
    }
}
