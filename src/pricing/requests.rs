//! Request DTOs for pricing API endpoints.

use serde::Deserialize;

use super::models::MembershipRequest;

/// Request to validate or quote a membership
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub plan_type: String,
    #[serde(default)]
    pub additional_features: Vec<String>,
    #[serde(default)]
    pub premium_features: Vec<String>,
    #[serde(default = "default_member_count")]
    pub member_count: i32,
}

fn default_member_count() -> i32 {
    1
}

impl From<QuoteRequest> for MembershipRequest {
    fn from(req: QuoteRequest) -> Self {
        MembershipRequest {
            plan_type: req.plan_type,
            additional_features: req.additional_features,
            premium_features: req.premium_features,
            member_count: req.member_count,
        }
    }
}
