//! Response DTOs for pricing API endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::catalog::Catalog;
use super::models::{DiscountTier, Feature, PriceBreakdown, Quote};
use super::services::PricingError;

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    /// Catalog prices are whole US dollars
    pub fn usd(amount: Decimal) -> Self {
        Self {
            amount: amount.normalize(),
            currency: "USD".to_string(),
        }
    }
}

/// Response for catalog listing
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub plans: Vec<PlanResponse>,
    pub premium_features: Vec<FeatureResponse>,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub name: String,
    pub base_price: MoneyResponse,
    pub features: Vec<FeatureResponse>,
}

#[derive(Debug, Serialize)]
pub struct FeatureResponse {
    pub name: String,
    pub price: MoneyResponse,
}

impl From<&Feature> for FeatureResponse {
    fn from(f: &Feature) -> Self {
        Self {
            name: f.name.clone(),
            price: MoneyResponse::usd(f.price),
        }
    }
}

impl From<&Catalog> for CatalogResponse {
    fn from(catalog: &Catalog) -> Self {
        Self {
            plans: catalog
                .plans
                .iter()
                .map(|p| PlanResponse {
                    name: p.name.clone(),
                    base_price: MoneyResponse::usd(p.base_price),
                    features: p.features.iter().map(FeatureResponse::from).collect(),
                })
                .collect(),
            premium_features: catalog
                .premium_features
                .iter()
                .map(FeatureResponse::from)
                .collect(),
        }
    }
}

/// Response for membership validation
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub valid: bool,
}

/// Breakdown of how a quote was reached
#[derive(Debug, Serialize)]
pub struct BreakdownResponse {
    pub base_cost: MoneyResponse,
    pub feature_cost: MoneyResponse,
    pub premium_cost: MoneyResponse,
    pub subtotal: MoneyResponse,
    pub group_discount_applied: bool,
    pub discount_tier: Option<DiscountTier>,
    pub premium_surcharge_applied: bool,
    pub total_before_rounding: MoneyResponse,
}

impl From<&PriceBreakdown> for BreakdownResponse {
    fn from(b: &PriceBreakdown) -> Self {
        Self {
            base_cost: MoneyResponse::usd(b.base_cost),
            feature_cost: MoneyResponse::usd(b.feature_cost),
            premium_cost: MoneyResponse::usd(b.premium_cost),
            subtotal: MoneyResponse::usd(b.subtotal),
            group_discount_applied: b.group_discount_applied,
            discount_tier: b.discount_tier,
            premium_surcharge_applied: b.premium_surcharge_applied,
            total_before_rounding: MoneyResponse::usd(b.total_before_rounding),
        }
    }
}

/// Response for a membership quote
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote_id: Uuid,
    pub quoted_at: DateTime<Utc>,
    pub plan_type: String,
    pub member_count: i32,
    pub price: MoneyResponse,
    pub breakdown: BreakdownResponse,
    pub notices: Vec<String>,
}

impl QuoteResponse {
    pub fn new(plan_type: String, member_count: i32, quote: &Quote) -> Self {
        Self {
            quote_id: Uuid::new_v4(),
            quoted_at: Utc::now(),
            plan_type,
            member_count,
            price: MoneyResponse::usd(quote.price),
            breakdown: BreakdownResponse::from(&quote.breakdown),
            notices: quote.breakdown.notices(),
        }
    }
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl PricingErrorResponse {
    /// Build from the full violation list; the first entry is the headline
    pub fn from_violations(violations: &[PricingError]) -> Option<Self> {
        let first = violations.first()?;
        let details = violations
            .iter()
            .map(|e| serde_json::json!({ "error_type": e.kind(), "message": e.to_string() }))
            .collect::<Vec<_>>();

        Some(Self {
            error_type: first.kind().to_string(),
            message: first.to_string(),
            details: Some(serde_json::Value::Array(details)),
        })
    }
}
