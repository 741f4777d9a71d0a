//! Domain models for membership pricing.
//!
//! Catalog entries are plain data; the request is a value object built fresh
//! for every quote and dropped once a price is computed.

use rust_decimal::Decimal;
use serde::Serialize;

/// A priced add-on (additional or premium feature)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
}

impl Feature {
    pub fn new(name: &str, price: Decimal) -> Self {
        Self {
            name: name.to_string(),
            price,
        }
    }
}

/// A membership plan with its base price and plan-scoped add-ons
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    pub features: Vec<Feature>,
}

impl Plan {
    /// Price of an additional feature if this plan offers it
    pub fn feature_price(&self, name: &str) -> Option<Decimal> {
        self.features
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.price)
    }

    pub fn has_features(&self) -> bool {
        !self.features.is_empty()
    }
}

/// Requested membership configuration.
///
/// Feature lists keep the caller's order and duplicates; every occurrence
/// is charged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipRequest {
    pub plan_type: String,
    pub additional_features: Vec<String>,
    pub premium_features: Vec<String>,
    pub member_count: i32,
}

impl MembershipRequest {
    /// Single-member request with no add-ons
    pub fn new(plan_type: impl Into<String>) -> Self {
        Self {
            plan_type: plan_type.into(),
            additional_features: vec![],
            premium_features: vec![],
            member_count: 1,
        }
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_premium_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.premium_features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_members(mut self, member_count: i32) -> Self {
        self.member_count = member_count;
        self
    }
}

/// Flat-dollar special discount bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountTier {
    /// Total above 200: $20 off
    Standard,
    /// Total above 400: $50 off
    Large,
}

/// Intermediate amounts and the adjustments that fired
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub base_cost: Decimal,
    pub feature_cost: Decimal,
    pub premium_cost: Decimal,
    /// base + features + premium, before any adjustment
    pub subtotal: Decimal,
    pub group_discount_applied: bool,
    pub discount_tier: Option<DiscountTier>,
    pub premium_surcharge_applied: bool,
    pub total_before_rounding: Decimal,
}

impl PriceBreakdown {
    /// Human-readable notices for the adjustments that fired, in the order
    /// they were applied
    pub fn notices(&self) -> Vec<String> {
        let mut notices = Vec::new();
        if self.group_discount_applied {
            notices.push("Group discount of 10% applied.".to_string());
        }
        if let Some(tier) = self.discount_tier {
            notices.push(format!(
                "Special discount of ${} applied.",
                super::calculators::tier_amount(tier)
            ));
        }
        if self.premium_surcharge_applied {
            notices.push("15% surcharge for premium features applied.".to_string());
        }
        notices
    }
}

/// Priced membership: whole-dollar amount plus how it was reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub price: Decimal,
    pub breakdown: PriceBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plan_feature_price_lookup() {
        let plan = Plan {
            name: "Premium".to_string(),
            base_price: dec!(100),
            features: vec![Feature::new("Group Classes", dec!(20))],
        };
        assert_eq!(plan.feature_price("Group Classes"), Some(dec!(20)));
        assert_eq!(plan.feature_price("group classes"), None);
        assert!(plan.has_features());
    }

    #[test]
    fn test_request_builder_defaults() {
        let request = MembershipRequest::new("Basic");
        assert_eq!(request.member_count, 1);
        assert!(request.additional_features.is_empty());
        assert!(request.premium_features.is_empty());

        let request = request
            .with_features(["Group Classes", "Group Classes"])
            .with_members(3);
        assert_eq!(request.additional_features.len(), 2);
        assert_eq!(request.member_count, 3);
    }

    #[test]
    fn test_notices_follow_application_order() {
        let breakdown = PriceBreakdown {
            base_cost: dec!(150),
            feature_cost: dec!(90),
            premium_cost: dec!(0),
            subtotal: dec!(240),
            group_discount_applied: true,
            discount_tier: Some(DiscountTier::Standard),
            premium_surcharge_applied: false,
            total_before_rounding: dec!(196),
        };
        assert_eq!(
            breakdown.notices(),
            vec![
                "Group discount of 10% applied.".to_string(),
                "Special discount of $20 applied.".to_string(),
            ]
        );
    }
}
