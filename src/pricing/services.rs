//! Membership pricing service.
//!
//! Validates a request against the catalog and runs the pricing pipeline.
//! Adjustment notices are returned in the breakdown and logged through
//! `tracing`; nothing here writes to stdout.

use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::calculators::{
    apply_group_discount, apply_premium_surcharge, apply_tier_discount, round_up, sum_prices,
};
use super::catalog::Catalog;
use super::models::{MembershipRequest, PriceBreakdown, Quote};

/// Membership validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid membership type '{0}'.")]
    UnknownPlan(String),

    #[error("Feature '{feature}' is not available for {plan} plan.")]
    UnknownFeature { feature: String, plan: String },

    #[error("Premium feature '{0}' is not available.")]
    UnknownPremiumFeature(String),

    #[error("Member count must be at least 1, got {0}.")]
    InvalidMemberCount(i32),
}

impl PricingError {
    /// Stable machine-readable name for API responses
    pub fn kind(&self) -> &'static str {
        match self {
            PricingError::UnknownPlan(_) => "unknown_plan",
            PricingError::UnknownFeature { .. } => "unknown_feature",
            PricingError::UnknownPremiumFeature(_) => "unknown_premium_feature",
            PricingError::InvalidMemberCount(_) => "invalid_member_count",
        }
    }
}

/// Prices membership requests against an immutable catalog.
///
/// Cheap to clone; clones share the same catalog.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    catalog: Arc<Catalog>,
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(Catalog::standard())
    }
}

impl PricingEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Validate a request, failing fast on the first violation.
    ///
    /// Checks run in a fixed order, so for input with several problems the
    /// caller always sees the same one:
    /// 1. plan name
    /// 2. additional features, in list order
    /// 3. premium features, in list order
    /// 4. member count
    ///
    /// Use [`PricingEngine::violations`] to get all of them.
    pub fn validate(&self, request: &MembershipRequest) -> Result<(), PricingError> {
        match self.violations(request).into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Collect every violation, in the same order `validate` checks them.
    ///
    /// With an unknown plan no additional feature can resolve, so only
    /// `UnknownPlan` is reported for that list.
    pub fn violations(&self, request: &MembershipRequest) -> Vec<PricingError> {
        let mut errors = Vec::new();

        match self.catalog.plan(&request.plan_type) {
            None => errors.push(PricingError::UnknownPlan(request.plan_type.clone())),
            Some(plan) => {
                for feature in &request.additional_features {
                    if plan.feature_price(feature).is_none() {
                        errors.push(PricingError::UnknownFeature {
                            feature: feature.clone(),
                            plan: plan.name.clone(),
                        });
                    }
                }
            }
        }

        for feature in &request.premium_features {
            if self.catalog.premium_price(feature).is_none() {
                errors.push(PricingError::UnknownPremiumFeature(feature.clone()));
            }
        }

        if request.member_count < 1 {
            errors.push(PricingError::InvalidMemberCount(request.member_count));
        }

        errors
    }

    /// Calculate the whole-dollar price of a membership.
    ///
    /// Order is fixed: sum charges, group discount, tier discount, premium
    /// surcharge, round up. Invalid requests never produce a price.
    pub fn calculate_cost(&self, request: &MembershipRequest) -> Result<Quote, PricingError> {
        if let Err(err) = self.validate(request) {
            warn!("Rejected membership request for plan '{}': {}", request.plan_type, err);
            return Err(err);
        }

        let plan = self
            .catalog
            .plan(&request.plan_type)
            .ok_or_else(|| PricingError::UnknownPlan(request.plan_type.clone()))?;

        let feature_prices = request
            .additional_features
            .iter()
            .map(|f| {
                plan.feature_price(f).ok_or_else(|| PricingError::UnknownFeature {
                    feature: f.clone(),
                    plan: plan.name.clone(),
                })
            })
            .collect::<Result<Vec<Decimal>, _>>()?;

        let premium_prices = request
            .premium_features
            .iter()
            .map(|f| {
                self.catalog
                    .premium_price(f)
                    .ok_or_else(|| PricingError::UnknownPremiumFeature(f.clone()))
            })
            .collect::<Result<Vec<Decimal>, _>>()?;

        let base_cost = plan.base_price;
        let feature_cost = sum_prices(feature_prices);
        let premium_cost = sum_prices(premium_prices);
        let subtotal = base_cost + feature_cost + premium_cost;
        debug!(
            "Subtotal for {} plan: {} (base {}, features {}, premium {})",
            plan.name, subtotal, base_cost, feature_cost, premium_cost
        );

        let (total, group_discount_applied) =
            apply_group_discount(subtotal, request.member_count);
        let (total, discount_tier) = apply_tier_discount(total);
        let (total, premium_surcharge_applied) =
            apply_premium_surcharge(total, !request.premium_features.is_empty());

        let price = round_up(total, 0);
        let breakdown = PriceBreakdown {
            base_cost,
            feature_cost,
            premium_cost,
            subtotal,
            group_discount_applied,
            discount_tier,
            premium_surcharge_applied,
            total_before_rounding: total,
        };

        for notice in breakdown.notices() {
            info!("{}", notice);
        }
        debug!("Final price for {} plan: {} (from {})", plan.name, price, total);

        Ok(Quote { price, breakdown })
    }
}
