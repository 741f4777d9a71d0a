//! Plan and feature catalogs.
//!
//! The standard catalog is built once and shared read-only for the lifetime
//! of the process. Entries keep their declared order so prompts and the
//! catalog endpoint list them the same way every time.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::sync::Arc;

use super::models::{Feature, Plan};

static STANDARD: Lazy<Arc<Catalog>> = Lazy::new(|| {
    Arc::new(Catalog {
        plans: vec![
            Plan {
                name: "Basic".to_string(),
                base_price: dec!(50),
                features: vec![Feature::new("Group Classes", dec!(20))],
            },
            Plan {
                name: "Premium".to_string(),
                base_price: dec!(100),
                features: vec![
                    Feature::new("Group Classes", dec!(20)),
                    Feature::new("Personal Training", dec!(40)),
                ],
            },
            Plan {
                name: "Family".to_string(),
                base_price: dec!(150),
                features: vec![
                    Feature::new("Group Classes", dec!(30)),
                    Feature::new("Personal Training", dec!(60)),
                ],
            },
        ],
        premium_features: vec![
            Feature::new("Exclusive Gym Access", dec!(70)),
            Feature::new("Specialized Training", dec!(100)),
        ],
    })
});

/// Immutable pricing tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub plans: Vec<Plan>,
    pub premium_features: Vec<Feature>,
}

impl Catalog {
    /// The fixed catalog every engine prices against by default.
    ///
    /// Every call hands out the same shared instance.
    pub fn standard() -> Arc<Catalog> {
        Arc::clone(&STANDARD)
    }

    /// Find a plan by exact name
    pub fn plan(&self, name: &str) -> Option<&Plan> {
        self.plans.iter().find(|p| p.name == name)
    }

    /// Price of a premium feature (plan-independent)
    pub fn premium_price(&self, name: &str) -> Option<Decimal> {
        self.premium_features
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.price)
    }

    pub fn plan_names(&self) -> Vec<&str> {
        self.plans.iter().map(|p| p.name.as_str()).collect()
    }
}
