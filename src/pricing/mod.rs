//! Pricing engine module for gym memberships.
//!
//! Validates a requested plan, add-ons and group size against the fixed
//! catalogs and computes the whole-dollar price. Used directly by the
//! interactive shell and over HTTP/JSON by the quote API.

pub mod calculators;
pub mod catalog;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::round_up;
pub use catalog::Catalog;
pub use models::{DiscountTier, MembershipRequest, PriceBreakdown, Quote};
pub use routes::router;
pub use services::{PricingEngine, PricingError};
