//! HTTP handlers for the membership quote API.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};

use crate::error::{AppError, Result};
use crate::AppState;

use super::models::MembershipRequest;
use super::requests::QuoteRequest;
use super::responses::{CatalogResponse, QuoteResponse, ValidationResponse};

/// Pricing routes, mounted under `/api/pricing`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(catalog))
        .route("/membership/validate", post(validate_membership))
        .route("/membership/quote", post(quote_membership))
}

async fn catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse::from(state.engine.catalog()))
}

async fn validate_membership(
    State(state): State<AppState>,
    payload: std::result::Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<ValidationResponse>> {
    let Json(req) = payload?;
    let request = MembershipRequest::from(req);

    let violations = state.engine.violations(&request);
    if !violations.is_empty() {
        return Err(AppError::Validation(violations));
    }

    Ok(Json(ValidationResponse { valid: true }))
}

async fn quote_membership(
    State(state): State<AppState>,
    payload: std::result::Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<QuoteResponse>> {
    let Json(req) = payload?;
    let request = MembershipRequest::from(req);

    let quote = state.engine.calculate_cost(&request).map_err(|_| {
        // Report the whole list, not only the first violation
        AppError::Validation(state.engine.violations(&request))
    })?;

    tracing::debug!(
        "Quoted {} plan for {} member(s): ${}",
        request.plan_type,
        request.member_count,
        quote.price
    );

    Ok(Json(QuoteResponse::new(
        request.plan_type,
        request.member_count,
        &quote,
    )))
}
