//! Error handling for the application

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::responses::PricingErrorResponse;
use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Every violation found in the request, first one is the headline
    #[error("Invalid membership request: {}", .0.first().map(ToString::to_string).unwrap_or_default())]
    Validation(Vec<PricingError>),

    #[error("Malformed request: {0}")]
    BadRequest(#[from] JsonRejection),
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        AppError::Validation(vec![err])
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(violations) => {
                tracing::debug!("Validation failed: {}", self);
                let body = PricingErrorResponse::from_violations(violations).unwrap_or_else(|| {
                    PricingErrorResponse {
                        error_type: "validation".to_string(),
                        message: "Invalid membership request".to_string(),
                        details: None,
                    }
                });
                (StatusCode::UNPROCESSABLE_ENTITY, body)
            }
            AppError::BadRequest(rejection) => (
                rejection.status(),
                PricingErrorResponse {
                    error_type: "bad_request".to_string(),
                    message: rejection.body_text(),
                    details: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
