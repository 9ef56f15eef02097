//! API error types with HTTP response mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use checkout::{CheckoutError, ServiceError};
use domain::{CartError, CatalogError};
use reports::ReportError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from the client.
    BadRequest(String),
    /// Missing or unknown session token.
    Unauthorized(String),
    /// Cart validation error.
    Cart(CartError),
    /// Checkout could not be submitted.
    Checkout(CheckoutError),
    /// Service call error.
    Service(ServiceError),
    /// Report query error.
    Report(ReportError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Cart(err) => cart_error_to_response(err),
            ApiError::Checkout(err) => checkout_error_to_response(err),
            ApiError::Service(err) => service_error_to_response(err),
            ApiError::Report(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn cart_error_to_response(err: CartError) -> (StatusCode, String) {
    match &err {
        CartError::CheckoutInProgress => (StatusCode::CONFLICT, err.to_string()),
        _ => (StatusCode::BAD_REQUEST, err.to_string()),
    }
}

fn checkout_error_to_response(err: CheckoutError) -> (StatusCode, String) {
    match &err {
        CheckoutError::EmptyCart => (StatusCode::BAD_REQUEST, err.to_string()),
        CheckoutError::AlreadySubmitting => (StatusCode::CONFLICT, err.to_string()),
    }
}

fn service_error_to_response(err: ServiceError) -> (StatusCode, String) {
    match &err {
        ServiceError::UnknownTea(_) => (StatusCode::NOT_FOUND, err.to_string()),
        ServiceError::InvalidCredentials
        | ServiceError::MissingCredentials
        | ServiceError::InvalidItem(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        ServiceError::SaleRejected { .. } => (StatusCode::BAD_GATEWAY, err.to_string()),
        ServiceError::Timeout(_) => (StatusCode::GATEWAY_TIMEOUT, err.to_string()),
        ServiceError::Aborted(_) => {
            tracing::error!(error = %err, "service call aborted");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

impl From<CartError> for ApiError {
    fn from(err: CartError) -> Self {
        ApiError::Cart(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        ApiError::Checkout(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError::Service(err)
    }
}

impl From<ReportError> for ApiError {
    fn from(err: ReportError) -> Self {
        ApiError::Report(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::TeaId;

    fn status_of(err: impl Into<ApiError>) -> StatusCode {
        err.into().into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(CartError::InvalidQuantity { quantity: 0 }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(CartError::CheckoutInProgress), StatusCode::CONFLICT);
        assert_eq!(status_of(CheckoutError::EmptyCart), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(CheckoutError::AlreadySubmitting),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(ServiceError::UnknownTea(TeaId::new("x"))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ReportError::UnknownReportType("weekly".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApiError::Unauthorized("no".into())),
            StatusCode::UNAUTHORIZED
        );
    }
}
