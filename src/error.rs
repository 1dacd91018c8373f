use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

/// Body returned for any unusable or unknown product identifier.
pub const INVALID_PRODUCT_ID: &str = "400 - Invalid product ID.";

/// Body returned when a create/update payload is not a product.
pub const INVALID_PRODUCT_BODY: &str = "400 - Invalid product body.";

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid product id {0:?}")]
    InvalidProductId(String),

    #[error("product {0} not found")]
    ProductNotFound(i64),

    #[error("malformed product body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

impl AppError {
    /// Bad and unknown ids share one response so clients see the same contract
    /// either way.
    fn status_and_body(&self) -> (StatusCode, &'static str) {
        match self {
            Self::InvalidProductId(_) | Self::ProductNotFound(_) => {
                (StatusCode::BAD_REQUEST, INVALID_PRODUCT_ID)
            }
            Self::MalformedBody(_) => (StatusCode::BAD_REQUEST, INVALID_PRODUCT_BODY),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        warn!(error = %self, "Rejected product request");
        self.status_and_body().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_errors_share_the_same_response() {
        let invalid = AppError::InvalidProductId("-1".to_string()).status_and_body();
        let missing = AppError::ProductNotFound(8).status_and_body();
        assert_eq!(invalid, missing);
        assert_eq!(invalid, (StatusCode::BAD_REQUEST, INVALID_PRODUCT_ID));
    }

    #[test]
    fn malformed_body_maps_to_bad_request() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(
            err.status_and_body(),
            (StatusCode::BAD_REQUEST, INVALID_PRODUCT_BODY)
        );
    }

    #[test]
    fn display_names_the_offending_id() {
        assert_eq!(
            AppError::InvalidProductId("abc".to_string()).to_string(),
            "invalid product id \"abc\""
        );
        assert_eq!(AppError::ProductNotFound(8).to_string(), "product 8 not found");
    }
}
