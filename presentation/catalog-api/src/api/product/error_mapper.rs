use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

const INTERNAL_ERROR_DETAIL: &str = "Internal Server Error";

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, detail) = match self {
            ProductError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ProductError::Insertion(message) => (StatusCode::BAD_REQUEST, message),
            ProductError::Repository(err) => {
                tracing::error!(error = %err, "Unhandled repository failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_DETAIL.to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { detail }))
    }
}
