use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::database::StoreError;
use crate::utils::{error_codes, error_to_api_response};

/// 用户服务对调用方暴露的错误类型
///
/// 缓存错误不会出现在这里，它们在服务内部被降级。
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("user not found")]
    NotFound,

    #[error("user already exists")]
    Conflict,

    #[error("{0}")]
    Validation(String),

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ServiceError::NotFound,
            StoreError::Conflict => ServiceError::Conflict,
            other => ServiceError::StoreUnavailable(other.to_string()),
        }
    }
}

impl ServiceError {
    pub fn status_and_code(&self) -> (StatusCode, i32) {
        match self {
            ServiceError::NotFound => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND),
            ServiceError::Conflict => (StatusCode::CONFLICT, error_codes::USER_EXISTS),
            ServiceError::Validation(_) => {
                (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR)
            }
            ServiceError::StoreUnavailable(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
            ),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body: Json<_> = error_to_api_response::<()>(code, self.to_string());

        (status, body).into_response()
    }
}
