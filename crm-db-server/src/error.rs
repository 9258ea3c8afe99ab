use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use crm_db_api_schema::db::{
    read::DB_READ_FAILURE_MESSAGE, write::DB_WRITE_FAILURE_MESSAGE, DbErrorResponse,
};

/// Failures reported to the caller. The store error is kept for logging only;
/// the response body carries the generic message.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Failed to read database")]
    ReadFailure(#[source] crm_db_system_store::Error),

    #[error("Failed to write database")]
    WriteFailure(#[source] crm_db_system_store::Error),
}

impl ApiError {
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::ReadFailure(_) => DB_READ_FAILURE_MESSAGE,
            ApiError::WriteFailure(_) => DB_WRITE_FAILURE_MESSAGE,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(DbErrorResponse::new(self.message()))
    }
}
