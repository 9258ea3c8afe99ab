use actix_web::{post, web, HttpResponse};
use crm_db_api_schema::db::write::DbWriteResponse;
use crm_db_system_store::WriteDbRequest;
use log::error;

use crate::{error::ApiError, state::ApiState};

/// Replaces the stored database file with the request body.
///
/// The whole body is buffered before anything touches the disk. The payload
/// limit comes from the `PayloadConfig` registered in `configure`.
#[post("/api/db{tail:.*}")]
pub async fn db_write(
    state: web::Data<ApiState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let request = WriteDbRequest { blob: &body };

    state.store.write(request).map_err(|e| {
        error!("db_write: {}", e);
        ApiError::WriteFailure(e)
    })?;

    Ok(HttpResponse::Ok().json(DbWriteResponse { success: true }))
}
