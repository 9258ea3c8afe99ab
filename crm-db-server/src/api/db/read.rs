use actix_web::{get, web, HttpResponse};
use crm_db_api_schema::db::read::DB_READ_CONTENT_TYPE;
use crm_db_system_store::ReadDbResponse;
use log::error;

use crate::{error::ApiError, state::ApiState};

/// Returns the stored database file. A missing file reads as an empty body.
#[get("/api/db{tail:.*}")]
pub async fn db_read(state: web::Data<ApiState>) -> Result<HttpResponse, ApiError> {
    let read_db_res = state.store.read().map_err(|e| {
        error!("db_read: {}", e);
        ApiError::ReadFailure(e)
    })?;

    let blob = match read_db_res {
        ReadDbResponse::Found { blob } => blob,
        ReadDbResponse::NotFound => Vec::new(),
    };

    Ok(HttpResponse::Ok()
        .content_type(DB_READ_CONTENT_TYPE)
        .body(blob))
}
