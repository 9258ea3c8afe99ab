use std::io::Read;

use crm_db_api_schema::{db::write::DbWriteResponse, API_DB_PREFIX};

#[derive(Debug, Clone)]
pub struct CrmDbApiClient {
    pub base_url: String,
}

#[derive(Debug)]
pub enum CrmDbApiClientError {
    Ureq(Box<ureq::Error>),
    IO(Box<std::io::Error>),
}

impl CrmDbApiClient {
    pub fn new(base_url: String) -> Self {
        let mut base_url = base_url;
        if base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn db_url(&self) -> String {
        format!("{}{}", self.base_url, API_DB_PREFIX)
    }

    pub fn read_db(&self) -> Result<Vec<u8>, CrmDbApiClientError> {
        let mut blob = vec![];
        ureq::get(&self.db_url())
            .call()
            .map_err(|e| CrmDbApiClientError::Ureq(Box::new(e)))?
            .into_reader()
            .read_to_end(&mut blob)
            .map_err(|e| CrmDbApiClientError::IO(Box::new(e)))?;
        Ok(blob)
    }

    pub fn write_db(&self, blob: &[u8]) -> Result<DbWriteResponse, CrmDbApiClientError> {
        let write_db_res: DbWriteResponse = ureq::post(&self.db_url())
            .set("Content-Type", "application/octet-stream")
            .send_bytes(blob)
            .map_err(|e| CrmDbApiClientError::Ureq(Box::new(e)))?
            .into_json()
            .map_err(|e| CrmDbApiClientError::IO(Box::new(e)))?;
        Ok(write_db_res)
    }
}
