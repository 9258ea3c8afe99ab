use crm_db_system_store::{BlobStore, DbLocation};

#[derive(Debug, Clone)]
pub struct ApiState {
    pub store: BlobStore,
}

impl ApiState {
    pub fn new(location: DbLocation) -> Self {
        Self {
            store: BlobStore::new(location),
        }
    }
}
