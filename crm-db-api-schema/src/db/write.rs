use serde::{Deserialize, Serialize};

pub const DB_WRITE_FAILURE_MESSAGE: &str = "Failed to write database";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbWriteResponse {
    pub success: bool,
}
