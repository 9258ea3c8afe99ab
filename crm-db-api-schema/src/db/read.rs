pub const DB_READ_CONTENT_TYPE: &str = "application/octet-stream";

pub const DB_READ_FAILURE_MESSAGE: &str = "Failed to read database";
