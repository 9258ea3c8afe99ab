pub mod db;

/// Every path starting with this prefix belongs to the database endpoint.
pub const API_DB_PREFIX: &str = "/api/db";
