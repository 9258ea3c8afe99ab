pub mod api;
pub mod args;
pub mod error;
pub mod state;
