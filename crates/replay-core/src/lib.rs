pub mod config;
pub mod context;
pub mod cursor_store;
pub mod error;
